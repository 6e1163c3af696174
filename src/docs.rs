use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use coursevault_core::Role;
use coursevault_models::{
    AreaResponse, CourseSearchParams, CourseView, LoginRequest, LoginResponse, ProfileResponse,
};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::health::controller::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login_for_access_token,
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::get_profile,
        crate::modules::areas::controller::students_area,
        crate::modules::areas::controller::teachers_area,
        crate::modules::courses::controller::list_courses,
        crate::modules::health::controller::health_check,
    ),
    components(
        schemas(
            LoginRequest,
            LoginResponse,
            ProfileResponse,
            AreaResponse,
            CourseView,
            CourseSearchParams,
            HealthResponse,
            Role,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login and the current user"),
        (name = "Areas", description = "Role-restricted content"),
        (name = "Courses", description = "Search over encrypted course data"),
        (name = "Health", description = "Service health")
    ),
    info(
        title = "CourseVault API",
        version = "0.1.0",
        description = "Role-gated REST API with JWT authentication and encrypted-at-rest course data.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
