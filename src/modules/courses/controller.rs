use axum::Json;
use axum::extract::{Query, State};
use tracing::instrument;

use coursevault_core::AppError;
use coursevault_models::{CourseSearchParams, CourseView};

use super::service::CourseService;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;

/// List courses, optionally filtered by a search term
///
/// The term is matched case-insensitively against the decrypted name and
/// description. No authentication required.
#[utoipa::path(
    get,
    path = "/api/courses",
    params(CourseSearchParams),
    responses(
        (status = 200, description = "Matching courses", body = Vec<CourseView>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip_all)]
pub async fn list_courses(
    State(state): State<AppState>,
    Query(params): Query<CourseSearchParams>,
) -> Result<Json<Vec<CourseView>>, AppError> {
    let courses = CourseService::search(
        state.store.as_ref(),
        &state.cipher,
        params.search.as_deref(),
    )
    .await?;
    Ok(Json(courses))
}
