use axum::{Router, middleware, routing::get};

use super::controller::{students_area, teachers_area};
use crate::middleware::role::{require_student, require_teacher};
use crate::state::AppState;

pub fn init_students_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(students_area))
        .route_layer(middleware::from_fn_with_state(state, require_student))
}

pub fn init_teachers_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(teachers_area))
        .route_layer(middleware::from_fn_with_state(state, require_teacher))
}
