use axum::{Router, routing::get};

use super::controller::list_courses;
use crate::state::AppState;

pub fn init_courses_router() -> Router<AppState> {
    Router::new().route("/", get(list_courses))
}
