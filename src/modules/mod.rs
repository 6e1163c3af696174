//! Feature modules.
//!
//! Each module follows the same layout: `controller.rs` (HTTP handlers),
//! `service.rs` (logic, where there is any) and `router.rs`.

pub mod areas;
pub mod auth;
pub mod courses;
pub mod health;
