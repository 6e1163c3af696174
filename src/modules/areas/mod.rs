//! Role-restricted areas.

pub mod controller;
pub mod router;
