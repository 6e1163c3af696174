//! # CourseVault CLI
//!
//! Seeding utilities for CourseVault development and demos.
//!
//! This library crate provides the seeding functionality shared by the CLI
//! binary and the API server's seed-on-startup step.
//!
//! ## Usage
//!
//! ```ignore
//! use coursevault_cli::seeder::seed_demo_data;
//!
//! let summary = seed_demo_data(store.as_ref(), &cipher, bcrypt::DEFAULT_COST).await?;
//! println!("{} users, {} courses", summary.users_created, summary.courses_created);
//! ```

pub mod seeder;
