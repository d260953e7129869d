//! Application layer
//!
//! Use cases that orchestrate domain services for each HTTP operation. Every
//! use case is built once at startup and shared between workers behind an `Arc`.

pub mod applications;
pub mod auth;
pub mod jobs;
pub mod users;
