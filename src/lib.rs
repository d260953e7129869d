//! Job board backend
//!
//! Layers, inside out:
//! - `domain`: entities, value objects, repository ports and services
//! - `application`: one use case per API operation
//! - `adapters::http`: actix-web handlers, DTOs, middleware and routes
//! - `infrastructure`: configuration and the Postgres / in-memory repositories

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;
