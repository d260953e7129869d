pub mod auth;
pub mod company;
pub mod jobs;

// Re-export auth module for easier access
pub use auth::*;
