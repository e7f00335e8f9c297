// Error types for the HTTP API layer
pub mod api;

pub use api::ApiError;
