//! Centralized tracing target constants for structured logging.
//!
//! Using consistent targets enables fine-grained control over log output
//! via tracing subscriber filters.

/// Data source handlers.
pub const TRACING_TARGET_DATA_SOURCES: &str = "gauge_server::handler::data_sources";

/// Store errors surfaced to HTTP responses.
pub const TRACING_TARGET_STORE_ERROR: &str = "gauge_server::store_error";

/// HTTP error responses.
pub const TRACING_TARGET_ERROR_RESPONSE: &str = "gauge_server::error_response";

/// Service state construction.
pub const TRACING_TARGET_SERVICE: &str = "gauge_server::service";
