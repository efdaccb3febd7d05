//! Prelude module for gauge-server.
//!
//! This module re-exports the most commonly used types from gauge-server,
//! making it easy to import everything you need with a single `use` statement.
//!
//! # Example
//!
//! ```rust
//! use gauge_server::prelude::*;
//! ```

// Re-export handler types
pub use crate::handler::request::*;
pub use crate::handler::response::*;
pub use crate::handler::{
    list_data_sources, read_data_source, read_data_source_by_name, read_default_data_source,
};
// Re-export service types
pub use crate::service::*;
