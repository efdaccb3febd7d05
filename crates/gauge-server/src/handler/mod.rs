//! HTTP handlers with their request, response and error types.
//!
//! Handlers are plain `async fn`s built on `axum` extractors. Mounting them
//! on a router is left to the embedding application, with
//! [`ServiceState`] providing their state.
//!
//! [`ServiceState`]: crate::service::ServiceState

mod data_sources;
mod error;
pub mod request;
pub mod response;

pub use crate::handler::data_sources::{
    list_data_sources, read_data_source, read_data_source_by_name, read_default_data_source,
};
pub use crate::handler::error::{Error, ErrorKind, Result};
