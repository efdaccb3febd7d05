#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for avatar configuration.
pub const TRACING_TARGET_AVATAR: &str = "gauge_core::avatar";

pub mod avatar;
mod error;
pub mod identity;
pub mod prelude;
pub mod secret;

pub use error::{BoxedError, Error, ErrorKind, Result};
