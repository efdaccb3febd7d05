//! Request types for HTTP handlers.

mod authentications;
mod metrics;
mod paths;

pub use authentications::*;
pub use metrics::*;
pub use paths::*;
