//! Response types for HTTP handlers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

mod dashboards;
mod data_sources;
mod errors;
mod users;

pub use dashboards::*;
pub use data_sources::*;
pub use errors::*;
pub use users::*;

/// Bare identifier of a created or affected resource.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AnyId {
    pub id: i64,
}

impl From<i64> for AnyId {
    #[inline]
    fn from(id: i64) -> Self {
        Self { id }
    }
}
