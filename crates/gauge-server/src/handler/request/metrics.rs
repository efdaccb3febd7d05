//! Metric query request types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Request payload for a metric query over a time range.
///
/// `from` and `to` are kept as sent (absolute or relative, e.g. `now-6h`);
/// each query is backend-specific JSON.
#[must_use]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MetricRequest {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub queries: Vec<serde_json::Value>,
}
