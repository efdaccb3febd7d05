//! Path parameter types for HTTP handlers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Path parameters for organization-level operations.
#[must_use]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrgPathParams {
    /// Unique identifier of the organization.
    pub org_id: i64,
}

/// Path parameters for data source operations.
#[must_use]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DataSourcePathParams {
    /// Unique identifier of the organization.
    pub org_id: i64,
    /// Unique identifier of the data source.
    pub data_source_id: i64,
}

/// Path parameters for data source lookup by name.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceNamePathParams {
    /// Unique identifier of the organization.
    pub org_id: i64,
    /// Exact name of the data source.
    pub name: String,
}
