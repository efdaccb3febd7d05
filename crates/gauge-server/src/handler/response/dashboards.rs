//! Dashboard response types.

use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Per-request metadata sent alongside a dashboard.
#[must_use]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMeta {
    /// Whether the current user starred the dashboard.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_starred: bool,

    /// Whether this is the home dashboard.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_home: bool,

    /// Whether the dashboard is a snapshot.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_snapshot: bool,

    /// Dashboard source type, e.g. "db" or "snapshot".
    #[serde(default, rename = "type", skip_serializing_if = "String::is_empty")]
    pub kind: String,

    pub can_save: bool,
    pub can_edit: bool,
    pub can_star: bool,

    /// URL slug of the dashboard.
    pub slug: String,

    /// Snapshot expiry.
    pub expires: Timestamp,
    pub created: Timestamp,
    pub updated: Timestamp,

    /// Login of the last editor.
    pub updated_by: String,
    /// Login of the creator.
    pub created_by: String,

    /// Dashboard version number.
    pub version: i32,
}

/// A dashboard model together with its metadata.
#[must_use]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DashboardFullWithMeta {
    pub meta: DashboardMeta,
    /// The dashboard document, passed through untouched.
    pub dashboard: serde_json::Value,
}

/// Tells the browser where a dashboard moved to.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardRedirect {
    pub redirect_uri: String,
}
