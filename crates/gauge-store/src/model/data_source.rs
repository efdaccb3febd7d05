//! Data source model.

use gauge_core::secret::SecretValue;
use jiff::Timestamp;
use serde::Deserialize;

use crate::types::DataSourceAccess;

/// Data source record describing a connection to an external backend.
///
/// Secret-bearing fields are [`SecretValue`]s: they are either empty or hold
/// a value (plaintext or encrypted) that must never be echoed back.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    /// Unique data source identifier.
    pub id: i64,
    /// Organization owning this data source.
    pub org_id: i64,
    /// Human-readable data source name.
    pub name: String,
    /// Backend type tag (e.g., "prometheus", "postgres").
    #[serde(rename = "type")]
    pub kind: String,
    /// How clients reach the backend.
    #[serde(default)]
    pub access: DataSourceAccess,
    /// Backend endpoint URL.
    #[serde(default)]
    pub url: String,
    /// Backend password.
    #[serde(default)]
    pub password: SecretValue,
    /// Backend user name.
    #[serde(default)]
    pub user: String,
    /// Backend database name.
    #[serde(default)]
    pub database: String,
    /// Basic authentication user name.
    #[serde(default)]
    pub basic_auth_user: String,
    /// Basic authentication password.
    #[serde(default)]
    pub basic_auth_password: SecretValue,
    /// Whether browser requests carry cookies and credentials.
    #[serde(default)]
    pub with_credentials: bool,
    /// Whether this is the organization's default data source.
    #[serde(default)]
    pub is_default: bool,
    /// Free-form, non-secret backend configuration.
    #[serde(default)]
    pub json_data: Option<serde_json::Value>,
    /// TLS client authentication material.
    #[serde(default)]
    pub tls: TlsMaterial,
    /// Timestamp when the data source was created.
    #[serde(default)]
    pub created_at: Timestamp,
    /// Timestamp when the data source was last updated.
    #[serde(default)]
    pub updated_at: Timestamp,
}

/// TLS certificates and key uploaded for a data source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TlsMaterial {
    /// CA certificate used to verify the backend.
    #[serde(default)]
    pub ca_cert: SecretValue,
    /// Client certificate presented to the backend.
    #[serde(default)]
    pub client_cert: SecretValue,
    /// Private key for the client certificate.
    #[serde(default)]
    pub client_key: SecretValue,
}

impl DataSource {
    /// Returns whether any secret field holds a value.
    pub fn has_secrets(&self) -> bool {
        self.password.is_configured()
            || self.basic_auth_password.is_configured()
            || self.tls.has_any()
    }
}

impl TlsMaterial {
    /// Returns whether any TLS material was uploaded.
    pub fn has_any(&self) -> bool {
        self.ca_cert.is_configured()
            || self.client_cert.is_configured()
            || self.client_key.is_configured()
    }
}
