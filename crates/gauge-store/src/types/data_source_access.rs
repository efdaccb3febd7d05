//! Data source access mode enumeration.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Defines how clients reach a data source backend.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString)]
pub enum DataSourceAccess {
    /// Requests are proxied through the server
    #[serde(rename = "proxy")]
    #[strum(serialize = "proxy")]
    #[default]
    Proxy,

    /// The browser talks to the backend directly
    #[serde(rename = "direct")]
    #[strum(serialize = "direct")]
    Direct,
}

impl DataSourceAccess {
    /// Returns whether requests go through the server-side proxy.
    #[inline]
    pub fn is_proxied(self) -> bool {
        matches!(self, DataSourceAccess::Proxy)
    }
}
