//! Current user response types.

use std::collections::BTreeMap;

use gauge_core::avatar::AvatarConfig;
use gauge_store::model;
use gauge_store::types::{HelpFlags1, OrgRole};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The user of the current session, as shown to the browser.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    /// Whether the session is authenticated.
    pub is_signed_in: bool,
    /// Unique user identifier.
    pub id: i64,
    /// Login name.
    pub login: String,
    /// Email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Whether the light theme is selected.
    pub light_theme: bool,
    /// Organization of the current session.
    pub org_id: i64,
    /// Name of the session organization.
    pub org_name: String,
    /// Role within the session organization.
    pub org_role: OrgRole,
    /// Whether the user is a server administrator.
    pub is_grafana_admin: bool,
    /// Avatar URL derived from the email address.
    pub gravatar_url: String,
    /// Preferred timezone.
    pub timezone: String,
    /// Preferred locale.
    pub locale: String,
    /// Dismissed help panels.
    pub help_flags1: HelpFlags1,
}

impl CurrentUser {
    pub fn from_model(user: model::SignedInUser, avatar: &AvatarConfig) -> Self {
        Self {
            is_signed_in: true,
            light_theme: user.prefers_light_theme(),
            gravatar_url: avatar.avatar_url(&user.email).into(),
            id: user.user_id,
            login: user.login,
            email: user.email,
            name: user.name,
            org_id: user.org_id,
            org_name: user.org_name,
            org_role: user.org_role,
            is_grafana_admin: user.is_grafana_admin,
            timezone: user.timezone,
            locale: user.locale,
            help_flags1: user.help_flags1,
        }
    }
}

/// Dashboards starred by the current user, keyed by dashboard id.
#[must_use]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserStars {
    pub dashboard_ids: BTreeMap<String, bool>,
}

impl UserStars {
    /// Marks each of the given dashboards as starred.
    pub fn from_dashboard_ids(dashboard_ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            dashboard_ids: dashboard_ids
                .into_iter()
                .map(|id| (id.to_string(), true))
                .collect(),
        }
    }
}
