//! Signed-in user model.

use serde::Deserialize;

use crate::types::{HelpFlags1, OrgRole};

/// A user together with the organization of the current session.
///
/// Produced by the (external) session layer once a request is authenticated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedInUser {
    /// Unique user identifier.
    pub user_id: i64,
    /// Login name.
    pub login: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Preferred UI theme ("light", "dark", or empty for the default).
    #[serde(default)]
    pub theme: String,
    /// Organization of the current session.
    pub org_id: i64,
    /// Name of the session organization.
    #[serde(default)]
    pub org_name: String,
    /// Role within the session organization.
    #[serde(default)]
    pub org_role: OrgRole,
    /// Whether the user is a server administrator.
    #[serde(default)]
    pub is_grafana_admin: bool,
    /// Preferred timezone.
    #[serde(default)]
    pub timezone: String,
    /// Preferred locale.
    #[serde(default)]
    pub locale: String,
    /// Dismissed help panels.
    #[serde(default)]
    pub help_flags1: HelpFlags1,
}

impl SignedInUser {
    /// Returns whether the user prefers the light theme.
    pub fn prefers_light_theme(&self) -> bool {
        self.theme.eq_ignore_ascii_case("light")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_preference() {
        let mut user: SignedInUser = serde_json::from_value(serde_json::json!({
            "userId": 1,
            "login": "admin",
            "orgId": 1,
            "theme": "Light",
        }))
        .unwrap();
        assert!(user.prefers_light_theme());

        user.theme = String::new();
        assert!(!user.prefers_light_theme());
    }
}
