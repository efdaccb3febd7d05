//! Organization role enumeration.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Role of a user within an organization.
///
/// Roles are ordered by privilege; see [`OrgRole::includes`].
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString)]
pub enum OrgRole {
    /// Read-only access to dashboards
    #[serde(rename = "Viewer")]
    #[strum(serialize = "Viewer")]
    #[default]
    Viewer,

    /// May edit panels in the browser but not save them
    #[serde(rename = "Read Only Editor")]
    #[strum(serialize = "Read Only Editor")]
    ReadOnlyEditor,

    /// May create and save dashboards
    #[serde(rename = "Editor")]
    #[strum(serialize = "Editor")]
    Editor,

    /// Full control over the organization
    #[serde(rename = "Admin")]
    #[strum(serialize = "Admin")]
    Admin,
}

impl OrgRole {
    const fn rank(self) -> u8 {
        match self {
            OrgRole::Viewer => 0,
            OrgRole::ReadOnlyEditor => 1,
            OrgRole::Editor => 2,
            OrgRole::Admin => 3,
        }
    }

    /// Returns whether this role grants everything `other` grants.
    #[inline]
    pub fn includes(self, other: OrgRole) -> bool {
        self.rank() >= other.rank()
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn wire_names() {
        assert_eq!(
            serde_json::to_string(&OrgRole::ReadOnlyEditor).unwrap(),
            "\"Read Only Editor\""
        );
        let role: OrgRole = serde_json::from_str("\"Admin\"").unwrap();
        assert_eq!(role, OrgRole::Admin);
        assert_eq!("Editor".parse::<OrgRole>().unwrap(), OrgRole::Editor);
    }

    #[test]
    fn admin_includes_every_role() {
        for role in OrgRole::iter() {
            assert!(OrgRole::Admin.includes(role));
            assert!(role.includes(OrgRole::Viewer));
        }
    }

    #[test]
    fn lower_roles_do_not_include_higher_ones() {
        assert!(!OrgRole::Viewer.includes(OrgRole::Editor));
        assert!(!OrgRole::ReadOnlyEditor.includes(OrgRole::Editor));
        assert!(OrgRole::Editor.includes(OrgRole::ReadOnlyEditor));
    }
}
