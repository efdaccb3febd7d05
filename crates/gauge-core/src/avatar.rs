//! Avatar URL construction.
//!
//! Avatar URLs have the shape `{app_sub_url}/avatar/{identity_token}`. The
//! sub-path the application is mounted under is explicit configuration held
//! by [`AvatarConfig`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::identity::IdentityToken;
use crate::{Error, Result, TRACING_TARGET_AVATAR};

/// Path segment under which avatars are served.
pub const AVATAR_SEGMENT: &str = "avatar";

/// Avatar URL configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AvatarConfig {
    app_sub_url: String,
}

impl AvatarConfig {
    /// Creates a new configuration for an application mounted at `app_sub_url`.
    ///
    /// Trailing slashes are dropped, so `"/"` and `""` both mean the root.
    /// A non-empty sub-path must start with `/` and contain no whitespace.
    pub fn new(app_sub_url: impl Into<String>) -> Result<Self> {
        let app_sub_url = app_sub_url.into();
        let normalized = app_sub_url.trim_end_matches('/');

        if !normalized.is_empty() && !normalized.starts_with('/') {
            return Err(Error::configuration()
                .with_message(format!("app sub url must start with '/': {app_sub_url:?}")));
        }

        if normalized.chars().any(char::is_whitespace) {
            return Err(Error::configuration().with_message(format!(
                "app sub url must not contain whitespace: {app_sub_url:?}"
            )));
        }

        tracing::debug!(
            target: TRACING_TARGET_AVATAR,
            app_sub_url = normalized,
            "avatar configuration created"
        );

        Ok(Self {
            app_sub_url: normalized.to_owned(),
        })
    }

    /// Returns the normalized application sub-path.
    #[inline]
    pub fn app_sub_url(&self) -> &str {
        &self.app_sub_url
    }

    /// Returns the base path avatars are served from.
    pub fn base_path(&self) -> String {
        format!("{}/{AVATAR_SEGMENT}", self.app_sub_url)
    }

    /// Builds the avatar URL for an identity string.
    pub fn avatar_url(&self, identity: &str) -> AvatarUrl {
        AvatarUrl {
            base_path: self.base_path(),
            token: IdentityToken::from_identity(identity),
        }
    }
}

impl TryFrom<String> for AvatarConfig {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<AvatarConfig> for String {
    fn from(value: AvatarConfig) -> Self {
        value.app_sub_url
    }
}

/// An avatar URL for a single identity.
///
/// For an empty identity the URL is the base path followed by `/` and an
/// empty token; [`AvatarUrl::has_identity`] reports `false` and callers treat
/// it as "no avatar".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarUrl {
    base_path: String,
    token: IdentityToken,
}

impl AvatarUrl {
    /// Returns the base path part of the URL.
    #[inline]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the identity token part of the URL.
    #[inline]
    pub fn token(&self) -> &IdentityToken {
        &self.token
    }

    /// Returns `false` if the URL was built from an empty identity.
    #[inline]
    pub fn has_identity(&self) -> bool {
        !self.token.is_empty()
    }
}

impl fmt::Display for AvatarUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base_path, self.token)
    }
}

impl From<AvatarUrl> for String {
    fn from(value: AvatarUrl) -> Self {
        value.to_string()
    }
}
