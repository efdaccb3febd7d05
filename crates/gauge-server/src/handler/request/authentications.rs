//! Authentication request types.

use std::fmt;

use schemars::JsonSchema;
use serde::Deserialize;
use validator::Validate;

/// Request payload for login.
///
/// Deserialize-only: the password is never written back out, and `Debug`
/// masks it.
#[must_use]
#[derive(Clone, Deserialize, Validate, JsonSchema)]
pub struct LoginCommand {
    /// Login name or email address.
    #[validate(length(min = 1, max = 254))]
    pub user: String,

    /// Account password.
    #[validate(length(min = 1, max = 1000))]
    pub password: String,

    /// Whether to keep the session beyond the browser session.
    #[serde(default)]
    pub remember: bool,
}

impl fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCommand")
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("remember", &self.remember)
            .finish()
    }
}
