//! Deterministic identity tokens for avatar lookups.
//!
//! An identity token is derived from a lowercase-normalized identity string
//! (usually an email address). It is not a secret: anyone who knows the
//! identity can derive the token, so it is only used to build cosmetic URLs.
//!
//! The digest is SHA-256 truncated to 128 bits and rendered as lowercase hex.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Number of digest bytes kept in a token.
const DIGEST_BYTES: usize = 16;

/// Length of a non-empty token in hexadecimal characters.
pub const IDENTITY_TOKEN_LEN: usize = DIGEST_BYTES * 2;

/// Opaque, fixed-width token derived from an identity string.
///
/// Empty identities map to the empty token rather than to the digest of the
/// empty string, so callers can tell "no identity" apart from a real one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(transparent)]
pub struct IdentityToken(String);

impl IdentityToken {
    /// Derives the token for an identity string.
    pub fn from_identity(identity: &str) -> Self {
        let normalized = identity.to_lowercase();
        if normalized.is_empty() {
            return Self::default();
        }

        let digest = Sha256::digest(normalized.as_bytes());
        Self(hex::encode(&digest[..DIGEST_BYTES]))
    }

    /// Returns the token as a hex string (empty for empty identities).
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when the token was derived from an empty identity.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for IdentityToken {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for IdentityToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derives the identity token for `identity`.
///
/// Shorthand for [`IdentityToken::from_identity`].
#[inline]
pub fn identity_token(identity: &str) -> IdentityToken {
    IdentityToken::from_identity(identity)
}
