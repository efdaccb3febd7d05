//! Secret-bearing values.
//!
//! [`SecretValue`] holds a credential or TLS blob exactly as handed over by
//! the storage layer (plaintext or still encrypted). It deliberately has no
//! `Serialize` implementation, and its `Debug` output never contains the
//! value, so a secret cannot end up in a response body or a log line by
//! accident.

use std::fmt;

use serde::Deserialize;

/// Marker printed in place of a configured secret.
const REDACTED: &str = "[REDACTED]";

/// A secret value that may be empty.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SecretValue(String);

impl SecretValue {
    /// Wraps a secret value.
    #[inline]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns `true` if a value is stored.
    ///
    /// Presence is all that is checked; a corrupted or undecryptable value
    /// still counts as configured.
    #[inline]
    pub fn is_configured(&self) -> bool {
        !self.0.is_empty()
    }

    /// Returns the raw secret.
    ///
    /// Only code that hands the secret to its consumer (a connection, a TLS
    /// stack) should call this.
    #[inline]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl From<String> for SecretValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SecretValue {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Debug for SecretValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_configured() {
            f.debug_tuple("SecretValue").field(&REDACTED).finish()
        } else {
            f.write_str("SecretValue(<empty>)")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presence_is_non_emptiness() {
        assert!(!SecretValue::default().is_configured());
        assert!(SecretValue::new("hunter2").is_configured());
        assert!(SecretValue::new("\u{0}corrupted").is_configured());
    }

    #[test]
    fn debug_never_prints_the_value() {
        let secret = SecretValue::new("hunter2");
        let debug = format!("{secret:?}");

        assert!(!debug.contains("hunter2"));
        assert!(debug.contains(REDACTED));
        assert_eq!(format!("{:?}", SecretValue::default()), "SecretValue(<empty>)");
    }

    #[test]
    fn deserializes_from_plain_string() {
        let secret: SecretValue = serde_json::from_str("\"s3cr3t\"").unwrap();
        assert_eq!(secret.expose(), "s3cr3t");
    }
}
