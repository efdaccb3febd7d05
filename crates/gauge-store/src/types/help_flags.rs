//! Help panel flags.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Bit set of help panels a user has dismissed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(transparent)]
pub struct HelpFlags1(u64);

impl HelpFlags1 {
    /// The "getting started" panel was dismissed.
    pub const GETTING_STARTED_PANEL_DISMISSED: Self = Self(1 << 0);
    /// The first dashboard help panel was dismissed.
    pub const DASHBOARD_HELP_1: Self = Self(1 << 1);

    /// Creates a flag set from its raw bits.
    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Returns the raw bits.
    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Returns whether every bit of `flag` is set.
    #[inline]
    pub const fn has_flag(self, flag: HelpFlags1) -> bool {
        self.0 & flag.0 == flag.0
    }

    /// Returns a copy with `flag` set.
    #[inline]
    #[must_use]
    pub const fn with_flag(self, flag: HelpFlags1) -> Self {
        Self(self.0 | flag.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_accumulate() {
        let flags = HelpFlags1::default().with_flag(HelpFlags1::DASHBOARD_HELP_1);

        assert!(flags.has_flag(HelpFlags1::DASHBOARD_HELP_1));
        assert!(!flags.has_flag(HelpFlags1::GETTING_STARTED_PANEL_DISMISSED));
        assert_eq!(flags.bits(), 2);
    }

    #[test]
    fn serializes_as_number() {
        let flags = HelpFlags1::from_bits(3);
        assert_eq!(serde_json::to_string(&flags).unwrap(), "3");
    }
}
