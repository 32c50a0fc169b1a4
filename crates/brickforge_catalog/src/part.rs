//! # Part References
//!
//! The `(part, color)` pair is the key of the whole system: inventories,
//! recipes, and allocation ledgers are all indexed by it. BrickLink part
//! numbers are alphanumeric (`"3626b"`), colors are small integers.

use serde::{Deserialize, Serialize};

/// BrickLink color identifier.
pub type ColorId = u32;

/// Identifies one part slot: a part number in a specific color.
///
/// Immutable value type, used as a map key everywhere.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartRef {
    /// BrickLink part number, e.g. `"3626b"`.
    pub part_id: String,
    /// BrickLink color id, e.g. `4` for red.
    pub color_id: ColorId,
}

impl PartRef {
    /// Creates a new part reference.
    #[inline]
    #[must_use]
    pub fn new(part_id: impl Into<String>, color_id: ColorId) -> Self {
        Self {
            part_id: part_id.into(),
            color_id,
        }
    }
}

/// Flags for a required recipe part.
///
/// Only parts that are neither alternates nor counterparts ("regular"
/// parts) participate in matching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PartFlagsRepr", into = "PartFlagsRepr")]
pub struct PartFlags(u32);

impl PartFlags {
    /// No flags set.
    pub const NONE: Self = Self(0);
    /// Part is an alternate for another required part.
    pub const ALTERNATE: Self = Self(1 << 0);
    /// Part is a counterpart substitute.
    pub const COUNTERPART: Self = Self(1 << 1);
    /// Part ships as an extra beyond the build requirement.
    pub const EXTRA: Self = Self(1 << 2);
    /// Part is a spare.
    pub const SPARE: Self = Self(1 << 3);

    /// Creates flags from a raw value.
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Checks if a specific flag is set.
    #[inline]
    #[must_use]
    pub const fn has(self, flag: Self) -> bool {
        (self.0 & flag.0) != 0
    }

    /// Combines two flag sets.
    #[inline]
    #[must_use]
    pub const fn with(self, flag: Self) -> Self {
        Self(self.0 | flag.0)
    }

    /// A regular part: neither an alternate nor a counterpart.
    #[inline]
    #[must_use]
    pub const fn is_regular(self) -> bool {
        !self.has(Self::ALTERNATE) && !self.has(Self::COUNTERPART)
    }
}

/// Wire representation of [`PartFlags`]: the four booleans BrickLink
/// inventories carry inline on each part line.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
struct PartFlagsRepr {
    /// Alternate-part marker.
    #[serde(default)]
    is_alternate: bool,
    /// Counterpart marker.
    #[serde(default)]
    is_counterpart: bool,
    /// Extra-part marker.
    #[serde(default)]
    is_extra: bool,
    /// Spare-part marker.
    #[serde(default)]
    is_spare: bool,
}

impl From<PartFlagsRepr> for PartFlags {
    fn from(repr: PartFlagsRepr) -> Self {
        let mut flags = Self::NONE;
        if repr.is_alternate {
            flags = flags.with(Self::ALTERNATE);
        }
        if repr.is_counterpart {
            flags = flags.with(Self::COUNTERPART);
        }
        if repr.is_extra {
            flags = flags.with(Self::EXTRA);
        }
        if repr.is_spare {
            flags = flags.with(Self::SPARE);
        }
        flags
    }
}

impl From<PartFlags> for PartFlagsRepr {
    fn from(flags: PartFlags) -> Self {
        Self {
            is_alternate: flags.has(PartFlags::ALTERNATE),
            is_counterpart: flags.has(PartFlags::COUNTERPART),
            is_extra: flags.has(PartFlags::EXTRA),
            is_spare: flags.has(PartFlags::SPARE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_flags() {
        assert!(PartFlags::NONE.is_regular());
        assert!(PartFlags::EXTRA.with(PartFlags::SPARE).is_regular());
        assert!(!PartFlags::ALTERNATE.is_regular());
        assert!(!PartFlags::COUNTERPART.is_regular());
    }

    #[test]
    fn test_flag_round_trip() {
        let flags = PartFlags::ALTERNATE.with(PartFlags::SPARE);
        let repr = PartFlagsRepr::from(flags);
        assert_eq!(PartFlags::from(repr), flags);
    }

    #[test]
    fn test_part_ref_keys() {
        use std::collections::HashMap;
        let mut map = HashMap::new();
        map.insert(PartRef::new("3626b", 4), 10u32);
        assert_eq!(map.get(&PartRef::new("3626b", 4)), Some(&10));
        assert_eq!(map.get(&PartRef::new("3626b", 5)), None);
    }
}
