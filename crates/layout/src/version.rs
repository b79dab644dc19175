//! The layout format version gate.

use std::fmt;

/// Lower bound of the accepted layout versions, inclusive.
pub const COMPATIBLE_VERSION_RANGE_START: &str = ">= 0.8.2";
/// Upper bound of the accepted layout versions, exclusive.
pub const COMPATIBLE_VERSION_RANGE_END: &str = "< 1.0.0";

const RANGE_START: LayoutVersion = LayoutVersion::new(0, 8, 2);
const RANGE_END: LayoutVersion = LayoutVersion::new(1, 0, 0);

/// A `major.minor.patch` layout version. Missing trailing parts read as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LayoutVersion {
    major: u64,
    minor: u64,
    patch: u64,
}

impl LayoutVersion {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    pub fn parse(version: &str) -> Option<Self> {
        let mut parts = [0u64; 3];
        let mut count = 0;
        for part in version.trim().split('.') {
            if count == parts.len() {
                return None;
            }
            parts[count] = part.parse().ok()?;
            count += 1;
        }
        Some(Self::new(parts[0], parts[1], parts[2]))
    }

    pub fn is_compatible(&self) -> bool {
        *self >= RANGE_START && *self < RANGE_END
    }
}

impl fmt::Display for LayoutVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// True when `version` parses and falls within the accepted range.
pub fn is_compatible(version: &str) -> bool {
    LayoutVersion::parse(version).is_some_and(|v| v.is_compatible())
}

pub fn compatibility_rules() -> Vec<String> {
    vec![
        COMPATIBLE_VERSION_RANGE_START.to_string(),
        COMPATIBLE_VERSION_RANGE_END.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_range_boundaries() {
        assert!(!is_compatible("0.8.1"));
        assert!(is_compatible("0.8.2"));
        assert!(is_compatible("0.9.1"));
        assert!(is_compatible("0.12.0"));
        assert!(!is_compatible("1.0.0"));
        assert!(!is_compatible("1.2"));
    }

    #[test]
    fn test_short_versions_fill_with_zero() {
        assert_eq!(LayoutVersion::parse("0.9"), Some(LayoutVersion::new(0, 9, 0)));
        assert!(is_compatible("0.9"));
    }

    #[test]
    fn test_malformed_versions_are_incompatible() {
        assert!(!is_compatible(""));
        assert!(!is_compatible("0.9.x"));
        assert!(!is_compatible("0.9.0.1"));
    }

    proptest! {
        #[test]
        fn prop_compatible_iff_in_range(major in 0u64..3, minor in 0u64..20, patch in 0u64..20) {
            let version = LayoutVersion::new(major, minor, patch);
            let expected = version >= LayoutVersion::new(0, 8, 2) && version < LayoutVersion::new(1, 0, 0);
            prop_assert_eq!(is_compatible(&version.to_string()), expected);
        }
    }
}
