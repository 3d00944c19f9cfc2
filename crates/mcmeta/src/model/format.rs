//! Validated pack format ranges.

use crate::error::RangeError;
use crate::model::FormatVersion;

/// An inclusive range of format versions a pack declares compatibility
/// with.
///
/// The range is validated at construction (`min <= max`) and immutable
/// afterwards; derived queries never mutate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackFormat {
    min: FormatVersion,
    max: FormatVersion,
}

impl PackFormat {
    /// Creates a range from inclusive bounds.
    ///
    /// Fails when `min > max`; an inverted range is rejected, not
    /// reordered.
    pub fn new(min: FormatVersion, max: FormatVersion) -> Result<Self, RangeError> {
        if min > max {
            return Err(RangeError { min, max });
        }
        Ok(Self { min, max })
    }

    /// Creates a range covering exactly one version.
    pub const fn single(version: FormatVersion) -> Self {
        Self {
            min: version,
            max: version,
        }
    }

    /// The inclusive lower bound.
    pub const fn min(&self) -> FormatVersion {
        self.min
    }

    /// The inclusive upper bound.
    pub const fn max(&self) -> FormatVersion {
        self.max
    }

    /// Returns true when the range covers exactly one version.
    pub fn is_single(&self) -> bool {
        self.min == self.max
    }

    /// Returns true when `version` falls inside the range, bounds
    /// included.
    pub fn is_in_range(&self, version: FormatVersion) -> bool {
        version >= self.min && version <= self.max
    }

    /// Major-only membership check for callers still passing plain
    /// integer pack formats. The integer is widened to a full version
    /// with minor = 0 before delegating, so `16` sits below `16.1`.
    #[deprecated(note = "use is_in_range with a full FormatVersion")]
    pub fn is_in_range_major(&self, major: u32) -> bool {
        self.is_in_range(FormatVersion::from_major(major))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_inverted_range_is_rejected() {
        let err = PackFormat::new(FormatVersion::from_major(18), FormatVersion::from_major(16))
            .unwrap_err();
        assert_eq!(err.min, FormatVersion::from_major(18));
        assert_eq!(err.max, FormatVersion::from_major(16));

        // Minor components participate in the ordering too.
        assert!(PackFormat::new(FormatVersion::new(16, 2), FormatVersion::new(16, 1)).is_err());
    }

    #[test]
    fn test_single() {
        let single = PackFormat::single(FormatVersion::from_major(16));
        assert!(single.is_single());
        assert_eq!(single.min(), single.max());

        let range = PackFormat::new(FormatVersion::from_major(16), FormatVersion::from_major(17))
            .unwrap();
        assert!(!range.is_single());
    }

    #[test]
    fn test_membership_includes_bounds() {
        let range = PackFormat::new(FormatVersion::from_major(16), FormatVersion::new(18, 2))
            .unwrap();
        assert!(range.is_in_range(FormatVersion::from_major(16)));
        assert!(range.is_in_range(FormatVersion::new(18, 2)));
        assert!(range.is_in_range(FormatVersion::new(17, 9)));
        assert!(!range.is_in_range(FormatVersion::new(15, 99)));
        assert!(!range.is_in_range(FormatVersion::new(18, 3)));
    }

    #[test]
    #[allow(deprecated)]
    fn test_major_only_shim_widens_with_zero_minor() {
        // (16.1 ..= 17): plain 16 widens to 16.0, which is below the range.
        let range = PackFormat::new(FormatVersion::new(16, 1), FormatVersion::from_major(17))
            .unwrap();
        assert!(!range.is_in_range_major(16));
        assert!(range.is_in_range_major(17));
    }

    proptest! {
        #[test]
        fn construction_matches_version_order(
            a_major in 0u32..100,
            a_minor in 0u32..100,
            b_major in 0u32..100,
            b_minor in 0u32..100,
        ) {
            let a = FormatVersion::new(a_major, a_minor);
            let b = FormatVersion::new(b_major, b_minor);
            match PackFormat::new(a, b) {
                Ok(range) => {
                    prop_assert!(a <= b);
                    prop_assert_eq!(range.is_single(), a == b);
                }
                Err(_) => prop_assert!(a > b),
            }
        }

        #[test]
        fn membership_is_inclusive_interval(
            lo in 0u32..50,
            hi in 50u32..100,
            probe_major in 0u32..150,
            probe_minor in 0u32..10,
        ) {
            let min = FormatVersion::from_major(lo);
            let max = FormatVersion::from_major(hi);
            let range = PackFormat::new(min, max).unwrap();
            let probe = FormatVersion::new(probe_major, probe_minor);
            prop_assert_eq!(range.is_in_range(probe), probe >= min && probe <= max);
        }
    }
}
