use std::fmt;

use crate::error::{LayoutError, Result};

/// Highest standard (Model 2) version number.
pub const MAX_STANDARD_VERSION: u8 = 40;
/// Highest accepted version identifier (Micro M4).
pub const MAX_VERSION: u8 = 44;

/// Validated QR symbol version
///
/// Identifiers 1-40 are standard versions, 41-44 are Micro QR M1-M4.
/// The only way to obtain one is through [`SymbolVersion::new`], so every
/// derived quantity can assume the range has been checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolVersion(u8);

/// Which family a version belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionKind {
    /// Standard QR code (versions 1-40)
    Standard(u8),
    /// Micro QR code (M1-M4)
    Compact(u8),
}

impl SymbolVersion {
    /// Validate a raw identifier
    pub fn new(raw: i64) -> Result<Self> {
        if !(1..=MAX_VERSION as i64).contains(&raw) {
            return Err(LayoutError::OutOfRange { version: raw });
        }
        Ok(Self(raw as u8))
    }

    /// Every valid version, standard first then compact
    pub fn all() -> impl Iterator<Item = SymbolVersion> {
        (1..=MAX_VERSION).map(SymbolVersion)
    }

    /// Raw identifier (1-44)
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Family and index within it
    pub fn kind(&self) -> VersionKind {
        if self.0 <= MAX_STANDARD_VERSION {
            VersionKind::Standard(self.0)
        } else {
            VersionKind::Compact(self.0 - MAX_STANDARD_VERSION)
        }
    }

    /// Check if this is a Micro QR version
    pub fn is_compact(&self) -> bool {
        self.0 > MAX_STANDARD_VERSION
    }

    /// Side length in modules
    pub fn width(&self) -> usize {
        match self.kind() {
            VersionKind::Standard(v) => 4 * v as usize + 17,
            VersionKind::Compact(m) => 2 * m as usize + 9,
        }
    }

    /// Row and column index of the timing lines.
    ///
    /// Micro symbols run their timing patterns along the outer edge.
    pub fn timing_line_offset(&self) -> usize {
        if self.is_compact() { 0 } else { 6 }
    }
}

/// Validate a raw version identifier.
pub fn validate(raw: i64) -> Result<SymbolVersion> {
    SymbolVersion::new(raw)
}

impl TryFrom<i64> for SymbolVersion {
    type Error = LayoutError;

    fn try_from(raw: i64) -> Result<Self> {
        Self::new(raw)
    }
}

impl TryFrom<i32> for SymbolVersion {
    type Error = LayoutError;

    fn try_from(raw: i32) -> Result<Self> {
        Self::new(i64::from(raw))
    }
}

impl From<SymbolVersion> for u8 {
    fn from(version: SymbolVersion) -> u8 {
        version.0
    }
}

impl fmt::Display for SymbolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            VersionKind::Standard(v) => write!(f, "{v}"),
            VersionKind::Compact(m) => write!(f, "M{m}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_width() {
        assert_eq!(SymbolVersion::new(1).unwrap().width(), 21);
        assert_eq!(SymbolVersion::new(2).unwrap().width(), 25);
        assert_eq!(SymbolVersion::new(40).unwrap().width(), 177);
        assert_eq!(SymbolVersion::new(41).unwrap().width(), 11);
        assert_eq!(SymbolVersion::new(44).unwrap().width(), 17);
    }

    #[test]
    fn test_validate_bounds() {
        for raw in [1, 40, 41, 44] {
            assert!(validate(raw).is_ok(), "{raw} should be accepted");
        }
        for raw in [0, 45, -1, 1000, i64::MIN, i64::MAX] {
            assert_eq!(
                validate(raw),
                Err(LayoutError::OutOfRange { version: raw })
            );
        }
    }

    #[test]
    fn test_try_from_integer_widths() {
        assert_eq!(SymbolVersion::try_from(7i32), SymbolVersion::try_from(7i64));
        assert_eq!(u8::from(SymbolVersion::try_from(44i32).unwrap()), 44);
        assert_eq!(
            SymbolVersion::try_from(-3i32),
            Err(LayoutError::OutOfRange { version: -3 })
        );
        assert_eq!(
            SymbolVersion::try_from(i32::MAX),
            Err(LayoutError::OutOfRange {
                version: i64::from(i32::MAX)
            })
        );
    }

    #[test]
    fn test_kind_and_timing() {
        let v7 = SymbolVersion::new(7).unwrap();
        assert_eq!(v7.kind(), VersionKind::Standard(7));
        assert!(!v7.is_compact());
        assert_eq!(v7.timing_line_offset(), 6);

        let m2 = SymbolVersion::try_from(42).unwrap();
        assert_eq!(m2.kind(), VersionKind::Compact(2));
        assert!(m2.is_compact());
        assert_eq!(m2.timing_line_offset(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(SymbolVersion::new(12).unwrap().to_string(), "12");
        assert_eq!(SymbolVersion::new(43).unwrap().to_string(), "M3");
    }

    #[test]
    fn test_all_versions() {
        let all: Vec<u8> = SymbolVersion::all().map(u8::from).collect();
        assert_eq!(all.len(), 44);
        assert_eq!(all.first(), Some(&1));
        assert_eq!(all.last(), Some(&44));
    }
}
