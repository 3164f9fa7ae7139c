//! qr_layout - QR and Micro QR symbol layout
//!
//! Computes where the structural patterns of a symbol sit and in which order
//! the remaining modules receive codeword bits. Bit values themselves (data
//! encoding, error correction, masking, format information) are out of scope.

#![deny(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Presentation settings (scale, quiet zone, reserved-module exclusion)
pub mod config;
/// Error types
pub mod error;
/// Symbol geometry (finder/alignment/timing placement and stamping)
pub mod geometry;
/// Codeword placement order (zigzag traversal, codeword blocks)
pub mod layout;
/// Core data structures (SymbolVersion, ModuleCoord, BitMatrix)
pub mod models;
/// Debug images and ASCII dumps
pub mod render;

pub use error::{LayoutError, Result};
pub use geometry::{
    ReservedMask, alignment_anchors, alignment_centers, blank_symbol, finder_origins,
};
pub use layout::{CodewordBlock, EncodingRegion, Traversal};
pub use models::{BitMatrix, ModuleCoord, SymbolVersion, VersionKind, validate};

/// A validated symbol version together with its placement order
///
/// The encoding region is computed once at construction; the blank symbol is
/// stamped on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrLayout {
    version: SymbolVersion,
    region: EncodingRegion,
}

impl QrLayout {
    /// Validate `raw` and compute its encoding region
    ///
    /// # Example
    /// ```
    /// let layout = qr_layout::QrLayout::new(2).unwrap();
    /// assert_eq!(layout.width(), 25);
    /// assert!(qr_layout::QrLayout::new(45).is_err());
    /// ```
    pub fn new(raw: i64) -> Result<Self> {
        let version = SymbolVersion::new(raw)?;
        Ok(Self::from_version(version))
    }

    /// Build from an already validated version
    pub fn from_version(version: SymbolVersion) -> Self {
        Self {
            version,
            region: EncodingRegion::generate(version),
        }
    }

    /// Symbol version
    pub fn version(&self) -> SymbolVersion {
        self.version
    }

    /// Side length in modules
    pub fn width(&self) -> usize {
        self.version.width()
    }

    /// Codeword blocks in placement order
    pub fn encoding_region(&self) -> &EncodingRegion {
        &self.region
    }

    /// Blank symbol with timing, finder and alignment patterns stamped
    pub fn blank_symbol(&self) -> BitMatrix {
        geometry::blank_symbol(self.version)
    }

    /// Structural footprint of this version
    pub fn reserved_mask(&self) -> ReservedMask {
        ReservedMask::new(self.version)
    }
}
