//! Codeword placement order
//!
//! Data modules are filled in two-module-wide vertical lanes, starting at the
//! bottom-right corner and working leftwards, reversing vertical direction at
//! each edge and hopping over the vertical timing line. The walk is chunked
//! into 8-module blocks, one per codeword.

/// Fixed-capacity codeword block
pub mod block;
/// Zigzag cursor state machine
pub mod cursor;
/// Ordered block list for a whole symbol
pub mod region;

pub use block::{BLOCK_CAPACITY, CodewordBlock};
pub use cursor::{Cursor, Direction};
pub use region::EncodingRegion;

use rayon::prelude::*;

use crate::models::{ModuleCoord, SymbolVersion};

/// Iterator over the modules of a symbol in placement order
///
/// Structural patterns are not skipped; see
/// [`EncodingRegion::generate_excluding`] for that.
#[derive(Debug, Clone)]
pub struct Traversal {
    cursor: Cursor,
    width: usize,
    timing_x: usize,
}

impl Traversal {
    /// Walk starting at the bottom-right module of `version`
    pub fn new(version: SymbolVersion) -> Self {
        let width = version.width();
        Self {
            cursor: Cursor::start(width),
            width,
            timing_x: version.timing_line_offset(),
        }
    }
}

impl Iterator for Traversal {
    type Item = ModuleCoord;

    fn next(&mut self) -> Option<ModuleCoord> {
        let coord = self.cursor.position(self.width)?;
        self.cursor = self.cursor.advance(self.timing_x, self.width);
        Some(coord)
    }
}

impl std::iter::FusedIterator for Traversal {}

/// Encoding regions for every version, computed in parallel.
///
/// Ordered by version number.
pub fn regions_for_all_versions() -> Vec<(SymbolVersion, EncodingRegion)> {
    let versions: Vec<SymbolVersion> = SymbolVersion::all().collect();
    versions
        .into_par_iter()
        .map(|version| (version, EncodingRegion::generate(version)))
        .collect()
}
