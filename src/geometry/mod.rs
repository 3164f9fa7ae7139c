//! Symbol geometry
//!
//! Everything here is a pure function of a validated [`SymbolVersion`]:
//! - Finder pattern origins
//! - Alignment pattern anchors and centers
//! - Stamping of the structural patterns into a blank symbol
//! - The reserved-module mask used by exclusion-aware traversal

/// Finder, alignment and timing stamping helpers
pub mod patterns;
/// Footprint mask of the structural patterns
pub mod reserved;
mod tables;

pub use patterns::blank_symbol;
pub use reserved::ReservedMask;

use crate::models::{ModuleCoord, SymbolVersion};
use patterns::FINDER_SIZE;

/// Alignment pattern center offsets for `version`.
///
/// Both rows and columns are drawn from this set. Empty for version 1 and
/// every Micro version.
pub fn alignment_anchors(version: SymbolVersion) -> &'static [u8] {
    tables::ALIGNMENT_ANCHORS[version.number() as usize]
}

/// Alignment pattern centers for `version`.
///
/// Cross product of the anchor set with itself, minus the three combinations
/// that land on the finder patterns. Ordered by column anchor, then row anchor.
pub fn alignment_centers(version: SymbolVersion) -> Vec<ModuleCoord> {
    let anchors = alignment_anchors(version);
    let Some(last) = anchors.len().checked_sub(1) else {
        return Vec::new();
    };

    let mut centers = Vec::with_capacity(anchors.len() * anchors.len());
    for (i, &x) in anchors.iter().enumerate() {
        for (j, &y) in anchors.iter().enumerate() {
            let on_finder = (i == 0 && j == 0) || (i == 0 && j == last) || (i == last && j == 0);
            if on_finder {
                continue;
            }
            centers.push(ModuleCoord::new(x as usize, y as usize));
        }
    }
    centers
}

/// Top-left corners of the finder patterns.
///
/// Standard symbols carry three (top-left, top-right, bottom-left); Micro
/// symbols only the top-left one.
pub fn finder_origins(version: SymbolVersion) -> Vec<ModuleCoord> {
    let far = version.width() - FINDER_SIZE;
    if version.is_compact() {
        vec![ModuleCoord::new(0, 0)]
    } else {
        vec![
            ModuleCoord::new(0, 0),
            ModuleCoord::new(far, 0),
            ModuleCoord::new(0, far),
        ]
    }
}
