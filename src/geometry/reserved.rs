use super::patterns::{ALIGNMENT_SIZE, FINDER_SIZE};
use crate::models::{BitMatrix, ModuleCoord, SymbolVersion};

/// Modules claimed by the structural patterns of a version.
/// true = covered by a finder, timing or alignment footprint.
///
/// Unlike the blank symbol, footprints are claimed whole: light modules
/// inside a finder ring and the odd cells of the timing lines are reserved
/// too.
#[derive(Debug, Clone)]
pub struct ReservedMask {
    mask: BitMatrix,
    version: SymbolVersion,
}

impl ReservedMask {
    /// Claim every finder, timing and alignment footprint of `version`
    pub fn new(version: SymbolVersion) -> Self {
        let size = version.width();
        let mut mask = BitMatrix::square(size);

        for origin in super::finder_origins(version) {
            Self::mark_square(&mut mask, origin, FINDER_SIZE);
        }

        let timing = version.timing_line_offset();
        for i in 0..size {
            mask.set(timing, i, true);
            mask.set(i, timing, true);
        }

        let half = (ALIGNMENT_SIZE / 2) as isize;
        for center in super::alignment_centers(version) {
            if let Some(top_left) = center.offset(-half, -half) {
                Self::mark_square(&mut mask, top_left, ALIGNMENT_SIZE);
            }
        }

        Self { mask, version }
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.mask.width()
    }

    /// Version the mask was built for
    pub fn version(&self) -> SymbolVersion {
        self.version
    }

    /// Whether `coord` lies inside a structural footprint
    pub fn is_reserved(&self, coord: ModuleCoord) -> bool {
        self.mask.get_at(coord)
    }

    /// Modules left over for data once every footprint is claimed
    pub fn data_module_count(&self) -> usize {
        self.size() * self.size() - self.mask.count_set()
    }

    fn mark_square(mask: &mut BitMatrix, top_left: ModuleCoord, side: usize) {
        for dy in 0..side {
            for dx in 0..side {
                mask.set(top_left.x + dx, top_left.y + dy, true);
            }
        }
    }
}
