//! Stamping of the fixed structural patterns onto a module grid.
//!
//! Every helper only darkens modules; light modules are whatever the grid
//! already held, so stamping order never erases an earlier pattern.

use crate::models::{BitMatrix, ModuleCoord, SymbolVersion};

/// Finder pattern side length
pub const FINDER_SIZE: usize = 7;
/// Alignment pattern side length
pub const ALIGNMENT_SIZE: usize = 5;

/// Concentric square motif of odd side `size`: dark border, light ring one
/// module in, dark core.
fn is_ring_light(i: usize, j: usize, size: usize) -> bool {
    let ring = [1, size - 2];
    let edge = [0, size - 1];
    (ring.contains(&i) && !edge.contains(&j)) || (ring.contains(&j) && !edge.contains(&i))
}

fn stamp_ring(matrix: &mut BitMatrix, left: usize, top: usize, size: usize) {
    for i in 0..size {
        for j in 0..size {
            if is_ring_light(i, j, size) {
                continue;
            }
            matrix.set(left + i, top + j, true);
        }
    }
}

/// Stamp a 7x7 finder pattern with its top-left module at `origin`
pub fn stamp_finder(matrix: &mut BitMatrix, origin: ModuleCoord) {
    stamp_ring(matrix, origin.x, origin.y, FINDER_SIZE);
}

/// Stamp a 5x5 alignment pattern centered on `center`
///
/// Centers closer than two modules to the top or left edge are clipped.
pub fn stamp_alignment(matrix: &mut BitMatrix, center: ModuleCoord) {
    let half = (ALIGNMENT_SIZE / 2) as isize;
    if let Some(top_left) = center.offset(-half, -half) {
        stamp_ring(matrix, top_left.x, top_left.y, ALIGNMENT_SIZE);
    }
}

/// Stamp the horizontal and vertical timing lines at `offset`
pub fn stamp_timing(matrix: &mut BitMatrix, offset: usize) {
    let width = matrix.width();
    for i in (0..width).step_by(2) {
        matrix.set(i, offset, true);
        matrix.set(offset, i, true);
    }
}

/// Build the blank symbol for `version`: timing lines, finder patterns and
/// alignment patterns on an otherwise light grid.
pub fn blank_symbol(version: SymbolVersion) -> BitMatrix {
    let mut matrix = BitMatrix::square(version.width());

    stamp_timing(&mut matrix, version.timing_line_offset());

    for origin in super::finder_origins(version) {
        stamp_finder(&mut matrix, origin);
    }

    for center in super::alignment_centers(version) {
        stamp_alignment(&mut matrix, center);
    }

    matrix
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(raw: i64) -> SymbolVersion {
        SymbolVersion::new(raw).unwrap()
    }

    #[test]
    fn test_finder_shape() {
        let mut matrix = BitMatrix::square(version(1).width());
        stamp_finder(&mut matrix, ModuleCoord::new(0, 0));

        assert!(matrix.get(3, 3), "center should be dark");
        assert!(matrix.get(2, 2), "core should be dark");
        assert!(!matrix.get(1, 1), "inner ring should be light");
        assert!(!matrix.get(5, 3), "inner ring should be light");
        for (x, y) in [(0, 0), (6, 0), (0, 6), (6, 6), (1, 0), (0, 5)] {
            assert!(matrix.get(x, y), "border ({x}, {y}) should be dark");
        }
        // 24 border + 9 core
        assert_eq!(matrix.count_set(), 33);
        assert!(!matrix.get(7, 7));
    }

    #[test]
    fn test_alignment_shape() {
        let mut matrix = BitMatrix::square(version(2).width());
        stamp_alignment(&mut matrix, ModuleCoord::new(18, 18));

        assert!(matrix.get(18, 18));
        assert!(matrix.get(16, 16));
        assert!(matrix.get(20, 20));
        assert!(!matrix.get(17, 17));
        assert!(!matrix.get(19, 18));
        // 16 border + 1 core
        assert_eq!(matrix.count_set(), 17);
    }

    #[test]
    fn test_timing_lines() {
        let mut matrix = BitMatrix::square(21);
        stamp_timing(&mut matrix, 6);
        for i in 0..21 {
            assert_eq!(matrix.get(i, 6), i % 2 == 0, "row cell {i}");
            assert_eq!(matrix.get(6, i), i % 2 == 0, "column cell {i}");
        }
    }

    #[test]
    fn test_blank_symbol_version_1() {
        let v1 = version(1);
        let matrix = blank_symbol(v1);
        assert_eq!(matrix.width(), 21);

        // Three finder corners
        assert!(matrix.get(3, 3));
        assert!(matrix.get(17, 3));
        assert!(matrix.get(3, 17));
        assert!(!matrix.get(15, 15));

        // Every dark module belongs to a finder or a timing line
        let finder_at = |x: usize, y: usize| {
            (x < 7 || x >= 14) && (y < 7 || y >= 14) && !(x >= 14 && y >= 14)
        };
        for coord in matrix.iter_set() {
            let on_timing = (coord.y == 6 || coord.x == 6) && (coord.x + coord.y) % 2 == 0;
            assert!(
                finder_at(coord.x, coord.y) || on_timing,
                "unexpected dark module at {coord:?}"
            );
        }
    }

    #[test]
    fn test_blank_symbol_micro_single_finder() {
        let m1 = version(41);
        let matrix = blank_symbol(m1);
        assert_eq!(matrix.width(), 11);
        assert!(matrix.get(3, 3));
        assert!(!matrix.get(1, 1));
        // Timing hugs the border past the finder
        assert!(matrix.get(8, 0));
        assert!(!matrix.get(9, 0));
        assert!(matrix.get(0, 10));
        // No finder in the other corners
        assert!(!matrix.get(8, 8));
        assert!(!matrix.get(9, 3));
    }

    #[test]
    fn test_blank_symbol_version_7_alignment() {
        let matrix = blank_symbol(version(7));
        // Interior center
        assert!(matrix.get(22, 22));
        assert!(!matrix.get(21, 22));
        assert!(matrix.get(20, 22));
        // Edge-row center sharing the timing row
        assert!(matrix.get(22, 6));
        assert!(!matrix.get(21, 5));
    }
}
