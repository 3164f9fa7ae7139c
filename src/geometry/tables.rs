// Alignment pattern center offsets (ISO/IEC 18004 Annex E).
// Index: version number. Entry 0 is unused; 41-44 are Micro QR, which has no
// alignment patterns.
pub(crate) const ALIGNMENT_ANCHORS: [&[u8]; 45] = [
    &[],
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
    &[6, 30, 54],
    &[6, 32, 58],
    &[6, 34, 62],
    &[6, 26, 46, 66],
    &[6, 26, 48, 70],
    &[6, 26, 50, 74],
    &[6, 30, 54, 78],
    &[6, 30, 56, 82],
    &[6, 30, 58, 86],
    &[6, 34, 62, 90],
    &[6, 28, 50, 72, 94],
    &[6, 26, 50, 74, 98],
    &[6, 30, 54, 78, 102],
    &[6, 28, 54, 80, 106],
    &[6, 32, 58, 84, 110],
    &[6, 30, 58, 86, 114],
    &[6, 34, 62, 90, 118],
    &[6, 26, 50, 74, 98, 122],
    &[6, 30, 54, 78, 102, 126],
    &[6, 26, 52, 78, 104, 130],
    &[6, 30, 56, 82, 108, 134],
    &[6, 34, 60, 86, 112, 138],
    &[6, 30, 58, 86, 114, 142],
    &[6, 34, 62, 90, 118, 146],
    &[6, 30, 54, 78, 102, 126, 150],
    &[6, 24, 50, 76, 102, 128, 154],
    &[6, 28, 54, 80, 106, 132, 158],
    &[6, 32, 58, 84, 110, 136, 162],
    &[6, 26, 54, 82, 110, 138, 166],
    &[6, 30, 58, 86, 114, 142, 170],
    &[],
    &[],
    &[],
    &[],
];

#[cfg(test)]
mod tests {
    use super::*;

    // Closed-form placement used by decoders: first center at 6, last at
    // size - 7, the rest evenly spaced on even offsets.
    fn computed_positions(version: usize) -> Vec<usize> {
        if version == 1 {
            return Vec::new();
        }
        let num_align = version / 7 + 2;
        let size = 17 + 4 * version;
        let step = (version * 8 + num_align * 3 + 5) / (num_align * 4 - 4) * 2;

        let mut positions = vec![6usize; num_align];
        for (k, slot) in positions[1..].iter_mut().rev().enumerate() {
            *slot = size - 7 - k * step;
        }
        positions
    }

    #[test]
    fn test_table_matches_closed_form() {
        for version in 1..=40 {
            let table: Vec<usize> = ALIGNMENT_ANCHORS[version]
                .iter()
                .map(|&a| a as usize)
                .collect();
            assert_eq!(table, computed_positions(version), "version {version}");
        }
    }

    #[test]
    fn test_closed_form_seven_anchor_versions() {
        // The second anchor sits less than one step from the first here
        assert_eq!(computed_positions(36), vec![6, 24, 50, 76, 102, 128, 154]);
        assert_eq!(computed_positions(39), vec![6, 26, 54, 82, 110, 138, 166]);
    }

    #[test]
    fn test_micro_has_no_anchors() {
        for version in 41..=44 {
            assert!(ALIGNMENT_ANCHORS[version].is_empty());
        }
    }
}
