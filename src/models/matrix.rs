use super::ModuleCoord;

/// Packed square-or-rectangular grid of dark/light modules
///
/// `true` means dark (or, for masks, "claimed"). Out-of-range reads return
/// `false` and out-of-range writes are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    width: usize,
    height: usize,
    words: Vec<u64>,
}

impl BitMatrix {
    /// Create an all-light matrix with the given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            words: vec![0; (width * height).div_ceil(64)],
        }
    }

    /// Create an all-light `size` x `size` matrix
    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    /// Matrix width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Matrix height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get module at (x, y)
    pub fn get(&self, x: usize, y: usize) -> bool {
        match self.bit_index(x, y) {
            Some(index) => (self.words[index / 64] >> (index % 64)) & 1 == 1,
            None => false,
        }
    }

    /// Set module at (x, y)
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        let Some(index) = self.bit_index(x, y) else {
            return;
        };
        let mask = 1u64 << (index % 64);
        if value {
            self.words[index / 64] |= mask;
        } else {
            self.words[index / 64] &= !mask;
        }
    }

    /// Get module at a coordinate
    pub fn get_at(&self, coord: ModuleCoord) -> bool {
        self.get(coord.x, coord.y)
    }

    /// Mark module at a coordinate dark
    pub fn mark(&mut self, coord: ModuleCoord) {
        self.set(coord.x, coord.y, true);
    }

    /// Number of dark modules
    pub fn count_set(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Row-major iterator over the coordinates of dark modules
    pub fn iter_set(&self) -> impl Iterator<Item = ModuleCoord> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| ModuleCoord::new(x, y)))
            .filter(|c| self.get_at(*c))
    }

    fn bit_index(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }
}

impl Default for BitMatrix {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
