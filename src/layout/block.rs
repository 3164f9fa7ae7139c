use crate::models::ModuleCoord;

/// Modules per codeword
pub const BLOCK_CAPACITY: usize = 8;

/// Up to eight module positions holding one codeword, in placement order
///
/// The first coordinate receives the most significant bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodewordBlock {
    modules: [ModuleCoord; BLOCK_CAPACITY],
    len: usize,
}

impl CodewordBlock {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append a module. Returns `false` without storing it when the block is full.
    pub(crate) fn push(&mut self, coord: ModuleCoord) -> bool {
        if self.is_full() {
            return false;
        }
        self.modules[self.len] = coord;
        self.len += 1;
        true
    }

    /// Number of modules stored
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no module has been stored
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True once all eight slots are taken
    pub fn is_full(&self) -> bool {
        self.len == BLOCK_CAPACITY
    }

    /// Stored modules in placement order
    pub fn as_slice(&self) -> &[ModuleCoord] {
        &self.modules[..self.len]
    }

    /// Whether `coord` belongs to this block
    pub fn contains(&self, coord: ModuleCoord) -> bool {
        self.as_slice().contains(&coord)
    }

    /// Iterate over the stored modules
    pub fn iter(&self) -> std::slice::Iter<'_, ModuleCoord> {
        self.as_slice().iter()
    }
}

impl<'a> IntoIterator for &'a CodewordBlock {
    type Item = &'a ModuleCoord;
    type IntoIter = std::slice::Iter<'a, ModuleCoord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
