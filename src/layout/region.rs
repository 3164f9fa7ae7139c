use tracing::{debug, trace};

use super::Traversal;
use super::block::CodewordBlock;
use crate::geometry::ReservedMask;
use crate::models::{ModuleCoord, SymbolVersion};

/// Codeword blocks of one symbol, in placement order
///
/// Every block except the last holds exactly eight modules. The last one
/// holds whatever the traversal had left, and is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EncodingRegion {
    blocks: Vec<CodewordBlock>,
}

impl EncodingRegion {
    /// Walk the full zigzag for `version`, structural modules included
    pub fn generate(version: SymbolVersion) -> Self {
        let region = Self::from_modules(Traversal::new(version));
        debug!(
            version = %version,
            blocks = region.len(),
            modules = region.module_count(),
            "generated encoding region"
        );
        region
    }

    /// Walk the zigzag for `mask.version()`, skipping every reserved module
    pub fn generate_excluding(mask: &ReservedMask) -> Self {
        let version = mask.version();
        let region = Self::from_modules(
            Traversal::new(version).filter(|coord| !mask.is_reserved(*coord)),
        );
        debug!(
            version = %version,
            blocks = region.len(),
            modules = region.module_count(),
            "generated encoding region without reserved modules"
        );
        region
    }

    /// Chunk an ordered module sequence into codeword blocks
    pub fn from_modules<I>(modules: I) -> Self
    where
        I: IntoIterator<Item = ModuleCoord>,
    {
        let mut blocks = Vec::new();
        let mut current = CodewordBlock::new();

        for coord in modules {
            trace!(x = coord.x, y = coord.y, "module");
            current.push(coord);
            if current.is_full() {
                blocks.push(current);
                current = CodewordBlock::new();
            }
        }

        if !current.is_empty() {
            blocks.push(current);
        }

        Self { blocks }
    }

    /// Codeword blocks in placement order
    pub fn blocks(&self) -> &[CodewordBlock] {
        &self.blocks
    }

    /// Number of blocks
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// True when the region holds no block
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of modules across all blocks
    pub fn module_count(&self) -> usize {
        self.blocks.iter().map(CodewordBlock::len).sum()
    }

    /// All modules in placement order
    pub fn modules(&self) -> impl Iterator<Item = ModuleCoord> + '_ {
        self.blocks.iter().flat_map(|b| b.iter().copied())
    }

    /// Index of the block holding `coord`, if any
    pub fn block_of(&self, coord: ModuleCoord) -> Option<usize> {
        self.blocks.iter().position(|b| b.contains(coord))
    }
}
