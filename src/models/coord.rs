/// Module position inside a symbol
///
/// `x` is the column and `y` the row, both counted from the top-left module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ModuleCoord {
    /// Column
    pub x: usize,
    /// Row
    pub y: usize,
}

impl ModuleCoord {
    /// Create a new module coordinate
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Offset by a signed delta, `None` if either axis would go below zero
    pub fn offset(&self, dx: isize, dy: isize) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }
}

impl From<(usize, usize)> for ModuleCoord {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}
