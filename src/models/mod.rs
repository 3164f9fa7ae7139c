/// Module positions
pub mod coord;
/// Packed module grids
pub mod matrix;
/// Validated symbol versions
pub mod version;

pub use coord::ModuleCoord;
pub use matrix::BitMatrix;
pub use version::{SymbolVersion, VersionKind, validate};
