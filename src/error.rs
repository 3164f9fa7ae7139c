use thiserror::Error;

/// Errors raised when a symbol version enters the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Version identifier outside 1..=44
    #[error("symbol version {version} is out of range (expected 1..=44)")]
    OutOfRange {
        /// The rejected raw identifier
        version: i64,
    },
}

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;
