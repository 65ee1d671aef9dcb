//! Error types for the strip API.

/// Errors reported to foreground callers.
///
/// The encoder step itself never fails; every bound is checked here before
/// the store is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// LED index (or grid coordinate) outside the strip
    OutOfRange { index: usize, len: usize },
    /// The LED store cannot be sized for the requested count
    Allocation { requested: usize, capacity: usize },
    /// A shared strip was used before `init`
    NotInitialized,
    /// A shared strip was initialized twice
    AlreadyInitialized,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "LED index {index} out of range for strip of {len}")
            }
            Self::Allocation {
                requested,
                capacity,
            } => write!(
                f,
                "cannot size LED store for {requested} LEDs (capacity {capacity})"
            ),
            Self::NotInitialized => write!(f, "strip is not initialized"),
            Self::AlreadyInitialized => write!(f, "strip is already initialized"),
        }
    }
}

impl core::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
