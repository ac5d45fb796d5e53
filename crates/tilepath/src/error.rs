use std::fmt;

/// Errors reported when building a [`PathFinder`](crate::PathFinder).
///
/// Searching itself never fails: an unreachable goal is delivered as an
/// empty path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinderError {
    /// The map has no tiles to search.
    EmptyMap { width: i32, height: i32 },
    /// A tick must be allowed at least one expansion.
    ZeroStepBudget,
}

impl fmt::Display for FinderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMap { width, height } => {
                write!(f, "pathfinder: map of {width}x{height} tiles has nothing to search")
            }
            Self::ZeroStepBudget => write!(f, "pathfinder: step budget must be at least 1"),
        }
    }
}

impl std::error::Error for FinderError {}
