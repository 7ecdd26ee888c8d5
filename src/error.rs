// ============================================================================
// Error Types
// ============================================================================

/// Errors raised by the graph builders.
///
/// The only failure mode in this crate is an invalid caller argument;
/// degenerate inputs (zero-sum rows, isolated nodes, fewer candidates than
/// requested neighbors) are handled as defined policy and never error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    InvalidArgument(String),
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::InvalidArgument(e) => write!(f, "Invalid argument: {}", e),
        }
    }
}

impl std::error::Error for GraphError {}

pub type GraphResult<T> = Result<T, GraphError>;
