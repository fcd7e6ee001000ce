use thiserror::Error;

/// Failure of a simulation or one of its calculators.
///
/// Every fallible operation in the crate returns `Result<_, SimError>`;
/// the first error encountered anywhere in the pipeline aborts the run and
/// reaches the caller unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// A position vector with zero magnitude reached a coordinate
    /// conversion or force model.
    #[error("degenerate position vector (zero magnitude)")]
    DegenerateVector,

    /// A physical parameter was outside its valid range.
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// A downstream calculator received an empty trajectory.
    #[error("trajectory contains no samples")]
    EmptyTrajectory,
}

impl SimError {
    pub(crate) fn invalid(name: &'static str, value: f64) -> Self {
        SimError::InvalidParameter { name, value }
    }
}
