use std::fmt;

/// Error returned when inverting a matrix whose determinant is numerically zero.
///
/// Produced by [`Mat3::inverse`](crate::Mat3::inverse) and propagated by every
/// operation built on it. It is recoverable: callers decide whether to skip the
/// frame, substitute an identity transform, or abort.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SingularMatrixError {
    /// Determinant that fell below the singularity threshold.
    pub determinant: f64,
}

impl SingularMatrixError {
    pub(crate) fn new(determinant: f64) -> Self {
        Self { determinant }
    }
}

impl fmt::Display for SingularMatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot invert singular matrix (determinant {:e})", self.determinant)
    }
}

impl std::error::Error for SingularMatrixError {}
