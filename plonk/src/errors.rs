use crate::poly_commit::errors::PolyComSchemeError;
use ark_std::{error, fmt};
use kestrel_algebra::prelude::AlgebraError;

pub(crate) type Result<T> = core::result::Result<T, PlonkError>;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PlonkError {
    /// Algebra error
    Algebra(AlgebraError),
    /// The reference string has fewer basis elements than the circuit size.
    ReferenceStringTooSmall,
    /// A polynomial could not be committed.
    CommitmentFailure(PolyComSchemeError),
    /// Group not found.
    GroupNotFound(usize),
    /// A gate references a coefficient missing from the coefficient table.
    CoefficientNotFound(usize),
    /// The commitment info references a row outside the evaluation domain.
    CommittedRowOutOfRange(usize),
    /// The verifying key is shared and can no longer be modified.
    VerifyingKeyShared,
}

impl fmt::Display for PlonkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use PlonkError::*;
        match self {
            Algebra(e) => write!(f, "Algebra: {}", e),
            ReferenceStringTooSmall => f.write_str("Reference string too small."),
            CommitmentFailure(e) => write!(f, "Commitment failure: {}", e),
            GroupNotFound(n) => write!(f, "Group of size {} not found.", n),
            CoefficientNotFound(id) => write!(f, "Coefficient {} not found.", id),
            CommittedRowOutOfRange(row) => write!(f, "Committed row {} out of range.", row),
            VerifyingKeyShared => f.write_str("Verifying key is shared."),
        }
    }
}

impl error::Error for PlonkError {}

impl From<AlgebraError> for PlonkError {
    fn from(e: AlgebraError) -> PlonkError {
        PlonkError::Algebra(e)
    }
}

impl From<PolyComSchemeError> for PlonkError {
    fn from(e: PolyComSchemeError) -> PlonkError {
        PlonkError::CommitmentFailure(e)
    }
}
