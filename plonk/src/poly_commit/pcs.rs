use crate::poly_commit::{errors::PolyComSchemeError, field_polynomial::FpPolynomial};
use ark_std::fmt::Debug;
use kestrel_algebra::traits::Domain;

/// Trait for polynomial commitment scheme.
///
/// Setup only needs the capacity of the reference string and the ability to commit
/// to a polynomial in coefficient form.
pub trait PolyComScheme: Sized + Sync {
    /// Type of prime field.
    type Field: Domain;

    /// Type of commitment produces.
    type Commitment: Debug
        + PartialEq
        + Eq
        + Clone
        + serde::Serialize
        + for<'de> serde::Deserialize<'de>
        + Send
        + Sync;

    /// Return the number of basis elements in the reference string.
    fn basis_len(&self) -> usize;

    /// Return the max degree of polynomial that can be committed.
    fn max_degree(&self) -> usize {
        self.basis_len().saturating_sub(1)
    }

    /// Commits to the polynomial, commitment is binding.
    fn commit(
        &self,
        polynomial: &FpPolynomial<Self::Field>,
    ) -> Result<Self::Commitment, PolyComSchemeError>;
}
