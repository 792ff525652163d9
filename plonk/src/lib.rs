//! PLONK preprocessing for the Kestrel proving system.
//!
//! [`plonk::indexer::setup`] compiles a sparse constraint system into a proving key and a
//! verifying key: selector and permutation polynomials in coefficient form, the copy-constraint
//! permutation, the two evaluation domains and a KZG commitment to every public polynomial.
#![allow(clippy::needless_borrow)]
#![allow(clippy::upper_case_acronyms)]

#[macro_use]
extern crate serde_derive;

/// Module for error handling.
pub mod errors;

/// Module for the PLONK preprocessing.
pub mod plonk;

/// Module for polynomials and polynomial commitments.
pub mod poly_commit;
