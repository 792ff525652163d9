//! The PLONK preprocessing: from a sparse constraint system to proving and verifying keys.

/// Module for help functions.
pub(crate) mod helpers;

/// Module for the constraint system.
pub mod constraint_system;

/// Module for the evaluation domains.
pub mod domain;

/// Module for the selector polynomials.
pub mod selectors;

/// Module for the copy-constraint permutation.
pub mod permutation;

/// Module for the coset evaluations used by the prover.
pub mod coset;

/// Module for indexer.
pub mod indexer;
