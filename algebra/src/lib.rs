//! The algebra layer used by the Kestrel PLONK setup.
//!
//! It wraps the arkworks BLS12-381 implementation behind the `Scalar`, `Domain`,
//! `Group` and `Pairing` traits so that the rest of the workspace never touches
//! arkworks types directly, except for the FFT domains.
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::op_ref)]

/// Module for the BLS12-381 curve
pub mod bls12_381;

/// Module for error handling
pub mod errors;

/// Module for the prelude
pub mod prelude;

/// Module for test rng
pub mod rand_helper;

/// Module for serialization of scalars and group elements
pub mod serialization;

/// Module for traits
pub mod traits;

/// Module for utils
pub mod utils;

pub use ark_std::{borrow, fmt, iter, marker, ops, rand, One, UniformRand, Zero};
