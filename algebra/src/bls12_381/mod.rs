mod fr;
mod g1;
mod g2;
mod pairing;

pub use fr::BLSScalar;
pub use g1::BLSG1;
pub use g2::BLSG2;
pub use pairing::{BLSGt, BLSPairingEngine};

/// The number of bytes for a scalar value over BLS12-381
pub const BLS12_381_SCALAR_LEN: usize = 32;
