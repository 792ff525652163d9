use crate::bls12_381::{BLSScalar, BLSG1, BLSG2};
use crate::traits::Pairing;
use ark_bls12_381::Bls12_381;
use ark_ec::pairing::{Pairing as ArkPairing, PairingOutput};

/// The wrapped struct for the BLS12-381 target group
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct BLSGt(pub(crate) PairingOutput<Bls12_381>);

/// The pairing engine for BLS12-381
#[derive(Debug)]
pub struct BLSPairingEngine;

impl Pairing for BLSPairingEngine {
    type ScalarField = BLSScalar;
    type G1 = BLSG1;
    type G2 = BLSG2;
    type Gt = BLSGt;

    #[inline]
    fn pairing(a: &Self::G1, b: &Self::G2) -> Self::Gt {
        BLSGt(Bls12_381::pairing(a.0, b.0))
    }
}
