use crate::poly_commit::{
    errors::PolyComSchemeError, field_polynomial::FpPolynomial, pcs::PolyComScheme,
};
use kestrel_algebra::{
    bls12_381::BLSPairingEngine,
    prelude::*,
    traits::{Domain, Pairing},
};

/// KZG commitment scheme over the `Group`.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq, Default)]
pub struct KZGCommitment<G>(pub G);

/// KZG commitment scheme about `PairingEngine`.
///
/// The reference string holds `[1]_1, [s]_1, ..., [s^d]_1` and `[1]_2, [s]_2`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct KZGCommitmentScheme<P: Pairing> {
    /// public parameter about G1.
    pub public_parameter_group_1: Vec<P::G1>,
    /// public parameter about G2.
    pub public_parameter_group_2: Vec<P::G2>,
}

impl<P: Pairing> KZGCommitmentScheme<P> {
    /// Create a new instance of a KZG polynomial commitment scheme.
    /// `max_degree` - max degree of the polynomial,
    /// `prng` - pseudo-random generator.
    ///
    /// The trapdoor is sampled from `prng` and dropped, so this is only suitable for tests.
    pub fn new<R: CryptoRng + RngCore>(max_degree: usize, prng: &mut R) -> KZGCommitmentScheme<P> {
        let s = P::ScalarField::random(prng);

        let mut public_parameter_group_1: Vec<P::G1> = Vec::with_capacity(max_degree + 1);

        let mut elem_g1 = P::G1::get_base();

        for _ in 0..=max_degree {
            public_parameter_group_1.push(elem_g1);
            elem_g1 = elem_g1.mul(&s);
        }

        let mut public_parameter_group_2: Vec<P::G2> = Vec::new();
        let elem_g2 = P::G2::get_base();
        public_parameter_group_2.push(elem_g2);
        public_parameter_group_2.push(elem_g2.mul(&s));

        KZGCommitmentScheme {
            public_parameter_group_1,
            public_parameter_group_2,
        }
    }

    /// Serialize the parameters to unchecked bytes.
    pub fn to_unchecked_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![];
        let len_1 = self.public_parameter_group_1.len() as u32;
        let len_2 = self.public_parameter_group_2.len() as u32;
        bytes.extend(len_1.to_le_bytes());
        bytes.extend(len_2.to_le_bytes());

        for i in &self.public_parameter_group_1 {
            bytes.extend(i.to_unchecked_bytes());
        }
        for i in &self.public_parameter_group_2 {
            bytes.extend(i.to_unchecked_bytes());
        }
        bytes
    }

    /// Deserialize the parameters from unchecked bytes.
    pub fn from_unchecked_bytes(bytes: &[u8]) -> core::result::Result<Self, AlgebraError> {
        let (len_1, bytes) = read_u32_le_prefix(bytes)?;
        let (len_2, bytes) = read_u32_le_prefix(bytes)?;
        let n_1 = P::G1::unchecked_size();
        let n_2 = P::G2::unchecked_size();

        if bytes.len() != n_1 * len_1 + n_2 * len_2 {
            return Err(AlgebraError::DeserializationError);
        }
        let (bytes_1, bytes_2) = bytes.split_at(n_1 * len_1);

        let p1 = bytes_1
            .chunks_exact(n_1)
            .map(P::G1::from_unchecked_bytes)
            .collect::<core::result::Result<Vec<_>, _>>()?;
        let p2 = bytes_2
            .chunks_exact(n_2)
            .map(P::G2::from_unchecked_bytes)
            .collect::<core::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            public_parameter_group_1: p1,
            public_parameter_group_2: p2,
        })
    }
}

/// KZG commitment scheme over the BLS12-381 curve
pub type KZGCommitmentSchemeBLS = KZGCommitmentScheme<BLSPairingEngine>;

impl<P: Pairing> PolyComScheme for KZGCommitmentScheme<P>
where
    P::ScalarField: Domain,
{
    type Field = P::ScalarField;
    type Commitment = KZGCommitment<P::G1>;

    fn basis_len(&self) -> usize {
        self.public_parameter_group_1.len()
    }

    fn commit(
        &self,
        polynomial: &FpPolynomial<Self::Field>,
    ) -> core::result::Result<Self::Commitment, PolyComSchemeError> {
        let coefs = polynomial.get_coefs_ref();
        if coefs.len() > self.basis_len() {
            return Err(PolyComSchemeError::DegreeError);
        }

        let coefs_ref: Vec<&P::ScalarField> = coefs.iter().collect();
        let pub_param_group_1_as_ref: Vec<&P::G1> = self.public_parameter_group_1[0..coefs.len()]
            .iter()
            .collect();

        let commitment_value = P::G1::multi_exp(&coefs_ref[..], &pub_param_group_1_as_ref[..]);

        Ok(KZGCommitment(commitment_value))
    }
}
