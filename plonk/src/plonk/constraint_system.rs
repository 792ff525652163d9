//! The sparse constraint system consumed by the setup.
//!
//! Every gate has the shape `ql·l + qr·r + qm·l·r + qo·o + qk = 0`, where the
//! coefficients are stored once in a shared table and referenced by id.
//! Variable ids are allocated as public, then secret, then internal, so that
//! the `i`-th public variable has id `i`.
use crate::errors::{PlonkError, Result};
use ark_std::collections::BTreeMap;
use kestrel_algebra::{prelude::*, traits::Domain};

/// Variable index
pub type VarIndex = usize;
/// Coefficient index
pub type CoeffIndex = usize;

/// Id of the coefficient `0`.
pub const COEFF_ID_ZERO: CoeffIndex = 0;
/// Id of the coefficient `1`.
pub const COEFF_ID_ONE: CoeffIndex = 1;
/// Id of the coefficient `2`.
pub const COEFF_ID_TWO: CoeffIndex = 2;
/// Id of the coefficient `-1`.
pub const COEFF_ID_MINUS_ONE: CoeffIndex = 3;

/// A wire reference together with the coefficient applied to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// The variable carried by the wire.
    pub wire: VarIndex,
    /// The coefficient id.
    pub coeff: CoeffIndex,
}

impl Term {
    /// Create a new term.
    pub fn new(wire: VarIndex, coeff: CoeffIndex) -> Self {
        Self { wire, coeff }
    }
}

/// A gate `ql·l + qr·r + qm·l·r + qo·o + qk = 0`.
///
/// `qm` is the product of the two coefficients in `m`; the wires of `m` are
/// informative only, the multiplication always acts on the `l` and `r` wires.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparseGate {
    /// The left term.
    pub l: Term,
    /// The right term.
    pub r: Term,
    /// The multiplication terms.
    pub m: [Term; 2],
    /// The output term.
    pub o: Term,
    /// The constant coefficient id.
    pub k: CoeffIndex,
}

/// Rows of the circuit bound by an extra commitment constraint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitmentInfo {
    /// Absolute row indices, public input rows included.
    pub committed: Vec<usize>,
    /// The number of private variables among the committed ones.
    pub nb_private_committed: usize,
    /// The variable holding the commitment.
    pub commitment_index: VarIndex,
}

impl CommitmentInfo {
    /// Return true if some rows are committed.
    pub fn is_set(&self) -> bool {
        !self.committed.is_empty()
    }
}

/// Trait for PLONK constraint systems.
pub trait ConstraintSystem {
    /// The field of the coefficients.
    type Field: Domain;

    /// Return the gates, in order.
    fn constraints(&self) -> &[SparseGate];

    /// Return the coefficient table.
    fn coefficients(&self) -> &[Self::Field];

    /// Return the number of public variables.
    fn nb_public_variables(&self) -> usize;

    /// Return the number of secret variables.
    fn nb_secret_variables(&self) -> usize;

    /// Return the number of internal variables.
    fn nb_internal_variables(&self) -> usize;

    /// Return the committed rows.
    fn commitment_info(&self) -> &CommitmentInfo;

    /// Return the number of variables in the constraint system.
    fn nb_variables(&self) -> usize {
        self.nb_public_variables() + self.nb_secret_variables() + self.nb_internal_variables()
    }

    /// Return the number of rows, one placeholder per public variable plus one per gate.
    fn size(&self) -> usize {
        self.constraints().len() + self.nb_public_variables()
    }

    /// Look up a coefficient.
    fn coefficient(&self, id: CoeffIndex) -> Result<Self::Field> {
        self.coefficients()
            .get(id)
            .copied()
            .ok_or(PlonkError::CoefficientNotFound(id))
    }
}

/// A constraint system made of sparse gates.
#[derive(Debug, Clone)]
pub struct SparseCS<F> {
    /// the gates of the circuit.
    pub constraints: Vec<SparseGate>,
    /// the coefficient table.
    pub coefficients: Vec<F>,
    /// the number of public variables.
    pub nb_public: usize,
    /// the number of secret variables.
    pub nb_secret: usize,
    /// the number of internal variables.
    pub nb_internal: usize,
    /// the committed rows.
    pub commitment_info: CommitmentInfo,
    coeff_ids: BTreeMap<Vec<u8>, CoeffIndex>,
}

impl<F: Domain> ConstraintSystem for SparseCS<F> {
    type Field = F;

    fn constraints(&self) -> &[SparseGate] {
        &self.constraints
    }

    fn coefficients(&self) -> &[F] {
        &self.coefficients
    }

    fn nb_public_variables(&self) -> usize {
        self.nb_public
    }

    fn nb_secret_variables(&self) -> usize {
        self.nb_secret
    }

    fn nb_internal_variables(&self) -> usize {
        self.nb_internal
    }

    fn commitment_info(&self) -> &CommitmentInfo {
        &self.commitment_info
    }
}

impl<F: Domain> SparseCS<F> {
    /// Create a constraint system with `nb_public` public and `nb_secret` secret variables.
    /// The coefficient table starts with `0, 1, 2, -1`.
    pub fn new(nb_public: usize, nb_secret: usize) -> SparseCS<F> {
        let mut cs = SparseCS {
            constraints: vec![],
            coefficients: vec![],
            nb_public,
            nb_secret,
            nb_internal: 0,
            commitment_info: CommitmentInfo::default(),
            coeff_ids: BTreeMap::new(),
        };
        let one = F::one();
        for c in [F::zero(), one, one.add(&one), one.neg()] {
            cs.coeff_id(c);
        }
        cs
    }

    /// Return the `i`-th public variable.
    pub fn public_variable(&self, i: usize) -> VarIndex {
        assert!(i < self.nb_public, "public variable index out of bound");
        i
    }

    /// Return the `i`-th secret variable.
    pub fn secret_variable(&self, i: usize) -> VarIndex {
        assert!(i < self.nb_secret, "secret variable index out of bound");
        self.nb_public + i
    }

    /// Allocate a new internal variable.
    pub fn new_internal_variable(&mut self) -> VarIndex {
        self.nb_internal += 1;
        self.nb_variables() - 1
    }

    /// Return the id of `value` in the coefficient table, inserting it if needed.
    pub fn coeff_id(&mut self, value: F) -> CoeffIndex {
        let next = self.coefficients.len();
        let id = *self.coeff_ids.entry(value.to_bytes()).or_insert(next);
        if id == next {
            self.coefficients.push(value);
        }
        id
    }

    /// Add a gate.
    pub fn add_constraint(&mut self, gate: SparseGate) {
        let nb_variables = self.nb_variables();
        for term in [gate.l, gate.r, gate.m[0], gate.m[1], gate.o] {
            assert!(term.wire < nb_variables, "wire index out of bound");
            assert!(
                term.coeff < self.coefficients.len(),
                "coefficient index out of bound"
            );
        }
        assert!(
            gate.k < self.coefficients.len(),
            "coefficient index out of bound"
        );
        self.constraints.push(gate);
    }

    /// Add a Mul gate `left * right - out = 0`.
    pub fn add_mul_gate(&mut self, left_var: VarIndex, right_var: VarIndex, out_var: VarIndex) {
        self.add_constraint(SparseGate {
            l: Term::new(left_var, COEFF_ID_ZERO),
            r: Term::new(right_var, COEFF_ID_ZERO),
            m: [
                Term::new(left_var, COEFF_ID_ONE),
                Term::new(right_var, COEFF_ID_ONE),
            ],
            o: Term::new(out_var, COEFF_ID_MINUS_ONE),
            k: COEFF_ID_ZERO,
        });
    }

    /// Add an Add gate `left + right - out = 0`.
    pub fn add_add_gate(&mut self, left_var: VarIndex, right_var: VarIndex, out_var: VarIndex) {
        self.add_constraint(SparseGate {
            l: Term::new(left_var, COEFF_ID_ONE),
            r: Term::new(right_var, COEFF_ID_ONE),
            m: [
                Term::new(left_var, COEFF_ID_ZERO),
                Term::new(right_var, COEFF_ID_ZERO),
            ],
            o: Term::new(out_var, COEFF_ID_MINUS_ONE),
            k: COEFF_ID_ZERO,
        });
    }

    /// Mark rows as bound by the commitment constraint.
    pub fn set_committed(
        &mut self,
        committed: Vec<usize>,
        nb_private_committed: usize,
        commitment_index: VarIndex,
    ) {
        self.commitment_info = CommitmentInfo {
            committed,
            nb_private_committed,
            commitment_index,
        };
    }
}
