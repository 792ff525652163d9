use crate::errors::{PlonkError, Result};
use crate::plonk::{constraint_system::ConstraintSystem, helpers::par_map};
use crate::poly_commit::field_polynomial::FpPolynomial;
use ark_poly::Radix2EvaluationDomain;
use kestrel_algebra::{prelude::*, traits::Domain};

/// The number of selectors.
pub const NB_SELECTORS: usize = 6;

/// The selectors of a gate, in the order used by the polynomial and commitment vectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Selector {
    /// Left wire coefficient.
    Ql,
    /// Right wire coefficient.
    Qr,
    /// Multiplication coefficient.
    Qm,
    /// Output wire coefficient.
    Qo,
    /// Constant.
    Qk,
    /// Marks the rows bound by the commitment constraint.
    QcPrime,
}

impl Selector {
    /// All selectors, in order.
    pub const ALL: [Selector; NB_SELECTORS] = [
        Selector::Ql,
        Selector::Qr,
        Selector::Qm,
        Selector::Qo,
        Selector::Qk,
        Selector::QcPrime,
    ];

    /// Return the position of the selector.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// The selectors in Lagrange basis over the small domain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorEvals<F> {
    /// One vector per selector, indexed by [`Selector::index`].
    pub q_evals: Vec<Vec<F>>,
    /// The copy of `Qk` the prover completes with the public inputs.
    pub lagrange_q_k: Vec<F>,
}

/// Lay the gates of `cs` out as selector vectors of length `domain_size`.
///
/// Row `i < p` is the placeholder of the `i`-th public input and encodes
/// `-x_i + qk_i = 0`, the prover later writing `x_i` into `qk_i`. Gate `j` sits
/// on row `p + j`. Rows after the last gate stay zero.
pub fn compute_selector_evals<CS: ConstraintSystem>(
    cs: &CS,
    domain_size: usize,
) -> Result<SelectorEvals<CS::Field>> {
    let zero = CS::Field::zero();
    let mut q_evals = vec![vec![zero; domain_size]; NB_SELECTORS];
    let nb_public = cs.nb_public_variables();

    for row in 0..nb_public {
        q_evals[Selector::Ql.index()][row] = CS::Field::one().neg();
    }

    for (j, gate) in cs.constraints().iter().enumerate() {
        let row = nb_public + j;
        q_evals[Selector::Ql.index()][row] = cs.coefficient(gate.l.coeff)?;
        q_evals[Selector::Qr.index()][row] = cs.coefficient(gate.r.coeff)?;
        q_evals[Selector::Qm.index()][row] =
            cs.coefficient(gate.m[0].coeff)?.mul(&cs.coefficient(gate.m[1].coeff)?);
        q_evals[Selector::Qo.index()][row] = cs.coefficient(gate.o.coeff)?;
        q_evals[Selector::Qk.index()][row] = cs.coefficient(gate.k)?;
    }

    for row in cs.commitment_info().committed.iter() {
        let slot = q_evals[Selector::QcPrime.index()]
            .get_mut(*row)
            .ok_or(PlonkError::CommittedRowOutOfRange(*row))?;
        *slot = CS::Field::one();
    }

    let lagrange_q_k = q_evals[Selector::Qk.index()].clone();
    Ok(SelectorEvals {
        q_evals,
        lagrange_q_k,
    })
}

/// Interpolate every selector into coefficient form.
pub fn compute_selector_polys<F: Domain>(
    domain: &Radix2EvaluationDomain<F::Field>,
    evals: &SelectorEvals<F>,
) -> Vec<FpPolynomial<F>> {
    par_map(&evals.q_evals, |q| FpPolynomial::ifft_with_domain(domain, q))
}

#[cfg(test)]
mod test {
    use crate::errors::PlonkError;
    use crate::plonk::constraint_system::SparseCS;
    use crate::plonk::domain::evaluation_domains;
    use crate::plonk::selectors::{compute_selector_evals, compute_selector_polys, Selector};
    use kestrel_algebra::{bls12_381::BLSScalar, prelude::*};

    type F = BLSScalar;

    fn sample_cs() -> SparseCS<F> {
        // x * y = v2, v2 + x = v3, v3 * v3 = v4
        let mut cs = SparseCS::<F>::new(1, 1);
        let x = cs.public_variable(0);
        let y = cs.secret_variable(0);
        let v2 = cs.new_internal_variable();
        let v3 = cs.new_internal_variable();
        let v4 = cs.new_internal_variable();
        cs.add_mul_gate(x, y, v2);
        cs.add_add_gate(v2, x, v3);
        cs.add_mul_gate(v3, v3, v4);
        cs
    }

    #[test]
    fn test_selector_layout() {
        let cs = sample_cs();
        let evals = compute_selector_evals(&cs, 4).unwrap();
        let zero = F::zero();
        let one = F::one();
        let minus_one = one.neg();

        let q = |s: Selector| evals.q_evals[s.index()].clone();
        assert_eq!(q(Selector::Ql), vec![minus_one, zero, one, zero]);
        assert_eq!(q(Selector::Qr), vec![zero, zero, one, zero]);
        assert_eq!(q(Selector::Qm), vec![zero, one, zero, one]);
        assert_eq!(q(Selector::Qo), vec![zero, minus_one, minus_one, minus_one]);
        assert_eq!(q(Selector::Qk), vec![zero; 4]);
        assert_eq!(q(Selector::QcPrime), vec![zero; 4]);
        assert_eq!(evals.lagrange_q_k, q(Selector::Qk));
    }

    #[test]
    fn test_committed_rows() {
        let mut cs = sample_cs();
        cs.set_committed(vec![1, 3], 1, 1);
        let evals = compute_selector_evals(&cs, 4).unwrap();
        let zero = F::zero();
        let one = F::one();
        assert_eq!(
            evals.q_evals[Selector::QcPrime.index()],
            vec![zero, one, zero, one]
        );

        cs.set_committed(vec![4], 1, 1);
        assert_eq!(
            compute_selector_evals(&cs, 4).unwrap_err(),
            PlonkError::CommittedRowOutOfRange(4)
        );
    }

    #[test]
    fn test_constant_and_scaled_coefficients() {
        let mut cs = SparseCS::<F>::new(0, 2);
        let three = cs.coeff_id(F::from(3u32));
        let seven = cs.coeff_id(F::from(7u32));
        let (a, b) = (cs.secret_variable(0), cs.secret_variable(1));
        let c = cs.new_internal_variable();
        let mut gate = crate::plonk::constraint_system::SparseGate::default();
        gate.l.wire = a;
        gate.r.wire = b;
        gate.o.wire = c;
        gate.m[0].coeff = three;
        gate.m[1].coeff = seven;
        gate.k = seven;
        cs.add_constraint(gate);

        let evals = compute_selector_evals(&cs, 2).unwrap();
        assert_eq!(evals.q_evals[Selector::Qm.index()][0], F::from(21u32));
        assert_eq!(evals.q_evals[Selector::Qk.index()][0], F::from(7u32));
        assert_eq!(evals.lagrange_q_k[0], F::from(7u32));
        assert_eq!(evals.q_evals[Selector::Ql.index()][0], F::zero());
    }

    #[test]
    fn test_selector_polys_round_trip() {
        let cs = sample_cs();
        let (domain, _) = evaluation_domains::<F>(4).unwrap();
        let evals = compute_selector_evals(&cs, 4).unwrap();
        let polys = compute_selector_polys(&domain, &evals);
        assert_eq!(polys.len(), 6);
        for (poly, q) in polys.iter().zip(evals.q_evals.iter()) {
            assert_eq!(&poly.fft_with_domain(&domain), q);
        }
    }
}
