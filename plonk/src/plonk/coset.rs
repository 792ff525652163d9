use crate::plonk::helpers::par_map;
use crate::poly_commit::field_polynomial::FpPolynomial;
use ark_poly::Radix2EvaluationDomain;
use kestrel_algebra::traits::Domain;

/// Evaluations of the selector and permutation polynomials on the coset of the big domain.
/// These are derived data: they are neither persisted nor committed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LagrangeCosetPolys<F> {
    /// The selectors, in [`Selector`](crate::plonk::selectors::Selector) order.
    pub q_coset_evals: Vec<Vec<F>>,
    /// The permutation polynomials.
    pub s_coset_evals: Vec<Vec<F>>,
}

/// Evaluate every polynomial on `shift * domain_m`.
pub fn compute_lagrange_coset_polys<F: Domain>(
    domain_m: &Radix2EvaluationDomain<F::Field>,
    q_polys: &[FpPolynomial<F>],
    s_polys: &[FpPolynomial<F>],
    shift: &F,
) -> LagrangeCosetPolys<F> {
    let coset_fft = |p: &FpPolynomial<F>| p.coset_fft_with_domain(domain_m, shift);
    LagrangeCosetPolys {
        q_coset_evals: par_map(q_polys, coset_fft),
        s_coset_evals: par_map(s_polys, coset_fft),
    }
}

#[cfg(test)]
mod test {
    use crate::plonk::coset::compute_lagrange_coset_polys;
    use crate::plonk::domain::evaluation_domains;
    use crate::poly_commit::field_polynomial::FpPolynomial;
    use ark_poly::EvaluationDomain;
    use kestrel_algebra::{bls12_381::BLSScalar, prelude::*};

    type F = BLSScalar;

    #[test]
    fn test_coset_evals() {
        let mut prng = test_rng();
        let (domain, domain_m) = evaluation_domains::<F>(4).unwrap();
        let shift = F::multiplicative_generator();
        let polys = (0..3)
            .map(|_| {
                let evals = (0..4).map(|_| F::random(&mut prng)).collect_vec();
                FpPolynomial::ifft_with_domain(&domain, &evals)
            })
            .collect_vec();

        let coset = compute_lagrange_coset_polys(&domain_m, &polys[..2], &polys[2..], &shift);
        assert_eq!(coset.q_coset_evals.len(), 2);
        assert_eq!(coset.s_coset_evals.len(), 1);

        let points = domain_m
            .elements()
            .map(|x| shift.mul(&F::from_field(x)))
            .collect_vec();
        for (poly, evals) in polys
            .iter()
            .zip(coset.q_coset_evals.iter().chain(coset.s_coset_evals.iter()))
        {
            assert_eq!(evals.len(), 32);
            for (point, eval) in points.iter().zip(evals.iter()) {
                assert_eq!(poly.eval(point), *eval);
            }
        }

        // Recomputing gives the same evaluations.
        let again = compute_lagrange_coset_polys(&domain_m, &polys[..2], &polys[2..], &shift);
        assert_eq!(again, coset);
    }
}
