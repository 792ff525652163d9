use crate::errors::{PlonkError, Result};
use crate::poly_commit::field_polynomial::FpPolynomial;
use ark_poly::Radix2EvaluationDomain;
use kestrel_algebra::traits::Domain;

/// Return the number of rows of a circuit with `nb_constraints` gates and
/// `nb_public` public inputs, each public input taking one placeholder row.
pub fn nb_rows(nb_constraints: usize, nb_public: usize) -> usize {
    nb_constraints + nb_public
}

/// Return the cardinality of the domain the circuit is interpolated on.
pub fn small_domain_size(nb_rows: usize) -> usize {
    nb_rows.next_power_of_two()
}

/// Return the cardinality of the domain the quotient polynomial is computed on.
///
/// The quotient has degree about `3(n + 1) + 2`, so it needs at least `3(n + 2)` points.
/// Below 6 rows, `4n` does not leave enough room and `8n` is used instead.
pub fn big_domain_size(nb_rows: usize) -> usize {
    if nb_rows < 6 {
        (8 * nb_rows).next_power_of_two()
    } else {
        (4 * nb_rows).next_power_of_two()
    }
}

/// Build the small and the big evaluation domains for a circuit of `nb_rows` rows.
pub fn evaluation_domains<F: Domain>(
    nb_rows: usize,
) -> Result<(
    Radix2EvaluationDomain<F::Field>,
    Radix2EvaluationDomain<F::Field>,
)> {
    let n = small_domain_size(nb_rows);
    let m = big_domain_size(nb_rows);
    let domain = FpPolynomial::<F>::evaluation_domain(n).ok_or(PlonkError::GroupNotFound(n))?;
    let domain_m = FpPolynomial::<F>::evaluation_domain(m).ok_or(PlonkError::GroupNotFound(m))?;
    Ok((domain, domain_m))
}

#[cfg(test)]
mod test {
    use crate::errors::PlonkError;
    use crate::plonk::domain::{big_domain_size, evaluation_domains, nb_rows, small_domain_size};
    use ark_poly::EvaluationDomain;
    use kestrel_algebra::bls12_381::BLSScalar;

    #[test]
    fn test_domain_sizes() {
        let n = nb_rows(3, 1);
        assert_eq!(n, 4);
        assert_eq!(small_domain_size(n), 4);
        assert_eq!(big_domain_size(n), 32);

        // 5 rows: 8n = 40 rounds up to 64.
        assert_eq!(small_domain_size(5), 8);
        assert_eq!(big_domain_size(5), 64);

        // From 6 rows on, 4n is enough.
        assert_eq!(small_domain_size(6), 8);
        assert_eq!(big_domain_size(6), 32);
        assert_eq!(small_domain_size(100), 128);
        assert_eq!(big_domain_size(100), 512);
        assert_eq!(small_domain_size(128), 128);
        assert_eq!(big_domain_size(128), 512);
    }

    #[test]
    fn test_evaluation_domains() {
        let (domain, domain_m) = evaluation_domains::<BLSScalar>(4).unwrap();
        assert_eq!(domain.size(), 4);
        assert_eq!(domain_m.size(), 32);

        // 2^31 rows need a big domain of 2^33 points, beyond the two-adicity of the field.
        let err = evaluation_domains::<BLSScalar>(1 << 31).unwrap_err();
        assert_eq!(err, PlonkError::GroupNotFound(1 << 33));
    }
}
