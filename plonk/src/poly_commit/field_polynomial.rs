use ark_poly::{EvaluationDomain, Radix2EvaluationDomain};
use kestrel_algebra::{prelude::*, traits::Domain};

/// Field polynomial.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FpPolynomial<F> {
    /// Coefficients of the polynomial, low-order coefficient first.
    pub coefs: Vec<F>,
}

impl<F: Scalar> FpPolynomial<F> {
    /// Return the polynomial coefs reference.
    pub fn get_coefs_ref(&self) -> &[F] {
        self.coefs.as_slice()
    }

    /// Return the constant zero polynomial
    /// # Example
    /// ```
    /// use kestrel_plonk::poly_commit::field_polynomial::FpPolynomial;
    /// use kestrel_algebra::bls12_381::BLSScalar;
    /// use kestrel_algebra::{Zero, One};
    /// let poly = FpPolynomial::<BLSScalar>::zero();
    /// let zero = BLSScalar::zero();
    /// assert_eq!(poly.degree(), 0);
    /// assert_eq!(poly.eval(&zero), zero);
    /// assert_eq!(poly.eval(&BLSScalar::one()), zero);
    /// ```
    pub fn zero() -> Self {
        Self::from_coefs(vec![F::zero()])
    }

    /// Return the constant one polynomial
    pub fn one() -> Self {
        Self::from_coefs(vec![F::one()])
    }

    /// Build a polynomial from the coefficient vector, low-order coefficient first.
    /// High-order zero coefficient are trimmed.
    /// # Example
    /// ```
    /// use kestrel_plonk::poly_commit::field_polynomial::FpPolynomial;
    /// use kestrel_algebra::bls12_381::BLSScalar;
    /// use kestrel_algebra::{Zero, One, ops::*};
    /// let zero = BLSScalar::zero();
    /// let one = BLSScalar::one();
    /// let two = one.add(&one);
    /// let five = two.add(&two).add(&one);
    /// let coefs = vec![one, zero, one];
    /// let poly = FpPolynomial::from_coefs(coefs);
    /// assert_eq!(poly.degree(), 2);
    /// assert_eq!(poly.eval(&zero), one);
    /// assert_eq!(poly.eval(&one), two);
    /// assert_eq!(poly.eval(&two), five);
    /// let coefs2 = vec![one, zero, one, zero, zero, zero];
    /// let poly2 = FpPolynomial::from_coefs(coefs2);
    /// assert_eq!(poly2.degree(), 2);
    /// assert_eq!(poly, poly2);
    /// ```
    pub fn from_coefs(coefs: Vec<F>) -> Self {
        let mut p = FpPolynomial { coefs };
        if p.coefs.is_empty() {
            p.coefs.push(F::zero());
        }
        p.trim_coefs();
        p
    }

    /// Remove high degree zero-coefficients
    fn trim_coefs(&mut self) {
        while self.coefs.len() > 1 && self.coefs.last().map_or(false, |c| c.is_zero()) {
            self.coefs.pop();
        }
    }

    /// Return degree of the polynomial
    pub fn degree(&self) -> usize {
        self.coefs.len().saturating_sub(1)
    }

    /// Test if polynomial is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.coefs.iter().all(|c| c.is_zero())
    }

    /// Evaluate a polynomial on a point.
    pub fn eval(&self, point: &F) -> F {
        let mut result = F::zero();
        for coef in self.coefs.iter().rev() {
            result.mul_assign(point);
            result.add_assign(coef);
        }
        result
    }
}

impl<F: Domain> FpPolynomial<F> {
    /// Return the radix-2 evaluation domain holding at least `num_coefs` points,
    /// or `None` if the field has no subgroup that large.
    pub fn evaluation_domain(num_coefs: usize) -> Option<Radix2EvaluationDomain<F::Field>> {
        Radix2EvaluationDomain::<F::Field>::new(num_coefs)
    }

    /// Interpolate the evaluations `values` over `domain` into coefficient form.
    /// Missing evaluations are treated as zero.
    pub fn ifft_with_domain(domain: &Radix2EvaluationDomain<F::Field>, values: &[F]) -> Self {
        let values = values.iter().map(|x| x.get_field()).collect::<Vec<_>>();
        let coefs = domain.ifft(&values);
        Self::from_coefs(coefs.into_iter().map(F::from_field).collect())
    }

    /// Evaluate the polynomial on every point of `domain`.
    pub fn fft_with_domain(&self, domain: &Radix2EvaluationDomain<F::Field>) -> Vec<F> {
        let coefs = self.coefs.iter().map(|x| x.get_field()).collect::<Vec<_>>();
        domain.fft(&coefs).into_iter().map(F::from_field).collect()
    }

    /// Evaluate the polynomial on the coset `k * domain`.
    pub fn coset_fft_with_domain(&self, domain: &Radix2EvaluationDomain<F::Field>, k: &F) -> Vec<F> {
        let mut shift = F::one();
        let mut scaled = Vec::with_capacity(self.coefs.len());
        for coef in self.coefs.iter() {
            scaled.push(coef.mul(&shift));
            shift.mul_assign(k);
        }
        FpPolynomial { coefs: scaled }.fft_with_domain(domain)
    }
}
