use crate::errors::{PlonkError, Result};
use crate::plonk::{
    constraint_system::{CommitmentInfo, ConstraintSystem},
    coset::{compute_lagrange_coset_polys, LagrangeCosetPolys},
    domain::evaluation_domains,
    helpers::try_par_map,
    permutation::{build_wire_table, compute_permutation, compute_permutation_polys},
    selectors::{compute_selector_evals, compute_selector_polys, Selector},
};
use crate::poly_commit::{field_polynomial::FpPolynomial, pcs::PolyComScheme};
use ark_poly::{EvaluationDomain, Radix2EvaluationDomain};
use ark_std::{end_timer, start_timer, sync::Arc};
use kestrel_algebra::{prelude::*, traits::Domain};

/// Plonk verifier parameters.
///
/// The reference string is borrowed, not owned, and is never serialized: a
/// deserialized key must be bound again with [`PlonkVerifierParams::bind`].
#[derive(Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct PlonkVerifierParams<'srs, PCS: PolyComScheme> {
    /// The size of the small domain.
    pub size: usize,
    /// The inverse of `size` in the field.
    pub size_inv: PCS::Field,
    /// The generator of the small domain.
    pub generator: PCS::Field,
    /// The number of public variables.
    pub nb_public_variables: usize,
    /// The coset shift.
    pub coset_shift: PCS::Field,
    /// The commitments of the selectors.
    pub cm_q_vec: Vec<PCS::Commitment>,
    /// The commitments of perm1, perm2, perm3.
    pub cm_s_vec: Vec<PCS::Commitment>,
    /// The rows bound by the commitment constraint.
    pub commitment_info: CommitmentInfo,
    #[serde(skip)]
    srs: Option<&'srs PCS>,
}

/// Define the PLONK verifier params by given `PolyComScheme`.
pub type PlonkVK<'srs, PCS> = PlonkVerifierParams<'srs, PCS>;

impl<'srs, PCS: PolyComScheme> PlonkVerifierParams<'srs, PCS> {
    /// Return the expected length of the public witness.
    pub fn nb_public_witness(&self) -> usize {
        self.nb_public_variables
    }

    /// Return the commitment of a selector.
    pub fn commitment(&self, selector: Selector) -> Option<&PCS::Commitment> {
        self.cm_q_vec.get(selector.index())
    }

    /// Return true if a reference string is attached.
    pub fn is_bound(&self) -> bool {
        self.srs.is_some()
    }

    /// Return the attached reference string.
    pub fn srs(&self) -> Option<&'srs PCS> {
        self.srs
    }

    /// Attach a reference string with at least `size` basis elements.
    pub fn bind(&mut self, srs: &'srs PCS) -> Result<()> {
        if srs.basis_len() < self.size {
            return Err(PlonkError::ReferenceStringTooSmall);
        }
        self.srs = Some(srs);
        Ok(())
    }
}

/// Plonk prover parameters.
#[derive(Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct PlonkProverParams<'srs, PCS: PolyComScheme> {
    /// The Plonk verifier parameters, shared with the caller of [`setup`].
    pub verifier_params: Arc<PlonkVerifierParams<'srs, PCS>>,
    /// The polynomials of the selectors.
    pub q_polys: Vec<FpPolynomial<PCS::Field>>,
    /// `Qk` in Lagrange basis, to be completed with the public inputs by the prover.
    pub lagrange_q_k: Vec<PCS::Field>,
    /// The polynomials of perm1, perm2, perm3.
    pub s_polys: Vec<FpPolynomial<PCS::Field>>,
    /// The copy-constraint permutation over the wire slots.
    pub permutation: Vec<usize>,
    /// The evaluation domain of the circuit.
    #[serde(with = "crate::plonk::helpers::ark_serde")]
    pub domain: Radix2EvaluationDomain<<PCS::Field as Domain>::Field>,
    /// The evaluation domain for computing the quotient polynomial.
    #[serde(with = "crate::plonk::helpers::ark_serde")]
    pub domain_m: Radix2EvaluationDomain<<PCS::Field as Domain>::Field>,
    #[serde(skip)]
    lagrange_coset: Option<LagrangeCosetPolys<PCS::Field>>,
}

/// Prover parameters over a particular polynomial commitment scheme.
pub type PlonkPK<'srs, PCS> = PlonkProverParams<'srs, PCS>;

impl<'srs, PCS: PolyComScheme> PlonkProverParams<'srs, PCS> {
    /// Return the shared verifier parameters.
    pub fn verifying_key(&self) -> Arc<PlonkVerifierParams<'srs, PCS>> {
        Arc::clone(&self.verifier_params)
    }

    /// Return a reference of verifier parameters.
    pub fn get_verifier_params_ref(&self) -> &PlonkVerifierParams<'srs, PCS> {
        &self.verifier_params
    }

    /// Return the polynomial of a selector.
    pub fn selector(&self, selector: Selector) -> Option<&FpPolynomial<PCS::Field>> {
        self.q_polys.get(selector.index())
    }

    /// Return the coset evaluations, if they have been computed.
    pub fn lagrange_coset(&self) -> Option<&LagrangeCosetPolys<PCS::Field>> {
        self.lagrange_coset.as_ref()
    }

    /// Attach a reference string to the verifier parameters.
    ///
    /// Binding again to the reference string already attached is a no-op. Otherwise the
    /// verifier parameters must not be shared, which is the case right after deserialization.
    pub fn bind(&mut self, srs: &'srs PCS) -> Result<()> {
        if let Some(bound) = self.verifier_params.srs {
            if core::ptr::eq(bound, srs) {
                return Ok(());
            }
        }
        Arc::get_mut(&mut self.verifier_params)
            .ok_or(PlonkError::VerifyingKeyShared)?
            .bind(srs)
    }

    /// Recompute the coset evaluations of the selector and permutation polynomials.
    pub fn compute_lagrange_coset_polys(&mut self) {
        self.lagrange_coset = Some(compute_lagrange_coset_polys(
            &self.domain_m,
            &self.q_polys,
            &self.s_polys,
            &self.verifier_params.coset_shift,
        ));
    }
}

/// Run the Plonk setup.
///
/// Returns the prover parameters and the verifier parameters they share. Fails without
/// returning any key if `srs` is too small or if a commitment fails.
pub fn setup<'srs, PCS: PolyComScheme, CS: ConstraintSystem<Field = PCS::Field>>(
    cs: &CS,
    srs: &'srs PCS,
) -> Result<(PlonkPK<'srs, PCS>, Arc<PlonkVK<'srs, PCS>>)> {
    let setup_time = start_timer!(|| "PLONK setup");

    let domain_time = start_timer!(|| "Evaluation domains");
    let (domain, domain_m) = evaluation_domains::<PCS::Field>(cs.size())?;
    end_timer!(domain_time);

    let n = domain.size();
    let coset_shift = PCS::Field::multiplicative_generator();
    let mut verifier_params = PlonkVerifierParams {
        size: n,
        size_inv: PCS::Field::from_field(domain.size_inv),
        generator: PCS::Field::from_field(domain.group_gen),
        nb_public_variables: cs.nb_public_variables(),
        coset_shift,
        cm_q_vec: vec![],
        cm_s_vec: vec![],
        commitment_info: cs.commitment_info().clone(),
        srs: None,
    };
    verifier_params.bind(srs)?;

    let selectors_time = start_timer!(|| "Selector polynomials");
    let selector_evals = compute_selector_evals(cs, n)?;
    let q_polys = compute_selector_polys(&domain, &selector_evals);
    end_timer!(selectors_time);

    let permutation_time = start_timer!(|| "Permutation");
    let permutation = compute_permutation(&build_wire_table(cs, n), cs.nb_variables());
    end_timer!(permutation_time);

    let s_polys_time = start_timer!(|| "Permutation polynomials");
    let s_polys = compute_permutation_polys(&domain, &permutation, &coset_shift);
    end_timer!(s_polys_time);

    let coset_time = start_timer!(|| "Coset evaluations");
    let lagrange_coset = compute_lagrange_coset_polys(&domain_m, &q_polys, &s_polys, &coset_shift);
    end_timer!(coset_time);

    let commit_time = start_timer!(|| "Commitments");
    let commit = |p: &FpPolynomial<PCS::Field>| srs.commit(p).map_err(PlonkError::from);
    verifier_params.cm_q_vec = try_par_map(&q_polys, commit)?;
    verifier_params.cm_s_vec = try_par_map(&s_polys, commit)?;
    end_timer!(commit_time);

    let verifier_params = Arc::new(verifier_params);
    let prover_params = PlonkProverParams {
        verifier_params: Arc::clone(&verifier_params),
        q_polys,
        lagrange_q_k: selector_evals.lagrange_q_k,
        s_polys,
        permutation,
        domain,
        domain_m,
        lagrange_coset: Some(lagrange_coset),
    };

    end_timer!(setup_time);
    Ok((prover_params, verifier_params))
}
