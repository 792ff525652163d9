//! Copy constraints.
//!
//! The wire slots of the circuit are flattened into `3n` positions: the left
//! wires of every row, then the right wires, then the output wires. The
//! permutation links the slots holding the same variable into one cycle, and
//! the permutation polynomials encode it over three disjoint cosets of the
//! small domain.
use crate::plonk::{
    constraint_system::{ConstraintSystem, VarIndex},
    helpers::par_map,
};
use crate::poly_commit::field_polynomial::FpPolynomial;
use ark_poly::{EvaluationDomain, Radix2EvaluationDomain};
use kestrel_algebra::{prelude::*, traits::Domain};

/// The number of wires in a single gate.
pub const N_WIRES_PER_GATE: usize = 3;

/// Return the variable held by every wire slot, for a domain of size `n`.
///
/// Placeholder row `i` holds public variable `i` on its left wire. Slots not
/// used by any gate hold variable 0.
pub fn build_wire_table<CS: ConstraintSystem>(cs: &CS, n: usize) -> Vec<VarIndex> {
    let mut lro = vec![0; N_WIRES_PER_GATE * n];
    let nb_public = cs.nb_public_variables();
    for (i, slot) in lro.iter_mut().take(nb_public).enumerate() {
        *slot = i;
    }
    for (j, gate) in cs.constraints().iter().enumerate() {
        let row = nb_public + j;
        lro[row] = gate.l.wire;
        lro[n + row] = gate.r.wire;
        lro[2 * n + row] = gate.o.wire;
    }
    lro
}

/// Compute the copy-constraint permutation of the wire table `lro`.
///
/// Slots are scanned left to right, so left wires row by row, then right wires,
/// then output wires. Each occurrence of a variable points to its previous
/// occurrence and the first occurrence points to the last one. Provers and
/// verifiers rely on this exact cycle layout.
pub fn compute_permutation(lro: &[VarIndex], nb_variables: usize) -> Vec<usize> {
    let nb_ids = lro
        .iter()
        .max()
        .map_or(nb_variables, |max| nb_variables.max(max + 1));

    // first pass: link backwards and remember the last occurrence of each variable
    let mut last_occurrence: Vec<Option<usize>> = vec![None; nb_ids];
    let mut links: Vec<Option<usize>> = vec![None; lro.len()];
    for (i, var) in lro.iter().enumerate() {
        links[i] = last_occurrence[*var];
        last_occurrence[*var] = Some(i);
    }

    // second pass: close each cycle from its first occurrence to its last one
    links
        .into_iter()
        .zip(lro.iter())
        .enumerate()
        .map(|(i, (link, var))| link.or(last_occurrence[*var]).unwrap_or(i))
        .collect()
}

/// Return the identity of every wire slot: `g^i` for the left wires, `u * g^i` for
/// the right wires and `u^2 * g^i` for the output wires, where `g` generates the
/// domain and `u` is the coset shift.
pub fn identity_evals<F: Domain>(domain: &Radix2EvaluationDomain<F::Field>, shift: &F) -> Vec<F> {
    let group = domain.elements().map(F::from_field).collect::<Vec<_>>();
    let shift_square = shift.square();
    let mut identity = Vec::with_capacity(N_WIRES_PER_GATE * group.len());
    identity.extend(group.iter().copied());
    identity.extend(group.iter().map(|g| shift.mul(g)));
    identity.extend(group.iter().map(|g| shift_square.mul(g)));
    identity
}

/// Compute the permutation polynomials `S1, S2, S3` in coefficient form, where
/// `S_k(g^i) = identity[permutation[(k - 1) * n + i]]`.
pub fn compute_permutation_polys<F: Domain>(
    domain: &Radix2EvaluationDomain<F::Field>,
    permutation: &[usize],
    shift: &F,
) -> Vec<FpPolynomial<F>> {
    let identity = identity_evals(domain, shift);
    let s_evals = permutation
        .chunks(domain.size())
        .map(|block| block.iter().map(|p| identity[*p]).collect::<Vec<_>>())
        .collect::<Vec<_>>();
    par_map(&s_evals, |s| FpPolynomial::ifft_with_domain(domain, s))
}
