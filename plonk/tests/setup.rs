use ark_poly::EvaluationDomain;
use kestrel_algebra::{bls12_381::BLSScalar, prelude::*};
use kestrel_plonk::{
    errors::PlonkError,
    plonk::{
        constraint_system::{ConstraintSystem, SparseCS},
        indexer::{setup, PlonkPK, PlonkVK},
        permutation::identity_evals,
        selectors::{compute_selector_evals, Selector},
    },
    poly_commit::{
        errors::PolyComSchemeError,
        field_polynomial::FpPolynomial,
        kzg_poly_com::{KZGCommitment, KZGCommitmentSchemeBLS},
        pcs::PolyComScheme,
    },
};

type F = BLSScalar;

/// x * y = v2, v2 + x = v3, v3 * v3 = v4, with `x` public.
fn sample_cs() -> SparseCS<F> {
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

/// Return the cycles of `perm`, each sorted.
fn cycles(perm: &[usize]) -> Vec<Vec<usize>> {
    let mut visited = vec![false; perm.len()];
    let mut res = vec![];
    for start in 0..perm.len() {
        if visited[start] {
            continue;
        }
        let mut cycle = vec![];
        let mut i = start;
        while !visited[i] {
            visited[i] = true;
            cycle.push(i);
            i = perm[i];
        }
        assert_eq!(i, start, "the permutation is not a union of cycles");
        cycle.sort_unstable();
        res.push(cycle);
    }
    res
}

#[test]
fn test_end_to_end_setup() {
    let mut prng = test_rng();
    let pcs = KZGCommitmentSchemeBLS::new(8, &mut prng);
    let cs = sample_cs();
    assert_eq!(cs.size(), 4);

    let (pk, vk) = setup(&cs, &pcs).unwrap();

    assert_eq!(pk.domain.size(), 4);
    assert_eq!(pk.domain_m.size(), 32);
    assert_eq!(vk.size, 4);
    assert_eq!(vk.nb_public_witness(), 1);
    assert_eq!(vk.generator, F::from_field(pk.domain.group_gen));
    assert_eq!(vk.cm_q_vec.len() + vk.cm_s_vec.len(), 9);
    assert_eq!(pk.permutation.len(), 12);

    // one cycle per variable, holding exactly its occurrences
    let lro = [0, 0, 2, 3, 0, 1, 0, 3, 0, 2, 3, 4];
    let cycles = cycles(&pk.permutation);
    assert_eq!(cycles.len(), cs.nb_variables());
    for cycle in cycles.iter() {
        let var = lro[cycle[0]];
        assert!(cycle.iter().all(|slot| lro[*slot] == var));
        assert_eq!(cycle.len(), lro.iter().filter(|v| **v == var).count());
    }

    // the selector polynomials interpolate their Lagrange vectors
    let selector_evals = compute_selector_evals(&cs, 4).unwrap();
    for selector in Selector::ALL {
        let poly = pk.selector(selector).unwrap();
        assert_eq!(
            poly.fft_with_domain(&pk.domain),
            selector_evals.q_evals[selector.index()]
        );
        assert_eq!(
            vk.commitment(selector).unwrap(),
            &pcs.commit(poly).unwrap()
        );
    }
    assert_eq!(pk.lagrange_q_k, selector_evals.q_evals[Selector::Qk.index()]);

    // the permutation polynomials encode the permuted identity
    let identity = identity_evals(&pk.domain, &vk.coset_shift);
    for (k, s_poly) in pk.s_polys.iter().enumerate() {
        for (i, point) in pk.domain.elements().enumerate() {
            assert_eq!(
                s_poly.eval(&F::from_field(point)),
                identity[pk.permutation[k * 4 + i]]
            );
        }
        assert_eq!(vk.cm_s_vec[k], pcs.commit(s_poly).unwrap());
    }
}

#[test]
fn test_setup_is_deterministic() {
    let mut prng = test_rng();
    let pcs = KZGCommitmentSchemeBLS::new(8, &mut prng);
    let cs = sample_cs();

    let (pk1, vk1) = setup(&cs, &pcs).unwrap();
    let (pk2, vk2) = setup(&cs, &pcs).unwrap();
    assert_eq!(
        bincode::serialize(&pk1).unwrap(),
        bincode::serialize(&pk2).unwrap()
    );
    assert_eq!(
        bincode::serialize(&*vk1).unwrap(),
        bincode::serialize(&*vk2).unwrap()
    );
}

#[test]
fn test_bind_reference_string_size() {
    let mut prng = test_rng();
    let pcs = KZGCommitmentSchemeBLS::new(8, &mut prng);

    // 5 rows, so a circuit of size 8
    let mut cs = sample_cs();
    let extra = cs.new_internal_variable();
    cs.add_add_gate(0, 1, extra);
    assert_eq!(cs.size(), 5);
    let (_, vk) = setup(&cs, &pcs).unwrap();
    assert_eq!(vk.size, 8);

    let bytes = bincode::serialize(&*vk).unwrap();
    let mut vk: PlonkVK<KZGCommitmentSchemeBLS> = bincode::deserialize(&bytes).unwrap();
    assert!(!vk.is_bound());

    let small = KZGCommitmentSchemeBLS::new(3, &mut prng);
    assert_eq!(small.basis_len(), 4);
    assert_eq!(vk.bind(&small), Err(PlonkError::ReferenceStringTooSmall));
    assert!(!vk.is_bound());

    let exact = KZGCommitmentSchemeBLS::new(7, &mut prng);
    assert_eq!(exact.basis_len(), 8);
    assert!(vk.bind(&exact).is_ok());
    assert!(vk.is_bound());
    assert!(vk.bind(&pcs).is_ok());
}

#[test]
fn test_persistence() {
    let mut prng = test_rng();
    let pcs = KZGCommitmentSchemeBLS::new(8, &mut prng);
    let mut cs = sample_cs();
    cs.set_committed(vec![1, 2], 1, 1);
    let (pk, vk) = setup(&cs, &pcs).unwrap();
    let lagrange_coset = pk.lagrange_coset().unwrap().clone();

    let bytes = bincode::serialize(&pk).unwrap();
    let mut pk2: PlonkPK<KZGCommitmentSchemeBLS> = bincode::deserialize(&bytes).unwrap();
    assert!(pk2.lagrange_coset().is_none());
    assert!(!pk2.get_verifier_params_ref().is_bound());
    assert_eq!(pk2.q_polys, pk.q_polys);
    assert_eq!(pk2.s_polys, pk.s_polys);
    assert_eq!(pk2.lagrange_q_k, pk.lagrange_q_k);
    assert_eq!(pk2.permutation, pk.permutation);
    assert_eq!(pk2.domain, pk.domain);
    assert_eq!(pk2.domain_m, pk.domain_m);
    assert_eq!(pk2.get_verifier_params_ref().cm_q_vec, vk.cm_q_vec);
    assert_eq!(pk2.get_verifier_params_ref().cm_s_vec, vk.cm_s_vec);
    assert_eq!(pk2.get_verifier_params_ref().commitment_info, vk.commitment_info);

    pk2.bind(&pcs).unwrap();
    pk2.compute_lagrange_coset_polys();
    assert_eq!(pk2.lagrange_coset(), Some(&lagrange_coset));
    // recomputing is idempotent
    pk2.compute_lagrange_coset_polys();
    assert_eq!(pk2.lagrange_coset(), Some(&lagrange_coset));

    let json = serde_json::to_string(&vk).unwrap();
    let vk2: PlonkVK<KZGCommitmentSchemeBLS> = serde_json::from_str(&json).unwrap();
    assert_eq!(vk2.size_inv, vk.size_inv);
    assert_eq!(vk2.generator, vk.generator);
    assert_eq!(vk2.coset_shift, vk.coset_shift);
    assert_eq!(vk2.cm_q_vec, vk.cm_q_vec);
    assert_eq!(vk2.commitment_info.committed, vec![1, 2]);
}

/// A commitment scheme that refuses every polynomial.
#[derive(Debug)]
struct FailingPCS;

impl PolyComScheme for FailingPCS {
    type Field = F;
    type Commitment = KZGCommitment<kestrel_algebra::bls12_381::BLSG1>;

    fn basis_len(&self) -> usize {
        usize::MAX
    }

    fn commit(
        &self,
        _polynomial: &FpPolynomial<F>,
    ) -> Result<Self::Commitment, PolyComSchemeError> {
        Err(PolyComSchemeError::DegreeError)
    }
}

#[test]
fn test_commitment_failure_aborts_setup() {
    let cs = sample_cs();
    let pcs = FailingPCS;
    let res = setup(&cs, &pcs);
    assert_eq!(
        res.map(|_| ()),
        Err(PlonkError::CommitmentFailure(PolyComSchemeError::DegreeError))
    );
}
