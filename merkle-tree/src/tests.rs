//! Tree construction and proof tests.

use assert_matches::assert_matches;
use proptest::prelude::*;

use crate::{
    hash::{leaf_hash, node_merge, Hash},
    InclusionProof, MerkleTree, MerkleTreeError, ProofStep, Side,
};

/// Deterministic distinct leaves for tests.
fn leaves(count: usize) -> Vec<Hash> {
    (0..count)
        .map(|i| leaf_hash(format!("leaf-{}", i).as_bytes()))
        .collect()
}

/// `ceil(log2(count))` for `count >= 1`.
fn expected_proof_len(count: usize) -> usize {
    if count <= 1 {
        0
    } else {
        count.next_power_of_two().trailing_zeros() as usize
    }
}

#[test]
fn empty_input_is_rejected() {
    assert_matches!(
        MerkleTree::from_leaves(Vec::new()),
        Err(MerkleTreeError::EmptyLeaves)
    );
}

#[test]
fn single_leaf_root_is_the_leaf() {
    let leaves = leaves(1);
    let tree = MerkleTree::from_leaves(leaves.clone()).expect("build");
    assert_eq!(tree.root(), leaves[0]);
    assert_eq!(tree.height(), 1);
    assert_eq!(tree.leaf_count(), 1);

    let proof = tree.prove(&leaves[0]).expect("single leaf is a member");
    assert!(proof.is_empty());
    assert_eq!(proof.compute_root(&leaves[0]), tree.root());
}

#[test]
fn two_leaf_root_matches_manual_merge() {
    let leaves = leaves(2);
    let tree = MerkleTree::from_leaves(leaves.clone()).expect("build");
    assert_eq!(tree.root(), node_merge(&leaves[0], &leaves[1]));
    assert_eq!(tree.height(), 2);
}

#[test]
fn four_leaf_root_matches_manual_merge() {
    let leaves = leaves(4);
    let tree = MerkleTree::from_leaves(leaves.clone()).expect("build");
    let left = node_merge(&leaves[0], &leaves[1]);
    let right = node_merge(&leaves[2], &leaves[3]);
    assert_eq!(tree.root(), node_merge(&left, &right));
    assert_eq!(tree.height(), 3);
}

#[test]
fn odd_level_duplicates_last_node() {
    // 3 leaves: level 1 = [merge(l0, l1), merge(l2, l2)]
    let leaves = leaves(3);
    let tree = MerkleTree::from_leaves(leaves.clone()).expect("build");
    let left = node_merge(&leaves[0], &leaves[1]);
    let right = node_merge(&leaves[2], &leaves[2]);
    assert_eq!(tree.root(), node_merge(&left, &right));
    assert_eq!(tree.height(), 3);
}

#[test]
fn middle_leaf_proof_has_expected_steps() {
    let leaves = leaves(3);
    let tree = MerkleTree::from_leaves(leaves.clone()).expect("build");
    let proof = tree.prove_position(1).expect("proof");
    assert_eq!(proof.len(), 2);
    assert_eq!(
        proof.steps[0],
        ProofStep {
            sibling: leaves[0],
            side: Side::Right,
        }
    );
    assert_eq!(
        proof.steps[1],
        ProofStep {
            sibling: node_merge(&leaves[2], &leaves[2]),
            side: Side::Left,
        }
    );
    assert!(proof.verify(&leaves[1], &tree.root()));
}

#[test]
fn last_leaf_of_odd_level_is_its_own_sibling() {
    let leaves = leaves(3);
    let tree = MerkleTree::from_leaves(leaves.clone()).expect("build");
    let proof = tree.prove_position(2).expect("proof");
    assert_eq!(proof.len(), 2);
    // Position 2 is an unpaired left operand, duplicated as its own sibling.
    assert_eq!(
        proof.steps[0],
        ProofStep {
            sibling: leaves[2],
            side: Side::Left,
        }
    );
    assert_eq!(
        proof.steps[1],
        ProofStep {
            sibling: node_merge(&leaves[0], &leaves[1]),
            side: Side::Right,
        }
    );
    assert!(proof.verify(&leaves[2], &tree.root()));
}

#[test]
fn every_leaf_recombines_to_the_root() {
    for count in 1..=33 {
        let leaves = leaves(count);
        let tree = MerkleTree::from_leaves(leaves.clone()).expect("build");
        for (position, leaf) in leaves.iter().enumerate() {
            let proof = tree.prove_position(position).expect("proof");
            assert_eq!(
                proof.len(),
                expected_proof_len(count),
                "count={} position={}",
                count,
                position
            );
            assert!(
                proof.verify(leaf, &tree.root()),
                "count={} position={}",
                count,
                position
            );
        }
    }
}

#[test]
fn proof_does_not_verify_a_different_leaf() {
    let leaves = leaves(8);
    let tree = MerkleTree::from_leaves(leaves.clone()).expect("build");
    let proof = tree.prove_position(3).expect("proof");
    assert!(!proof.verify(&leaves[4], &tree.root()));
}

#[test]
fn tampered_sibling_fails_verification() {
    let leaves = leaves(8);
    let tree = MerkleTree::from_leaves(leaves.clone()).expect("build");
    let mut proof = tree.prove_position(3).expect("proof");
    proof.steps[1].sibling[0] ^= 0x01;
    assert!(!proof.verify(&leaves[3], &tree.root()));
}

#[test]
fn flipped_side_fails_verification() {
    let leaves = leaves(8);
    let tree = MerkleTree::from_leaves(leaves.clone()).expect("build");
    let mut proof = tree.prove_position(3).expect("proof");
    proof.steps[0].side = match proof.steps[0].side {
        Side::Left => Side::Right,
        Side::Right => Side::Left,
    };
    assert!(!proof.verify(&leaves[3], &tree.root()));
}

#[test]
fn absent_leaf_yields_none() {
    let leaves = leaves(5);
    let tree = MerkleTree::from_leaves(leaves).expect("build");
    assert_eq!(tree.prove(&leaf_hash(b"not a member")), None);
    assert_eq!(tree.position_of(&leaf_hash(b"not a member")), None);
}

#[test]
fn position_of_returns_first_occurrence() {
    let mut leaves = leaves(4);
    leaves.push(leaves[1]);
    let tree = MerkleTree::from_leaves(leaves.clone()).expect("build");
    assert_eq!(tree.position_of(&leaves[1]), Some(1));
}

#[test]
fn prove_position_rejects_out_of_range() {
    let tree = MerkleTree::from_leaves(leaves(3)).expect("build");
    assert_matches!(
        tree.prove_position(3),
        Err(MerkleTreeError::PositionOutOfRange {
            position: 3,
            leaf_count: 3,
        })
    );
}

#[test]
fn rebuilding_yields_identical_roots_and_proof_bytes() {
    let leaves = leaves(13);
    let first = MerkleTree::from_leaves(leaves.clone()).expect("build");
    let second = MerkleTree::from_leaves(leaves.clone()).expect("build");
    assert_eq!(first.root(), second.root());
    for position in 0..leaves.len() {
        let a = first.prove_position(position).expect("proof");
        let b = second.prove_position(position).expect("proof");
        assert_eq!(
            a.encode_to_vec().expect("encode"),
            b.encode_to_vec().expect("encode")
        );
    }
}

#[test]
fn proof_roundtrips_through_bytes() {
    let leaves = leaves(7);
    let tree = MerkleTree::from_leaves(leaves.clone()).expect("build");
    let proof = tree.prove_position(6).expect("proof");
    let bytes = proof.encode_to_vec().expect("encode");
    let decoded = InclusionProof::decode_from_slice(&bytes).expect("decode");
    assert!(decoded.verify(&leaves[6], &tree.root()));
}

proptest! {
    #[test]
    fn proofs_recombine_for_arbitrary_sizes(
        count in 1usize..80,
        pick in any::<prop::sample::Index>(),
    ) {
        let leaves = leaves(count);
        let tree = MerkleTree::from_leaves(leaves.clone()).expect("build");
        let position = pick.index(count);
        let proof = tree.prove_position(position).expect("proof");
        prop_assert_eq!(proof.len(), expected_proof_len(count));
        prop_assert!(proof.verify(&leaves[position], &tree.root()));
    }

    #[test]
    fn height_matches_ceil_log2(count in 1usize..200) {
        let tree = MerkleTree::from_leaves(leaves(count)).expect("build");
        prop_assert_eq!(tree.height(), expected_proof_len(count) + 1);
    }
}
