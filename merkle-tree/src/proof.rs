//! Inclusion proof types and serialization.
//!
//! A proof is the ordered sibling path from one leaf to the root, leaf
//! level first. Each step carries the sibling hash and an explicit side
//! marker saying which operand the running hash takes when the pair is
//! recombined, so a verifier reproduces the exact left/right order used
//! during construction instead of inferring it from array position.

use bincode::{Decode, Encode};

use crate::{hash::Hash, MerkleTreeError};

/// Upper bound on proof steps accepted when decoding. No addressable tree
/// is deeper than this.
const MAX_PROOF_STEPS: usize = 64;

/// Which operand the running hash takes when a step recombines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode)]
pub enum Side {
    /// The running hash is the left operand; the sibling is the right.
    Left,
    /// The running hash is the right operand; the sibling is the left.
    Right,
}

/// One level of an inclusion proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode)]
pub struct ProofStep {
    /// The sibling subtree hash at this level.
    pub sibling: Hash,
    /// The operand position of the running hash at this level.
    pub side: Side,
}

/// An inclusion proof: the sibling path from a leaf to the root.
///
/// The proof carries neither the leaf nor the root; callers supply the leaf
/// and compare the recombined result against a root they trust.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct InclusionProof {
    /// Proof steps ordered from the leaf level upward.
    pub steps: Vec<ProofStep>,
}

impl InclusionProof {
    /// Number of steps, equal to `ceil(log2(leaf_count))` of the source
    /// tree.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// `true` only for the zero-step proof of a single-leaf tree.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Encode to bytes using bincode.
    pub fn encode_to_vec(&self) -> Result<Vec<u8>, MerkleTreeError> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_no_limit();
        bincode::encode_to_vec(self, config)
            .map_err(|e| MerkleTreeError::InvalidProof(format!("encode error: {}", e)))
    }

    /// Decode from bytes using bincode.
    ///
    /// Rejects inputs longer than the decode limit and proofs with more
    /// than 64 steps, deeper than any addressable tree.
    pub fn decode_from_slice(bytes: &[u8]) -> Result<Self, MerkleTreeError> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_limit::<{ 64 * 1024 }>();
        let (proof, _): (Self, _) = bincode::decode_from_slice(bytes, config)
            .map_err(|e| MerkleTreeError::InvalidProof(format!("decode error: {}", e)))?;
        if proof.steps.len() > MAX_PROOF_STEPS {
            return Err(MerkleTreeError::InvalidProof(format!(
                "proof has {} steps (max {})",
                proof.steps.len(),
                MAX_PROOF_STEPS
            )));
        }
        Ok(proof)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::leaf_hash;

    fn sample_proof(steps: usize) -> InclusionProof {
        InclusionProof {
            steps: (0..steps)
                .map(|i| ProofStep {
                    sibling: leaf_hash(&[i as u8]),
                    side: if i % 2 == 0 { Side::Left } else { Side::Right },
                })
                .collect(),
        }
    }

    #[test]
    fn encode_decode_roundtrip() {
        let proof = sample_proof(5);
        let bytes = proof.encode_to_vec().expect("encode");
        let decoded = InclusionProof::decode_from_slice(&bytes).expect("decode");
        assert_eq!(proof, decoded);
    }

    #[test]
    fn empty_proof_roundtrips() {
        let proof = sample_proof(0);
        let bytes = proof.encode_to_vec().expect("encode");
        let decoded = InclusionProof::decode_from_slice(&bytes).expect("decode");
        assert!(decoded.is_empty());
    }

    #[test]
    fn decode_rejects_truncated_input() {
        let proof = sample_proof(3);
        let bytes = proof.encode_to_vec().expect("encode");
        assert!(InclusionProof::decode_from_slice(&bytes[..bytes.len() - 5]).is_err());
    }

    #[test]
    fn decode_rejects_excessive_step_count() {
        let proof = sample_proof(MAX_PROOF_STEPS + 1);
        let bytes = proof.encode_to_vec().expect("encode");
        let err = InclusionProof::decode_from_slice(&bytes).expect_err("too many steps");
        let msg = format!("{}", err);
        assert!(msg.contains("steps"), "unexpected message: {}", msg);
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(InclusionProof::decode_from_slice(&[0xFF, 0xFF, 0xFF]).is_err());
    }
}
