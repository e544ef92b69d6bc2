use crate::{
    hash::{node_merge, Hash},
    proof::{InclusionProof, ProofStep, Side},
    MerkleTreeError,
};

/// A padded binary Merkle tree over 32-byte leaf hashes.
///
/// Levels are stored bottom-up: level 0 holds the leaves in input order and
/// every level above has `ceil(len / 2)` nodes, down to a single root. All
/// levels are kept in memory, so proof generation is a read-only walk and
/// safe to run from concurrent callers.
///
/// The tree is immutable once built. Building the same ordered leaves twice
/// yields identical levels, an identical root, and byte-identical proofs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleTree {
    levels: Vec<Vec<Hash>>,
}

impl MerkleTree {
    /// Build a tree from ordered leaf hashes.
    ///
    /// Returns [`MerkleTreeError::EmptyLeaves`] for an empty input.
    pub fn from_leaves(leaves: Vec<Hash>) -> Result<Self, MerkleTreeError> {
        if leaves.is_empty() {
            return Err(MerkleTreeError::EmptyLeaves);
        }
        let mut levels = vec![leaves];
        while levels[levels.len() - 1].len() > 1 {
            let next = parent_level(&levels[levels.len() - 1]);
            levels.push(next);
        }
        Ok(MerkleTree { levels })
    }

    /// Number of leaves at level 0.
    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Number of levels, leaves included. A single-leaf tree has height 1;
    /// proofs carry `height - 1 == ceil(log2(leaf_count))` steps.
    pub fn height(&self) -> usize {
        self.levels.len()
    }

    /// The root hash committing to every leaf.
    pub fn root(&self) -> Hash {
        self.levels[self.levels.len() - 1][0]
    }

    /// Locate a leaf by hash equality, returning its level-0 position.
    ///
    /// Linear scan in input order; the first occurrence wins.
    pub fn position_of(&self, leaf: &Hash) -> Option<usize> {
        self.levels[0].iter().position(|candidate| candidate == leaf)
    }

    /// Generate an inclusion proof for the leaf at `position`.
    ///
    /// Returns [`MerkleTreeError::PositionOutOfRange`] past the leaf count.
    pub fn prove_position(&self, position: usize) -> Result<InclusionProof, MerkleTreeError> {
        if position >= self.leaf_count() {
            return Err(MerkleTreeError::PositionOutOfRange {
                position,
                leaf_count: self.leaf_count(),
            });
        }
        Ok(self.proof_at(position))
    }

    /// Generate an inclusion proof for `leaf`.
    ///
    /// `None` is the distinguished "not a member" result — never a partial
    /// or empty proof a caller could mistake for a valid one.
    pub fn prove(&self, leaf: &Hash) -> Option<InclusionProof> {
        self.position_of(leaf)
            .map(|position| self.proof_at(position))
    }

    /// Walk from a valid leaf position up to the root, recording the
    /// sibling and which operand the running node takes at each level.
    fn proof_at(&self, mut index: usize) -> InclusionProof {
        let mut steps = Vec::with_capacity(self.levels.len().saturating_sub(1));
        for level in &self.levels[..self.levels.len() - 1] {
            let sibling = match level.get(index ^ 1) {
                Some(hash) => *hash,
                // Unpaired last node of an odd level: its own duplicate.
                None => level[index],
            };
            let side = if index % 2 == 0 { Side::Left } else { Side::Right };
            steps.push(ProofStep { sibling, side });
            index /= 2;
        }
        InclusionProof { steps }
    }
}

/// Combine adjacent pairs into the next level, pairing a trailing unpaired
/// node with a duplicate of itself.
fn parent_level(level: &[Hash]) -> Vec<Hash> {
    level
        .chunks(2)
        .map(|pair| {
            let left = &pair[0];
            let right = pair.get(1).unwrap_or(left);
            node_merge(left, right)
        })
        .collect()
}
