use thiserror::Error;

/// Errors from Merkle tree construction and proof handling.
#[derive(Debug, Error)]
pub enum MerkleTreeError {
    /// Build was requested on zero leaves. An empty tree has no valid root;
    /// failing here keeps callers from mistaking a placeholder hash for one.
    #[error("cannot build a Merkle tree from zero leaves")]
    EmptyLeaves,
    /// A proof was requested for a position past the leaf count.
    #[error("position {position} out of range (leaf count {leaf_count})")]
    PositionOutOfRange {
        /// The requested leaf position.
        position: usize,
        /// Number of leaves in the tree.
        leaf_count: usize,
    },
    /// Proof bytes failed to decode or violated structural bounds.
    #[error("invalid proof: {0}")]
    InvalidProof(String),
}
