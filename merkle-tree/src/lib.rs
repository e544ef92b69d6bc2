//! Padded binary Merkle tree using Blake3.
//!
//! A tree is built bottom-up over an ordered list of 32-byte leaf hashes.
//! Each level pairs adjacent nodes; a level of odd length pairs its last
//! node with a duplicate of itself. That duplicate-last rule is the single
//! padding policy at every level — mixing policies would silently break
//! proofs for the trailing leaf.
//!
//! Hash domain separation:
//! - Leaf nodes:     `blake3(0x00 || preimage)`
//! - Internal nodes: `blake3(0x01 || left_hash || right_hash)`
//!
//! The schema and the left-then-right operand order are a compatibility
//! contract with whatever verifier checks the proofs: a mismatch raises no
//! structural error, verification just always fails.
//!
//! # Core types
//!
//! - [`MerkleTree`] — build, root, inclusion proof generation.
//! - [`InclusionProof`] — sibling path with explicit side markers; local
//!   recombination and bincode serialization.

#![warn(missing_docs)]

mod error;
mod hash;
mod proof;
mod tree;
mod verify;

#[cfg(test)]
mod tests;

pub use error::MerkleTreeError;
pub use hash::{leaf_hash, node_merge, Hash, INTERNAL_TAG, LEAF_TAG};
pub use proof::{InclusionProof, ProofStep, Side};
pub use tree::MerkleTree;
