//! Sharded Merkle commitment over airdrop eligibility records.
//!
//! The eligibility list is an ordered set of `(address, amount)` records.
//! It is split into a fixed number of contiguous shards; each non-empty
//! shard gets an independent Merkle tree, and the per-shard roots are what
//! a deployment embeds in the claim-verifying contract's configuration. A
//! claimant later submits the inclusion proof for their record together
//! with the index of the shard whose root it commits against.
//!
//! Everything here is built once per run from an explicitly passed record
//! list and never mutated afterwards; there is no process-wide state.
//!
//! # Core types
//!
//! - [`ClaimRecord`] — one canonicalized eligibility record and its leaf
//!   encoding.
//! - [`AirdropCommitment`] — per-shard trees: roots, claim proofs, local
//!   verification.
//! - [`ClaimProof`] — an inclusion proof tagged with its shard index.

#![warn(missing_docs)]

mod commitment;
mod error;
mod record;
mod shard;


pub use airdrop_merkle_tree::{
    Hash, InclusionProof, MerkleTree, MerkleTreeError, ProofStep, Side,
};
pub use commitment::{AirdropCommitment, ClaimProof};
pub use error::CommitmentError;
pub use record::{records_from_json, ClaimRecord, LEAF_ENCODING_VERSION};
pub use shard::{shard_ranges, DEFAULT_SHARD_COUNT};
