//! The airdrop commitment orchestrator: per-shard trees, roots, and claim
//! proofs.

use std::{collections::HashMap, ops::Range, thread};

use airdrop_merkle_tree::{Hash, InclusionProof, MerkleTree, MerkleTreeError};
use bincode::{Decode, Encode};

use crate::{record::ClaimRecord, shard::shard_ranges, CommitmentError};

/// An inclusion proof tagged with the shard whose root it commits against.
///
/// A proof without its shard index is meaningless: the verifying contract
/// holds one root per shard and must be told which one to recombine toward.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct ClaimProof {
    /// Index of the shard containing the record.
    pub shard_index: u32,
    /// The sibling path within that shard's tree.
    pub proof: InclusionProof,
}

/// One shard: its index range over the input order and, when non-empty,
/// its tree.
#[derive(Debug, Clone)]
struct Shard {
    range: Range<usize>,
    tree: Option<MerkleTree>,
}

/// Per-shard Merkle trees over a fixed eligibility list.
///
/// Built once from the full ordered record list and immutable afterwards.
/// Every query method takes `&self` and is safe under concurrent callers.
#[derive(Debug, Clone)]
pub struct AirdropCommitment {
    shards: Vec<Shard>,
}

impl AirdropCommitment {
    /// Build one Merkle tree per non-empty shard over `records`.
    ///
    /// Records are already-canonical [`ClaimRecord`]s, so leaf hashing
    /// cannot fail here. Shard trees build on scoped worker threads, one
    /// per shard; each worker reads a disjoint slice of the leaf vector
    /// and the only synchronization is the join at scope exit.
    ///
    /// Fails with [`CommitmentError::DuplicateRecord`] when the same leaf
    /// would land in two different shards.
    pub fn build(records: &[ClaimRecord], shard_count: usize) -> Result<Self, CommitmentError> {
        let ranges = shard_ranges(records.len(), shard_count)?;
        let leaves: Vec<Hash> = records.iter().map(ClaimRecord::leaf_hash).collect();

        let mut shard_of_leaf: HashMap<Hash, usize> = HashMap::with_capacity(leaves.len());
        for (shard_index, range) in ranges.iter().enumerate() {
            for position in range.clone() {
                if let Some(first_shard) = shard_of_leaf.insert(leaves[position], shard_index) {
                    if first_shard != shard_index {
                        return Err(CommitmentError::DuplicateRecord {
                            address: records[position].address().to_string(),
                            first_shard,
                            second_shard: shard_index,
                        });
                    }
                }
            }
        }

        let trees = thread::scope(|scope| {
            let handles: Vec<_> = ranges
                .iter()
                .map(|range| {
                    let shard_leaves = &leaves[range.clone()];
                    scope.spawn(move || {
                        if shard_leaves.is_empty() {
                            Ok(None)
                        } else {
                            MerkleTree::from_leaves(shard_leaves.to_vec()).map(Some)
                        }
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().expect("shard build thread panicked"))
                .collect::<Result<Vec<Option<MerkleTree>>, MerkleTreeError>>()
        })?;

        let shards = ranges
            .into_iter()
            .zip(trees)
            .map(|(range, tree)| Shard { range, tree })
            .collect();

        Ok(AirdropCommitment { shards })
    }

    /// Number of shards this commitment was built with.
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// Total number of committed records across all shards.
    pub fn record_count(&self) -> usize {
        self.shards.iter().map(|shard| shard.range.len()).sum()
    }

    /// Per-shard roots, indexed by shard. `None` marks an empty shard,
    /// which has no valid root and must be skipped by deployment glue.
    pub fn roots(&self) -> Vec<Option<Hash>> {
        self.shards
            .iter()
            .map(|shard| shard.tree.as_ref().map(MerkleTree::root))
            .collect()
    }

    /// Per-shard roots hex-encoded for contract configuration fields.
    pub fn roots_hex(&self) -> Vec<Option<String>> {
        self.roots()
            .into_iter()
            .map(|root| root.map(hex::encode))
            .collect()
    }

    /// The root of one shard, `None` when that shard is empty.
    ///
    /// Returns [`CommitmentError::ShardIndexOutOfRange`] for an index this
    /// commitment does not have.
    pub fn root(&self, shard_index: usize) -> Result<Option<Hash>, CommitmentError> {
        let shard =
            self.shards
                .get(shard_index)
                .ok_or(CommitmentError::ShardIndexOutOfRange {
                    index: shard_index,
                    shard_count: self.shards.len(),
                })?;
        Ok(shard.tree.as_ref().map(MerkleTree::root))
    }

    /// Generate the claim proof for `record`.
    ///
    /// Shards are scanned in ascending index order, so repeated calls for
    /// the same record return byte-identical proofs. `Ok(None)` means the
    /// record is not eligible — an expected outcome the caller branches
    /// on, never something to submit as a transaction. A leaf present in
    /// two shards is reported as [`CommitmentError::DuplicateRecord`]
    /// instead of being resolved by first match.
    pub fn proof_for(&self, record: &ClaimRecord) -> Result<Option<ClaimProof>, CommitmentError> {
        let leaf = record.leaf_hash();
        let mut found: Option<ClaimProof> = None;
        for (shard_index, shard) in self.shards.iter().enumerate() {
            let Some(tree) = shard.tree.as_ref() else {
                continue;
            };
            let Some(position) = tree.position_of(&leaf) else {
                continue;
            };
            if let Some(existing) = &found {
                return Err(CommitmentError::DuplicateRecord {
                    address: record.address().to_string(),
                    first_shard: existing.shard_index as usize,
                    second_shard: shard_index,
                });
            }
            found = Some(ClaimProof {
                shard_index: shard_index as u32,
                proof: tree.prove_position(position)?,
            });
        }
        Ok(found)
    }

    /// Check a claim proof against this commitment's root for its shard.
    ///
    /// Rejects a proof whose shard index does not exist here — the stale
    /// case where a proof from an old commitment is replayed against one
    /// rebuilt with a different shard count. A proof pointing at an empty
    /// shard verifies as `false`.
    pub fn verify_claim(
        &self,
        record: &ClaimRecord,
        claim: &ClaimProof,
    ) -> Result<bool, CommitmentError> {
        match self.root(claim.shard_index as usize)? {
            Some(root) => Ok(claim.proof.verify(&record.leaf_hash(), &root)),
            None => Ok(false),
        }
    }
}
