use airdrop_merkle_tree::MerkleTreeError;
use thiserror::Error;

/// Errors from record canonicalization, partitioning, and commitment
/// construction.
///
/// All of these are recoverable results returned to the caller; whether to
/// abort a deployment or reject a claim is the orchestration layer's call.
/// "Record not eligible" is deliberately not here — it is the `None` arm of
/// [`proof_for`](crate::AirdropCommitment::proof_for), an expected outcome
/// rather than a failure.
#[derive(Debug, Error)]
pub enum CommitmentError {
    /// Record rejected at encode time: empty address or an amount with no
    /// canonical decimal form. Never silently coerced.
    #[error("malformed record: {0}")]
    MalformedRecord(String),
    /// Shard count must be at least 1.
    #[error("shard count must be at least 1")]
    ZeroShardCount,
    /// The same leaf landed in two different shards. Contiguous
    /// partitioning assigns each record exactly one shard, so this marks a
    /// defective upstream record list and is reported, never resolved by
    /// first match.
    #[error("record for {address} appears in shard {first_shard} and shard {second_shard}")]
    DuplicateRecord {
        /// Address of the duplicated record.
        address: String,
        /// Lower shard index holding the leaf.
        first_shard: usize,
        /// Higher shard index holding the leaf.
        second_shard: usize,
    },
    /// A shard index referenced a shard this commitment does not have,
    /// e.g. a stale proof replayed against a regenerated commitment built
    /// with a different shard count.
    #[error("shard index {index} out of range (shard count {shard_count})")]
    ShardIndexOutOfRange {
        /// The out-of-range index.
        index: usize,
        /// Number of shards in this commitment.
        shard_count: usize,
    },
    /// The eligibility record file failed to parse.
    #[error("record file parse error: {0}")]
    RecordFile(#[from] serde_json::Error),
    /// A tree-level failure surfaced through the commitment layer.
    #[error(transparent)]
    Tree(#[from] MerkleTreeError),
}
