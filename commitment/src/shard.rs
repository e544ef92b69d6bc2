//! Contiguous shard partitioning of the eligibility list.
//!
//! The record set is split into a fixed number of contiguous index ranges,
//! each owning one independently rooted tree. Shard count is a deployment
//! constant, not derived from input size: it bounds per-shard build cost
//! and keeps proof depth flat as the record list grows, at the price of
//! carrying a shard index alongside every proof.

use std::ops::Range;

use crate::CommitmentError;

/// Shard count used by the reference deployment: two roots per airdrop.
pub const DEFAULT_SHARD_COUNT: usize = 2;

/// Split `record_count` records into `shard_count` contiguous ranges.
///
/// Ranges cover `[0, record_count)` exactly, in input order, with no gaps
/// or overlaps. Sizes are balanced: the first `record_count % shard_count`
/// shards hold one extra record, so no two shards differ by more than one.
/// With fewer records than shards the tail ranges come out empty; an empty
/// shard has no root and is skipped rather than built degenerate.
pub fn shard_ranges(
    record_count: usize,
    shard_count: usize,
) -> Result<Vec<Range<usize>>, CommitmentError> {
    if shard_count == 0 {
        return Err(CommitmentError::ZeroShardCount);
    }
    let base = record_count / shard_count;
    let extra = record_count % shard_count;
    let mut ranges = Vec::with_capacity(shard_count);
    let mut start = 0;
    for shard_index in 0..shard_count {
        let size = base + usize::from(shard_index < extra);
        ranges.push(start..start + size);
        start += size;
    }
    Ok(ranges)
}
