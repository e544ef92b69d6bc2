//! Blake3 hash schema for leaves and internal nodes.
//!
//! Hash domain separation:
//! - Leaf nodes:     `blake3(0x00 || preimage)`
//! - Internal nodes: `blake3(0x01 || left_hash || right_hash)`
//!
//! The 0x00/0x01 domain tags prevent second-preimage attacks where a
//! crafted leaf preimage could reproduce an internal combination. Both tags
//! and the operand order are pinned constants shared with the verifying
//! side, not implementation details.

/// A 32-byte Blake3 hash value.
pub type Hash = [u8; 32];

/// Domain tag prepended to leaf hash inputs: `blake3(LEAF_TAG || preimage)`.
pub const LEAF_TAG: u8 = 0x00;
/// Domain tag prepended to internal merges: `blake3(INTERNAL_TAG || left ||
/// right)`.
pub const INTERNAL_TAG: u8 = 0x01;

/// Compute the domain-separated leaf hash: `blake3(0x00 || preimage)`.
pub fn leaf_hash(preimage: &[u8]) -> Hash {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&[LEAF_TAG]);
    hasher.update(preimage);
    *hasher.finalize().as_bytes()
}

/// Combine two sibling hashes into their parent: `blake3(0x01 || left ||
/// right)`.
///
/// Construction and proof recombination must agree on this order exactly;
/// swapping operands changes every root with no error raised anywhere.
pub fn node_merge(left: &Hash, right: &Hash) -> Hash {
    let mut input = [0u8; 65];
    input[0] = INTERNAL_TAG;
    input[1..33].copy_from_slice(left);
    input[33..65].copy_from_slice(right);
    *blake3::hash(&input).as_bytes()
}
