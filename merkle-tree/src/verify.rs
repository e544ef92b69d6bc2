//! Proof recombination against a trusted root.
//!
//! Pure functions — no tree access required. The recorded side markers pin
//! the operand order at every level, so recombination here is the exact
//! mirror of [`node_merge`](crate::node_merge) calls made during
//! construction.

use crate::{
    hash::{node_merge, Hash},
    proof::{InclusionProof, Side},
};

impl InclusionProof {
    /// Recombine `leaf` with the sibling path, reproducing the root this
    /// proof was generated against.
    pub fn compute_root(&self, leaf: &Hash) -> Hash {
        let mut running = *leaf;
        for step in &self.steps {
            running = match step.side {
                Side::Left => node_merge(&running, &step.sibling),
                Side::Right => node_merge(&step.sibling, &running),
            };
        }
        running
    }

    /// `true` when recombining `leaf` reproduces `expected_root` exactly.
    pub fn verify(&self, leaf: &Hash, expected_root: &Hash) -> bool {
        self.compute_root(leaf) == *expected_root
    }
}
