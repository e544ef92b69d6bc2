//! Eligibility records and canonical leaf encoding.
//!
//! A record is one `(address, amount)` row of the eligibility snapshot.
//! The amount is canonicalized at construction — parsed as a `u128` and
//! re-rendered as a plain decimal string — so hashing never sees
//! `"0100"`/`"100"` style drift and an existing [`ClaimRecord`] is always
//! canonical. Malformed input fails here, at encode time, not somewhere
//! downstream.
//!
//! # Leaf preimage (version 1)
//!
//! `address_len: u32 BE || address bytes || amount bytes`, hashed with the
//! leaf domain tag of the tree crate. The length prefix keeps
//! `("ab", "1")` and `("a", "b1")` apart. This layout plus the hash schema
//! is the compatibility contract with the claim-verifying contract: the
//! verifier pins one [`LEAF_ENCODING_VERSION`], and any drift makes every
//! proof fail with no structural error raised anywhere.

use airdrop_merkle_tree::{leaf_hash, Hash};
use serde::{Deserialize, Deserializer};

use crate::CommitmentError;

/// Version of the leaf preimage layout and hash schema.
pub const LEAF_ENCODING_VERSION: u16 = 1;

/// One airdrop eligibility record, canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimRecord {
    address: String,
    amount: String,
}

impl ClaimRecord {
    /// Validate and canonicalize one record.
    ///
    /// The address must be non-empty. The amount must be a base-10
    /// unsigned integer no larger than `u128::MAX`; leading zeros are
    /// normalized away. Anything else is
    /// [`CommitmentError::MalformedRecord`].
    pub fn new(
        address: impl Into<String>,
        amount: impl Into<String>,
    ) -> Result<Self, CommitmentError> {
        let address = address.into();
        if address.is_empty() {
            return Err(CommitmentError::MalformedRecord(
                "address must not be empty".into(),
            ));
        }
        if address.len() > u32::MAX as usize {
            return Err(CommitmentError::MalformedRecord(format!(
                "address length {} exceeds u32::MAX",
                address.len()
            )));
        }
        let amount = canonical_amount(&amount.into())?;
        Ok(ClaimRecord { address, amount })
    }

    /// The claimant address, as supplied.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The claim amount in canonical decimal form.
    pub fn amount(&self) -> &str {
        &self.amount
    }

    /// The version-1 leaf preimage for this record.
    pub fn leaf_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(4 + self.address.len() + self.amount.len());
        out.extend_from_slice(&(self.address.len() as u32).to_be_bytes());
        out.extend_from_slice(self.address.as_bytes());
        out.extend_from_slice(self.amount.as_bytes());
        out
    }

    /// The leaf hash committing to this record.
    ///
    /// Pure: the same record yields the same leaf on every platform and
    /// every run, which is what keeps proofs stable.
    pub fn leaf_hash(&self) -> Hash {
        leaf_hash(&self.leaf_bytes())
    }
}

/// Canonicalize an amount string: all ASCII digits, within `u128`,
/// re-rendered without leading zeros.
fn canonical_amount(raw: &str) -> Result<String, CommitmentError> {
    if raw.is_empty() {
        return Err(CommitmentError::MalformedRecord(
            "amount must not be empty".into(),
        ));
    }
    // u128::from_str also accepts a leading `+`; the canonical form is
    // digits only.
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CommitmentError::MalformedRecord(format!(
            "amount {:?} is not an unsigned decimal integer",
            raw
        )));
    }
    let value: u128 = raw.parse().map_err(|_| {
        CommitmentError::MalformedRecord(format!("amount {:?} exceeds the 128-bit range", raw))
    })?;
    Ok(value.to_string())
}

/// The two amount spellings found in record files: a JSON number or a
/// decimal string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(u64),
    Text(String),
}

impl<'de> Deserialize<'de> for ClaimRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (address, amount) = <(String, RawAmount)>::deserialize(deserializer)?;
        let amount = match amount {
            RawAmount::Number(value) => value.to_string(),
            RawAmount::Text(value) => value,
        };
        ClaimRecord::new(address, amount).map_err(serde::de::Error::custom)
    }
}

/// The record-file shape produced by eligibility snapshots:
/// `{ "data": [[address, amount], ...] }`.
#[derive(Deserialize)]
struct RecordFile {
    data: Vec<ClaimRecord>,
}

/// Parse an eligibility record file.
///
/// Rows are `[address, amount]` pairs; amounts may be JSON numbers or
/// strings and both normalize to canonical decimal form. Malformed JSON
/// and invalid rows both surface as
/// [`CommitmentError::RecordFile`] — row validation runs inside the
/// deserializer.
pub fn records_from_json(bytes: &[u8]) -> Result<Vec<ClaimRecord>, CommitmentError> {
    let file: RecordFile = serde_json::from_slice(bytes)?;
    Ok(file.data)
}
