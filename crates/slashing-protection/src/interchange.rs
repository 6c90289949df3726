//! Slashing-protection interchange record types.
//!
//! Every scalar is kept as the string that appeared in the input. Nothing in
//! this module parses slots, epochs, keys, or roots.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Top-level interchange record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interchange {
    /// Format metadata, passed through untouched.
    pub metadata: Metadata,
    /// Per-key signing histories, in file order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Vec<KeyHistory>,
}

/// Interchange metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Interchange format version.
    pub interchange_format_version: String,
    /// Genesis validators root of the network.
    pub genesis_validators_root: String,
    /// Any other metadata fields present in the input.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Signing history of one validator key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyHistory {
    /// Validator public key.
    pub pubkey: String,
    /// Blocks signed by this key.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub signed_blocks: Vec<SignedBlock>,
    /// Attestations signed by this key.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub signed_attestations: Vec<SignedAttestation>,
}

/// A signed block entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedBlock {
    /// Slot of the block.
    pub slot: String,
    /// Signing root, when recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signing_root: Option<String>,
}

/// A signed attestation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedAttestation {
    /// Source epoch of the attestation.
    pub source_epoch: String,
    /// Target epoch of the attestation.
    pub target_epoch: String,
    /// Signing root, when recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signing_root: Option<String>,
}

/// Reads an absent list or a JSON `null` as an empty list.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// An entry whose history position is decided by a string key.
pub trait Ordered {
    /// Key used to rank entries. Compared byte-wise.
    fn ordering_key(&self) -> &str;
}

impl Ordered for SignedBlock {
    fn ordering_key(&self) -> &str {
        &self.slot
    }
}

impl Ordered for SignedAttestation {
    fn ordering_key(&self) -> &str {
        &self.source_epoch
    }
}
