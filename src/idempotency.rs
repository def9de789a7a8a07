use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::storage::serialize_records;
use crate::types::PortRecord;

/// SHA-256 (hex) of the exact bytes a `JsonFileSink` would write. Two runs over
/// the same input produce the same digest.
pub fn output_digest(records: &[PortRecord]) -> Result<String> {
    let serialized = serialize_records(records)?;
    Ok(sha256_hex(serialized.as_bytes()))
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
