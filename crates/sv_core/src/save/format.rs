use super::error::SaveError;
use super::SAVE_VERSION;
use crate::models::Match;
use serde::{Deserialize, Serialize};

use lz4_flex::{compress_prepend_size, decompress_size_prepended};
use rmp_serde::{from_slice, to_vec_named};
use sha2::{Digest, Sha256};
use time::OffsetDateTime;
use validator::Validate;

/// Upper bound on deliveries per innings accepted in a save.
pub const MAX_TIMELINE_LEN: usize = 5_000;

/// Binary save wrapper around a match snapshot
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SaveFile {
    /// Save format version for migration
    pub version: u32,

    /// Save timestamp (unix milliseconds)
    pub timestamp: u64,

    /// The match exactly as the scorer left it
    #[serde(rename = "match")]
    pub match_data: Match,
}

impl SaveFile {
    pub fn new(match_data: Match) -> Self {
        Self { version: SAVE_VERSION, timestamp: current_timestamp(), match_data }
    }

    pub fn update_timestamp(&mut self) {
        self.timestamp = current_timestamp();
    }

    /// Structural checks the scorer relies on.
    pub fn validate(&self) -> Result<(), SaveError> {
        let m = &self.match_data;

        if m.inn_now > 1 {
            return Err(SaveError::corrupted(format!("innings index {}", m.inn_now)));
        }

        m.meta.validate().map_err(|e| SaveError::corrupted(format!("match settings: {e}")))?;
        let balls_per_over = m.meta.balls_per_over;

        for (idx, inn) in m.innings.iter().enumerate() {
            if inn.timeline.len() > MAX_TIMELINE_LEN {
                return Err(SaveError::DataTooLarge { size: inn.timeline.len() });
            }
            if inn.batting > 1 || inn.bowling > 1 || inn.batting + inn.bowling != 1 {
                return Err(SaveError::corrupted(format!(
                    "innings {idx} has sides {}/{}",
                    inn.batting, inn.bowling
                )));
            }
            if inn.striker > 1 {
                return Err(SaveError::corrupted(format!("innings {idx} striker {}", inn.striker)));
            }
            if inn.legal_balls >= balls_per_over {
                return Err(SaveError::corrupted(format!(
                    "innings {idx} has {} legal balls in a {balls_per_over}-ball over",
                    inn.legal_balls
                )));
            }
        }

        Ok(())
    }
}

/// Serialize and compress a save
pub fn serialize_and_compress(save: &SaveFile) -> Result<Vec<u8>, SaveError> {
    // Validate before serialization
    save.validate()?;

    // 1. Serialize to MessagePack with field names
    let msgpack = to_vec_named(save).map_err(SaveError::Serialization)?;

    // 2. Compress with LZ4 (size prepended for easy decompression)
    let compressed = compress_prepend_size(&msgpack);

    // 3. Add SHA256 checksum at the end
    let mut hasher = Sha256::new();
    hasher.update(&compressed);
    let checksum = hasher.finalize();

    let mut result = compressed;
    result.extend_from_slice(&checksum);

    Ok(result)
}

/// Decompress and deserialize a save
pub fn decompress_and_deserialize(bytes: &[u8]) -> Result<SaveFile, SaveError> {
    // Check minimum size (header + checksum)
    if bytes.len() < 4 + 32 {
        return Err(SaveError::corrupted(format!("only {} bytes", bytes.len())));
    }

    // Split payload and checksum
    let (payload, checksum_bytes) = bytes.split_at(bytes.len() - 32);

    let mut hasher = Sha256::new();
    hasher.update(payload);
    let calculated_checksum = hasher.finalize();

    if &calculated_checksum[..] != checksum_bytes {
        return Err(SaveError::ChecksumMismatch);
    }

    let msgpack = decompress_size_prepended(payload).map_err(|_| SaveError::Decompression)?;
    let save: SaveFile = from_slice(&msgpack).map_err(SaveError::Deserialization)?;

    if save.version > SAVE_VERSION {
        return Err(SaveError::VersionMismatch { found: save.version, expected: SAVE_VERSION });
    }

    Ok(save)
}

/// JSON snapshot of the bare match, the format the UI autosaves.
pub fn to_json(m: &Match) -> Result<String, SaveError> {
    Ok(serde_json::to_string(m)?)
}

pub fn to_json_pretty(m: &Match) -> Result<String, SaveError> {
    Ok(serde_json::to_string_pretty(m)?)
}

pub fn from_json(json: &str) -> Result<Match, SaveError> {
    let match_data: Match = serde_json::from_str(json)?;
    let save = SaveFile { version: SAVE_VERSION, timestamp: 0, match_data };
    save.validate()?;
    Ok(save.match_data)
}

/// JSON Schema of the match snapshot, for collaborators that validate it.
pub fn snapshot_schema() -> serde_json::Value {
    let schema = schemars::schema_for!(Match);
    serde_json::to_value(schema).unwrap_or(serde_json::Value::Null)
}

pub fn current_timestamp() -> u64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as u64
}
