// Match persistence for the scorer
// JSON snapshots for the UI, MessagePack + LZ4 saves with versioning and integrity checks

pub mod error;
pub mod format;
pub mod manager;
pub mod migration;

pub use error::SaveError;
pub use format::{
    decompress_and_deserialize, from_json, serialize_and_compress, snapshot_schema, to_json,
    to_json_pretty, SaveFile,
};
pub use manager::SaveManager;
pub use migration::migrate_save;

pub const SAVE_VERSION: u32 = 1;
