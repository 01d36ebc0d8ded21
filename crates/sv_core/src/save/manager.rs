use super::error::SaveError;
use super::format::{decompress_and_deserialize, serialize_and_compress, SaveFile};
use super::migration::migrate_save;
use crate::models::Match;

use std::fs::{rename, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

pub const SAVE_EXTENSION: &str = "svz";
const AUTO_SAVE_NAME: &str = "auto_save";

/// Reads and writes compact match saves under one directory.
#[derive(Debug, Clone)]
pub struct SaveManager {
    dir: PathBuf,
}

impl SaveManager {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Save a match under `name` (extension added).
    pub fn save(&self, name: &str, m: &Match) -> Result<PathBuf, SaveError> {
        let path = self.path_for(name);
        Self::save_to_path(&path, &SaveFile::new(m.clone()))?;
        log::info!("Match saved to {}", path.display());
        Ok(path)
    }

    pub fn load(&self, name: &str) -> Result<Match, SaveError> {
        let save = Self::load_from_path(&self.path_for(name))?;
        log::info!("Match '{}' loaded", name);
        Ok(save.match_data)
    }

    /// Overwrite the autosave slot.
    pub fn auto_save(&self, m: &Match) -> Result<(), SaveError> {
        let path = self.path_for(AUTO_SAVE_NAME);
        Self::save_to_path(&path, &SaveFile::new(m.clone()))?;
        log::debug!("Auto-save completed");
        Ok(())
    }

    pub fn load_auto_save(&self) -> Result<Match, SaveError> {
        let save = Self::load_from_path(&self.path_for(AUTO_SAVE_NAME))?;
        log::info!("Auto-save loaded");
        Ok(save.match_data)
    }

    pub fn auto_save_exists(&self) -> bool {
        self.path_for(AUTO_SAVE_NAME).exists()
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{SAVE_EXTENSION}"))
    }

    pub fn save_to_path(path: &Path, save: &SaveFile) -> Result<(), SaveError> {
        // Ensure save directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = serialize_and_compress(save)?;

        // Atomic save: write to temp file, then rename
        let temp_path = path.with_extension("tmp");

        {
            let mut file = File::create(&temp_path)?;
            file.write_all(&data)?;
            file.flush()?;
            file.sync_all()?;
        }

        rename(&temp_path, path)?;

        log::debug!("Saved {} bytes to {:?}", data.len(), path);
        Ok(())
    }

    pub fn load_from_path(path: &Path) -> Result<SaveFile, SaveError> {
        if !path.exists() {
            return Err(SaveError::FileNotFound { path: path.display().to_string() });
        }

        let mut file = File::open(path)?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;

        let mut save = decompress_and_deserialize(&data)?;
        save = migrate_save(save)?;

        log::debug!("Loaded {} bytes from {:?}", data.len(), path);
        Ok(save)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::handle_event_at;
    use crate::models::{EventOpts, MatchMeta, ScoringEvent, Team};
    use tempfile::TempDir;

    fn scored() -> Match {
        let mut m = Match::new(MatchMeta::default(), [Team::new("A"), Team::new("B")]);
        for tag in ["6", "noball", "4"] {
            handle_event_at(&mut m, &ScoringEvent::from(tag), EventOpts::default(), 3);
        }
        m
    }

    #[test]
    fn test_save_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let manager = SaveManager::new(temp_dir.path());

        let m = scored();
        let path = manager.save("final", &m).unwrap();
        assert!(path.ends_with("final.svz"));

        let loaded = manager.load("final").unwrap();
        assert_eq!(loaded, m);
    }

    #[test]
    fn test_atomic_save_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let manager = SaveManager::new(temp_dir.path().join("nested"));

        assert!(!manager.auto_save_exists());
        manager.auto_save(&scored()).unwrap();
        assert!(manager.auto_save_exists());
        assert!(!manager.dir().join("auto_save.tmp").exists());

        let loaded = manager.load_auto_save().unwrap();
        assert_eq!(loaded.current().runs, 11);
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let manager = SaveManager::new(temp_dir.path());
        let err = manager.load("nothing").unwrap_err();
        assert!(matches!(err, SaveError::FileNotFound { .. }));
        assert!(err.is_recoverable());
    }
}
