use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::AnswerMap;

/// Storage key holding "true" once onboarding has been completed.
pub const COMPLETED_KEY: &str = "onboarding_completed";
/// Storage key holding the JSON-serialized answer map.
pub const ANSWERS_KEY: &str = "onboarding_answers";

/// Durable key-value store for user preferences, one file per key under
/// a data directory. Values are plain strings; survives restarts.
#[derive(Debug)]
pub struct PreferenceStore {
    dir: PathBuf,
}

impl PreferenceStore {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, String> {
        let dir = dir.into();
        match fs::create_dir_all(&dir) {
            Ok(_) => Ok(Self { dir }),
            Err(e) => Err(e.to_string()),
        }
    }

    /// Opens the store in the platform data directory.
    pub fn open_default() -> Result<Self, String> {
        let base = dirs::data_dir().ok_or_else(|| "No platform data directory".to_string())?;
        Self::open(base.join("hint"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    /// Reads a key. A missing key is `Ok(None)`; any other failure is an
    /// error.
    pub fn get(&self, key: &str) -> Result<Option<String>, String> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.to_string()),
        }
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), String> {
        fs::write(self.key_path(key), value).map_err(|e| e.to_string())
    }

    /// Removes a key. Removing an absent key is not an error.
    pub fn remove(&self, key: &str) -> Result<(), String> {
        match fs::remove_file(self.key_path(key)) {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.to_string()),
        }
    }

    /// Whether onboarding has been completed on this device.
    pub fn load_completed(&self) -> Result<bool, String> {
        Ok(self.get(COMPLETED_KEY)?.as_deref() == Some("true"))
    }

    /// Writes the answers and the completion marker. The marker goes
    /// last so a failed answer write never leaves the flow marked done.
    pub fn save_answers(&self, answers: &AnswerMap) -> Result<(), String> {
        let json = match serde_json::to_string(answers) {
            Ok(json) => json,
            Err(e) => return Err(format!("Serialization failed: {}", e)),
        };
        self.set(ANSWERS_KEY, &json)?;
        self.set(COMPLETED_KEY, "true")
    }

    /// Removes both onboarding keys so the flow runs again.
    pub fn clear_onboarding(&self) -> Result<(), String> {
        self.remove(COMPLETED_KEY)?;
        self.remove(ANSWERS_KEY)
    }
}
