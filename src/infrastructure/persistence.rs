use crate::domain::SessionFlags;
use serde_json::json;
use std::fs;
use std::path::PathBuf;

const DEFAULT_SESSION_FILE: &str = ".storyflow_session";

/// File-backed session marker.
///
/// Stores one small JSON file whose presence means "a session existed".
/// The token value inside is opaque and never validated.
pub struct SessionRepository {
    path: PathBuf,
}

impl Default for SessionRepository {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_SESSION_FILE))
    }
}

impl SessionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SessionFlags for SessionRepository {
    fn store(&mut self) -> Result<(), String> {
        let marker = json!({ "token": "mock_token" });
        fs::write(&self.path, marker.to_string()).map_err(|e| e.to_string())
    }

    fn present(&self) -> bool {
        self.path.exists()
    }

    fn clear(&mut self) -> Result<(), String> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| e.to_string())
        } else {
            Ok(())
        }
    }
}
