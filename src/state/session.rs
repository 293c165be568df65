// Session persistence.
// Remembers the last visited page and tab between runs as JSON.

use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::app::Tab;
use crate::error::Result;

/// What is restored at startup. Expanded groups are not part of it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Path of the last page viewed in the notes tab.
    pub last_path: Option<String>,
    /// Top-level tab that was active on exit.
    #[serde(default)]
    pub last_tab: Tab,
    /// Tech stack that was selected on the home tab.
    #[serde(default)]
    pub last_stack: Option<String>,
}

/// Wrapper written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SavedSession {
    session: Session,
    saved_at: DateTime<Utc>,
}

impl Session {
    /// Read a saved session. Missing file yields None.
    pub fn read(path: &Path) -> Result<Option<Session>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)?;
        let saved: SavedSession = serde_json::from_str(&contents)?;
        tracing::debug!(saved_at = %saved.saved_at, "read session");
        Ok(Some(saved.session))
    }

    /// Read a saved session, falling back to a fresh one on any failure.
    pub fn load_or_default(path: Option<&Path>) -> Session {
        let Some(path) = path else {
            return Session::default();
        };
        match Session::read(path) {
            Ok(session) => session.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "discarding unreadable session");
                Session::default()
            }
        }
    }

    /// Write the session atomically.
    pub fn save(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let saved = SavedSession {
            session: self.clone(),
            saved_at: Utc::now(),
        };
        let json = serde_json::to_string_pretty(&saved)?;

        // Write atomically via temp file
        let temp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("session.json");

        let session = Session {
            last_path: Some("/notes/web-introduction/css".to_string()),
            last_tab: Tab::Notes,
            last_stack: Some("react".to_string()),
        };
        session.save(&path).unwrap();

        assert_eq!(Session::read(&path).unwrap(), Some(session));
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.json");

        assert!(Session::read(&path).unwrap().is_none());
        assert_eq!(Session::load_or_default(Some(&path)), Session::default());
    }

    #[test]
    fn test_corrupt_file_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(Session::read(&path).is_err());
        assert_eq!(Session::load_or_default(Some(&path)), Session::default());
    }
}
