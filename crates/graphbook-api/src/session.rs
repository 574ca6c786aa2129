//! Login session persistence
//!
//! The session file holds a login flag and a username, and is the entirety
//! of durable client state. Credentials are checked locally against the fixed
//! demo account; a mismatch surfaces as a generic invalid-credentials error.

use crate::config::Config;
use crate::error::{GraphbookError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const FIXED_USERNAME: &str = "admin";
const FIXED_PASSWORD: &str = "admin123";

/// Persisted login state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    pub logged_in: bool,
    #[serde(default)]
    pub username: Option<String>,
}

impl Session {
    /// Session file under the config directory
    pub fn default_path() -> PathBuf {
        Config::config_dir().join("session.yml")
    }

    /// Load the persisted session, or a logged-out default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(Session::default())
        }
    }

    /// Validate credentials and persist the session on success
    pub fn login(username: &str, password: &str) -> Result<Self> {
        Self::login_at(username, password, &Self::default_path())
    }

    pub fn login_at(username: &str, password: &str, path: &Path) -> Result<Self> {
        if username != FIXED_USERNAME || password != FIXED_PASSWORD {
            return Err(GraphbookError::Auth);
        }
        let session = Session {
            logged_in: true,
            username: Some(username.to_string()),
        };
        session.save_to(path)?;
        tracing::info!("logged in as {}", username);
        Ok(session)
    }

    /// Clear the session and remove its file
    pub fn logout() -> Result<()> {
        Self::logout_at(&Self::default_path())
    }

    pub fn logout_at(path: &Path) -> Result<()> {
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn login_round_trips_through_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.yml");

        let session = Session::login_at("admin", "admin123", &path).unwrap();
        assert!(session.logged_in);

        let loaded = Session::load_from(&path).unwrap();
        assert!(loaded.logged_in);
        assert_eq!(loaded.username.as_deref(), Some("admin"));
    }

    #[test]
    fn wrong_credentials_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.yml");

        let err = Session::login_at("admin", "wrong", &path).unwrap_err();
        assert!(matches!(err, GraphbookError::Auth));
        assert!(!path.exists());

        let err = Session::login_at("root", "admin123", &path).unwrap_err();
        assert!(matches!(err, GraphbookError::Auth));
    }

    #[test]
    fn logout_removes_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.yml");

        Session::login_at("admin", "admin123", &path).unwrap();
        Session::logout_at(&path).unwrap();
        assert!(!path.exists());

        let loaded = Session::load_from(&path).unwrap();
        assert!(!loaded.logged_in);
    }
}
