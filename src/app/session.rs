use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::app::{Result, StoryError};
use crate::domain::User;

/// Credentials remembered between runs so the user stays logged in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub token: String,
}

impl Session {
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            token: user.login_token.clone(),
        }
    }

    /// Returns `None` when nobody is logged in.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path)?;
        let session = toml::from_str(&content)
            .map_err(|e| StoryError::Config(format!("Corrupt session file {}: {}", path.display(), e)))?;
        Ok(Some(session))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string(self)
            .map_err(|e| StoryError::Config(format!("Could not encode session: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn clear(path: &Path) -> Result<()> {
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| StoryError::Config("Could not find data directory".into()))?;
        Ok(data_dir.join("storyboard").join("session.toml"))
    }
}
