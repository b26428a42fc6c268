use std::path::PathBuf;
use std::sync::Arc;

use crate::api::http_api::HttpStoryApi;
use crate::api::StoryApi;
use crate::app::error::{Result, StoryError};
use crate::app::Session;
use crate::config::Config;

pub struct AppContext {
    pub config: Config,
    pub api: Arc<dyn StoryApi + Send + Sync>,
    pub session_path: PathBuf,
}

impl AppContext {
    pub fn new(config_path: Option<PathBuf>) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::load_from(&path),
            None => Config::load(),
        }
        .map_err(|e| StoryError::Config(e.to_string()))?;

        let api: Arc<dyn StoryApi + Send + Sync> = Arc::new(HttpStoryApi::new(&config.api)?);
        let session_path = Session::default_path()?;

        Ok(Self {
            config,
            api,
            session_path,
        })
    }

    pub fn with_api(api: Arc<dyn StoryApi + Send + Sync>, session_path: PathBuf) -> Self {
        Self {
            config: Config::default(),
            api,
            session_path,
        }
    }

    pub fn session(&self) -> Result<Option<Session>> {
        Session::load(&self.session_path)
    }
}
