use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Story;

/// The signed-in account, as returned by the login, signup and user endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub favorites: Vec<Story>,
    #[serde(default, rename = "stories")]
    pub own_stories: Vec<Story>,
    /// Not part of the user record; attached after login.
    #[serde(skip)]
    pub login_token: String,
}

impl User {
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.login_token = token.into();
        self
    }

    pub fn is_favorite(&self, story: &Story) -> bool {
        self.favorites.iter().any(|s| s.story_id == story.story_id)
    }

    pub fn is_user_own_story(&self, story: &Story) -> bool {
        story.username == self.username
    }

    /// Records a favorite the server has already accepted.
    pub fn mark_favorite(&mut self, story: &Story) {
        if !self.is_favorite(story) {
            self.favorites.push(story.clone());
        }
    }

    /// Drops a favorite the server has already removed.
    pub fn unmark_favorite(&mut self, story_id: &str) {
        self.favorites.retain(|s| s.story_id != story_id);
    }

    pub fn add_own_story(&mut self, story: &Story) {
        self.own_stories.insert(0, story.clone());
    }

    /// Forget a deleted story everywhere the user references it.
    pub fn forget_story(&mut self, story_id: &str) {
        self.unmark_favorite(story_id);
        self.own_stories.retain(|s| s.story_id != story_id);
    }
}
