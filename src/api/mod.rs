pub mod http_api;

#[cfg(test)]
pub mod fake;

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::{NewStory, Story, User};

/// The remote story service. It owns storage, identity and favorites;
/// callers keep their in-memory model in step with what it confirms.
#[async_trait]
pub trait StoryApi {
    async fn get_stories(&self) -> Result<Vec<Story>>;

    /// Returns the stored story with its server-assigned id.
    async fn add_story(&self, token: &str, story: &NewStory) -> Result<Story>;

    async fn delete_story(&self, token: &str, story_id: &str) -> Result<()>;

    async fn add_favorite(&self, token: &str, username: &str, story_id: &str) -> Result<()>;

    async fn remove_favorite(&self, token: &str, username: &str, story_id: &str) -> Result<()>;

    /// Returns the user with `login_token` set.
    async fn login(&self, username: &str, password: &str) -> Result<User>;

    /// Returns the user with `login_token` set.
    async fn signup(&self, username: &str, password: &str, name: &str) -> Result<User>;

    async fn get_user(&self, username: &str, token: &str) -> Result<User>;
}
