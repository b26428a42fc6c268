//! In-memory `StoryApi` used by the controller and command tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::StoryApi;
use crate::app::{Result, StoryError};
use crate::domain::{NewStory, Story, User};

#[derive(Default)]
pub struct FakeStoryApi {
    stories: Mutex<Vec<Story>>,
    users: Mutex<Vec<User>>,
    next_id: AtomicUsize,
    failing: AtomicBool,
    calls: Mutex<Vec<String>>,
}

impl FakeStoryApi {
    pub fn with_stories(stories: Vec<Story>) -> Self {
        let api = Self::default();
        *api.stories.lock().unwrap() = stories;
        api
    }

    pub fn with_user(self, user: User) -> Self {
        self.users.lock().unwrap().push(user);
        self
    }

    /// Every following call fails with a 500 until reset.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn stored_story_ids(&self) -> Vec<String> {
        self.stories
            .lock()
            .unwrap()
            .iter()
            .map(|s| s.story_id.clone())
            .collect()
    }

    pub fn favorite_ids(&self, username: &str) -> Vec<String> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .map(|u| u.favorites.iter().map(|s| s.story_id.clone()).collect())
            .unwrap_or_default()
    }

    fn record(&self, call: String) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoryError::Api {
                status: 500,
                message: "Server unavailable".into(),
            });
        }
        Ok(())
    }

    fn user_for_token(&self, token: &str) -> Result<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.login_token == token)
            .cloned()
            .ok_or(StoryError::Api {
                status: 401,
                message: "Invalid token".into(),
            })
    }

    fn story(&self, story_id: &str) -> Result<Story> {
        self.stories
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.story_id == story_id)
            .cloned()
            .ok_or(StoryError::Api {
                status: 404,
                message: format!("No story with id {}", story_id),
            })
    }
}

#[async_trait]
impl StoryApi for FakeStoryApi {
    async fn get_stories(&self) -> Result<Vec<Story>> {
        self.record("get_stories".into())?;
        Ok(self.stories.lock().unwrap().clone())
    }

    async fn add_story(&self, token: &str, story: &NewStory) -> Result<Story> {
        self.record(format!("add_story {}", story.title))?;
        let user = self.user_for_token(token)?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = Story {
            story_id: format!("new-{}", id),
            title: story.title.clone(),
            author: story.author.clone(),
            url: story.url.clone(),
            username: user.username,
            created_at: Some(chrono::Utc::now()),
        };
        self.stories.lock().unwrap().insert(0, stored.clone());
        Ok(stored)
    }

    async fn delete_story(&self, token: &str, story_id: &str) -> Result<()> {
        self.record(format!("delete_story {}", story_id))?;
        let user = self.user_for_token(token)?;
        let story = self.story(story_id)?;
        if story.username != user.username {
            return Err(StoryError::Api {
                status: 403,
                message: "You can only delete your own stories".into(),
            });
        }
        self.stories
            .lock()
            .unwrap()
            .retain(|s| s.story_id != story_id);
        Ok(())
    }

    async fn add_favorite(&self, token: &str, username: &str, story_id: &str) -> Result<()> {
        self.record(format!("add_favorite {} {}", username, story_id))?;
        self.user_for_token(token)?;
        let story = self.story(story_id)?;
        if let Some(user) = self
            .users
            .lock()
            .unwrap()
            .iter_mut()
            .find(|u| u.username == username)
        {
            user.mark_favorite(&story);
        }
        Ok(())
    }

    async fn remove_favorite(&self, token: &str, username: &str, story_id: &str) -> Result<()> {
        self.record(format!("remove_favorite {} {}", username, story_id))?;
        self.user_for_token(token)?;
        if let Some(user) = self
            .users
            .lock()
            .unwrap()
            .iter_mut()
            .find(|u| u.username == username)
        {
            user.unmark_favorite(story_id);
        }
        Ok(())
    }

    async fn login(&self, username: &str, password: &str) -> Result<User> {
        self.record(format!("login {}", username))?;
        if password != "hunter2" {
            return Err(StoryError::Api {
                status: 401,
                message: "Invalid password".into(),
            });
        }
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned()
            .ok_or(StoryError::Api {
                status: 404,
                message: format!("No user {}", username),
            })
    }

    async fn signup(&self, username: &str, _password: &str, name: &str) -> Result<User> {
        self.record(format!("signup {}", username))?;
        let user = User {
            username: username.into(),
            name: name.into(),
            created_at: Some(chrono::Utc::now()),
            favorites: Vec::new(),
            own_stories: Vec::new(),
            login_token: format!("token-{}", username),
        };
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn get_user(&self, username: &str, token: &str) -> Result<User> {
        self.record(format!("get_user {}", username))?;
        let user = self.user_for_token(token)?;
        if user.username != username {
            return Err(StoryError::Api {
                status: 401,
                message: "Token does not match user".into(),
            });
        }
        Ok(user)
    }
}
