use std::sync::Arc;

use crate::api::StoryApi;
use crate::app::{Result, Session, StoryError};
use crate::domain::{NewStory, Story, StoryList, User};
use crate::page::{ListView, Page, PageEvent};
use crate::render::generate_story_markup;

/// Model the controller owns: the story list and whoever is logged in.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub story_list: StoryList,
    pub current_user: Option<User>,
}

/// Drives the page: loads stories, renders them, and turns user events into
/// remote calls. Each action either completes or leaves model and page as
/// they were, with the failure shown in the error banner.
pub struct PageController {
    api: Arc<dyn StoryApi + Send + Sync>,
    pub state: AppState,
    pub page: Page,
}

impl PageController {
    pub fn new(api: Arc<dyn StoryApi + Send + Sync>) -> Self {
        Self {
            api,
            state: AppState::default(),
            page: Page::new(),
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.state.current_user.as_ref()
    }

    /// Fetch every story, drop the loading message and render the list.
    pub async fn get_and_show_stories_on_start(&mut self) -> Result<()> {
        tracing::debug!("get_and_show_stories_on_start");

        let result = self.api.get_stories().await;
        self.page.remove_loading_msg();

        let stories = self.report("load stories", result)?;
        tracing::info!("Loaded {} stories", stories.len());
        self.state.story_list = StoryList::new(stories);
        self.put_stories_on_page();
        Ok(())
    }

    /// Re-render the visible list from the model. Safe to call repeatedly.
    pub fn put_stories_on_page(&mut self) {
        tracing::debug!("put_stories_on_page");

        self.page.empty_list();

        let user = self.state.current_user.as_ref();
        let markups: Vec<_> = self
            .visible_stories()
            .iter()
            .map(|story| generate_story_markup(story, user))
            .collect();
        for markup in markups {
            self.page.append(markup);
        }

        self.page.show_list();
    }

    /// Stories belonging in the current view, in display order.
    pub fn visible_stories(&self) -> &[Story] {
        match (self.page.view, self.state.current_user.as_ref()) {
            (ListView::Favorites, Some(user)) => &user.favorites,
            (ListView::OwnStories, Some(user)) => &user.own_stories,
            _ => &self.state.story_list.stories,
        }
    }

    pub fn show_view(&mut self, view: ListView) {
        self.page.view = view;
        self.put_stories_on_page();
    }

    pub fn open_submit_form(&mut self) {
        self.page.submit_form.visible = true;
    }

    /// Post the submission form as a new story and put it at the top.
    pub async fn new_story_submission(&mut self) -> Result<Story> {
        tracing::debug!("new_story_submission");

        let result = self.submit_story().await;
        let story = self.report("submit story", result)?;

        self.page.submit_form.visible = false;
        self.page.submit_form.reset();
        Ok(story)
    }

    async fn submit_story(&mut self) -> Result<Story> {
        let user = self.state.current_user.as_ref().ok_or(StoryError::NotLoggedIn)?;
        let form = &self.page.submit_form;
        let new_story = NewStory {
            title: form.title.clone(),
            author: form.author.clone(),
            url: form.url.clone(),
            username: user.username.clone(),
        }
        .validated()?;

        let story = self.api.add_story(&user.login_token, &new_story).await?;
        tracing::info!("Added story {} ({})", story.story_id, story.title);

        self.state.story_list.prepend(story.clone());
        if let Some(user) = self.state.current_user.as_mut() {
            user.add_own_story(&story);
        }

        if self.page.view != ListView::Favorites {
            let markup = generate_story_markup(&story, self.state.current_user.as_ref());
            self.page.prepend(markup);
        }

        Ok(story)
    }

    /// Flip the favorite state of a story. Returns whether it is now a favorite.
    pub async fn toggle_favorite_story(&mut self, story_id: &str) -> Result<bool> {
        tracing::debug!("toggle_favorite_story {}", story_id);

        let result = self.toggle_favorite(story_id).await;
        self.report("toggle favorite", result)
    }

    async fn toggle_favorite(&mut self, story_id: &str) -> Result<bool> {
        let user = self.state.current_user.as_ref().ok_or(StoryError::NotLoggedIn)?;
        let story = self
            .find_story(story_id)
            .cloned()
            .ok_or_else(|| StoryError::StoryNotFound(story_id.to_string()))?;

        let was_favorite = user.is_favorite(&story);
        if was_favorite {
            self.api
                .remove_favorite(&user.login_token, &user.username, story_id)
                .await?;
        } else {
            self.api
                .add_favorite(&user.login_token, &user.username, story_id)
                .await?;
        }

        if let Some(user) = self.state.current_user.as_mut() {
            if was_favorite {
                user.unmark_favorite(story_id);
            } else {
                user.mark_favorite(&story);
            }
        }
        tracing::info!(
            "{} favorite {}",
            if was_favorite { "Removed" } else { "Added" },
            story_id
        );

        if self.page.view == ListView::Favorites {
            // The favorites view lists exactly the user's favorites.
            self.put_stories_on_page();
        } else {
            let markup = generate_story_markup(&story, self.state.current_user.as_ref());
            if !self.page.replace(markup) {
                tracing::debug!("Story {} is not on the page", story_id);
            }
        }

        Ok(!was_favorite)
    }

    /// Delete one of the user's stories, then re-render the list.
    pub async fn remove_story(&mut self, story_id: &str) -> Result<()> {
        tracing::debug!("remove_story {}", story_id);

        let result = self.delete_story(story_id).await;
        self.report("delete story", result)
    }

    async fn delete_story(&mut self, story_id: &str) -> Result<()> {
        let user = self.state.current_user.as_ref().ok_or(StoryError::NotLoggedIn)?;

        self.api.delete_story(&user.login_token, story_id).await?;
        tracing::info!("Deleted story {}", story_id);

        self.state.story_list.remove(story_id);
        if let Some(user) = self.state.current_user.as_mut() {
            user.forget_story(story_id);
        }

        self.put_stories_on_page();
        Ok(())
    }

    /// Delegated event entry point for the list container, form and nav.
    pub async fn handle(&mut self, event: PageEvent) -> Result<()> {
        match event {
            PageEvent::Submit => self.new_story_submission().await.map(|_| ()),
            PageEvent::StarClicked { story_id } => {
                self.toggle_favorite_story(&story_id).await.map(|_| ())
            }
            PageEvent::TrashClicked { story_id } => self.remove_story(&story_id).await,
            PageEvent::Navigate(view) => {
                self.show_view(view);
                Ok(())
            }
            PageEvent::OpenSubmitForm => {
                self.open_submit_form();
                Ok(())
            }
        }
    }

    pub async fn login(&mut self, username: &str, password: &str) -> Result<()> {
        tracing::debug!("login {}", username);

        let result = self.api.login(username, password).await;
        let user = self.report("log in", result)?;
        self.set_current_user(user);
        Ok(())
    }

    pub async fn signup(&mut self, username: &str, password: &str, name: &str) -> Result<()> {
        tracing::debug!("signup {}", username);

        let result = self.api.signup(username, password, name).await;
        let user = self.report("sign up", result)?;
        self.set_current_user(user);
        Ok(())
    }

    /// Log back in from remembered credentials.
    pub async fn restore_user(&mut self, session: &Session) -> Result<()> {
        tracing::debug!("restore_user {}", session.username);

        let result = self.api.get_user(&session.username, &session.token).await;
        let user = self.report("restore login", result)?;
        self.set_current_user(user);
        Ok(())
    }

    pub fn logout(&mut self) {
        self.state.current_user = None;
        self.page.logged_in_as = None;
        self.page.view = ListView::All;
        self.put_stories_on_page();
    }

    fn set_current_user(&mut self, user: User) {
        tracing::info!("Logged in as {}", user.username);
        self.page.logged_in_as = Some(user.username.clone());
        self.state.current_user = Some(user);
        // Stars and trash cans depend on who is logged in.
        if self.page.list_visible {
            self.put_stories_on_page();
        }
    }

    fn find_story(&self, story_id: &str) -> Option<&Story> {
        self.state.story_list.find(story_id).or_else(|| {
            self.state.current_user.as_ref().and_then(|user| {
                user.favorites
                    .iter()
                    .chain(user.own_stories.iter())
                    .find(|s| s.story_id == story_id)
            })
        })
    }

    /// Error boundary shared by every action.
    fn report<T>(&mut self, action: &str, result: Result<T>) -> Result<T> {
        match result {
            Ok(value) => {
                self.page.clear_error();
                Ok(value)
            }
            Err(e) => {
                tracing::warn!("Failed to {}: {}", action, e);
                self.page.show_error(e.user_message());
                Err(e)
            }
        }
    }
}
