use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub story_id: String,
    pub title: String,
    pub author: String,
    pub url: String,
    pub username: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Story {
    /// Host part of the story link, e.g. `example.com` for `https://example.com/x`.
    ///
    /// Falls back to the raw url when it cannot be parsed or has no host.
    pub fn host_name(&self) -> String {
        Url::parse(&self.url)
            .ok()
            .and_then(|parsed| parsed.host_str().map(String::from))
            .unwrap_or_else(|| self.url.clone())
    }
}

/// Fields read from the submission form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStory {
    pub title: String,
    pub author: String,
    pub url: String,
    pub username: String,
}

impl NewStory {
    /// Trims every field and rejects records the server would refuse.
    pub fn validated(self) -> crate::app::Result<Self> {
        let story = Self {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            url: self.url.trim().to_string(),
            username: self.username,
        };

        if story.title.is_empty() {
            return Err(crate::app::StoryError::InvalidInput(
                "Title is required".into(),
            ));
        }
        if story.author.is_empty() {
            return Err(crate::app::StoryError::InvalidInput(
                "Author is required".into(),
            ));
        }
        Url::parse(&story.url)?;

        Ok(story)
    }
}
