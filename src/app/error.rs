use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoryError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed API response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("You must be logged in to do that")]
    NotLoggedIn,

    #[error("Story not found: {0}")]
    StoryNotFound(String),

    #[error("{0}")]
    InvalidInput(String),
}

impl StoryError {
    /// Text shown in the page's error banner when an action fails.
    pub fn user_message(&self) -> String {
        match self {
            StoryError::Http(e) if e.is_timeout() => {
                "The story server took too long to respond. Please try again.".to_string()
            }
            StoryError::Http(_) => "Could not reach the story server.".to_string(),
            StoryError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoryError>;
