use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::api::StoryApi;
use crate::app::{Result, StoryError};
use crate::config::ApiConfig;
use crate::domain::{NewStory, Story, User};

pub struct HttpStoryApi {
    client: Client,
    base_url: Url,
    stories_limit: Option<usize>,
}

#[derive(Deserialize)]
struct StoriesResponse {
    stories: Vec<Story>,
}

#[derive(Deserialize)]
struct StoryResponse {
    story: Story,
}

#[derive(Deserialize)]
struct UserResponse {
    user: User,
}

#[derive(Deserialize)]
struct AuthResponse {
    token: String,
    user: User,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Serialize)]
struct TokenBody<'a> {
    token: &'a str,
}

#[derive(Serialize)]
struct StoryFields<'a> {
    title: &'a str,
    author: &'a str,
    url: &'a str,
}

#[derive(Serialize)]
struct NewStoryBody<'a> {
    token: &'a str,
    story: StoryFields<'a>,
}

#[derive(Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

#[derive(Serialize)]
struct CredentialsBody<'a> {
    user: Credentials<'a>,
}

impl HttpStoryApi {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .brotli(true)
            .user_agent(config.user_agent.as_str())
            .build()?;

        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(StoryError::Config(format!(
                "API base URL cannot have paths: {}",
                config.base_url
            )));
        }

        Ok(Self {
            client,
            base_url,
            stories_limit: config.stories_limit,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`: the base url always has path segments.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn stories_url(&self) -> Url {
        let mut url = self.endpoint(&["stories"]);
        if let Some(limit) = self.stories_limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        }
        url
    }

    fn favorite_url(&self, username: &str, story_id: &str) -> Url {
        self.endpoint(&["users", username, "favorites", story_id])
    }

    fn json<T: Serialize>(request: RequestBuilder, body: &T) -> Result<RequestBuilder> {
        Ok(request
            .header(CONTENT_TYPE, "application/json")
            .body(serde_json::to_vec(body)?))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Vec<u8>> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        if !status.is_success() {
            return Err(api_error(status, &body));
        }

        Ok(body)
    }
}

fn api_error(status: StatusCode, body: &[u8]) -> StoryError {
    let message = serde_json::from_slice::<ErrorResponse>(body)
        .map(|r| r.error.message)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("Unexpected response")
                .to_string()
        });

    StoryError::Api {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl StoryApi for HttpStoryApi {
    async fn get_stories(&self) -> Result<Vec<Story>> {
        let body = self.send(self.client.get(self.stories_url())).await?;
        let response: StoriesResponse = serde_json::from_slice(&body)?;
        tracing::debug!("Fetched {} stories", response.stories.len());
        Ok(response.stories)
    }

    async fn add_story(&self, token: &str, story: &NewStory) -> Result<Story> {
        let payload = NewStoryBody {
            token,
            story: StoryFields {
                title: &story.title,
                author: &story.author,
                url: &story.url,
            },
        };
        let request = Self::json(self.client.post(self.endpoint(&["stories"])), &payload)?;
        let body = self.send(request).await?;
        let response: StoryResponse = serde_json::from_slice(&body)?;
        Ok(response.story)
    }

    async fn delete_story(&self, token: &str, story_id: &str) -> Result<()> {
        let request = Self::json(
            self.client.delete(self.endpoint(&["stories", story_id])),
            &TokenBody { token },
        )?;
        self.send(request).await?;
        Ok(())
    }

    async fn add_favorite(&self, token: &str, username: &str, story_id: &str) -> Result<()> {
        let request = Self::json(
            self.client.post(self.favorite_url(username, story_id)),
            &TokenBody { token },
        )?;
        self.send(request).await?;
        Ok(())
    }

    async fn remove_favorite(&self, token: &str, username: &str, story_id: &str) -> Result<()> {
        let request = Self::json(
            self.client.delete(self.favorite_url(username, story_id)),
            &TokenBody { token },
        )?;
        self.send(request).await?;
        Ok(())
    }

    async fn login(&self, username: &str, password: &str) -> Result<User> {
        let payload = CredentialsBody {
            user: Credentials {
                username,
                password,
                name: None,
            },
        };
        let request = Self::json(self.client.post(self.endpoint(&["login"])), &payload)?;
        let body = self.send(request).await?;
        let response: AuthResponse = serde_json::from_slice(&body)?;
        Ok(response.user.with_token(response.token))
    }

    async fn signup(&self, username: &str, password: &str, name: &str) -> Result<User> {
        let payload = CredentialsBody {
            user: Credentials {
                username,
                password,
                name: Some(name),
            },
        };
        let request = Self::json(self.client.post(self.endpoint(&["signup"])), &payload)?;
        let body = self.send(request).await?;
        let response: AuthResponse = serde_json::from_slice(&body)?;
        Ok(response.user.with_token(response.token))
    }

    async fn get_user(&self, username: &str, token: &str) -> Result<User> {
        let mut url = self.endpoint(&["users", username]);
        url.query_pairs_mut().append_pair("token", token);
        let body = self.send(self.client.get(url)).await?;
        let response: UserResponse = serde_json::from_slice(&body)?;
        Ok(response.user.with_token(token))
    }
}
