// Reddit OAuth client: script-app login plus the three moderation calls
// the scanner needs.
//
// Authentication uses the password grant for "script" apps: client id and
// secret as HTTP basic auth, the moderator account's username and password
// in the form body. The bearer token lasts an hour, far longer than a scan.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::listing::Listing;
use super::rate_limiter::{RateLimiter, REDDIT_REQUESTS_PER_MINUTE};
use crate::queue::models::QueuePage;
use crate::queue::traits::ModQueueClient;

/// Token endpoint for the OAuth password grant.
pub const DEFAULT_TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";

/// Base URL for authenticated API calls.
pub const DEFAULT_OAUTH_API_URL: &str = "https://oauth.reddit.com";

/// Reddit's maximum listing page size.
pub const MODQUEUE_PAGE_LIMIT: u32 = 100;

/// Credentials for a Reddit "script" app acting as a moderator account.
#[derive(Debug, Clone)]
pub struct RedditCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub username: String,
    pub password: String,
    pub user_agent: String,
}

/// Authenticated client scoped to one subreddit's moderation queue.
pub struct RedditClient {
    client: reqwest::Client,
    api_url: String,
    subreddit: String,
    access_token: String,
    rate_limiter: RateLimiter,
}

impl RedditClient {
    /// Log in against Reddit's production endpoints.
    pub async fn connect(credentials: &RedditCredentials, subreddit: &str) -> Result<Self> {
        Self::connect_to(
            credentials,
            subreddit,
            DEFAULT_TOKEN_URL,
            DEFAULT_OAUTH_API_URL,
        )
        .await
    }

    /// Log in against explicit token and API endpoints.
    pub async fn connect_to(
        credentials: &RedditCredentials,
        subreddit: &str,
        token_url: &str,
        api_url: &str,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(credentials.user_agent.as_str())
            .build()
            .context("Failed to build HTTP client")?;

        let rate_limiter = RateLimiter::per_minute(REDDIT_REQUESTS_PER_MINUTE);
        rate_limiter.acquire().await;

        let response = client
            .post(token_url)
            .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
            .form(&[
                ("grant_type", "password"),
                ("username", credentials.username.as_str()),
                ("password", credentials.password.as_str()),
            ])
            .send()
            .await
            .context("Reddit token request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Reddit token endpoint returned {status}: {body}");
        }

        let token: TokenResponse = response
            .json()
            .await
            .context("Failed to parse Reddit token response")?;

        // Bad credentials come back as 200 with an error field
        let access_token = match (token.access_token, token.error) {
            (Some(access_token), _) => access_token,
            (None, Some(error)) => anyhow::bail!("Reddit login failed: {error}"),
            (None, None) => anyhow::bail!("Reddit token response had no access_token"),
        };

        info!(
            username = credentials.username.as_str(),
            subreddit = subreddit,
            "Logged in to Reddit"
        );

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            subreddit: subreddit.to_string(),
            access_token,
            rate_limiter,
        })
    }

    pub fn subreddit(&self) -> &str {
        &self.subreddit
    }

    /// Authenticated GET, deserializing the JSON response.
    async fn get_json<T: DeserializeOwned>(&self, path: &str, params: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}{}", self.api_url, path);
        debug!(path = path, "Reddit GET request");

        self.rate_limiter.acquire().await;
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(params)
            .send()
            .await
            .with_context(|| format!("Reddit request failed: GET {path}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Reddit GET {path} returned {status}: {body}");
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to deserialize GET {path} response"))
    }

    /// Authenticated form POST. The response body is ignored on success.
    async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Result<()> {
        let url = format!("{}{}", self.api_url, path);
        debug!(path = path, "Reddit POST request");

        self.rate_limiter.acquire().await;
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .form(form)
            .send()
            .await
            .with_context(|| format!("Reddit request failed: POST {path}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Reddit POST {path} returned {status}: {body}");
        }

        Ok(())
    }

    /// Attach a free-text moderator note to an already removed item.
    async fn add_removal_note(&self, fullname: &str, mod_note: &str) -> Result<()> {
        let payload = serde_json::to_string(&RemovalReasonPayload {
            item_ids: vec![fullname],
            mod_note,
            reason_id: None,
        })?;
        self.post_form("/api/v1/modactions/removal_reasons", &[("json", payload.as_str())])
            .await
    }
}

#[async_trait]
impl ModQueueClient for RedditClient {
    async fn queue_page(&self, after: Option<&str>) -> Result<QueuePage> {
        let path = format!("/r/{}/about/modqueue", self.subreddit);
        let limit = MODQUEUE_PAGE_LIMIT.to_string();

        let mut params = vec![("limit", limit.as_str()), ("raw_json", "1")];
        if let Some(after) = after {
            params.push(("after", after));
        }

        let listing: Listing = self.get_json(&path, &params).await?;
        listing.into_page()
    }

    async fn approve(&self, fullname: &str) -> Result<()> {
        self.post_form("/api/approve", &[("id", fullname)]).await
    }

    async fn remove(&self, fullname: &str, mod_note: Option<&str>) -> Result<()> {
        self.post_form("/api/remove", &[("id", fullname), ("spam", "false")])
            .await?;

        if let Some(note) = mod_note.filter(|n| !n.is_empty()) {
            self.add_removal_note(fullname, note).await?;
        }

        Ok(())
    }
}

// -- Serde types for OAuth and mod actions --

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    error: Option<String>,
}

/// Body of `/api/v1/modactions/removal_reasons`, sent JSON-encoded in a
/// `json` form field.
#[derive(Debug, Serialize)]
pub struct RemovalReasonPayload<'a> {
    pub item_ids: Vec<&'a str>,
    pub mod_note: &'a str,
    pub reason_id: Option<&'a str>,
}
