use std::env;

use anyhow::Result;

use crate::reddit::client::RedditCredentials;

/// Community scanned when `subreddit_name` isn't set.
pub const DEFAULT_SUBREDDIT_NAME: &str = "synthesizers";

/// User-Agent sent when `REDDIT_USER_AGENT` isn't set. Reddit asks for a
/// unique, descriptive one per bot.
pub const DEFAULT_USER_AGENT: &str = "queuekeeper/0.1 (modqueue scanner)";

/// Central configuration loaded from environment variables.
///
/// Built once in `main` and handed to the scanner by value. The .env file
/// is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Subreddit whose moderation queue is scanned (`subreddit_name`)
    pub subreddit_name: String,
    /// When set, rules run and actions are printed but nothing is sent
    /// to Reddit (`dry_run=True`)
    pub dry_run: bool,
    pub reddit_client_id: String,
    pub reddit_client_secret: String,
    pub reddit_username: String,
    pub reddit_password: String,
    pub reddit_user_agent: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Only the subreddit and dry-run flag have defaults; the Reddit
    /// credentials are checked later by `require_reddit`, so commands that
    /// never touch the API work without them.
    pub fn load() -> Result<Self> {
        Ok(Self::from_lookup(|key| env::var(key).ok()))
    }

    /// Build a config from any key lookup. `load` uses the process
    /// environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            subreddit_name: lookup("subreddit_name")
                .unwrap_or_else(|| DEFAULT_SUBREDDIT_NAME.to_string()),
            dry_run: parse_dry_run(lookup("dry_run").as_deref()),
            reddit_client_id: lookup("REDDIT_CLIENT_ID").unwrap_or_default(),
            reddit_client_secret: lookup("REDDIT_CLIENT_SECRET").unwrap_or_default(),
            reddit_username: lookup("REDDIT_USERNAME").unwrap_or_default(),
            reddit_password: lookup("REDDIT_PASSWORD").unwrap_or_default(),
            reddit_user_agent: lookup("REDDIT_USER_AGENT")
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        }
    }

    /// Check that every Reddit credential is configured.
    /// Call this before any operation that logs in to Reddit.
    pub fn require_reddit(&self) -> Result<()> {
        let missing: Vec<&str> = [
            ("REDDIT_CLIENT_ID", &self.reddit_client_id),
            ("REDDIT_CLIENT_SECRET", &self.reddit_client_secret),
            ("REDDIT_USERNAME", &self.reddit_username),
            ("REDDIT_PASSWORD", &self.reddit_password),
        ]
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
        .collect();

        if !missing.is_empty() {
            anyhow::bail!(
                "{} not set. Add them to your .env file.\n\
                 Create a \"script\" app at https://www.reddit.com/prefs/apps for the moderator account.",
                missing.join(", ")
            );
        }
        Ok(())
    }

    pub fn reddit_credentials(&self) -> RedditCredentials {
        RedditCredentials {
            client_id: self.reddit_client_id.clone(),
            client_secret: self.reddit_client_secret.clone(),
            username: self.reddit_username.clone(),
            password: self.reddit_password.clone(),
            user_agent: self.reddit_user_agent.clone(),
        }
    }
}

/// Dry run only when the value is exactly `True`; anything else, including
/// `true` or `1`, means a live run.
pub fn parse_dry_run(value: Option<&str>) -> bool {
    value == Some("True")
}
