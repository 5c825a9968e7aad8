// Serde types for Reddit listings and their conversion into queue items.
//
// A listing is `{"kind": "Listing", "data": {"after": ..., "children": [...]}}`
// where each child is `{"kind": "t3" | "t1" | ..., "data": {...}}`. Only
// links (t3) and comments (t1) can sit in a moderation queue; anything
// else is skipped.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::queue::models::{Comment, QueueItem, QueuePage, Report, Submission};

/// Thing kind prefix for comments.
pub const KIND_COMMENT: &str = "t1";
/// Thing kind prefix for links (submissions).
pub const KIND_LINK: &str = "t3";

/// Top-level listing envelope.
#[derive(Debug, Deserialize)]
pub struct Listing {
    pub data: ListingData,
}

#[derive(Debug, Deserialize)]
pub struct ListingData {
    pub after: Option<String>,
    #[serde(default)]
    pub children: Vec<Thing>,
}

/// A listing child. `data` stays untyped until we know the kind.
#[derive(Debug, Deserialize)]
pub struct Thing {
    pub kind: String,
    pub data: serde_json::Value,
}

/// Fields we read from a t3 (link) thing.
#[derive(Debug, Deserialize)]
pub struct LinkData {
    pub id: String,
    pub name: String,
    pub created_utc: f64,
    pub score: i64,
    /// Null unless the caller moderates the subreddit
    #[serde(default)]
    pub num_reports: Option<i64>,
    #[serde(default)]
    pub user_reports: Vec<RawReport>,
    /// Missing entirely on some listings; keep that distinct from `[]`
    #[serde(default)]
    pub user_reports_dismissed: Option<Vec<RawReport>>,
    #[serde(default)]
    pub upvote_ratio: f64,
}

/// Fields we read from a t1 (comment) thing.
#[derive(Debug, Deserialize)]
pub struct CommentData {
    pub id: String,
    pub name: String,
    pub created_utc: f64,
    #[serde(default)]
    pub body: String,
}

/// Reddit sends reports as heterogeneous arrays: `["reason", count, ...]`.
/// Trailing flags vary between API versions, so only the first two
/// positions are read.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct RawReport(pub Vec<serde_json::Value>);

impl From<RawReport> for Report {
    fn from(raw: RawReport) -> Self {
        let reason = raw.0.first().and_then(|v| v.as_str()).map(String::from);
        let count = raw.0.get(1).and_then(|v| v.as_i64()).unwrap_or(1);
        Report { reason, count }
    }
}

impl LinkData {
    pub fn into_submission(self) -> Result<Submission> {
        Ok(Submission {
            created_at: from_epoch_seconds(self.created_utc)
                .with_context(|| format!("Bad created_utc on {}", self.name))?,
            id: self.id,
            fullname: self.name,
            score: self.score,
            num_reports: self.num_reports.unwrap_or(0),
            user_reports: self.user_reports.into_iter().map(Report::from).collect(),
            user_reports_dismissed: self
                .user_reports_dismissed
                .map(|reports| reports.into_iter().map(Report::from).collect()),
            upvote_ratio: self.upvote_ratio,
        })
    }
}

impl CommentData {
    pub fn into_comment(self) -> Result<Comment> {
        Ok(Comment {
            created_at: from_epoch_seconds(self.created_utc)
                .with_context(|| format!("Bad created_utc on {}", self.name))?,
            id: self.id,
            fullname: self.name,
            body: self.body,
        })
    }
}

impl Thing {
    /// Convert into a queue item. `Ok(None)` for kinds a moderation queue
    /// shouldn't contain.
    pub fn into_queue_item(self) -> Result<Option<QueueItem>> {
        match self.kind.as_str() {
            KIND_LINK => {
                let link: LinkData =
                    serde_json::from_value(self.data).context("Failed to parse link in listing")?;
                Ok(Some(QueueItem::Submission(link.into_submission()?)))
            }
            KIND_COMMENT => {
                let comment: CommentData = serde_json::from_value(self.data)
                    .context("Failed to parse comment in listing")?;
                Ok(Some(QueueItem::Comment(comment.into_comment()?)))
            }
            other => {
                debug!(kind = other, "Skipping unsupported thing kind in modqueue");
                Ok(None)
            }
        }
    }
}

impl Listing {
    pub fn into_page(self) -> Result<QueuePage> {
        let mut items = Vec::with_capacity(self.data.children.len());
        for thing in self.data.children {
            if let Some(item) = thing.into_queue_item()? {
                items.push(item);
            }
        }
        Ok(QueuePage {
            items,
            after: self.data.after,
        })
    }
}

fn from_epoch_seconds(secs: f64) -> Result<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis((secs * 1000.0).round() as i64)
        .ok_or_else(|| anyhow::anyhow!("timestamp out of range: {secs}"))
}
