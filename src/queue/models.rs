// Queue item models: what the moderation queue hands us to evaluate.
//
// Items are fetched fresh on every scan and dropped once their rules have
// run. Nothing here is persisted.

use chrono::{DateTime, Utc};

/// A single report raised against a queued item.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Free-text reason, if the reporter gave one
    pub reason: Option<String>,
    /// How many times this reason was reported
    pub count: i64,
}

/// A link or self post waiting in the queue.
#[derive(Debug, Clone)]
pub struct Submission {
    /// Short id as shown to moderators (e.g. `abc123`)
    pub id: String,
    /// Type-prefixed id the API acts on (e.g. `t3_abc123`)
    pub fullname: String,
    pub created_at: DateTime<Utc>,
    /// Net votes (upvotes minus downvotes)
    pub score: i64,
    /// Count of currently active reports
    pub num_reports: i64,
    pub user_reports: Vec<Report>,
    /// Absent when the platform doesn't send dismissed-report data at all,
    /// which is different from an empty list.
    pub user_reports_dismissed: Option<Vec<Report>>,
    /// Fraction of votes that are upvotes, 0.0 to 1.0
    pub upvote_ratio: f64,
}

impl Submission {
    /// Reports counted by the removal rule: active user reports plus any
    /// dismissed ones, so a moderator dismissing a report doesn't hide it.
    pub fn effective_report_count(&self) -> usize {
        let dismissed = self.user_reports_dismissed.as_ref().map_or(0, Vec::len);
        self.user_reports.len() + dismissed
    }

    /// Minutes since the submission was created, measured against `now`.
    ///
    /// `now` comes from the local clock while `created_at` comes from the
    /// platform, so host clock skew shifts this value directly.
    pub fn age_minutes(&self, now: DateTime<Utc>) -> f64 {
        let age = now.signed_duration_since(self.created_at);
        age.num_milliseconds() as f64 / 60_000.0
    }
}

/// A comment waiting in the queue.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: String,
    pub fullname: String,
    pub created_at: DateTime<Utc>,
    pub body: String,
}

/// Anything the moderation queue can contain.
#[derive(Debug, Clone)]
pub enum QueueItem {
    Submission(Submission),
    Comment(Comment),
}

impl QueueItem {
    pub fn id(&self) -> &str {
        match self {
            QueueItem::Submission(s) => &s.id,
            QueueItem::Comment(c) => &c.id,
        }
    }

    pub fn fullname(&self) -> &str {
        match self {
            QueueItem::Submission(s) => &s.fullname,
            QueueItem::Comment(c) => &c.fullname,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            QueueItem::Submission(s) => s.created_at,
            QueueItem::Comment(c) => c.created_at,
        }
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            QueueItem::Submission(_) => "submission",
            QueueItem::Comment(_) => "comment",
        }
    }
}

/// One page of the moderation queue.
#[derive(Debug, Clone, Default)]
pub struct QueuePage {
    pub items: Vec<QueueItem>,
    /// Cursor for the next page; `None` once the queue is exhausted
    pub after: Option<String>,
}
