// Queue rules: decide what happens to each queued item.
//
// Everything in here is pure: given an item (and the current time for
// submissions), return the action to take. The scanner carries the
// actions out against the client.

pub mod comment;
pub mod submission;

/// Moderator note attached when a submission is removed for reports and
/// a low upvote ratio.
pub const LOW_RATIO_REMOVAL_NOTE: &str = "Autoremoved due to user reports and low upvote ratio.";

/// Link prefixes that get a spam-filtered comment approved.
pub const APPROVED_LINK_DOMAINS: &[&str] = &["https://a.co/"];

/// What the rules decided for one item.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Approve,
    Remove { mod_note: String },
}

impl Action {
    /// Past-tense verb printed in the action line.
    pub fn verb(&self) -> &'static str {
        match self {
            Action::Approve => "Approved",
            Action::Remove { .. } => "Removed",
        }
    }
}

/// Thresholds for the submission rules.
///
/// `Default` carries the production values.
#[derive(Debug, Clone)]
pub struct RuleThresholds {
    /// Approve at or above this score (default 100)
    pub approve_min_score: i64,
    /// ...as long as active reports stay below this (default 3)
    pub approve_max_reports: i64,
    /// Remove only once the post is at least this old (default 180 minutes)
    pub remove_min_age_mins: f64,
    /// Remove needs at least this many reports, dismissed included (default 1)
    pub remove_min_reports: usize,
    /// Remove at or below this score (default 0)
    pub remove_max_score: i64,
    /// Remove below this upvote ratio (default 0.5)
    pub remove_max_upvote_ratio: f64,
}

impl Default for RuleThresholds {
    fn default() -> Self {
        Self {
            approve_min_score: 100,
            approve_max_reports: 3,
            remove_min_age_mins: 60.0 * 3.0,
            remove_min_reports: 1,
            remove_max_score: 0,
            remove_max_upvote_ratio: 0.5,
        }
    }
}
