// Moderation queue scan: walk the queue once and act on what the rules say.
//
// Pages are processed one at a time, in order, with every client call
// awaited inline. Approved and removed items drop out of the platform's
// queue, so a later scan won't see them again.
//
// Errors from the client are not caught. A failed page fetch or action
// aborts the scan; the scheduler's next run picks up where this one left off.

use anyhow::{Context, Result};
use chrono::{Local, Utc};
use tracing::{debug, info, warn};

use crate::output::format_action_line;
use crate::queue::models::{Comment, QueueItem, Submission};
use crate::queue::traits::ModQueueClient;
use crate::rules::{self, Action, RuleThresholds, APPROVED_LINK_DOMAINS};

/// An action the scanner took (or would have taken, in dry-run mode).
#[derive(Debug, Clone, PartialEq)]
pub struct ActionTaken {
    pub item_id: String,
    pub action: Action,
    /// True when the client call was skipped
    pub simulated: bool,
    /// The console line printed for this action
    pub line: String,
}

/// Tallies from one scan, for the closing log line.
#[derive(Debug, Clone, Default)]
pub struct ScanSummary {
    pub pages: usize,
    pub submissions: usize,
    pub comments: usize,
    pub actions: Vec<ActionTaken>,
}

impl ScanSummary {
    pub fn approved(&self) -> usize {
        self.actions
            .iter()
            .filter(|a| a.action == Action::Approve)
            .count()
    }

    pub fn removed(&self) -> usize {
        self.actions
            .iter()
            .filter(|a| matches!(a.action, Action::Remove { .. }))
            .count()
    }
}

/// Applies the queue rules to every item a `ModQueueClient` returns.
pub struct QueueScanner<'a> {
    client: &'a dyn ModQueueClient,
    dry_run: bool,
    thresholds: RuleThresholds,
    allowed_domains: &'a [&'a str],
}

impl<'a> QueueScanner<'a> {
    /// Scanner with the production thresholds and allow-list.
    pub fn new(client: &'a dyn ModQueueClient, dry_run: bool) -> Self {
        Self {
            client,
            dry_run,
            thresholds: RuleThresholds::default(),
            allowed_domains: APPROVED_LINK_DOMAINS,
        }
    }

    pub fn with_thresholds(mut self, thresholds: RuleThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn with_allowed_domains(mut self, allowed_domains: &'a [&'a str]) -> Self {
        self.allowed_domains = allowed_domains;
        self
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Walk the whole moderation queue once.
    pub async fn scan(&self) -> Result<ScanSummary> {
        let mut summary = ScanSummary::default();
        let mut after: Option<String> = None;

        loop {
            let page = self
                .client
                .queue_page(after.as_deref())
                .await
                .context("Failed to fetch moderation queue page")?;
            summary.pages += 1;

            debug!(
                page = summary.pages,
                items = page.items.len(),
                "Fetched moderation queue page"
            );

            for item in &page.items {
                self.process_item(item, &mut summary).await?;
            }

            // A page can be empty after unsupported kinds are dropped and
            // still carry a cursor, so only the cursor decides the end.
            match page.after {
                Some(next) if after.as_deref() != Some(next.as_str()) => after = Some(next),
                Some(next) => {
                    warn!(cursor = next.as_str(), "Modqueue repeated its cursor, stopping");
                    break;
                }
                None => break,
            }
        }

        info!(
            pages = summary.pages,
            submissions = summary.submissions,
            comments = summary.comments,
            approved = summary.approved(),
            removed = summary.removed(),
            dry_run = self.dry_run,
            "Moderation queue scan complete"
        );

        Ok(summary)
    }

    async fn process_item(&self, item: &QueueItem, summary: &mut ScanSummary) -> Result<()> {
        let action = match item {
            QueueItem::Submission(submission) => {
                summary.submissions += 1;
                self.evaluate_submission(submission)
            }
            QueueItem::Comment(comment) => {
                summary.comments += 1;
                self.evaluate_comment(comment)
            }
        };

        match action {
            Some(action) => {
                let line = self.apply(item, &action).await?;
                summary.actions.push(ActionTaken {
                    item_id: item.id().to_string(),
                    action,
                    simulated: self.dry_run,
                    line,
                });
            }
            None => debug!(
                id = item.id(),
                kind = item.kind(),
                created_at = %item.created_at(),
                "No rule matched"
            ),
        }

        Ok(())
    }

    fn evaluate_submission(&self, submission: &Submission) -> Option<Action> {
        rules::submission::evaluate(submission, &self.thresholds, Utc::now())
    }

    fn evaluate_comment(&self, comment: &Comment) -> Option<Action> {
        rules::comment::evaluate(comment, self.allowed_domains)
    }

    /// Perform the action (unless dry-running) and print its line.
    async fn apply(&self, item: &QueueItem, action: &Action) -> Result<String> {
        if !self.dry_run {
            match action {
                Action::Approve => self
                    .client
                    .approve(item.fullname())
                    .await
                    .with_context(|| format!("Failed to approve {}", item.fullname()))?,
                Action::Remove { mod_note } => self
                    .client
                    .remove(item.fullname(), Some(mod_note))
                    .await
                    .with_context(|| format!("Failed to remove {}", item.fullname()))?,
            }
        }

        let line = format_action_line(self.dry_run, Local::now(), action.verb(), item.id());
        println!("{line}");
        Ok(line)
    }
}
