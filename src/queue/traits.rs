// Moderation queue client trait: the seam between rules and the platform.
//
// The production implementation talks to Reddit. Tests use an in-memory
// queue that records every approve/remove call.

use anyhow::Result;
use async_trait::async_trait;

use super::models::QueuePage;

/// What the scanner needs from the platform: read the queue, approve an
/// item, remove an item.
#[async_trait]
pub trait ModQueueClient: Send + Sync {
    /// Fetch one page of the moderation queue, starting after `after`
    /// (or from the top when `None`).
    async fn queue_page(&self, after: Option<&str>) -> Result<QueuePage>;

    /// Approve an item by its fullname.
    async fn approve(&self, fullname: &str) -> Result<()>;

    /// Remove an item by its fullname, optionally leaving a moderator note.
    async fn remove(&self, fullname: &str, mod_note: Option<&str>) -> Result<()>;
}
