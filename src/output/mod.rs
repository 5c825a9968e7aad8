// Output formatting: action lines and the rules overview.

pub mod terminal;

use chrono::{DateTime, Local};

/// Name printed in every action line.
pub const BOT_NAME: &str = "QueueKeeper";

/// Prefix marking an action that was only simulated.
pub const DRY_RUN_MARKER: &str = "*";

/// Format the line printed for one action.
///
/// `*[QueueKeeper][2024-05-01 12:00:00.000000] Approved: (abc123)`
/// The leading `*` is only present in dry-run mode.
pub fn format_action_line(dry_run: bool, at: DateTime<Local>, verb: &str, item_id: &str) -> String {
    let marker = if dry_run { DRY_RUN_MARKER } else { "" };
    format!(
        "{marker}[{BOT_NAME}][{}] {verb}: ({item_id})",
        at.format("%Y-%m-%d %H:%M:%S%.6f")
    )
}
