// Submission rules: approve popular posts, remove reported unpopular ones.
//
// Rules are checked in order and the first match wins:
//   1. score >= 100 with fewer than 3 active reports -> approve
//   2. reported, score <= 0, upvote ratio < 0.5, at least 3 hours old -> remove
// Anything else stays in the queue for a human.

use chrono::{DateTime, Utc};

use super::{Action, RuleThresholds, LOW_RATIO_REMOVAL_NOTE};
use crate::queue::models::Submission;

/// Evaluate a submission against the thresholds at time `now`.
pub fn evaluate(
    submission: &Submission,
    thresholds: &RuleThresholds,
    now: DateTime<Utc>,
) -> Option<Action> {
    if should_approve(submission, thresholds) {
        return Some(Action::Approve);
    }

    if should_remove(submission, thresholds, now) {
        return Some(Action::Remove {
            mod_note: LOW_RATIO_REMOVAL_NOTE.to_string(),
        });
    }

    None
}

fn should_approve(submission: &Submission, thresholds: &RuleThresholds) -> bool {
    submission.score >= thresholds.approve_min_score
        && submission.num_reports < thresholds.approve_max_reports
}

fn should_remove(submission: &Submission, thresholds: &RuleThresholds, now: DateTime<Utc>) -> bool {
    submission.effective_report_count() >= thresholds.remove_min_reports
        && submission.score <= thresholds.remove_max_score
        && submission.upvote_ratio < thresholds.remove_max_upvote_ratio
        && submission.age_minutes(now) >= thresholds.remove_min_age_mins
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::models::Report;
    use chrono::Duration;

    fn reports(n: usize) -> Vec<Report> {
        (0..n)
            .map(|_| Report {
                reason: None,
                count: 1,
            })
            .collect()
    }

    fn removable(now: DateTime<Utc>) -> Submission {
        Submission {
            id: "p1".to_string(),
            fullname: "t3_p1".to_string(),
            created_at: now - Duration::minutes(200),
            score: 0,
            num_reports: 2,
            user_reports: reports(2),
            user_reports_dismissed: None,
            upvote_ratio: 0.3,
        }
    }

    #[test]
    fn test_remove_when_all_conditions_hold() {
        let now = Utc::now();
        let action = evaluate(&removable(now), &RuleThresholds::default(), now);
        assert_eq!(
            action,
            Some(Action::Remove {
                mod_note: LOW_RATIO_REMOVAL_NOTE.to_string()
            })
        );
    }

    #[test]
    fn test_remove_age_boundary_is_inclusive() {
        let now = Utc::now();
        let mut s = removable(now);
        s.created_at = now - Duration::minutes(180);
        assert!(evaluate(&s, &RuleThresholds::default(), now).is_some());

        s.created_at = now - Duration::minutes(179);
        assert_eq!(evaluate(&s, &RuleThresholds::default(), now), None);
    }

    #[test]
    fn test_remove_needs_ratio_strictly_below_half() {
        let now = Utc::now();
        let mut s = removable(now);
        s.upvote_ratio = 0.5;
        assert_eq!(evaluate(&s, &RuleThresholds::default(), now), None);
    }

    #[test]
    fn test_remove_needs_a_report() {
        let now = Utc::now();
        let mut s = removable(now);
        s.user_reports.clear();
        assert_eq!(evaluate(&s, &RuleThresholds::default(), now), None);
    }

    #[test]
    fn test_dismissed_reports_count_toward_removal() {
        let now = Utc::now();
        let mut s = removable(now);
        s.user_reports.clear();
        s.user_reports_dismissed = Some(reports(1));
        assert!(matches!(
            evaluate(&s, &RuleThresholds::default(), now),
            Some(Action::Remove { .. })
        ));
    }

    #[test]
    fn test_approve_wins_over_remove_fields() {
        // Approval ignores ratio, age and report history
        let now = Utc::now();
        let mut s = removable(now);
        s.score = 100;
        s.num_reports = 2;
        assert_eq!(
            evaluate(&s, &RuleThresholds::default(), now),
            Some(Action::Approve)
        );
    }

    #[test]
    fn test_too_many_reports_blocks_approval() {
        let now = Utc::now();
        let mut s = removable(now);
        s.score = 500;
        s.num_reports = 3;
        assert_eq!(evaluate(&s, &RuleThresholds::default(), now), None);
    }

    #[test]
    fn test_middling_score_is_left_alone() {
        let now = Utc::now();
        let mut s = removable(now);
        s.score = 50;
        assert_eq!(evaluate(&s, &RuleThresholds::default(), now), None);
    }
}
