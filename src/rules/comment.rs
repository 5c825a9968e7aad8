// Comment rules: approve spam-filtered comments that link an allowed domain.
//
// Matching is a plain case-sensitive substring check against the body. No
// URL parsing, so `HTTPS://A.CO/` or a redirect wrapper won't match.

use super::Action;
use crate::queue::models::Comment;

/// Evaluate a comment against the allow-listed link prefixes.
pub fn evaluate(comment: &Comment, allowed_domains: &[&str]) -> Option<Action> {
    if links_allowed_domain(&comment.body, allowed_domains) {
        Some(Action::Approve)
    } else {
        None
    }
}

/// True when `body` contains any of the allowed prefixes verbatim.
pub fn links_allowed_domain(body: &str, allowed_domains: &[&str]) -> bool {
    allowed_domains.iter().any(|domain| body.contains(domain))
}
