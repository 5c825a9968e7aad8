// Colored terminal output for the `rules` command.

use colored::Colorize;

use crate::rules::RuleThresholds;

/// Print the thresholds and allow-list the scanner will apply.
pub fn display_rules(subreddit: &str, thresholds: &RuleThresholds, allowed_domains: &[&str]) {
    println!(
        "\n{}",
        format!("=== Queue rules for r/{subreddit} ===").bold()
    );

    println!("\n  {}", "Submissions (first match wins)".bold());
    println!(
        "    1. {}  score >= {} and active reports < {}",
        "approve".green(),
        thresholds.approve_min_score,
        thresholds.approve_max_reports,
    );
    println!(
        "    2. {}   reports (incl. dismissed) >= {}, score <= {}, upvote ratio < {:.2}, age >= {} min",
        "remove".red(),
        thresholds.remove_min_reports,
        thresholds.remove_max_score,
        thresholds.remove_max_upvote_ratio,
        thresholds.remove_min_age_mins,
    );
    println!("    {}", "otherwise left for a human".dimmed());

    println!("\n  {}", "Comments".bold());
    if allowed_domains.is_empty() {
        println!("    {}", "no allowed link domains; comments are never touched".dimmed());
    } else {
        println!("    {} when the body contains any of:", "approve".green());
        for domain in allowed_domains {
            println!("      {domain}");
        }
    }
    println!();
}
