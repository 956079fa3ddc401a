//! Pure formatting functions for UI output.
//!
//! `format_*` functions build the text, `display_*` functions print it.

use console::style;

use crate::domain::Stability;
use crate::release::{ReleasePlan, ReleaseWarning};

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a release warning to the user.
pub fn display_warning(warning: &ReleaseWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Canonical and uppercase forms of a stability, one per line.
pub fn format_stability(stability: Stability) -> String {
    format!(
        "lowercase: {}\nuppercase: {}",
        stability,
        stability.to_uppercase_string()
    )
}

pub fn display_stability(stability: Stability) {
    println!("{}", format_stability(stability));
}

/// All known levels with the version bump each implies.
pub fn format_levels() -> String {
    Stability::ALL
        .iter()
        .map(|level| {
            let effect = match level.version_bump() {
                Some(bump) => format!("{:?} bump", bump).to_lowercase(),
                None if level.is_known() => "no bump".to_string(),
                None => "blocks release".to_string(),
            };
            format!("  - {:<9} {}", level.as_str(), effect)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn display_levels() {
    println!("{}", style("Stability levels:").bold());
    println!("{}", format_levels());
}

/// Per-change table, overall stability and the proposed tag.
///
/// At most 10 changes are listed; the rest are summarized by count.
pub fn format_release_plan(plan: &ReleasePlan) -> String {
    let mut lines = Vec::new();

    lines.push(format!("Changes since '{}':", plan.current_tag));
    for (i, classified) in plan.changes.iter().take(10).enumerate() {
        let title = if classified.change.title.is_empty() {
            classified.change.labels.join(",")
        } else {
            classified.change.title.clone()
        };
        lines.push(format!(
            "  {}. [{}] {}",
            i + 1,
            classified.stability.to_uppercase_string(),
            title
        ));
    }
    if plan.changes.len() > 10 {
        lines.push(format!("  ... and {} more changes", plan.changes.len() - 10));
    }

    lines.push(format!(
        "Stability: {}",
        plan.stability.to_uppercase_string()
    ));

    if plan.is_needed() {
        lines.push(format!("From: {}", plan.current_tag));
        lines.push(format!("To:   {}", plan.next_tag()));
    } else {
        lines.push(format!("No release needed, staying at {}", plan.current_tag));
    }

    lines.join("\n")
}

pub fn display_release_plan(plan: &ReleasePlan) {
    println!("\n{}", style("Next release").bold());
    println!("{}", format_release_plan(plan));
}
