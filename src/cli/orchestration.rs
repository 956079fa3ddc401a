//! Command orchestration
//!
//! Commands take plain argument structs rather than clap types so they can be
//! called programmatically and from tests.

use anyhow::{bail, Context, Result};

use crate::config::Config;
use crate::domain::{Change, Stability};
use crate::release::{ReleasePlan, ReleasePlanner};
use crate::ui;

/// Arguments for the next-release workflow
#[derive(Debug, Clone, PartialEq)]
pub struct NextReleaseArgs {
    /// Tag of the latest release
    pub current_tag: String,

    /// Changes in `TITLE=label1,label2` form
    pub changes: Vec<String>,

    /// Plan even if some changes have no stability
    pub allow_unknown: bool,
}

/// Result of a successful next-release workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub next_tag: String,
    pub stability: Stability,
    /// False when the current tag already covers every change
    pub release_needed: bool,
}

/// Parse a stability and print its canonical forms
pub fn run_parse(value: &str) -> Result<Stability> {
    let stability = Stability::from_string(value)
        .with_context(|| format!("'{}' is not a valid stability", value))?;
    ui::display_stability(stability);
    Ok(stability)
}

/// Plan the next release without printing anything
pub fn plan_next_release(args: &NextReleaseArgs, config: &Config) -> Result<ReleasePlan> {
    let planner = ReleasePlanner::new(config).context("invalid configuration")?;
    let changes: Vec<Change> = args.changes.iter().map(|c| Change::parse_arg(c)).collect();
    let plan = planner
        .plan(&args.current_tag, &changes)
        .with_context(|| format!("cannot plan release after '{}'", args.current_tag))?;
    Ok(plan)
}

/// Plan the next release and report it
///
/// Fails when some change has no stability, unless unknown changes are allowed
/// by the arguments or by `behavior.allow_unknown`.
pub fn run_next_release(args: NextReleaseArgs, config: Config) -> Result<WorkflowResult> {
    let plan = plan_next_release(&args, &config)?;

    for warning in &plan.warnings {
        ui::display_warning(warning);
    }
    ui::display_release_plan(&plan);

    let unknown = plan.unknown_changes().count();
    if unknown > 0 && !(args.allow_unknown || config.behavior.allow_unknown) {
        bail!(
            "{} change(s) have no stability label; label them with one of: {}",
            unknown,
            Stability::ALL
                .iter()
                .filter(|level| level.is_known())
                .map(|level| level.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    let release_needed = plan.is_needed();
    if release_needed {
        ui::display_success(&format!("Next release: {}", plan.next_tag()));
    } else if plan.changes.is_empty() {
        ui::display_status("Nothing to release: no changes");
    } else {
        ui::display_status("Nothing to release");
    }

    // Without a release, the latest tag stays current
    let next_tag = if release_needed {
        plan.next_tag()
    } else {
        plan.current_tag.clone()
    };

    Ok(WorkflowResult {
        next_tag,
        stability: plan.stability,
        release_needed,
    })
}
