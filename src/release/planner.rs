use crate::config::Config;
use crate::domain::{Change, LabelClassifier, Stability, TagPattern, Version};
use crate::error::Result;
use crate::release::warning::ReleaseWarning;

/// A change together with the stability it was classified as
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedChange {
    pub change: Change,
    pub stability: Stability,
}

/// Outcome of planning the next release
#[derive(Debug, Clone)]
pub struct ReleasePlan {
    /// Tag the plan starts from
    pub current_tag: String,
    /// Version read from `current_tag`, if it could be parsed
    pub current: Option<Version>,
    pub next: Version,
    /// Strongest stability over all changes
    pub stability: Stability,
    pub changes: Vec<ClassifiedChange>,
    pub warnings: Vec<ReleaseWarning>,
    tag_pattern: TagPattern,
}

impl ReleasePlan {
    /// True if there are changes and the next version differs from the current one
    pub fn is_needed(&self) -> bool {
        !self.changes.is_empty() && self.current != Some(self.next)
    }

    /// False when there is nothing to release or some change is unclassified
    pub fn can_be_released(&self) -> bool {
        !self.changes.is_empty() && self.changes.iter().all(|c| c.stability.is_known())
    }

    pub fn next_tag(&self) -> String {
        self.tag_pattern.format(&self.next)
    }

    /// Changes classified as `unknown`
    pub fn unknown_changes(&self) -> impl Iterator<Item = &ClassifiedChange> {
        self.changes.iter().filter(|c| !c.stability.is_known())
    }
}

/// Computes the next release from the stabilities of pending changes
pub struct ReleasePlanner {
    classifier: LabelClassifier,
    tag_pattern: TagPattern,
    initial_version: Version,
}

impl ReleasePlanner {
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(ReleasePlanner {
            classifier: config.classifier(),
            tag_pattern: config.tag_pattern()?,
            initial_version: config.initial_version()?,
        })
    }

    /// Plan the release following `current_tag`
    ///
    /// - `minor` anywhere bumps the minor version, otherwise `patch` bumps the patch
    ///   version; pedantic-only (or no) changes keep the current version.
    /// - If `current_tag` cannot be read, the plan falls back to the initial version.
    /// - Fails only if the bumped version does not fit in a `u64` component.
    pub fn plan(&self, current_tag: &str, changes: &[Change]) -> Result<ReleasePlan> {
        let mut warnings = Vec::new();

        let classified: Vec<ClassifiedChange> = changes
            .iter()
            .map(|change| ClassifiedChange {
                change: change.clone(),
                stability: self.classifier.classify(change),
            })
            .collect();

        if classified.is_empty() {
            warnings.push(ReleaseWarning::NoChanges {
                current_tag: current_tag.to_string(),
            });
        }

        for unknown in classified.iter().filter(|c| !c.stability.is_known()) {
            warnings.push(ReleaseWarning::UnlabeledChange {
                title: unknown.change.title.clone(),
            });
        }

        let stability = Stability::strongest(classified.iter().map(|c| c.stability));

        let current = self.tag_pattern.extract_version(current_tag);
        let next = match current {
            Some(version) => match stability.version_bump() {
                Some(bump) => version.bump(bump)?,
                None => version,
            },
            None => {
                warnings.push(ReleaseWarning::UnparsableTag {
                    tag: current_tag.to_string(),
                    reason: format!(
                        "does not match pattern '{}'",
                        self.tag_pattern.as_str()
                    ),
                });
                self.initial_version
            }
        };

        tracing::info!(
            current_tag,
            %stability,
            next = %next,
            changes = classified.len(),
            warnings = warnings.len(),
            "planned release"
        );

        Ok(ReleasePlan {
            current_tag: current_tag.to_string(),
            current,
            next,
            stability,
            changes: classified,
            warnings,
            tag_pattern: self.tag_pattern.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReleaseError;

    fn planner() -> ReleasePlanner {
        let config = Config {
            tag_pattern: "v{version}".to_string(),
            ..Config::default()
        };
        ReleasePlanner::new(&config).unwrap()
    }

    #[test]
    fn test_plan_minor() {
        let changes = vec![
            Change::new("Add export command", ["minor"]),
            Change::new("Fix typo", ["patch"]),
        ];
        let plan = planner().plan("v1.2.3", &changes).unwrap();

        assert_eq!(plan.stability, Stability::Minor);
        assert_eq!(plan.next, Version::new(1, 3, 0));
        assert_eq!(plan.next_tag(), "v1.3.0");
        assert!(plan.is_needed());
        assert!(plan.can_be_released());
        assert!(plan.warnings.is_empty());
    }

    #[test]
    fn test_plan_patch() {
        let changes = vec![
            Change::new("Fix crash", ["PATCH"]),
            Change::new("Update docs", ["docs"]),
        ];
        let plan = planner().plan("v1.2.3", &changes).unwrap();

        assert_eq!(plan.stability, Stability::Patch);
        assert_eq!(plan.next_tag(), "v1.2.4");
    }

    #[test]
    fn test_plan_pedantic_only_is_not_needed() {
        let changes = vec![Change::new("Reword README", ["pedantic"])];
        let plan = planner().plan("v1.2.3", &changes).unwrap();

        assert_eq!(plan.stability, Stability::Pedantic);
        assert_eq!(plan.next, Version::new(1, 2, 3));
        assert!(!plan.is_needed());
        assert!(plan.can_be_released());
    }

    #[test]
    fn test_plan_no_changes() {
        let plan = planner().plan("v1.2.3", &[]).unwrap();

        assert_eq!(plan.stability, Stability::Unknown);
        assert!(!plan.is_needed());
        assert!(!plan.can_be_released());
        assert_eq!(
            plan.warnings,
            vec![ReleaseWarning::NoChanges {
                current_tag: "v1.2.3".to_string()
            }]
        );
    }

    #[test]
    fn test_plan_unknown_change_blocks_release() {
        let changes = vec![
            Change::new("Add option", ["minor"]),
            Change::new("Mystery", ["dependencies"]),
        ];
        let plan = planner().plan("v1.2.3", &changes).unwrap();

        assert_eq!(plan.stability, Stability::Minor);
        assert!(plan.is_needed());
        assert!(!plan.can_be_released());
        assert_eq!(plan.unknown_changes().count(), 1);
        assert_eq!(
            plan.warnings,
            vec![ReleaseWarning::UnlabeledChange {
                title: "Mystery".to_string()
            }]
        );
    }

    #[test]
    fn test_plan_unparsable_tag_falls_back_to_initial_version() {
        let changes = vec![Change::new("Fix", ["patch"])];
        let plan = planner().plan("release-1.0.0", &changes).unwrap();

        assert_eq!(plan.current, None);
        assert_eq!(plan.next, Version::new(0, 1, 0));
        assert!(plan.is_needed());
        assert!(matches!(
            plan.warnings.as_slice(),
            [ReleaseWarning::UnparsableTag { tag, .. }] if tag == "release-1.0.0"
        ));
    }

    #[test]
    fn test_plan_unparsable_tag_without_changes_is_not_needed() {
        let plan = planner().plan("latest", &[]).unwrap();

        assert_eq!(plan.current, None);
        assert!(!plan.is_needed());
        assert!(!plan.can_be_released());
        assert_eq!(plan.warnings.len(), 2);
    }

    #[test]
    fn test_plan_fails_when_bump_overflows() {
        let changes = vec![Change::new("x", ["minor"])];
        let err = planner()
            .plan("v1.18446744073709551615.0", &changes)
            .unwrap_err();
        assert!(matches!(err, ReleaseError::Version(_)));

        // No bump needed, so the maximal version is still a valid plan
        let changes = vec![Change::new("x", ["pedantic"])];
        let plan = planner()
            .plan("v1.18446744073709551615.0", &changes)
            .unwrap();
        assert!(!plan.is_needed());
    }

    #[test]
    fn test_planner_uses_configured_aliases() {
        let mut config = Config::default();
        config
            .labels
            .aliases
            .insert("feature".to_string(), Stability::Minor);
        let planner = ReleasePlanner::new(&config).unwrap();

        let plan = planner
            .plan("0.4.1", &[Change::new("New API", ["Feature"])])
            .unwrap();
        assert_eq!(plan.next_tag(), "0.5.0");
    }

    #[test]
    fn test_planner_rejects_invalid_config() {
        let config = Config {
            initial_version: "soon".to_string(),
            ..Config::default()
        };
        assert!(ReleasePlanner::new(&config).is_err());

        let mut config = Config::default();
        config
            .labels
            .aliases
            .insert("Docs".to_string(), Stability::Minor);
        assert!(ReleasePlanner::new(&config).is_err());
    }
}
