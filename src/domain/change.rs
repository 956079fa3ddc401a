//! Pending changes and their classification by label

use crate::domain::stability::Stability;
use std::collections::HashMap;

/// A change waiting to be released (typically a merged pull request)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub title: String,
    pub labels: Vec<String>,
}

impl Change {
    pub fn new<I, S>(title: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Change {
            title: title.into(),
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse the command-line form `TITLE=label1,label2`.
    ///
    /// Without `=`, the whole argument is the label list and the title is empty.
    /// Labels are trimmed and empty entries dropped.
    pub fn parse_arg(arg: &str) -> Self {
        let (title, labels) = match arg.split_once('=') {
            Some((title, labels)) => (title.trim(), labels),
            None => ("", arg),
        };

        let labels = labels
            .split(',')
            .map(str::trim)
            .filter(|label| !label.is_empty());

        Change::new(title, labels)
    }
}

/// Resolves labels to stability levels.
///
/// A label resolves through the alias table first, then as a level name, both
/// ignoring case. Labels that resolve to nothing are ignored.
#[derive(Debug, Clone)]
pub struct LabelClassifier {
    aliases: HashMap<String, Stability>,
}

impl LabelClassifier {
    pub fn new(aliases: &HashMap<String, Stability>) -> Self {
        LabelClassifier {
            aliases: aliases
                .iter()
                .map(|(label, stability)| (label.to_lowercase(), *stability))
                .collect(),
        }
    }

    /// Resolve a single label
    pub fn resolve(&self, label: &str) -> Option<Stability> {
        self.aliases
            .get(&label.to_lowercase())
            .copied()
            .or_else(|| Stability::from_string(label).ok())
    }

    /// Stability of a change: the strongest known level among its labels
    pub fn classify(&self, change: &Change) -> Stability {
        let stability = Stability::strongest(
            change
                .labels
                .iter()
                .filter_map(|label| self.resolve(label))
                .filter(|level| level.is_known()),
        );

        tracing::debug!(
            title = %change.title,
            labels = ?change.labels,
            %stability,
            "classified change"
        );
        stability
    }
}

impl Default for LabelClassifier {
    fn default() -> Self {
        LabelClassifier::new(&HashMap::from([("docs".to_string(), Stability::Pedantic)]))
    }
}
