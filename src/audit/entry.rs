//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::ItemAnnotation;

/// Types of changes that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Item had no annotation before
    Create,
    /// Existing annotation changed
    Update,
    /// Tag and notes were both cleared
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the change occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    /// Item instance id whose annotation changed
    pub item_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<ItemAnnotation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<ItemAnnotation>,

    /// File the change was imported from
    pub source: String,
}

impl AuditEntry {
    /// Record an annotation going from `before` to `after`
    pub fn change(
        before: Option<&ItemAnnotation>,
        after: &ItemAnnotation,
        source: impl Into<String>,
    ) -> Self {
        let before = before.filter(|b| !b.is_empty()).cloned();
        let (operation, after_value) = match (&before, after.is_empty()) {
            (None, _) => (Operation::Create, Some(after.clone())),
            (Some(_), true) => (Operation::Delete, None),
            (Some(_), false) => (Operation::Update, Some(after.clone())),
        };

        Self {
            timestamp: Utc::now(),
            operation,
            item_id: after.id.to_string(),
            before,
            after: after_value,
            source: source.into(),
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let describe = |a: &Option<ItemAnnotation>| match a {
            Some(a) => format!(
                "tag={} notes={:?}",
                a.tag.map(|t| t.to_string()).unwrap_or_else(|| "-".into()),
                a.notes.as_deref().unwrap_or("")
            ),
            None => "none".to_string(),
        };

        format!(
            "[{}] {} item {} from {}\n  {} -> {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.item_id,
            self.source,
            describe(&self.before),
            describe(&self.after)
        )
    }
}
