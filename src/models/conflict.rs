use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::resource::ResourceStatus;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ConflictSeverity {
    Medium,
    High,
}

impl ConflictSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictSeverity::Medium => "medium",
            ConflictSeverity::High => "high",
        }
    }
}

impl fmt::Display for ConflictSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured finding produced by the conflict detector.
///
/// One variant per kind with kind-specific payload; findings carry the
/// implicated ids and computed numbers, never pre-formatted text. Rendering
/// is the caller's concern.
///
/// In candidate mode a `task_id` of `None` refers to the candidate under
/// evaluation, which has no persisted id yet; board-mode findings always
/// carry both ids.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum Conflict {
    /// Two active tasks on the same resource with intersecting date ranges.
    Overlap {
        resource_id: String,
        #[serde(default)]
        task_id: Option<String>,
        other_task_id: String,
    },
    /// More active tasks assigned to the resource than the configured limit.
    Overload {
        resource_id: String,
        task_count: usize,
    },
    /// An active task is assigned to a resource that is not available.
    Unavailable {
        resource_id: String,
        #[serde(default)]
        task_id: Option<String>,
        resource_status: ResourceStatus,
    },
    /// Combined normalized effort on the resource exceeds weekly capacity.
    EffortOverload {
        resource_id: String,
        combined_hours: f64,
        capacity_hours: f64,
    },
    /// Advisory: a task was skipped from date-dependent checks because its
    /// dates could not be parsed (or start > end).
    SystemError {
        #[serde(default)]
        task_id: Option<String>,
    },
}

impl Conflict {
    pub fn kind(&self) -> &'static str {
        match self {
            Conflict::Overlap { .. } => "overlap",
            Conflict::Overload { .. } => "overload",
            Conflict::Unavailable { .. } => "unavailable",
            Conflict::EffortOverload { .. } => "effort_overload",
            Conflict::SystemError { .. } => "system_error",
        }
    }

    /// High findings block a save by convention; medium ones warn.
    pub fn severity(&self) -> ConflictSeverity {
        match self {
            Conflict::Overlap { .. } | Conflict::Unavailable { .. } | Conflict::SystemError { .. } => {
                ConflictSeverity::High
            }
            Conflict::Overload { .. } | Conflict::EffortOverload { .. } => ConflictSeverity::Medium,
        }
    }

    pub fn resource_id(&self) -> Option<&str> {
        match self {
            Conflict::Overlap { resource_id, .. }
            | Conflict::Overload { resource_id, .. }
            | Conflict::Unavailable { resource_id, .. }
            | Conflict::EffortOverload { resource_id, .. } => Some(resource_id),
            Conflict::SystemError { .. } => None,
        }
    }
}
