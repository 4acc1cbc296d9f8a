use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Planned,
    InProgress,
    Completed,
    Cancelled,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Planned => "planned",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Cancelled => "cancelled",
        }
    }

    /// Active tasks are the only ones that count for conflicts and load.
    pub fn is_active(&self) -> bool {
        matches!(self, TaskStatus::Planned | TaskStatus::InProgress)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "planned" => Ok(TaskStatus::Planned),
            "in_progress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            "cancelled" => Ok(TaskStatus::Cancelled),
            other => Err(format!("unsupported task status: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
            TaskPriority::Urgent => "urgent",
        }
    }

    /// Ordinal weight, urgent highest.
    pub fn weight(&self) -> u8 {
        match self {
            TaskPriority::Low => 1,
            TaskPriority::Medium => 2,
            TaskPriority::High => 3,
            TaskPriority::Urgent => 4,
        }
    }

    pub fn is_high(&self) -> bool {
        matches!(self, TaskPriority::High | TaskPriority::Urgent)
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "low" => Ok(TaskPriority::Low),
            "medium" => Ok(TaskPriority::Medium),
            "high" => Ok(TaskPriority::High),
            "urgent" => Ok(TaskPriority::Urgent),
            other => Err(format!("unsupported task priority: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EffortUnit {
    #[default]
    Hours,
    Days,
    Weeks,
}

impl EffortUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            EffortUnit::Hours => "hours",
            EffortUnit::Days => "days",
            EffortUnit::Weeks => "weeks",
        }
    }

    /// Conversion basis: 1 day = 8h, 1 week = 40h.
    pub fn hour_factor(&self) -> f64 {
        match self {
            EffortUnit::Hours => 1.0,
            EffortUnit::Days => 8.0,
            EffortUnit::Weeks => 40.0,
        }
    }
}

impl fmt::Display for EffortUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for EffortUnit {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "hours" => Ok(EffortUnit::Hours),
            "days" => Ok(EffortUnit::Days),
            "weeks" => Ok(EffortUnit::Weeks),
            other => Err(format!("unsupported effort unit: {other}")),
        }
    }
}

/// Snapshot of a unit of work with a fixed whole-day date range.
///
/// Dates stay as strings on the record and are parsed per evaluation;
/// malformed values degrade to skipped checks rather than hard errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub assigned_resources: Vec<String>,
    #[serde(default)]
    pub effort: Option<f64>,
    #[serde(default)]
    pub effort_unit: EffortUnit,
    /// 0-100, informational only.
    #[serde(default)]
    pub progress: i64,
}

/// Proposed assignment checked before save. `task_id` is set when editing an
/// existing task so its stored copy is excluded from the checks.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskCandidateInput {
    #[serde(default)]
    pub task_id: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub assigned_resources: Vec<String>,
    #[serde(default)]
    pub effort: Option<f64>,
    #[serde(default)]
    pub effort_unit: EffortUnit,
}
