use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Week,
    Month,
    Quarter,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Week => "week",
            Granularity::Month => "month",
            Granularity::Quarter => "quarter",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Granularity {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "week" => Ok(Granularity::Week),
            "month" => Ok(Granularity::Month),
            "quarter" => Ok(Granularity::Quarter),
            other => Err(format!("unsupported granularity: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UtilizationStatus {
    Overloaded,
    Busy,
    Moderate,
    Light,
}

impl UtilizationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UtilizationStatus::Overloaded => "overloaded",
            UtilizationStatus::Busy => "busy",
            UtilizationStatus::Moderate => "moderate",
            UtilizationStatus::Light => "light",
        }
    }
}

impl fmt::Display for UtilizationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive date range utilization is computed against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }
}

/// Per-resource load summary for a window at a given granularity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UtilizationResult {
    pub resource_id: String,
    pub task_count: usize,
    pub total_effort_hours: f64,
    pub capacity_hours: f64,
    pub available_hours: f64,
    pub utilization_percent: u32,
    pub high_priority_count: usize,
    pub status: UtilizationStatus,
}

/// Simpler weekly-only view: flat 40h capacity, raw percent kept up to the
/// display cap so overload magnitude stays visible, plus a gauge value
/// capped at 100 for progress bars.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyWorkload {
    pub resource_id: String,
    pub task_count: usize,
    pub total_effort_hours: f64,
    pub utilization_percent: u32,
    pub display_percent: u32,
}

/// Dashboard roll-up over per-resource utilization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UtilizationSummary {
    pub avg_utilization: u32,
    pub overloaded_count: usize,
    pub underutilized_count: usize,
    pub total: usize,
}
