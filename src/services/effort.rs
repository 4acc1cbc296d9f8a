use crate::models::task::{EffortUnit, TaskCandidateInput, TaskRecord};

/// Normalize an effort magnitude to hours. Missing, negative, or non-finite
/// effort normalizes to 0 and never raises.
pub fn to_hours(effort: Option<f64>, unit: EffortUnit) -> f64 {
    match effort {
        Some(value) if value.is_finite() && value >= 0.0 => value * unit.hour_factor(),
        _ => 0.0,
    }
}

pub fn task_effort_hours(task: &TaskRecord) -> f64 {
    to_hours(task.effort, task.effort_unit)
}

pub fn candidate_effort_hours(candidate: &TaskCandidateInput) -> f64 {
    to_hours(candidate.effort, candidate.effort_unit)
}
