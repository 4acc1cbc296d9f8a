use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::models::conflict::Conflict;
use crate::models::resource::ResourceRecord;
use crate::models::settings::EngineSettings;
use crate::models::task::{TaskCandidateInput, TaskRecord};
use crate::services::date_utils::{self, ParsedRange};
use crate::services::effort;

/// Whole-board scan over active tasks and all resources.
///
/// Findings come out in stable insertion order: per resource (input order)
/// overload then overlap pairs, then the unavailable pass over tasks, then
/// one advisory per task whose dates failed to parse. Identical input yields
/// identical output.
pub fn detect_conflicts(
    tasks: &[TaskRecord],
    resources: &[ResourceRecord],
    settings: &EngineSettings,
) -> Vec<Conflict> {
    let mut findings = Vec::new();
    let mut skipped_task_ids: Vec<String> = Vec::new();

    for resource in resources {
        let assigned = active_tasks_for(resource.id.as_str(), tasks);

        if assigned.len() > settings.overload_task_limit {
            findings.push(Conflict::Overload {
                resource_id: resource.id.clone(),
                task_count: assigned.len(),
            });
        }

        let ranged = parse_assigned_ranges(&assigned, &mut skipped_task_ids);
        for (i, (task_a, start_a, end_a)) in ranged.iter().enumerate() {
            for (task_b, start_b, end_b) in &ranged[i + 1..] {
                if date_utils::overlaps(*start_a, *end_a, *start_b, *end_b) {
                    findings.push(Conflict::Overlap {
                        resource_id: resource.id.clone(),
                        task_id: Some(task_a.id.clone()),
                        other_task_id: task_b.id.clone(),
                    });
                }
            }
        }
    }

    let by_id = resource_index(resources);
    for task in tasks.iter().filter(|task| task.status.is_active()) {
        for resource_id in &task.assigned_resources {
            // Unknown references are treated as unassigned.
            let Some(resource) = by_id.get(resource_id.as_str()) else {
                continue;
            };
            if !resource.status.is_available() {
                findings.push(Conflict::Unavailable {
                    resource_id: resource.id.clone(),
                    task_id: Some(task.id.clone()),
                    resource_status: resource.status,
                });
            }
        }
    }

    for task_id in skipped_task_ids {
        findings.push(Conflict::SystemError {
            task_id: Some(task_id),
        });
    }

    debug!(
        target: "app::conflict",
        tasks = tasks.len(),
        resources = resources.len(),
        findings = findings.len(),
        "board conflict scan complete"
    );

    findings
}

/// Pre-save check of one candidate assignment set.
///
/// A candidate without dates or without resources produces no findings; the
/// form has nothing to evaluate yet. When editing, the candidate's stored
/// copy is excluded via `task_id`. Per resource the evaluation order is
/// unavailable, overlaps, overload, effort overload.
pub fn check_candidate(
    candidate: &TaskCandidateInput,
    tasks: &[TaskRecord],
    resources: &[ResourceRecord],
    settings: &EngineSettings,
) -> Vec<Conflict> {
    if candidate.assigned_resources.is_empty() {
        return Vec::new();
    }

    let (candidate_start, candidate_end) = match date_utils::parse_range(
        candidate.start_date.as_deref(),
        candidate.end_date.as_deref(),
    ) {
        ParsedRange::Range(start, end) => (start, end),
        ParsedRange::Missing => return Vec::new(),
        ParsedRange::Invalid => {
            return vec![Conflict::SystemError {
                task_id: candidate.task_id.clone(),
            }]
        }
    };

    let by_id = resource_index(resources);
    let candidate_hours = effort::candidate_effort_hours(candidate);
    let mut findings = Vec::new();

    for resource_id in &candidate.assigned_resources {
        let Some(resource) = by_id.get(resource_id.as_str()) else {
            continue;
        };

        if !resource.status.is_available() {
            findings.push(Conflict::Unavailable {
                resource_id: resource.id.clone(),
                task_id: None,
                resource_status: resource.status,
            });
        }

        let others: Vec<&TaskRecord> = active_tasks_for(resource.id.as_str(), tasks)
            .into_iter()
            .filter(|task| candidate.task_id.as_deref() != Some(task.id.as_str()))
            .collect();

        let mut other_hours = 0.0;
        for other in &others {
            let ParsedRange::Range(other_start, other_end) =
                date_utils::parse_range(other.start_date.as_deref(), other.end_date.as_deref())
            else {
                continue;
            };
            other_hours += effort::task_effort_hours(other);
            if date_utils::overlaps(candidate_start, candidate_end, other_start, other_end) {
                findings.push(Conflict::Overlap {
                    resource_id: resource.id.clone(),
                    task_id: None,
                    other_task_id: other.id.clone(),
                });
            }
        }

        if others.len() + 1 > settings.overload_task_limit {
            findings.push(Conflict::Overload {
                resource_id: resource.id.clone(),
                task_count: others.len() + 1,
            });
        }

        // Coarse capacity-planning warning: effort of all other active tasks
        // counts whether or not their dates overlap the candidate.
        if candidate_hours > 0.0 {
            let combined = other_hours + candidate_hours;
            if combined > settings.weekly_capacity_hours {
                findings.push(Conflict::EffortOverload {
                    resource_id: resource.id.clone(),
                    combined_hours: combined.round(),
                    capacity_hours: settings.weekly_capacity_hours,
                });
            }
        }
    }

    debug!(
        target: "app::conflict",
        resources = candidate.assigned_resources.len(),
        findings = findings.len(),
        "candidate conflict check complete"
    );

    findings
}

fn active_tasks_for<'a>(resource_id: &str, tasks: &'a [TaskRecord]) -> Vec<&'a TaskRecord> {
    tasks
        .iter()
        .filter(|task| {
            task.status.is_active()
                && task
                    .assigned_resources
                    .iter()
                    .any(|assigned| assigned == resource_id)
        })
        .collect()
}

fn resource_index(resources: &[ResourceRecord]) -> HashMap<&str, &ResourceRecord> {
    resources
        .iter()
        .map(|resource| (resource.id.as_str(), resource))
        .collect()
}

fn parse_assigned_ranges<'a>(
    assigned: &[&'a TaskRecord],
    skipped_task_ids: &mut Vec<String>,
) -> Vec<(&'a TaskRecord, NaiveDate, NaiveDate)> {
    let mut ranged = Vec::with_capacity(assigned.len());
    for task in assigned {
        match date_utils::parse_range(task.start_date.as_deref(), task.end_date.as_deref()) {
            ParsedRange::Range(start, end) => ranged.push((*task, start, end)),
            ParsedRange::Missing => {}
            ParsedRange::Invalid => {
                if !skipped_task_ids.contains(&task.id) {
                    skipped_task_ids.push(task.id.clone());
                }
            }
        }
    }
    ranged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resource::{ResourceStatus, ResourceType};
    use crate::models::task::{TaskPriority, TaskStatus};

    fn resource(id: &str, status: ResourceStatus) -> ResourceRecord {
        ResourceRecord {
            id: id.to_string(),
            name: format!("Resource {id}"),
            resource_type: ResourceType::Employee,
            status,
            skills: Vec::new(),
            capacity: None,
        }
    }

    fn task(id: &str, start: &str, end: &str, resources: &[&str]) -> TaskRecord {
        TaskRecord {
            id: id.to_string(),
            title: format!("Task {id}"),
            description: None,
            status: TaskStatus::Planned,
            priority: TaskPriority::Medium,
            start_date: Some(start.to_string()),
            end_date: Some(end.to_string()),
            assigned_resources: resources.iter().map(|r| r.to_string()).collect(),
            effort: None,
            effort_unit: Default::default(),
            progress: 0,
        }
    }

    #[test]
    fn board_scan_is_idempotent() {
        let resources = vec![resource("r1", ResourceStatus::Maintenance)];
        let tasks = vec![
            task("t1", "2024-01-01", "2024-01-10", &["r1"]),
            task("t2", "2024-01-05", "2024-01-15", &["r1"]),
        ];
        let settings = EngineSettings::default();

        let first = detect_conflicts(&tasks, &resources, &settings);
        let second = detect_conflicts(&tasks, &resources, &settings);
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn unknown_resource_reference_is_ignored() {
        let resources = vec![resource("r1", ResourceStatus::Available)];
        let tasks = vec![task("t1", "2024-01-01", "2024-01-10", &["ghost"])];
        let settings = EngineSettings::default();

        assert!(detect_conflicts(&tasks, &resources, &settings).is_empty());
    }

    #[test]
    fn malformed_dates_only_skip_the_bad_task() {
        let resources = vec![resource("r1", ResourceStatus::Available)];
        let tasks = vec![
            task("bad", "garbage", "2024-01-10", &["r1"]),
            task("t1", "2024-01-01", "2024-01-10", &["r1"]),
            task("t2", "2024-01-05", "2024-01-15", &["r1"]),
        ];
        let settings = EngineSettings::default();

        let findings = detect_conflicts(&tasks, &resources, &settings);
        let overlaps: Vec<_> = findings
            .iter()
            .filter(|finding| finding.kind() == "overlap")
            .collect();
        assert_eq!(overlaps.len(), 1);
        assert!(findings.iter().any(|finding| matches!(
            finding,
            Conflict::SystemError { task_id: Some(id) } if id == "bad"
        )));
    }

    #[test]
    fn candidate_without_dates_yields_nothing() {
        let resources = vec![resource("r1", ResourceStatus::Unavailable)];
        let candidate = TaskCandidateInput {
            assigned_resources: vec!["r1".to_string()],
            ..Default::default()
        };
        let settings = EngineSettings::default();

        assert!(check_candidate(&candidate, &[], &resources, &settings).is_empty());
    }

    #[test]
    fn candidate_with_invalid_dates_advises() {
        let resources = vec![resource("r1", ResourceStatus::Available)];
        let candidate = TaskCandidateInput {
            start_date: Some("2024-02-01".to_string()),
            end_date: Some("2024-01-01".to_string()),
            assigned_resources: vec!["r1".to_string()],
            ..Default::default()
        };
        let settings = EngineSettings::default();

        let findings = check_candidate(&candidate, &[], &resources, &settings);
        assert_eq!(findings, vec![Conflict::SystemError { task_id: None }]);
    }
}
