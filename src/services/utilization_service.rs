use tracing::debug;

use crate::models::resource::ResourceRecord;
use crate::models::settings::EngineSettings;
use crate::models::task::TaskRecord;
use crate::models::utilization::{DateWindow, Granularity, UtilizationResult, WeeklyWorkload};
use crate::services::date_utils::{self, ParsedRange};
use crate::services::effort;

/// Per-resource load for a window at a given granularity.
///
/// A task counts with its full normalized effort as soon as its range
/// touches the window; effort is not prorated by the overlapping fraction.
pub fn compute_utilization(
    resource: &ResourceRecord,
    tasks: &[TaskRecord],
    window: &DateWindow,
    granularity: Granularity,
    settings: &EngineSettings,
) -> UtilizationResult {
    let in_window: Vec<&TaskRecord> = tasks
        .iter()
        .filter(|task| {
            task.status.is_active()
                && task
                    .assigned_resources
                    .iter()
                    .any(|assigned| assigned == &resource.id)
        })
        .filter(|task| {
            match date_utils::parse_range(task.start_date.as_deref(), task.end_date.as_deref()) {
                ParsedRange::Range(start, end) => date_utils::window_intersects(start, end, window),
                _ => false,
            }
        })
        .collect();

    let total_effort: f64 = in_window.iter().map(|task| effort::task_effort_hours(task)).sum();
    let capacity = settings.capacity_for(granularity);
    let utilization_percent = percent_of(total_effort, capacity).min(100);
    let high_priority_count = in_window
        .iter()
        .filter(|task| task.priority.is_high())
        .count();

    let result = UtilizationResult {
        resource_id: resource.id.clone(),
        task_count: in_window.len(),
        total_effort_hours: total_effort.round(),
        capacity_hours: capacity,
        available_hours: (capacity - total_effort).max(0.0),
        utilization_percent,
        high_priority_count,
        status: settings.tier_for(utilization_percent),
    };

    debug!(
        target: "app::utilization",
        resource_id = %resource.id,
        granularity = %granularity,
        tasks = result.task_count,
        percent = result.utilization_percent,
        status = %result.status,
        "utilization computed"
    );

    result
}

/// Quick weekly workload view: every active assignment counts against a
/// flat weekly capacity, no window filter. The raw percent runs up to the
/// display cap so overload magnitude stays visible; `display_percent` is
/// the progress-bar value capped at 100.
pub fn weekly_workload(
    resource: &ResourceRecord,
    tasks: &[TaskRecord],
    settings: &EngineSettings,
) -> WeeklyWorkload {
    let assigned: Vec<&TaskRecord> = tasks
        .iter()
        .filter(|task| {
            task.status.is_active()
                && task
                    .assigned_resources
                    .iter()
                    .any(|assigned| assigned == &resource.id)
        })
        .collect();

    let total_effort: f64 = assigned.iter().map(|task| effort::task_effort_hours(task)).sum();
    let raw_percent = percent_of(total_effort, settings.weekly_capacity_hours);
    let utilization_percent = raw_percent.min(settings.workload_display_cap_percent);

    WeeklyWorkload {
        resource_id: resource.id.clone(),
        task_count: assigned.len(),
        total_effort_hours: total_effort.round(),
        utilization_percent,
        display_percent: utilization_percent.min(100),
    }
}

fn percent_of(hours: f64, capacity: f64) -> u32 {
    if capacity > 0.0 {
        (hours / capacity * 100.0).round() as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resource::{ResourceStatus, ResourceType};
    use crate::models::task::{EffortUnit, TaskPriority, TaskStatus};

    fn resource(id: &str) -> ResourceRecord {
        ResourceRecord {
            id: id.to_string(),
            name: format!("Resource {id}"),
            resource_type: ResourceType::Employee,
            status: ResourceStatus::Available,
            skills: Vec::new(),
            capacity: None,
        }
    }

    fn task(id: &str, start: &str, end: &str, effort: f64, unit: EffortUnit) -> TaskRecord {
        TaskRecord {
            id: id.to_string(),
            title: format!("Task {id}"),
            description: None,
            status: TaskStatus::Planned,
            priority: TaskPriority::Medium,
            start_date: Some(start.to_string()),
            end_date: Some(end.to_string()),
            assigned_resources: vec!["r1".to_string()],
            effort: Some(effort),
            effort_unit: unit,
            progress: 0,
        }
    }

    fn window(start: &str, end: &str) -> DateWindow {
        DateWindow::new(
            start.parse().expect("valid start"),
            end.parse().expect("valid end"),
        )
    }

    #[test]
    fn tasks_outside_window_do_not_count() {
        let resource = resource("r1");
        let tasks = vec![
            task("t1", "2024-01-01", "2024-01-05", 10.0, EffortUnit::Hours),
            task("t2", "2024-03-01", "2024-03-05", 10.0, EffortUnit::Hours),
        ];
        let settings = EngineSettings::default();
        let result = compute_utilization(
            &resource,
            &tasks,
            &window("2024-01-01", "2024-01-31"),
            Granularity::Month,
            &settings,
        );

        assert_eq!(result.task_count, 1);
        assert_eq!(result.total_effort_hours, 10.0);
    }

    #[test]
    fn full_effort_counts_on_partial_window_overlap() {
        let resource = resource("r1");
        // Range runs past the window end; the whole 3 days still count.
        let tasks = vec![task("t1", "2024-01-30", "2024-02-10", 3.0, EffortUnit::Days)];
        let settings = EngineSettings::default();
        let result = compute_utilization(
            &resource,
            &tasks,
            &window("2024-01-01", "2024-01-31"),
            Granularity::Month,
            &settings,
        );

        assert_eq!(result.total_effort_hours, 24.0);
        assert_eq!(result.utilization_percent, 15);
    }

    #[test]
    fn weekly_workload_caps_raw_and_display_percent() {
        let resource = resource("r1");
        // 80h on a 40h week: raw 200% caps at 150, gauge at 100.
        let tasks = vec![task("t1", "2024-01-01", "2024-01-05", 2.0, EffortUnit::Weeks)];
        let settings = EngineSettings::default();
        let workload = weekly_workload(&resource, &tasks, &settings);

        assert_eq!(workload.total_effort_hours, 80.0);
        assert_eq!(workload.utilization_percent, 150);
        assert_eq!(workload.display_percent, 100);
    }
}
