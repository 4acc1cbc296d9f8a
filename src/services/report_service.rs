use crate::models::resource::ResourceRecord;
use crate::models::settings::EngineSettings;
use crate::models::task::TaskRecord;
use crate::models::utilization::{DateWindow, Granularity, UtilizationStatus, UtilizationSummary};
use crate::services::utilization_service;

/// Dashboard roll-up over per-resource utilization for one window.
pub fn summarize(
    resources: &[ResourceRecord],
    tasks: &[TaskRecord],
    window: &DateWindow,
    granularity: Granularity,
    settings: &EngineSettings,
) -> UtilizationSummary {
    if resources.is_empty() {
        return UtilizationSummary {
            avg_utilization: 0,
            overloaded_count: 0,
            underutilized_count: 0,
            total: 0,
        };
    }

    let results: Vec<_> = resources
        .iter()
        .map(|resource| {
            utilization_service::compute_utilization(resource, tasks, window, granularity, settings)
        })
        .collect();

    let percent_sum: u64 = results
        .iter()
        .map(|result| u64::from(result.utilization_percent))
        .sum();
    let avg_utilization = (percent_sum as f64 / results.len() as f64).round() as u32;

    UtilizationSummary {
        avg_utilization,
        overloaded_count: results
            .iter()
            .filter(|result| result.status == UtilizationStatus::Overloaded)
            .count(),
        underutilized_count: results
            .iter()
            .filter(|result| result.utilization_percent < settings.moderate_threshold_percent)
            .count(),
        total: results.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_resource_list_yields_zeroed_summary() {
        let settings = EngineSettings::default();
        let window = DateWindow::new(
            "2024-01-01".parse().expect("valid start"),
            "2024-01-31".parse().expect("valid end"),
        );
        let summary = summarize(&[], &[], &window, Granularity::Month, &settings);

        assert_eq!(summary.avg_utilization, 0);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.overloaded_count, 0);
        assert_eq!(summary.underutilized_count, 0);
    }
}
