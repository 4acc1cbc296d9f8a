use serde::{Deserialize, Serialize};

use crate::models::utilization::{Granularity, UtilizationStatus};

/// Engine thresholds and capacities. Every constant the engine relies on
/// lives here so callers can tune without code changes; `Default` matches
/// the stock planning rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineSettings {
    /// A resource with strictly more active tasks than this is overloaded.
    pub overload_task_limit: usize,
    pub weekly_capacity_hours: f64,
    pub monthly_capacity_hours: f64,
    pub quarterly_capacity_hours: f64,
    /// Tier cutoffs, exclusive lower bounds in percent.
    pub overloaded_threshold_percent: u32,
    pub busy_threshold_percent: u32,
    pub moderate_threshold_percent: u32,
    /// Weekly workload view keeps the raw percent up to this cap.
    pub workload_display_cap_percent: u32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            overload_task_limit: 5,
            weekly_capacity_hours: 40.0,
            monthly_capacity_hours: 160.0,
            quarterly_capacity_hours: 480.0,
            overloaded_threshold_percent: 90,
            busy_threshold_percent: 70,
            moderate_threshold_percent: 40,
            workload_display_cap_percent: 150,
        }
    }
}

impl EngineSettings {
    /// Fixed capacity per granularity; no calendar-accurate day counting.
    pub fn capacity_for(&self, granularity: Granularity) -> f64 {
        match granularity {
            Granularity::Week => self.weekly_capacity_hours,
            Granularity::Month => self.monthly_capacity_hours,
            Granularity::Quarter => self.quarterly_capacity_hours,
        }
    }

    pub fn tier_for(&self, utilization_percent: u32) -> UtilizationStatus {
        if utilization_percent > self.overloaded_threshold_percent {
            UtilizationStatus::Overloaded
        } else if utilization_percent > self.busy_threshold_percent {
            UtilizationStatus::Busy
        } else if utilization_percent > self.moderate_threshold_percent {
            UtilizationStatus::Moderate
        } else {
            UtilizationStatus::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacities_match_stock_rules() {
        let settings = EngineSettings::default();
        assert_eq!(settings.capacity_for(Granularity::Week), 40.0);
        assert_eq!(settings.capacity_for(Granularity::Month), 160.0);
        assert_eq!(settings.capacity_for(Granularity::Quarter), 480.0);
        assert_eq!(settings.overload_task_limit, 5);
    }

    #[test]
    fn tier_cutoffs_are_exclusive_lower_bounds() {
        let settings = EngineSettings::default();
        assert_eq!(settings.tier_for(91), UtilizationStatus::Overloaded);
        assert_eq!(settings.tier_for(90), UtilizationStatus::Busy);
        assert_eq!(settings.tier_for(71), UtilizationStatus::Busy);
        assert_eq!(settings.tier_for(70), UtilizationStatus::Moderate);
        assert_eq!(settings.tier_for(41), UtilizationStatus::Moderate);
        assert_eq!(settings.tier_for(40), UtilizationStatus::Light);
        assert_eq!(settings.tier_for(0), UtilizationStatus::Light);
    }
}
