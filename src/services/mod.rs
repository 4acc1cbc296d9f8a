pub mod conflict_cache;
pub mod conflict_service;
pub mod date_utils;
pub mod effort;
pub mod report_service;
pub mod utilization_service;
