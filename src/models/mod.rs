pub mod capability;
pub mod conflict;
pub mod resource;
pub mod settings;
pub mod task;
pub mod utilization;
