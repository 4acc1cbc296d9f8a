use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Employee,
    Room,
    Equipment,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Employee => "employee",
            ResourceType::Room => "room",
            ResourceType::Equipment => "equipment",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ResourceType {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "employee" => Ok(ResourceType::Employee),
            "room" => Ok(ResourceType::Room),
            "equipment" => Ok(ResourceType::Equipment),
            other => Err(format!("unsupported resource type: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResourceStatus {
    Available,
    InUse,
    Maintenance,
    Unavailable,
}

impl ResourceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceStatus::Available => "available",
            ResourceStatus::InUse => "in_use",
            ResourceStatus::Maintenance => "maintenance",
            ResourceStatus::Unavailable => "unavailable",
        }
    }

    /// Only available resources are eligible for new assignments.
    pub fn is_available(&self) -> bool {
        matches!(self, ResourceStatus::Available)
    }
}

impl fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ResourceStatus {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "available" => Ok(ResourceStatus::Available),
            "in_use" => Ok(ResourceStatus::InUse),
            "maintenance" => Ok(ResourceStatus::Maintenance),
            "unavailable" => Ok(ResourceStatus::Unavailable),
            other => Err(format!("unsupported resource status: {other}")),
        }
    }
}

/// Snapshot of an assignable unit. The engine never mutates these; the
/// managing surface owns the lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub status: ResourceStatus,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Room/equipment capacity; informational, not part of load math.
    #[serde(default)]
    pub capacity: Option<f64>,
}
