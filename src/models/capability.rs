use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    ProjectManager,
    TeamMember,
    Viewer,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::ProjectManager => "project_manager",
            UserRole::TeamMember => "team_member",
            UserRole::Viewer => "viewer",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for UserRole {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "admin" => Ok(UserRole::Admin),
            "project_manager" => Ok(UserRole::ProjectManager),
            "team_member" => Ok(UserRole::TeamMember),
            "viewer" => Ok(UserRole::Viewer),
            other => Err(format!("unsupported user role: {other}")),
        }
    }
}

/// Explicit capability set computed once per session and passed to callers
/// as data. UI surfaces gate actions on these flags instead of reading
/// ambient role state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CapabilitySet {
    pub can_create: bool,
    pub can_edit: bool,
    pub can_delete: bool,
    pub can_optimize: bool,
    pub can_manage_roles: bool,
}

impl CapabilitySet {
    pub fn for_role(role: UserRole) -> Self {
        let is_project_manager = role == UserRole::ProjectManager;
        let is_team_member = role == UserRole::TeamMember;
        let is_admin = role == UserRole::Admin;

        Self {
            can_create: is_project_manager || is_team_member,
            can_edit: is_project_manager,
            can_delete: is_project_manager,
            can_optimize: is_project_manager,
            can_manage_roles: is_admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_manager_controls_planning() {
        let caps = CapabilitySet::for_role(UserRole::ProjectManager);
        assert!(caps.can_create && caps.can_edit && caps.can_delete && caps.can_optimize);
        assert!(!caps.can_manage_roles);
    }

    #[test]
    fn admin_only_manages_roles() {
        let caps = CapabilitySet::for_role(UserRole::Admin);
        assert!(caps.can_manage_roles);
        assert!(!caps.can_edit && !caps.can_optimize);
    }

    #[test]
    fn viewer_gets_nothing() {
        assert_eq!(CapabilitySet::for_role(UserRole::Viewer), CapabilitySet::default());
    }

    #[test]
    fn team_member_can_only_create() {
        let caps = CapabilitySet::for_role(UserRole::TeamMember);
        assert!(caps.can_create);
        assert!(!caps.can_edit && !caps.can_delete && !caps.can_optimize && !caps.can_manage_roles);
    }
}
