use std::collections::HashSet;

use crate::domain::user::value_objects::{Capability, UserId};

/// Ownership-scoped permission check: `<resource>:<action>:any` always passes,
/// `<resource>:<action>:own` passes when the acting user owns the record.
pub struct CanModifySpec<'a> {
    capabilities: &'a HashSet<Capability>,
    resource: &'a str,
    action: &'a str,
    owner_id: UserId,
    user_id: UserId,
}

impl<'a> CanModifySpec<'a> {
    pub const fn new(
        capabilities: &'a HashSet<Capability>,
        resource: &'a str,
        action: &'a str,
        owner_id: UserId,
        user_id: UserId,
    ) -> Self {
        Self {
            capabilities,
            resource,
            action,
            owner_id,
            user_id,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.has_scoped("any") || (self.has_scoped("own") && self.owner_id == self.user_id)
    }

    fn has_scoped(&self, scope: &str) -> bool {
        let action = format!("{}:{scope}", self.action);
        self.capabilities
            .iter()
            .any(|cap| cap.matches(self.resource, &action))
    }
}
