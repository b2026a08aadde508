// src/application/commands/capability.rs
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{specifications::CanModifySpec, user::UserId},
};

pub(crate) fn ensure_capability(
    actor: &AuthenticatedUser,
    resource: &str,
    action: &str,
) -> ApplicationResult<()> {
    if actor.has_capability(resource, action) {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(format!(
            "missing capability {resource}:{action}"
        )))
    }
}

/// Require `<resource>:<action>:any`, or `:own` when `owner_id` is the actor.
pub(crate) fn ensure_can_modify(
    actor: &AuthenticatedUser,
    resource: &str,
    action: &str,
    owner_id: UserId,
) -> ApplicationResult<()> {
    let spec = CanModifySpec::new(&actor.capabilities, resource, action, owner_id, actor.id);
    if spec.is_satisfied() {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(format!(
            "insufficient privileges to {action} {resource}"
        )))
    }
}
