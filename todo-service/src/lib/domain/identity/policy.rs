use crate::domain::identity::errors::AuthError;
use crate::domain::identity::models::AuthContext;
use crate::domain::user::models::UserId;

/// Ownership rule shared by user and to-do mutations: a caller may only
/// modify resources that belong to its own account.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorizationPolicy;

impl AuthorizationPolicy {
    pub fn can_modify(context: &AuthContext, owner_id: UserId) -> bool {
        context.user_id() == owner_id
    }

    /// # Errors
    /// * `Forbidden` - The resource belongs to another user
    pub fn ensure_can_modify(context: &AuthContext, owner_id: UserId) -> Result<(), AuthError> {
        if Self::can_modify(context, owner_id) {
            Ok(())
        } else {
            tracing::warn!(
                caller_id = %context.user_id(),
                owner_id = %owner_id,
                "Modification denied: resource belongs to another user"
            );
            Err(AuthError::Forbidden)
        }
    }
}
