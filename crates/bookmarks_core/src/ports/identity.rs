//! Identity collaborator contract.

use crate::model::ids::UserId;

/// Resolves the caller of the current request.
pub trait IdentityProvider {
    /// Returns the current user id, or `None` for anonymous callers.
    fn current_user_id(&self) -> Option<UserId>;
    /// Returns whether the current caller passed host authentication.
    fn is_authenticated(&self) -> bool;

    /// Returns the user only when both checks agree.
    fn authenticated_user(&self) -> Option<UserId> {
        if self.is_authenticated() {
            self.current_user_id()
        } else {
            None
        }
    }
}

impl<T: IdentityProvider + ?Sized> IdentityProvider for &T {
    fn current_user_id(&self) -> Option<UserId> {
        (**self).current_user_id()
    }

    fn is_authenticated(&self) -> bool {
        (**self).is_authenticated()
    }
}

/// Fixed identity for callers that resolve the user up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StaticIdentity {
    user: Option<UserId>,
}

impl StaticIdentity {
    pub fn authenticated(user: UserId) -> Self {
        Self { user: Some(user) }
    }

    pub fn anonymous() -> Self {
        Self { user: None }
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_user_id(&self) -> Option<UserId> {
        self.user
    }

    fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
