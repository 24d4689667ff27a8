//! # Session state machine
//!
//! [`SessionState`] is the whole of the client's authentication state. The
//! user record and the token pair only ever exist together inside
//! [`SessionState::Authenticated`], so a half-populated session cannot be
//! represented.
//!
//! ```text
//!            initialize / login / register
//!  Loading ───────────────────────────────▶ Authenticated ──┐ access_renewed,
//!     │  ▲                                      │    ▲       │ profile_updated
//!     │  └──────── login / register ────────────┼────┴───────┘
//!     ▼                                         ▼
//!  Unauthenticated ◀──── logout / refresh failure / expiry
//! ```
//!
//! Transitions consume the current state and return the next one; they do no
//! I/O. Persisting the result is the job of
//! [`SessionHandle`](super::SessionHandle).

use crate::models::{TokenPair, User};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    /// Startup reconciliation or a login/registration is in flight.
    #[default]
    Loading,
    Unauthenticated,
    Authenticated { user: User, tokens: TokenPair },
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated { user, .. } => Some(user),
            _ => None,
        }
    }

    pub fn tokens(&self) -> Option<&TokenPair> {
        match self {
            SessionState::Authenticated { tokens, .. } => Some(tokens),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated { .. })
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    pub fn loading(self) -> Self {
        SessionState::Loading
    }

    pub fn signed_in(self, user: User, tokens: TokenPair) -> Self {
        SessionState::Authenticated { user, tokens }
    }

    pub fn signed_out(self) -> Self {
        SessionState::Unauthenticated
    }

    /// Swap in a new access token, keeping the refresh token.
    /// Has no effect outside an authenticated session.
    pub fn access_renewed(self, access: String) -> Self {
        match self {
            SessionState::Authenticated { user, tokens } => SessionState::Authenticated {
                user,
                tokens: TokenPair {
                    access,
                    refresh: tokens.refresh,
                },
            },
            other => other,
        }
    }

    /// Replace the user record, keeping the tokens.
    /// Has no effect outside an authenticated session.
    pub fn profile_updated(self, user: User) -> Self {
        match self {
            SessionState::Authenticated { tokens, .. } => {
                SessionState::Authenticated { user, tokens }
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn user(role: Role) -> User {
        User {
            id: 1,
            email: "a@b.com".into(),
            first_name: String::new(),
            last_name: String::new(),
            role,
            is_tenant_admin: false,
            tenant_id: None,
            tenant_name: None,
            phone_number: None,
        }
    }

    #[test]
    fn test_starts_loading() {
        let state = SessionState::default();
        assert!(state.is_loading());
        assert!(!state.is_authenticated());
        assert!(state.user().is_none() && state.tokens().is_none());
    }

    #[test]
    fn test_sign_in_and_out() {
        let state = SessionState::Loading.signed_in(user(Role::User), TokenPair::new("A1", "R1"));
        assert!(state.is_authenticated());
        assert!(!state.is_loading());
        assert_eq!(state.tokens().unwrap().access, "A1");

        let state = state.signed_out();
        assert_eq!(state, SessionState::Unauthenticated);
        assert!(state.user().is_none() && state.tokens().is_none());
    }

    #[test]
    fn test_access_renewed_keeps_refresh() {
        let state = SessionState::Loading
            .signed_in(user(Role::User), TokenPair::new("A1", "R1"))
            .access_renewed("A2".into());
        assert_eq!(state.tokens(), Some(&TokenPair::new("A2", "R1")));
    }

    #[test]
    fn test_access_renewed_ignored_when_signed_out() {
        let state = SessionState::Unauthenticated.access_renewed("A2".into());
        assert_eq!(state, SessionState::Unauthenticated);
        assert!(SessionState::Loading
            .profile_updated(user(Role::Admin))
            .is_loading());
    }

    #[test]
    fn test_profile_updated_keeps_tokens() {
        let state = SessionState::Loading
            .signed_in(user(Role::User), TokenPair::new("A1", "R1"))
            .profile_updated(user(Role::TenantAdmin));
        assert_eq!(state.user().unwrap().role, Role::TenantAdmin);
        assert_eq!(state.tokens(), Some(&TokenPair::new("A1", "R1")));
    }
}
