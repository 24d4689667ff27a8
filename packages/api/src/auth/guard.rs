//! Route access decisions, evaluated against a session snapshot.
//!
//! [`evaluate`] is pure: it never touches storage or the network, so the UI
//! can call it on every render.

use super::state::SessionState;

/// Who may visit a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Login and registration: signed-in users are sent to the dashboard.
    GuestOnly,
    Protected,
    AdminOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    Login,
    Dashboard,
}

impl Redirect {
    pub fn path(&self) -> &'static str {
        match self {
            Redirect::Login => "/login",
            Redirect::Dashboard => "/dashboard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    /// The session is still being reconciled; render a placeholder.
    Pending,
    Redirect(Redirect),
}

pub fn evaluate(access: Access, state: &SessionState) -> Decision {
    match access {
        Access::Public => Decision::Allow,
        Access::GuestOnly => match state {
            SessionState::Authenticated { .. } => Decision::Redirect(Redirect::Dashboard),
            _ => Decision::Allow,
        },
        Access::Protected | Access::AdminOnly => match state {
            SessionState::Loading => Decision::Pending,
            SessionState::Unauthenticated => Decision::Redirect(Redirect::Login),
            SessionState::Authenticated { user, .. } => {
                if access == Access::AdminOnly && !user.is_admin() {
                    Decision::Redirect(Redirect::Dashboard)
                } else {
                    Decision::Allow
                }
            }
        },
    }
}
