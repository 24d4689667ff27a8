//! Session context and hooks for the UI.

use std::rc::Rc;

use api::auth::{evaluate, Access, Decision};
use api::{SessionState, User};
use dioxus::prelude::*;

use crate::platform::{make_controller, AppController};
use crate::toast::{ToastNotifier, ToastQueue};

/// Shared handle on the application's session.
///
/// `state` mirrors the controller's state and is what components should read;
/// it updates whenever the controller transitions.
#[derive(Clone)]
pub struct SessionContext {
    pub controller: Rc<AppController>,
    pub state: Signal<SessionState>,
}

impl SessionContext {
    pub fn user(&self) -> Option<User> {
        self.state.read().user().cloned()
    }
}

impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.controller, &other.controller) && self.state == other.state
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

/// Route decision for `access`, recomputed when the session changes.
pub fn use_access(access: Access) -> Memo<Decision> {
    let state = use_session().state;
    use_memo(move || evaluate(access, &state.read()))
}

/// Provider component that owns the session controller.
/// Wrap the router with this component.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let toasts = use_signal(ToastQueue::default);
    use_context_provider(|| toasts);

    let controller = use_hook(|| Rc::new(make_controller(Rc::new(ToastNotifier::new(toasts)))));
    let mut state = use_signal(|| controller.state());

    // Mirror controller transitions into the signal
    let watched = controller.clone();
    use_future(move || {
        let mut rx = watched.subscribe();
        async move {
            while rx.changed().await.is_ok() {
                let next = rx.borrow_and_update().clone();
                state.set(next);
            }
        }
    });

    // Reconcile the stored session once on mount
    let starting = controller.clone();
    use_future(move || {
        let controller = starting.clone();
        async move {
            controller.initialize().await;
        }
    });

    use_context_provider(|| SessionContext { controller, state });

    rsx! {
        {children}
    }
}
