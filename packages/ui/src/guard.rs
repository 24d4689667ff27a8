use api::auth::{Access, Decision};
use dioxus::prelude::*;

use crate::session::use_access;

/// Renders `children` only when the session may see them; otherwise
/// replaces the current route with the redirect target.
#[component]
pub fn Guard(access: Access, children: Element) -> Element {
    let decision = use_access(access);
    let nav = use_navigator();

    use_effect(move || {
        if let Decision::Redirect(target) = decision() {
            tracing::debug!(?access, to = target.path(), "Route guard redirect");
            nav.replace(target.path());
        }
    });

    match decision() {
        Decision::Allow => rsx! { {children} },
        Decision::Pending => rsx! {
            div { class: "guard-pending", "Loading..." }
        },
        Decision::Redirect(_) => rsx! {},
    }
}
