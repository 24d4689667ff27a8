use dioxus::prelude::*;

use crate::navigation::{is_active, nav_items};
use crate::session::use_session;

const SIDEBAR_CSS: Asset = asset!("/assets/styling/sidebar.css");

/// Role-aware navigation with the signed-in user and a logout action.
#[component]
pub fn Sidebar(current_path: String) -> Element {
    let session = use_session();
    let Some(user) = session.user() else {
        return rsx! {};
    };
    let items = nav_items(&user);
    let tenant = user.tenant_name.clone().unwrap_or_default();

    rsx! {
        document::Stylesheet { href: SIDEBAR_CSS }

        nav {
            class: "sidebar",

            div {
                class: "sidebar-user",
                span { class: "sidebar-user-name", "{user.display_name()}" }
                span { class: "sidebar-user-role", "{user.role.as_str()}" }
                if !tenant.is_empty() {
                    span { class: "sidebar-user-tenant", "{tenant}" }
                }
            }

            div {
                class: "sidebar-items",
                for item in items.iter() {
                    Link {
                        key: "{item.path}",
                        class: if is_active(item, &current_path) { "sidebar-item active" } else { "sidebar-item" },
                        to: item.path,
                        "{item.label}"
                    }
                }
            }

            div {
                class: "sidebar-bottom",
                LogoutItem {}
            }
        }
    }
}

#[component]
fn LogoutItem() -> Element {
    let session = use_session();

    let onclick = move |_| {
        let controller = session.controller.clone();
        async move {
            controller.sign_out().await;
        }
    };

    rsx! {
        button {
            class: "sidebar-bottom-item",
            onclick: onclick,
            "Log out"
        }
    }
}
