use dioxus::prelude::*;

use api::auth::Access;
use ui::{Guard, SessionProvider, Sidebar, Toaster};
use views::{
    AdminDashboard, AdminPlans, AdminTenants, Billing, Dashboard, Login, Plans, Register,
    Settings, Users,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[layout(AppShell)]
        #[route("/")]
        Root {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/plans")]
        Plans {},
        #[route("/users")]
        Users {},
        #[route("/billing")]
        Billing {},
        #[route("/settings")]
        Settings {},
    #[end_layout]
    #[nest("/admin")]
        #[layout(AdminShell)]
            #[route("/")]
            AdminRoot {},
            #[route("/dashboard")]
            AdminDashboard {},
            #[route("/tenants")]
            AdminTenants {},
            #[route("/plans")]
            AdminPlans {},
        #[end_layout]
    #[end_nest]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
            Toaster {}
        }
    }
}

/// Layout for signed-in tenant views.
#[component]
fn AppShell() -> Element {
    rsx! {
        Guard {
            access: Access::Protected,
            Shell {}
        }
    }
}

/// Layout for the system administrator console.
#[component]
fn AdminShell() -> Element {
    rsx! {
        Guard {
            access: Access::AdminOnly,
            Shell {}
        }
    }
}

#[component]
fn Shell() -> Element {
    let route = use_route::<Route>();

    rsx! {
        div {
            class: "app-shell",
            Sidebar { current_path: route.to_string() }
            main {
                class: "app-content",
                Outlet::<Route> {}
            }
        }
    }
}

/// Redirect `/` to `/dashboard`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Dashboard {});
    rsx! {}
}

/// Redirect `/admin` to `/admin/dashboard`
#[component]
fn AdminRoot() -> Element {
    let nav = use_navigator();
    nav.replace(Route::AdminDashboard {});
    rsx! {}
}

/// Unknown paths land on the dashboard, which sends signed-out users on to login.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!("No route for /{}", segments.join("/"));
    nav.replace(Route::Dashboard {});
    rsx! {}
}
