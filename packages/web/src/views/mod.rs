use std::rc::Rc;

use dioxus::prelude::*;
use ui::{use_session, AppController};

mod admin;
pub use admin::{AdminDashboard, AdminPlans, AdminTenants};

mod billing;
pub use billing::Billing;

mod dashboard;
pub use dashboard::Dashboard;

mod login;
pub use login::Login;

mod plans;
pub use plans::Plans;

mod register;
pub use register::Register;

mod settings;
pub use settings::Settings;

mod users;
pub use users::Users;

pub(crate) fn use_controller() -> Rc<AppController> {
    use_session().controller
}

#[component]
pub(crate) fn ErrorBanner(message: String) -> Element {
    rsx! {
        div { class: "error-banner", "{message}" }
    }
}

#[component]
pub(crate) fn Loading(label: String) -> Element {
    rsx! {
        p { class: "muted", "{label}" }
    }
}
