use dioxus::prelude::*;
use ui::use_session;

use super::{use_controller, ErrorBanner, Loading};

/// Headline figures for the signed-in user's tenant.
#[derive(Clone, Debug, PartialEq)]
struct Overview {
    active_subscriptions: usize,
    open_invoices: usize,
    users: usize,
}

#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let controller = use_controller();
    let overview = use_resource(move || {
        let controller = controller.clone();
        async move {
            let client = controller.client();
            let subscriptions = client.subscriptions().list().await?;
            let invoices = client.billing().invoices().await?;
            let users = client.users().list().await?;
            Ok::<_, api::ApiError>(Overview {
                active_subscriptions: subscriptions.iter().filter(|s| s.is_active()).count(),
                open_invoices: invoices.iter().filter(|i| i.is_payable()).count(),
                users: users.len(),
            })
        }
    });

    let user = session.user();
    let greeting = user.as_ref().map(|u| u.display_name()).unwrap_or_default();
    let tenant = user.and_then(|u| u.tenant_name).unwrap_or_default();

    rsx! {
        h1 { "Welcome, {greeting}" }
        if !tenant.is_empty() {
            p { class: "muted", "{tenant}" }
        }

        {match &*overview.read() {
            None => rsx! { Loading { label: "Loading overview..." } },
            Some(Err(e)) => rsx! { ErrorBanner { message: e.user_message("Failed to load overview") } },
            Some(Ok(o)) => rsx! {
                div {
                    class: "cards",
                    div {
                        class: "card",
                        div { class: "stat-value", "{o.active_subscriptions}" }
                        div { class: "muted", "Active subscriptions" }
                    }
                    div {
                        class: "card",
                        div { class: "stat-value", "{o.open_invoices}" }
                        div { class: "muted", "Open invoices" }
                    }
                    div {
                        class: "card",
                        div { class: "stat-value", "{o.users}" }
                        div { class: "muted", "Users" }
                    }
                }
            },
        }}
    }
}
