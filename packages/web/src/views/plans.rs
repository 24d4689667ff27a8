use api::models::SubscriptionInput;
use dioxus::prelude::*;
use ui::use_session;

use super::{use_controller, ErrorBanner, Loading};

/// Plans on offer and the tenant's current subscriptions. Tenant
/// administrators can subscribe and cancel.
#[component]
pub fn Plans() -> Element {
    let session = use_session();
    let controller = use_controller();
    let can_manage = session.user().is_some_and(|u| u.manages_tenant());
    let mut error = use_signal(|| Option::<String>::None);

    let plans = use_resource({
        let controller = controller.clone();
        move || {
            let controller = controller.clone();
            async move { controller.client().plans().list().await }
        }
    });
    let mut subscriptions = use_resource({
        let controller = controller.clone();
        move || {
            let controller = controller.clone();
            async move { controller.client().subscriptions().list().await }
        }
    });

    let subscribe = {
        let controller = controller.clone();
        move |plan: i64| {
            let controller = controller.clone();
            spawn(async move {
                let input = SubscriptionInput {
                    plan,
                    tenant: None,
                    status: None,
                };
                match controller.client().subscriptions().create(&input).await {
                    Ok(_) => {
                        error.set(None);
                        subscriptions.restart();
                    }
                    Err(e) => error.set(Some(e.user_message("Failed to subscribe"))),
                }
            });
        }
    };

    let cancel = move |id: i64| {
        let controller = controller.clone();
        spawn(async move {
            match controller.client().subscriptions().cancel(id).await {
                Ok(()) => {
                    error.set(None);
                    subscriptions.restart();
                }
                Err(e) => error.set(Some(e.user_message("Failed to cancel subscription"))),
            }
        });
    };

    rsx! {
        h1 { "Plans" }

        if let Some(err) = error() {
            ErrorBanner { message: err }
        }

        h2 { "Current subscriptions" }
        {match &*subscriptions.read() {
            None => rsx! { Loading { label: "Loading subscriptions..." } },
            Some(Err(e)) => rsx! { ErrorBanner { message: e.user_message("Failed to load subscriptions") } },
            Some(Ok(list)) if list.is_empty() => rsx! { p { class: "muted", "No subscriptions yet." } },
            Some(Ok(list)) => rsx! {
                table {
                    class: "data-table",
                    thead {
                        tr { th { "Plan" } th { "Status" } th { "Renews" } th {} }
                    }
                    tbody {
                        for sub in list.iter().cloned() {
                            tr {
                                key: "{sub.id}",
                                td { {sub.plan_details.as_ref().map(|p| p.name.clone()).unwrap_or_else(|| format!("Plan #{}", sub.plan))} }
                                td { "{sub.status:?}" }
                                td { {sub.current_period_end.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()} }
                                td {
                                    if can_manage && sub.is_active() {
                                        button {
                                            class: "btn danger",
                                            onclick: {
                                                let cancel = cancel.clone();
                                                move |_| cancel(sub.id)
                                            },
                                            "Cancel"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
        }}

        h2 { "Available plans" }
        {match &*plans.read() {
            None => rsx! { Loading { label: "Loading plans..." } },
            Some(Err(e)) => rsx! { ErrorBanner { message: e.user_message("Failed to load plans") } },
            Some(Ok(list)) => rsx! {
                div {
                    class: "cards",
                    for plan in list.iter().filter(|p| p.is_active).cloned() {
                        div {
                            key: "{plan.id}",
                            class: if plan.is_popular { "card popular" } else { "card" },
                            h3 { "{plan.name}" }
                            div { class: "stat-value", "{plan.price} {plan.currency}" }
                            div { class: "muted", "{plan.billing_cycle:?}" }
                            p { "{plan.description}" }
                            if can_manage {
                                button {
                                    class: "btn",
                                    onclick: {
                                        let subscribe = subscribe.clone();
                                        move |_| subscribe(plan.id)
                                    },
                                    "Subscribe"
                                }
                            }
                        }
                    }
                }
            },
        }}
    }
}
