//! System administrator console: every tenant, every plan.

use api::models::{BillingCycle, PlanInput, TenantInput};
use dioxus::prelude::*;

use super::{use_controller, ErrorBanner, Loading};

#[derive(Clone, Debug, PartialEq)]
struct Totals {
    tenants: usize,
    active_tenants: usize,
    plans: usize,
    active_subscriptions: usize,
}

#[component]
pub fn AdminDashboard() -> Element {
    let controller = use_controller();
    let totals = use_resource(move || {
        let controller = controller.clone();
        async move {
            let client = controller.client();
            let tenants = client.tenants().list().await?;
            let plans = client.plans().list().await?;
            let subscriptions = client.subscriptions().list().await?;
            Ok::<_, api::ApiError>(Totals {
                tenants: tenants.len(),
                active_tenants: tenants.iter().filter(|t| t.is_active).count(),
                plans: plans.len(),
                active_subscriptions: subscriptions.iter().filter(|s| s.is_active()).count(),
            })
        }
    });

    rsx! {
        h1 { "Admin dashboard" }
        {match &*totals.read() {
            None => rsx! { Loading { label: "Loading totals..." } },
            Some(Err(e)) => rsx! { ErrorBanner { message: e.user_message("Failed to load totals") } },
            Some(Ok(t)) => rsx! {
                div {
                    class: "cards",
                    div {
                        class: "card",
                        div { class: "stat-value", "{t.tenants}" }
                        div { class: "muted", "Tenants ({t.active_tenants} active)" }
                    }
                    div {
                        class: "card",
                        div { class: "stat-value", "{t.plans}" }
                        div { class: "muted", "Plans" }
                    }
                    div {
                        class: "card",
                        div { class: "stat-value", "{t.active_subscriptions}" }
                        div { class: "muted", "Active subscriptions" }
                    }
                }
            },
        }}
    }
}

#[component]
pub fn AdminTenants() -> Element {
    let controller = use_controller();
    let mut name = use_signal(String::new);
    let mut contact_email = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let mut tenants = use_resource({
        let controller = controller.clone();
        move || {
            let controller = controller.clone();
            async move { controller.client().tenants().list().await }
        }
    });

    let handle_create = {
        let controller = controller.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let controller = controller.clone();
            spawn(async move {
                let input = TenantInput {
                    name: name().trim().to_string(),
                    contact_email: Some(contact_email().trim().to_string()).filter(|e| !e.is_empty()),
                    ..Default::default()
                };
                if input.name.is_empty() {
                    error.set(Some("Tenant name is required".to_string()));
                    return;
                }
                match controller.client().tenants().create(&input).await {
                    Ok(tenant) => {
                        tracing::info!(tenant = %tenant.name, "Tenant created");
                        error.set(None);
                        name.set(String::new());
                        contact_email.set(String::new());
                        tenants.restart();
                    }
                    Err(e) => error.set(Some(e.user_message("Failed to create tenant"))),
                }
            });
        }
    };

    let toggle_active = {
        let controller = controller.clone();
        move |(id, name, active): (i64, String, bool)| {
            let controller = controller.clone();
            spawn(async move {
                let input = TenantInput {
                    name,
                    is_active: Some(active),
                    ..Default::default()
                };
                match controller.client().tenants().update(id, &input).await {
                    Ok(_) => tenants.restart(),
                    Err(e) => error.set(Some(e.user_message("Failed to update tenant"))),
                }
            });
        }
    };

    let remove = move |id: i64| {
        let controller = controller.clone();
        spawn(async move {
            match controller.client().tenants().delete(id).await {
                Ok(()) => tenants.restart(),
                Err(e) => error.set(Some(e.user_message("Failed to delete tenant"))),
            }
        });
    };

    rsx! {
        h1 { "Tenants" }

        if let Some(err) = error() {
            ErrorBanner { message: err }
        }

        form {
            class: "form-row",
            onsubmit: handle_create,
            input {
                placeholder: "Tenant name",
                value: name(),
                oninput: move |evt: FormEvent| name.set(evt.value()),
            }
            input {
                r#type: "email",
                placeholder: "Contact email",
                value: contact_email(),
                oninput: move |evt: FormEvent| contact_email.set(evt.value()),
            }
            button { class: "btn", r#type: "submit", "Add tenant" }
        }

        {match &*tenants.read() {
            None => rsx! { Loading { label: "Loading tenants..." } },
            Some(Err(e)) => rsx! { ErrorBanner { message: e.user_message("Failed to load tenants") } },
            Some(Ok(list)) => rsx! {
                table {
                    class: "data-table",
                    thead {
                        tr { th { "Name" } th { "Slug" } th { "Users" } th { "Status" } th {} }
                    }
                    tbody {
                        for tenant in list.iter().cloned() {
                            tr {
                                key: "{tenant.id}",
                                td { "{tenant.name}" }
                                td { "{tenant.slug}" }
                                td { {tenant.user_count.map(|n| n.to_string()).unwrap_or_default()} }
                                td { if tenant.is_active { "Active" } else { "Inactive" } }
                                td {
                                    button {
                                        class: "btn secondary",
                                        onclick: {
                                            let toggle_active = toggle_active.clone();
                                            let args = (tenant.id, tenant.name.clone(), !tenant.is_active);
                                            move |_| toggle_active(args.clone())
                                        },
                                        if tenant.is_active { "Deactivate" } else { "Activate" }
                                    }
                                    button {
                                        class: "btn danger",
                                        onclick: {
                                            let remove = remove.clone();
                                            let id = tenant.id;
                                            move |_| remove(id)
                                        },
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            },
        }}
    }
}

#[component]
pub fn AdminPlans() -> Element {
    let controller = use_controller();
    let mut name = use_signal(String::new);
    let mut price = use_signal(String::new);
    let mut yearly = use_signal(|| false);
    let mut max_users = use_signal(|| 10u32);
    let mut error = use_signal(|| Option::<String>::None);

    let mut plans = use_resource({
        let controller = controller.clone();
        move || {
            let controller = controller.clone();
            async move { controller.client().plans().list().await }
        }
    });

    let handle_create = {
        let controller = controller.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let controller = controller.clone();
            spawn(async move {
                let input = PlanInput {
                    name: name().trim().to_string(),
                    description: String::new(),
                    price: price().trim().to_string(),
                    currency: "USD".to_string(),
                    billing_cycle: if yearly() { BillingCycle::Yearly } else { BillingCycle::Monthly },
                    max_users: max_users(),
                    max_storage_gb: 10,
                    max_api_calls: 10_000,
                    features: Vec::new(),
                    is_active: true,
                    is_popular: false,
                };
                if input.name.is_empty() || input.price.parse::<f64>().is_err() {
                    error.set(Some("A name and a numeric price are required".to_string()));
                    return;
                }
                match controller.client().plans().create(&input).await {
                    Ok(_) => {
                        error.set(None);
                        name.set(String::new());
                        price.set(String::new());
                        plans.restart();
                    }
                    Err(e) => error.set(Some(e.user_message("Failed to create plan"))),
                }
            });
        }
    };

    let remove = move |id: i64| {
        let controller = controller.clone();
        spawn(async move {
            match controller.client().plans().delete(id).await {
                Ok(()) => plans.restart(),
                Err(e) => error.set(Some(e.user_message("Failed to delete plan"))),
            }
        });
    };

    rsx! {
        h1 { "Plans" }

        if let Some(err) = error() {
            ErrorBanner { message: err }
        }

        form {
            class: "form-row",
            onsubmit: handle_create,
            input {
                placeholder: "Plan name",
                value: name(),
                oninput: move |evt: FormEvent| name.set(evt.value()),
            }
            input {
                placeholder: "Price",
                value: price(),
                oninput: move |evt: FormEvent| price.set(evt.value()),
            }
            input {
                r#type: "number",
                min: "1",
                value: "{max_users}",
                oninput: move |evt: FormEvent| {
                    if let Ok(n) = evt.value().parse() {
                        max_users.set(n);
                    }
                },
            }
            label {
                input {
                    r#type: "checkbox",
                    checked: yearly(),
                    onchange: move |evt: FormEvent| yearly.set(evt.checked()),
                }
                " Yearly"
            }
            button { class: "btn", r#type: "submit", "Add plan" }
        }

        {match &*plans.read() {
            None => rsx! { Loading { label: "Loading plans..." } },
            Some(Err(e)) => rsx! { ErrorBanner { message: e.user_message("Failed to load plans") } },
            Some(Ok(list)) => rsx! {
                table {
                    class: "data-table",
                    thead {
                        tr { th { "Name" } th { "Price" } th { "Cycle" } th { "Max users" } th {} }
                    }
                    tbody {
                        for plan in list.iter().cloned() {
                            tr {
                                key: "{plan.id}",
                                td { "{plan.name}" }
                                td { "{plan.price} {plan.currency}" }
                                td { "{plan.billing_cycle:?}" }
                                td { {plan.max_users.map(|n| n.to_string()).unwrap_or_else(|| "Unlimited".to_string())} }
                                td {
                                    button {
                                        class: "btn danger",
                                        onclick: {
                                            let remove = remove.clone();
                                            let id = plan.id;
                                            move |_| remove(id)
                                        },
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            },
        }}
    }
}
