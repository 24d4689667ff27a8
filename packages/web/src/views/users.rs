use api::models::NewUser;
use api::Role;
use dioxus::prelude::*;
use ui::use_session;

use super::{use_controller, ErrorBanner, Loading};

/// Members of the current tenant. Tenant administrators can add and remove users.
#[component]
pub fn Users() -> Element {
    let session = use_session();
    let controller = use_controller();
    let me = session.user();
    let can_manage = me.as_ref().is_some_and(|u| u.manages_tenant());
    let my_id = me.map(|u| u.id);

    let mut email = use_signal(String::new);
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut make_admin = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let mut users = use_resource({
        let controller = controller.clone();
        move || {
            let controller = controller.clone();
            async move { controller.client().users().list().await }
        }
    });

    let handle_create = {
        let controller = controller.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let controller = controller.clone();
            spawn(async move {
                let user = NewUser {
                    email: email().trim().to_string(),
                    first_name: first_name().trim().to_string(),
                    last_name: last_name().trim().to_string(),
                    role: if make_admin() { Role::TenantAdmin } else { Role::User },
                    password: Some(password()).filter(|p| !p.is_empty()),
                    phone_number: None,
                };
                if user.email.is_empty() {
                    error.set(Some("Email is required".to_string()));
                    return;
                }
                match controller.client().users().create(&user).await {
                    Ok(created) => {
                        tracing::info!(user = %created.email, "User created");
                        error.set(None);
                        email.set(String::new());
                        first_name.set(String::new());
                        last_name.set(String::new());
                        password.set(String::new());
                        make_admin.set(false);
                        users.restart();
                    }
                    Err(e) => error.set(Some(e.user_message("Failed to create user"))),
                }
            });
        }
    };

    let remove = move |id: i64| {
        let controller = controller.clone();
        spawn(async move {
            match controller.client().users().delete(id).await {
                Ok(()) => {
                    error.set(None);
                    users.restart();
                }
                Err(e) => error.set(Some(e.user_message("Failed to remove user"))),
            }
        });
    };

    rsx! {
        h1 { "Users" }

        if let Some(err) = error() {
            ErrorBanner { message: err }
        }

        if can_manage {
            form {
                class: "form-row",
                onsubmit: handle_create,
                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                input {
                    placeholder: "First name",
                    value: first_name(),
                    oninput: move |evt: FormEvent| first_name.set(evt.value()),
                }
                input {
                    placeholder: "Last name",
                    value: last_name(),
                    oninput: move |evt: FormEvent| last_name.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Initial password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                label {
                    input {
                        r#type: "checkbox",
                        checked: make_admin(),
                        onchange: move |evt: FormEvent| make_admin.set(evt.checked()),
                    }
                    " Tenant admin"
                }
                button { class: "btn", r#type: "submit", "Add user" }
            }
        }

        {match &*users.read() {
            None => rsx! { Loading { label: "Loading users..." } },
            Some(Err(e)) => rsx! { ErrorBanner { message: e.user_message("Failed to load users") } },
            Some(Ok(list)) => rsx! {
                table {
                    class: "data-table",
                    thead {
                        tr { th { "Name" } th { "Email" } th { "Role" } th {} }
                    }
                    tbody {
                        for user in list.iter().cloned() {
                            tr {
                                key: "{user.id}",
                                td { "{user.display_name()}" }
                                td { "{user.email}" }
                                td { "{user.role.as_str()}" }
                                td {
                                    if can_manage && Some(user.id) != my_id {
                                        button {
                                            class: "btn danger",
                                            onclick: {
                                                let remove = remove.clone();
                                                move |_| remove(user.id)
                                            },
                                            "Remove"
                                        }
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
