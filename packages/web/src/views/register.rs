//! Registration page view. A tenant name, when given, creates a new tenant
//! with the registrant as its administrator.

use api::auth::Access;
use api::models::RegisterData;
use dioxus::prelude::*;
use ui::Guard;

use super::{use_controller, ErrorBanner};
use crate::Route;

#[component]
pub fn Register() -> Element {
    rsx! {
        Guard {
            access: Access::GuestOnly,
            RegisterForm {}
        }
    }
}

fn optional(value: String) -> Option<String> {
    let value = value.trim().to_string();
    (!value.is_empty()).then_some(value)
}

#[component]
fn RegisterForm() -> Element {
    let controller = use_controller();
    let nav = use_navigator();
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut tenant_name = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let controller = controller.clone();
        spawn(async move {
            error.set(None);

            let data = RegisterData {
                email: email().trim().to_string(),
                password: password(),
                password2: confirm_password(),
                first_name: first_name().trim().to_string(),
                last_name: last_name().trim().to_string(),
                phone_number: optional(phone()),
                tenant_name: optional(tenant_name()),
            };

            if data.first_name.is_empty() || data.last_name.is_empty() {
                error.set(Some("First and last name are required".to_string()));
                return;
            }
            if data.email.is_empty() || !data.email.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if data.password.len() < 8 {
                error.set(Some("Password must be at least 8 characters".to_string()));
                return;
            }
            if data.password != data.password2 {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            loading.set(true);
            match controller.register(&data).await {
                Ok(_) => {
                    nav.replace(Route::Dashboard {});
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.user_message("Registration failed")));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-container",

            h1 { "Create Account" }
            p { class: "muted", "Register a user, or a new tenant with you as its administrator" }

            form {
                onsubmit: handle_register,
                class: "auth-form",

                if let Some(err) = error() {
                    ErrorBanner { message: err }
                }

                input {
                    r#type: "text",
                    placeholder: "First name",
                    value: first_name(),
                    oninput: move |evt: FormEvent| first_name.set(evt.value()),
                }
                input {
                    r#type: "text",
                    placeholder: "Last name",
                    value: last_name(),
                    oninput: move |evt: FormEvent| last_name.set(evt.value()),
                }
                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                input {
                    r#type: "tel",
                    placeholder: "Phone (optional)",
                    value: phone(),
                    oninput: move |evt: FormEvent| phone.set(evt.value()),
                }
                input {
                    r#type: "text",
                    placeholder: "Organisation name (optional)",
                    value: tenant_name(),
                    oninput: move |evt: FormEvent| tenant_name.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password (min 8 characters)",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }

                button {
                    class: "btn",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "muted",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
