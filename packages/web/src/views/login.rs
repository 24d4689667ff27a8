//! Login page view with email/password form.

use api::auth::Access;
use dioxus::prelude::*;
use ui::Guard;

use super::{use_controller, ErrorBanner};
use crate::Route;

#[component]
pub fn Login() -> Element {
    rsx! {
        Guard {
            access: Access::GuestOnly,
            LoginForm {}
        }
    }
}

#[component]
fn LoginForm() -> Element {
    let controller = use_controller();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let controller = controller.clone();
        spawn(async move {
            error.set(None);
            let e = email().trim().to_string();
            let p = password();
            if e.is_empty() || p.is_empty() {
                error.set(Some("Email and password are required".to_string()));
                return;
            }

            loading.set(true);
            match controller.login(&e, &p).await {
                Ok(user) => {
                    if user.is_admin() {
                        nav.replace(Route::AdminDashboard {});
                    } else {
                        nav.replace(Route::Dashboard {});
                    }
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.user_message("Login failed")));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-container",

            h1 { "Sign in" }
            p { class: "muted", "Sign in to your tenant console" }

            form {
                onsubmit: handle_login,
                class: "auth-form",

                if let Some(err) = error() {
                    ErrorBanner { message: err }
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "btn",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "muted",
                "Don't have an account? "
                Link { to: Route::Register {}, "Create one" }
            }
        }
    }
}
