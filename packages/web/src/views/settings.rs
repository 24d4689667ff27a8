use api::models::{PasswordChange, ProfileUpdate};
use dioxus::prelude::*;
use ui::use_session;

use super::{use_controller, ErrorBanner};

fn optional(value: String) -> Option<String> {
    let value = value.trim().to_string();
    (!value.is_empty()).then_some(value)
}

/// Profile details and password change for the signed-in user.
#[component]
pub fn Settings() -> Element {
    let session = use_session();
    let controller = use_controller();
    let user = session.user();

    let mut first_name = use_signal(|| user.as_ref().map(|u| u.first_name.clone()).unwrap_or_default());
    let mut last_name = use_signal(|| user.as_ref().map(|u| u.last_name.clone()).unwrap_or_default());
    let mut phone = use_signal(|| {
        user.as_ref()
            .and_then(|u| u.phone_number.clone())
            .unwrap_or_default()
    });
    let mut profile_status = use_signal(|| Option::<Result<String, String>>::None);

    let mut old_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut password_status = use_signal(|| Option::<Result<String, String>>::None);

    // Pick up server-side changes made elsewhere
    let _refresh = use_resource({
        let controller = controller.clone();
        move || {
            let controller = controller.clone();
            async move {
                if let Err(e) = controller.reload_profile().await {
                    tracing::warn!("Failed to reload profile: {e}");
                }
            }
        }
    });

    let save_profile = {
        let controller = controller.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let controller = controller.clone();
            spawn(async move {
                let update = ProfileUpdate {
                    first_name: Some(first_name().trim().to_string()),
                    last_name: Some(last_name().trim().to_string()),
                    phone_number: optional(phone()),
                };
                match controller.update_profile(&update).await {
                    Ok(_) => profile_status.set(Some(Ok("Profile updated".to_string()))),
                    Err(e) => profile_status.set(Some(Err(e.user_message("Failed to update profile")))),
                }
            });
        }
    };

    let change_password = move |evt: FormEvent| {
        evt.prevent_default();
        let controller = controller.clone();
        spawn(async move {
            let change = PasswordChange {
                old_password: old_password(),
                new_password: new_password(),
                new_password_confirm: confirm_password(),
            };
            if change.new_password.len() < 8 {
                password_status.set(Some(Err("Password must be at least 8 characters".to_string())));
                return;
            }
            if change.new_password != change.new_password_confirm {
                password_status.set(Some(Err("Passwords do not match".to_string())));
                return;
            }
            match controller.change_password(&change).await {
                Ok(()) => {
                    old_password.set(String::new());
                    new_password.set(String::new());
                    confirm_password.set(String::new());
                    password_status.set(Some(Ok("Password changed".to_string())));
                }
                Err(e) => password_status.set(Some(Err(e.user_message("Failed to change password")))),
            }
        });
    };

    let email = user.map(|u| u.email).unwrap_or_default();

    rsx! {
        h1 { "Settings" }

        h2 { "Profile" }
        p { class: "muted", "{email}" }
        form {
            class: "auth-form",
            onsubmit: save_profile,
            {status_line(profile_status())}
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
                r#type: "tel",
                placeholder: "Phone",
                value: phone(),
                oninput: move |evt: FormEvent| phone.set(evt.value()),
            }
            button { class: "btn", r#type: "submit", "Save profile" }
        }

        h2 { "Password" }
        form {
            class: "auth-form",
            onsubmit: change_password,
            {status_line(password_status())}
            input {
                r#type: "password",
                placeholder: "Current password",
                value: old_password(),
                oninput: move |evt: FormEvent| old_password.set(evt.value()),
            }
            input {
                r#type: "password",
                placeholder: "New password",
                value: new_password(),
                oninput: move |evt: FormEvent| new_password.set(evt.value()),
            }
            input {
                r#type: "password",
                placeholder: "Confirm new password",
                value: confirm_password(),
                oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
            }
            button { class: "btn", r#type: "submit", "Change password" }
        }
    }
}

fn status_line(status: Option<Result<String, String>>) -> Element {
    match status {
        None => rsx! {},
        Some(Ok(msg)) => rsx! { p { class: "muted", "{msg}" } },
        Some(Err(msg)) => rsx! { ErrorBanner { message: msg } },
    }
}
