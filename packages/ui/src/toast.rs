//! Transient notifications for session events.
//!
//! [`ToastNotifier`] is the [`Notifier`] handed to the session controller; it
//! pushes onto a [`ToastQueue`] signal that [`Toaster`] renders. Each toast
//! dismisses itself after [`TOAST_TTL`] unless closed first.

use std::time::Duration;

use api::Notifier;
use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use gloo_timers::future::sleep;
#[cfg(not(target_arch = "wasm32"))]
use tokio::time::sleep;

const TOAST_CSS: Asset = asset!("/assets/styling/toast.css");

pub const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub timestamp: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    pub toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.to_string(),
            timestamp: current_time(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

pub fn use_toasts() -> Signal<ToastQueue> {
    use_context::<Signal<ToastQueue>>()
}

#[derive(Clone, Copy)]
pub struct ToastNotifier {
    queue: Signal<ToastQueue>,
}

impl ToastNotifier {
    pub fn new(queue: Signal<ToastQueue>) -> Self {
        Self { queue }
    }

    fn show(&self, kind: ToastKind, message: &str) {
        let mut queue = self.queue;
        let id = queue.write().push(kind, message);
        spawn(dismiss_after(TOAST_TTL, move || queue.write().dismiss(id)));
    }
}

async fn dismiss_after(ttl: Duration, dismiss: impl FnOnce()) {
    sleep(ttl).await;
    dismiss();
}

impl Notifier for ToastNotifier {
    fn success(&self, message: &str) {
        tracing::info!(target: "notify", "{message}");
        self.show(ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        tracing::warn!(target: "notify", "{message}");
        self.show(ToastKind::Error, message);
    }
}

#[component]
pub fn Toaster() -> Element {
    let mut queue = use_toasts();
    let toasts = queue().toasts.clone();

    rsx! {
        document::Stylesheet { href: TOAST_CSS }

        div {
            class: "toaster",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: match toast.kind {
                        ToastKind::Success => "toast success",
                        ToastKind::Error => "toast error",
                    },
                    span { class: "toast-time", "{toast.timestamp}" }
                    span { class: "toast-message", "{toast.message}" }
                    button {
                        class: "toast-close",
                        onclick: {
                            let id = toast.id;
                            move |_| queue.write().dismiss(id)
                        },
                        "×"
                    }
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let (h, m, s) = ((secs / 3600) % 24, (secs / 60) % 60, secs % 60);
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_push_and_dismiss() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Success, "Login successful!");
        let second = queue.push(ToastKind::Error, "Login failed");
        assert_ne!(first, second);
        assert_eq!(queue.toasts.len(), 2);

        queue.dismiss(first);
        assert_eq!(queue.toasts.len(), 1);
        assert_eq!(queue.toasts[0].message, "Login failed");
        assert_eq!(queue.toasts[0].kind, ToastKind::Error);
    }

    #[tokio::test]
    async fn test_toast_is_dismissed_after_ttl() {
        use std::cell::RefCell;

        let queue = RefCell::new(ToastQueue::default());
        let id = queue.borrow_mut().push(ToastKind::Success, "Logged out successfully");
        let other = queue.borrow_mut().push(ToastKind::Error, "Login failed");

        dismiss_after(Duration::from_millis(10), || queue.borrow_mut().dismiss(id)).await;

        let queue = queue.into_inner();
        assert_eq!(queue.toasts.len(), 1);
        assert_eq!(queue.toasts[0].id, other);
    }
}
