use api::models::{Invoice, PaymentRequest};
use dioxus::prelude::*;

use super::{use_controller, ErrorBanner, Loading};

/// Invoices of the current tenant, with payment through the backend's mocked gateway.
#[component]
pub fn Billing() -> Element {
    let controller = use_controller();
    let mut paying = use_signal(|| Option::<Invoice>::None);
    let mut card_number = use_signal(String::new);
    let mut expiry_date = use_signal(String::new);
    let mut cvv = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<String>::None);

    let mut invoices = use_resource({
        let controller = controller.clone();
        move || {
            let controller = controller.clone();
            async move { controller.client().billing().invoices().await }
        }
    });
    let mut history = use_resource({
        let controller = controller.clone();
        move || {
            let controller = controller.clone();
            async move { controller.client().billing().history().await }
        }
    });

    let handle_pay = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(invoice) = paying() else {
            return;
        };
        let controller = controller.clone();
        spawn(async move {
            let payment = PaymentRequest {
                invoice_id: invoice.id,
                amount: invoice.total_amount.clone(),
                payment_method: "card".to_string(),
                card_number: card_number().replace(' ', ""),
                expiry_date: expiry_date(),
                cvv: cvv(),
            };
            match controller.client().billing().process_payment(&payment).await {
                Ok(receipt) => {
                    error.set(None);
                    notice.set(Some(
                        receipt
                            .message
                            .unwrap_or_else(|| format!("Invoice {} paid", invoice.invoice_number)),
                    ));
                    paying.set(None);
                    card_number.set(String::new());
                    expiry_date.set(String::new());
                    cvv.set(String::new());
                    invoices.restart();
                    history.restart();
                }
                Err(e) => error.set(Some(e.user_message("Payment failed"))),
            }
        });
    };

    let payment_count = match &*history.read() {
        Some(Ok(list)) => Some(list.len()),
        _ => None,
    };

    rsx! {
        h1 { "Billing" }

        if let Some(err) = error() {
            ErrorBanner { message: err }
        }
        if let Some(msg) = notice() {
            p { class: "muted", "{msg}" }
        }

        if let Some(invoice) = paying() {
            form {
                class: "form-row",
                onsubmit: handle_pay,
                span { "Pay {invoice.invoice_number}: {invoice.total_amount} {invoice.currency}" }
                input {
                    placeholder: "Card number",
                    value: card_number(),
                    oninput: move |evt: FormEvent| card_number.set(evt.value()),
                }
                input {
                    placeholder: "MM/YY",
                    value: expiry_date(),
                    oninput: move |evt: FormEvent| expiry_date.set(evt.value()),
                }
                input {
                    placeholder: "CVV",
                    value: cvv(),
                    oninput: move |evt: FormEvent| cvv.set(evt.value()),
                }
                button { class: "btn", r#type: "submit", "Pay" }
                button {
                    class: "btn secondary",
                    r#type: "button",
                    onclick: move |_| paying.set(None),
                    "Cancel"
                }
            }
        }

        {match &*invoices.read() {
            None => rsx! { Loading { label: "Loading invoices..." } },
            Some(Err(e)) => rsx! { ErrorBanner { message: e.user_message("Failed to load invoices") } },
            Some(Ok(list)) if list.is_empty() => rsx! { p { class: "muted", "No invoices yet." } },
            Some(Ok(list)) => rsx! {
                table {
                    class: "data-table",
                    thead {
                        tr { th { "Invoice" } th { "Status" } th { "Total" } th { "Due" } th {} }
                    }
                    tbody {
                        for invoice in list.iter().cloned() {
                            tr {
                                key: "{invoice.id}",
                                td { "{invoice.invoice_number}" }
                                td { "{invoice.status:?}" }
                                td { "{invoice.total_amount} {invoice.currency}" }
                                td { {invoice.due_date.format("%Y-%m-%d").to_string()} }
                                td {
                                    if invoice.is_payable() {
                                        button {
                                            class: "btn",
                                            onclick: {
                                                let invoice = invoice.clone();
                                                move |_| paying.set(Some(invoice.clone()))
                                            },
                                            "Pay"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
        }}

        if let Some(count) = payment_count {
            p { class: "muted", "{count} payments on record" }
        }
    }
}
