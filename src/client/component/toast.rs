use dioxus::prelude::*;

use crate::client::model::toast::ToastContext;

/// Renders the queued toasts in the top-right corner.
#[component]
pub fn ToastContainer() -> Element {
    let mut toast_ctx = use_context::<ToastContext>();
    let toasts = toast_ctx.toasts();

    rsx!(
        div {
            class: "toast toast-top toast-end z-50",
            {toasts.into_iter().map(|toast| {
                let id = toast.id;
                let alert_class = toast.kind.alert_class();
                rsx! {
                    div {
                        key: "{id}",
                        class: "alert {alert_class} shadow-lg",
                        span { "{toast.message}" }
                        button {
                            r#type: "button",
                            class: "btn btn-xs btn-ghost",
                            aria_label: "Fechar",
                            onclick: move |_| toast_ctx.dismiss(id),
                            "✕"
                        }
                    }
                }
            })}
        }
    )
}
