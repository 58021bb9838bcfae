use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ErrorPage, Page, SubmitButton, TextField},
        constant::SITE_NAME,
        model::toast::ToastContext,
        router::Route,
    },
    model::user::validate_password,
};

#[cfg(feature = "web")]
use crate::client::api::auth::confirm_password_reset;

/// Target of the reset link: `/reset-password?token=...`.
#[component]
pub fn ResetPassword(token: String) -> Element {
    let mut toast = use_context::<ToastContext>();
    #[allow(unused_variables)]
    let nav = navigator();

    let password = use_signal(String::new);
    let confirmation = use_signal(String::new);
    let mut should_submit = use_signal(|| false);

    #[cfg(feature = "web")]
    let future = {
        let token = token.clone();
        use_resource(move || {
            let token = token.clone();
            async move {
                if should_submit() {
                    Some(confirm_password_reset(token, password.peek().clone()).await)
                } else {
                    None
                }
            }
        })
    };

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = future.read_unchecked().as_ref() {
            match result {
                Ok(()) => {
                    toast.success("Senha redefinida. Entre com a nova senha.");
                    nav.replace(Route::Login {
                        redirect: String::new(),
                    });
                }
                Err(err) => {
                    tracing::error!("Failed to reset password: {}", err);
                    toast.error(err.message.clone());
                }
            }
            should_submit.set(false);
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        if let Err(err) = validate_password(&password()) {
            toast.error(err.to_string());
            return;
        }
        if password() != confirmation() {
            toast.error("As senhas não coincidem.");
            return;
        }
        should_submit.set(true);
    };

    if token.trim().is_empty() {
        return rsx! {
            ErrorPage { status: 400, message: "Link de redefinição inválido." }
        };
    }

    let is_submitting = should_submit();

    rsx! {
        Title { "Redefinir senha | {SITE_NAME}" }
        Page {
            class: "flex items-center justify-center",
            div {
                class: "card bg-base-200 w-full max-w-sm shadow",
                form {
                    class: "card-body gap-3",
                    onsubmit: on_submit,
                    h1 { class: "text-xl font-bold", "Redefinir senha" }
                    TextField {
                        label: "Nova senha",
                        value: password,
                        input_type: "password",
                        autocomplete: "new-password",
                        disabled: is_submitting,
                    }
                    TextField {
                        label: "Confirme a nova senha",
                        value: confirmation,
                        input_type: "password",
                        autocomplete: "new-password",
                        disabled: is_submitting,
                    }
                    SubmitButton { is_submitting, label: "Salvar senha" }
                    Link {
                        to: Route::Login { redirect: String::new() },
                        class: "btn btn-link btn-sm",
                        "Voltar ao login"
                    }
                }
            }
        }
    }
}
