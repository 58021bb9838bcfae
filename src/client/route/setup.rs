use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{Page, SubmitButton, TextField},
        constant::SITE_NAME,
        model::{auth::UserState, toast::ToastContext},
        router::Route,
    },
    model::{
        user::{normalize_email, validate_password, SetupDto},
        validation::is_blank,
    },
};

#[cfg(feature = "web")]
use crate::client::api::auth::setup;

/// First-run page creating the initial manager. The setup code is printed in the server log
/// at startup while no manager exists.
#[component]
pub fn Setup(code: String) -> Element {
    #[allow(unused_mut)]
    let mut user_state = use_context::<Signal<UserState>>();
    let mut toast = use_context::<ToastContext>();
    let nav = navigator();

    let setup_code = use_signal(|| code.clone());
    let name = use_signal(String::new);
    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let mut submit_data = use_signal(|| None::<SetupDto>);

    use_effect(move || {
        if user_state().user.is_some() {
            nav.replace(Route::Home {});
        }
    });

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let payload = submit_data()?;
        Some(setup(payload).await)
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = future.read_unchecked().as_ref() {
            match result {
                Ok(user) => {
                    toast.success("Conta de gerente criada.");
                    user_state.set(UserState::signed_in(user.clone()));
                }
                Err(err) => {
                    tracing::error!("Setup failed: {}", err);
                    toast.error(err.message.clone());
                }
            }
            submit_data.set(None);
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        if is_blank(&setup_code()) || is_blank(&name()) {
            toast.error("Preencha todos os campos obrigatórios.");
            return;
        }
        let normalized_email = match normalize_email(&email()) {
            Ok(normalized) => normalized,
            Err(err) => {
                toast.error(err.to_string());
                return;
            }
        };
        if let Err(err) = validate_password(&password()) {
            toast.error(err.to_string());
            return;
        }

        submit_data.set(Some(SetupDto {
            code: setup_code().trim().to_string(),
            email: normalized_email,
            name: name().trim().to_string(),
            password: password(),
        }));
    };

    let is_submitting = submit_data().is_some();

    rsx! {
        Title { "Configuração inicial | {SITE_NAME}" }
        Page {
            class: "flex items-center justify-center",
            div {
                class: "card bg-base-200 w-full max-w-sm shadow",
                form {
                    class: "card-body gap-3",
                    onsubmit: on_submit,
                    h1 { class: "text-xl font-bold", "Configuração inicial" }
                    p { class: "text-sm opacity-80", "Crie a conta do primeiro gerente usando o código exibido no log do servidor." }
                    TextField { label: "Código de configuração", value: setup_code, disabled: is_submitting }
                    TextField { label: "Nome", value: name, autocomplete: "name", disabled: is_submitting }
                    TextField { label: "E-mail", value: email, input_type: "email", autocomplete: "email", disabled: is_submitting }
                    TextField {
                        label: "Senha",
                        value: password,
                        input_type: "password",
                        autocomplete: "new-password",
                        disabled: is_submitting,
                    }
                    SubmitButton { is_submitting, label: "Criar gerente" }
                }
            }
        }
    }
}
