use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{page::LoadingPage, Page, SubmitButton, TextField},
        constant::SITE_NAME,
        model::{auth::UserState, toast::ToastContext},
        router::post_login_route,
    },
    model::user::normalize_email,
};

#[cfg(feature = "web")]
use crate::client::api::auth::{login, request_login_code, request_password_reset, verify_login_code};

#[derive(Clone, Copy, PartialEq)]
enum LoginMode {
    Password,
    Code,
    ForgotPassword,
}

#[derive(Clone, PartialEq)]
enum LoginRequest {
    Password { email: String, password: String },
    SendCode { email: String },
    VerifyCode { email: String, code: String },
    ResetLink { email: String },
}

#[component]
pub fn Login(redirect: String) -> Element {
    #[allow(unused_mut)]
    let mut user_state = use_context::<Signal<UserState>>();
    let mut toast = use_context::<ToastContext>();
    let nav = navigator();

    let mut mode = use_signal(|| LoginMode::Password);
    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let mut code = use_signal(String::new);
    let mut code_sent = use_signal(|| false);
    let mut pending = use_signal(|| None::<LoginRequest>);

    // Signed-in users (already, or just now) leave for the requested page
    use_effect(use_reactive!(|redirect| {
        if let Some(user) = user_state().user {
            nav.replace(post_login_route(&redirect, user.role.landing_path()));
        }
    }));

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let request = pending()?;
        let result = match request.clone() {
            LoginRequest::Password { email, password } => login(email, password).await.map(Some),
            LoginRequest::SendCode { email } => request_login_code(email).await.map(|_| None),
            LoginRequest::VerifyCode { email, code } => {
                verify_login_code(email, code).await.map(Some)
            }
            LoginRequest::ResetLink { email } => request_password_reset(email).await.map(|_| None),
        };
        Some((request, result))
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some((request, result))) = future.read_unchecked().as_ref() {
            match result {
                Ok(Some(user)) => user_state.set(UserState::signed_in(user.clone())),
                Ok(None) => match request {
                    LoginRequest::SendCode { .. } => {
                        code_sent.set(true);
                        toast.info("Se o e-mail estiver cadastrado, enviamos um código de acesso.");
                    }
                    LoginRequest::ResetLink { .. } => {
                        mode.set(LoginMode::Password);
                        toast.info("Se o e-mail estiver cadastrado, enviamos um link para redefinir a senha.");
                    }
                    _ => (),
                },
                Err(err) => {
                    tracing::error!("Login request failed: {}", err);
                    toast.error(err.message.clone());
                }
            }
            pending.set(None);
        }
    });

    let mut submit = move |build: fn(String, String, String) -> LoginRequest| {
        let normalized = match normalize_email(&email()) {
            Ok(normalized) => normalized,
            Err(err) => {
                toast.error(err.to_string());
                return;
            }
        };
        pending.set(Some(build(normalized, password(), code())));
    };

    let on_password_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if password().is_empty() {
            toast.error("Informe a senha.");
            return;
        }
        submit(|email, password, _| LoginRequest::Password { email, password });
    };

    let on_code_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if !code_sent() {
            submit(|email, _, _| LoginRequest::SendCode { email });
        } else if code().trim().is_empty() {
            toast.error("Informe o código recebido.");
        } else {
            submit(|email, _, code| LoginRequest::VerifyCode {
                email,
                code: code.trim().to_string(),
            });
        }
    };

    let on_reset_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        submit(|email, _, _| LoginRequest::ResetLink { email });
    };

    let state = user_state();
    let is_submitting = pending().is_some();
    let current_mode = mode();

    rsx! {
        Title { "Login | {SITE_NAME}" }
        if !state.fetched || state.user.is_some() {
            LoadingPage {}
        } else {
            Page {
                class: "flex items-center justify-center",
                div {
                    class: "card bg-base-200 w-full max-w-sm shadow",
                    div {
                        class: "card-body gap-4",
                        h1 { class: "text-2xl font-bold text-center", {SITE_NAME} }

                        if current_mode != LoginMode::ForgotPassword {
                            div {
                                role: "tablist",
                                class: "tabs tabs-box",
                                a {
                                    role: "tab",
                                    class: if current_mode == LoginMode::Password { "tab tab-active" } else { "tab" },
                                    onclick: move |_| mode.set(LoginMode::Password),
                                    "Senha"
                                }
                                a {
                                    role: "tab",
                                    class: if current_mode == LoginMode::Code { "tab tab-active" } else { "tab" },
                                    onclick: move |_| mode.set(LoginMode::Code),
                                    "Código por e-mail"
                                }
                            }
                        }

                        match current_mode {
                            LoginMode::Password => rsx! {
                                form {
                                    class: "flex flex-col gap-3",
                                    onsubmit: on_password_submit,
                                    TextField { label: "E-mail", value: email, input_type: "email", autocomplete: "email", disabled: is_submitting }
                                    TextField {
                                        label: "Senha",
                                        value: password,
                                        input_type: "password",
                                        autocomplete: "current-password",
                                        disabled: is_submitting,
                                    }
                                    SubmitButton { is_submitting, label: "Entrar" }
                                    button {
                                        r#type: "button",
                                        class: "btn btn-link btn-sm",
                                        onclick: move |_| mode.set(LoginMode::ForgotPassword),
                                        "Esqueci minha senha"
                                    }
                                }
                            },
                            LoginMode::Code => rsx! {
                                form {
                                    class: "flex flex-col gap-3",
                                    onsubmit: on_code_submit,
                                    TextField { label: "E-mail", value: email, input_type: "email", autocomplete: "email", disabled: is_submitting || code_sent() }
                                    if code_sent() {
                                        label {
                                            class: "flex flex-col gap-1",
                                            span { class: "text-sm", "Código" }
                                            input {
                                                r#type: "text",
                                                class: "input w-full tracking-widest",
                                                inputmode: "numeric",
                                                autocomplete: "one-time-code",
                                                maxlength: 6,
                                                value: "{code}",
                                                disabled: is_submitting,
                                                oninput: move |evt| code.set(evt.value()),
                                            }
                                        }
                                        SubmitButton { is_submitting, label: "Entrar" }
                                        button {
                                            r#type: "button",
                                            class: "btn btn-link btn-sm",
                                            disabled: is_submitting,
                                            onclick: move |_| {
                                                code_sent.set(false);
                                                code.set(String::new());
                                            },
                                            "Usar outro e-mail"
                                        }
                                    } else {
                                        SubmitButton { is_submitting, label: "Enviar código" }
                                    }
                                }
                            },
                            LoginMode::ForgotPassword => rsx! {
                                form {
                                    class: "flex flex-col gap-3",
                                    onsubmit: on_reset_submit,
                                    p { class: "text-sm opacity-80", "Informe seu e-mail para receber um link de redefinição de senha." }
                                    TextField { label: "E-mail", value: email, input_type: "email", autocomplete: "email", disabled: is_submitting }
                                    SubmitButton { is_submitting, label: "Enviar link" }
                                    button {
                                        r#type: "button",
                                        class: "btn btn-link btn-sm",
                                        onclick: move |_| mode.set(LoginMode::Password),
                                        "Voltar ao login"
                                    }
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}
