use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{Modal, Page, SubmitButton, TextField},
        constant::SITE_NAME,
        model::{auth::UserState, error::ApiError, toast::ToastContext},
    },
    model::{
        format::format_datetime_br,
        role::Role,
        user::{normalize_email, validate_password, CreateUserDto, UserListItemDto},
        validation::{is_blank, non_blank},
    },
};

#[cfg(feature = "web")]
use crate::client::api::user::{create_user, get_all_users, update_user_role};

#[component]
pub fn Users() -> Element {
    #[allow(unused_mut)]
    let mut users = use_signal(|| None::<Result<Vec<UserListItemDto>, ApiError>>);
    let mut show_create_modal = use_signal(|| false);
    let refetch_trigger = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_all_users().await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch users: {}", err);
            }
            users.set(Some(result.clone()));
        }
    });

    rsx! {
        Title { "Usuários | {SITE_NAME}" }
        Page {
            div {
                class: "w-full max-w-6xl mx-auto",
                div {
                    class: "card bg-base-200",
                    div {
                        class: "card-body",
                        div {
                            class: "flex justify-between items-center mb-4",
                            h1 { class: "card-title text-2xl", "Usuários" }
                            button {
                                class: "btn btn-primary btn-sm",
                                onclick: move |_| show_create_modal.set(true),
                                "Novo usuário"
                            }
                        }
                        match users() {
                            None => rsx! { span { class: "loading loading-spinner" } },
                            Some(Err(err)) => rsx! { div { class: "alert alert-error", "{err.message}" } },
                            Some(Ok(data)) => rsx! { UsersTable { users: data, refetch_trigger } },
                        }
                    }
                }
            }
        }
        CreateUserModal { show: show_create_modal, refetch_trigger }
    }
}

#[component]
fn UsersTable(users: Vec<UserListItemDto>, mut refetch_trigger: Signal<u32>) -> Element {
    let user_state = use_context::<Signal<UserState>>();
    #[allow(unused_mut)]
    let mut toast = use_context::<ToastContext>();
    let mut role_change = use_signal(|| None::<(i32, Role)>);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let (user_id, role) = role_change()?;
        Some(update_user_role(user_id, role).await)
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = future.read_unchecked().as_ref() {
            match result {
                Ok(user) => {
                    toast.success(format!("Perfil de {} atualizado.", user.name));
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => {
                    tracing::error!("Failed to update role: {}", err);
                    toast.error(err.message.clone());
                    // Redraw the selects with the stored roles
                    refetch_trigger.set(refetch_trigger() + 1);
                }
            }
            role_change.set(None);
        }
    });

    let current_user_id = user_state().user.map(|u| u.id);
    let is_updating = role_change().is_some();

    rsx! {
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-zebra w-full",
                thead {
                    tr {
                        th { "Nome" }
                        th { "E-mail" }
                        th { "Perfil" }
                        th { "Login" }
                        th { "Criado em" }
                    }
                }
                tbody {
                    for user in users {
                        {
                            let user_id = user.id;
                            let stored_role = Role::parse(&user.role);
                            let is_self = current_user_id == Some(user_id);
                            rsx! {
                                tr {
                                    key: "{user_id}",
                                    td {
                                        "{user.name}"
                                        if is_self {
                                            span { class: "badge badge-ghost badge-sm ml-2", "você" }
                                        }
                                    }
                                    td { "{user.email}" }
                                    td {
                                        select {
                                            class: "select select-sm w-fit",
                                            disabled: is_updating,
                                            onchange: move |evt| {
                                                if let Some(role) = Role::parse(&evt.value()) {
                                                    role_change.set(Some((user_id, role)));
                                                }
                                            },
                                            if stored_role.is_none() {
                                                option { value: "", selected: true, disabled: true, "Inválido ({user.role})" }
                                            }
                                            for role in Role::ALL {
                                                option {
                                                    value: role.as_str(),
                                                    selected: stored_role == Some(role),
                                                    {role.label()}
                                                }
                                            }
                                        }
                                    }
                                    td {
                                        if user.has_password {
                                            "Senha ou código"
                                        } else {
                                            "Somente código"
                                        }
                                    }
                                    td { {format_datetime_br(user.created_at)} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CreateUserModal(mut show: Signal<bool>, mut refetch_trigger: Signal<u32>) -> Element {
    let mut toast = use_context::<ToastContext>();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| Role::Tecnico);
    let mut submit_data = use_signal(|| None::<CreateUserDto>);

    // Reset form when modal opens
    use_effect(move || {
        if show() {
            name.set(String::new());
            email.set(String::new());
            password.set(String::new());
            role.set(Role::Tecnico);
            submit_data.set(None);
        }
    });

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let payload = submit_data()?;
        Some(create_user(payload).await)
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = future.read_unchecked().as_ref() {
            match result {
                Ok(user) => {
                    toast.success(format!("Usuário {} criado.", user.name));
                    refetch_trigger.set(refetch_trigger() + 1);
                    show.set(false);
                }
                Err(err) => {
                    tracing::error!("Failed to create user: {}", err);
                    toast.error(err.message.clone());
                }
            }
            submit_data.set(None);
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        if is_blank(&name()) {
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
        let initial_password = non_blank(Some(password().as_str()));
        if let Some(value) = initial_password.as_deref() {
            if let Err(err) = validate_password(value) {
                toast.error(err.to_string());
                return;
            }
        }

        submit_data.set(Some(CreateUserDto {
            email: normalized_email,
            name: name().trim().to_string(),
            role: role(),
            password: initial_password,
        }));
    };

    let is_submitting = submit_data().is_some();

    rsx! {
        Modal {
            show,
            title: "Novo usuário",
            prevent_close: is_submitting,
            form {
                class: "flex flex-col gap-3",
                onsubmit: on_submit,
                TextField { label: "Nome", value: name, disabled: is_submitting }
                TextField { label: "E-mail", value: email, input_type: "email", disabled: is_submitting }
                label {
                    class: "flex flex-col gap-1",
                    span { class: "text-sm", "Perfil" }
                    select {
                        class: "select w-full",
                        disabled: is_submitting,
                        onchange: move |evt| {
                            if let Some(selected) = Role::parse(&evt.value()) {
                                role.set(selected);
                            }
                        },
                        for option_role in Role::ALL {
                            option {
                                value: option_role.as_str(),
                                selected: option_role == role(),
                                {option_role.label()}
                            }
                        }
                    }
                }
                TextField {
                    label: "Senha (opcional)",
                    value: password,
                    input_type: "password",
                    autocomplete: "new-password",
                    disabled: is_submitting,
                }
                p { class: "text-xs opacity-70", "Sem senha, o usuário entra com um código enviado por e-mail." }
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        disabled: is_submitting,
                        onclick: move |_| show.set(false),
                        "Cancelar"
                    }
                    SubmitButton { is_submitting, label: "Criar" }
                }
            }
        }
    }
}
