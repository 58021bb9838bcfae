use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ConfirmationModal, Modal, Page, SubmitButton, TextField},
        constant::SITE_NAME,
        model::{auth::UserState, error::ApiError, toast::ToastContext},
        router::form_route,
    },
    model::{
        container::{ContainerDto, CreateContainerDto, FormType},
        format::format_datetime_br,
        role::Role,
    },
};

#[cfg(feature = "web")]
use crate::client::api::container::{create_container, delete_container, get_containers};

#[component]
pub fn Containers() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let manage = user_state()
        .role()
        .is_some_and(|role| role.can_manage_containers());

    rsx! {
        Title { "Containers | {SITE_NAME}" }
        Page {
            div {
                class: "w-full max-w-6xl mx-auto",
                ContainerSection { manage }
            }
        }
    }
}

/// Container list with checklist links, plus create and delete when `manage` is set.
#[component]
pub fn ContainerSection(manage: bool) -> Element {
    let user_state = use_context::<Signal<UserState>>();
    #[allow(unused_mut)]
    let mut containers = use_signal(|| None::<Vec<ContainerDto>>);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<ApiError>);
    let mut show_create_modal = use_signal(|| false);
    let refetch_trigger = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_containers().await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(data) => {
                    containers.set(Some(data.clone()));
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to fetch containers: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    let role = user_state().role();

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                div {
                    class: "flex justify-between items-center mb-4",
                    h2 { class: "card-title", "Containers" }
                    if manage {
                        button {
                            class: "btn btn-primary btn-sm",
                            onclick: move |_| show_create_modal.set(true),
                            "Novo container"
                        }
                    }
                }
                if let Some(data) = containers() {
                    if data.is_empty() {
                        p { class: "opacity-70", "Nenhum container cadastrado." }
                    } else {
                        ContainersTable { containers: data, role, manage, refetch_trigger }
                    }
                } else if let Some(err) = error() {
                    div { class: "alert alert-error", "{err.message}" }
                } else {
                    span { class: "loading loading-spinner" }
                }
            }
        }
        if manage {
            CreateContainerModal { show: show_create_modal, refetch_trigger }
        }
    }
}

#[component]
fn ContainersTable(
    containers: Vec<ContainerDto>,
    role: Option<Role>,
    manage: bool,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    #[allow(unused_mut)]
    let mut toast = use_context::<ToastContext>();
    let mut show_delete_modal = use_signal(|| false);
    let mut container_to_delete = use_signal(|| None::<(i32, String)>);
    let mut is_deleting = use_signal(|| false);

    #[cfg(feature = "web")]
    let delete_future = use_resource(move || async move {
        if is_deleting() {
            let (id, _) = container_to_delete.peek().clone()?;
            Some(delete_container(id).await)
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = delete_future.read_unchecked().as_ref() {
            match result {
                Ok(()) => {
                    toast.success("Container excluído.");
                    refetch_trigger.set(refetch_trigger() + 1);
                    show_delete_modal.set(false);
                }
                Err(err) => {
                    tracing::error!("Failed to delete container: {}", err);
                    toast.error(err.message.clone());
                }
            }
            is_deleting.set(false);
        }
    });

    let delete_name = container_to_delete()
        .map(|(_, name)| name)
        .unwrap_or_default();

    rsx! {
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-zebra w-full",
                thead {
                    tr {
                        th { "Nome" }
                        th { "Local" }
                        th { "Formulário" }
                        th { "Criado em" }
                        th { class: "text-right", "Ações" }
                    }
                }
                tbody {
                    for container in containers {
                        {
                            let container_id = container.id;
                            let container_name = container.name.clone();
                            let can_open = role.is_some_and(|role| {
                                if container.form_type == FormType::ContainerChecklist {
                                    role.can_submit_checklist() || role.can_submit_auditor_comment()
                                } else {
                                    role.can_submit_checklist()
                                }
                            });
                            rsx! {
                                tr {
                                    key: "{container_id}",
                                    td { "{container.name}" }
                                    td { {container.location.clone().unwrap_or_else(|| "-".to_string())} }
                                    td { {container.form_type.label()} }
                                    td { {format_datetime_br(container.created_at)} }
                                    td {
                                        div {
                                            class: "flex gap-2 justify-end",
                                            if can_open {
                                                Link {
                                                    to: form_route(container.form_type, container_id),
                                                    class: "btn btn-sm btn-primary",
                                                    "Abrir formulário"
                                                }
                                            }
                                            if manage {
                                                a {
                                                    href: "{container.form_url}",
                                                    class: "btn btn-sm btn-ghost",
                                                    title: "Endereço usado no QR code",
                                                    "Link QR"
                                                }
                                                button {
                                                    class: "btn btn-sm btn-error",
                                                    onclick: move |_| {
                                                        container_to_delete.set(Some((container_id, container_name.clone())));
                                                        show_delete_modal.set(true);
                                                    },
                                                    "Excluir"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        ConfirmationModal {
            show: show_delete_modal,
            title: "Excluir container",
            message: rsx! {
                p {
                    "Excluir o container "
                    strong { "{delete_name}" }
                    "? As respostas já enviadas são mantidas."
                }
            },
            is_processing: is_deleting(),
            on_confirm: move |_| is_deleting.set(true),
        }
    }
}

#[component]
fn CreateContainerModal(mut show: Signal<bool>, mut refetch_trigger: Signal<u32>) -> Element {
    let mut toast = use_context::<ToastContext>();
    let mut name = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut form_type = use_signal(|| FormType::ContainerChecklist);
    let mut submit_data = use_signal(|| None::<CreateContainerDto>);

    // Reset form when modal opens
    use_effect(move || {
        if show() {
            name.set(String::new());
            location.set(String::new());
            form_type.set(FormType::ContainerChecklist);
            submit_data.set(None);
        }
    });

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let payload = submit_data()?;
        Some(create_container(payload).await)
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = future.read_unchecked().as_ref() {
            match result {
                Ok(container) => {
                    toast.success(format!("Container {} criado.", container.name));
                    refetch_trigger.set(refetch_trigger() + 1);
                    show.set(false);
                }
                Err(err) => {
                    tracing::error!("Failed to create container: {}", err);
                    toast.error(err.message.clone());
                }
            }
            submit_data.set(None);
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        let dto = CreateContainerDto {
            name: name(),
            location: Some(location()),
            form_type: form_type(),
        };
        match dto.validated() {
            Ok(valid) => submit_data.set(Some(valid)),
            Err(err) => toast.error(err.to_string()),
        }
    };

    let is_submitting = submit_data().is_some();

    rsx! {
        Modal {
            show,
            title: "Novo container",
            prevent_close: is_submitting,
            form {
                class: "flex flex-col gap-3",
                onsubmit: on_submit,
                TextField { label: "Nome", value: name, disabled: is_submitting }
                TextField { label: "Local (opcional)", value: location, disabled: is_submitting }
                label {
                    class: "flex flex-col gap-1",
                    span { class: "text-sm", "Formulário" }
                    select {
                        class: "select w-full",
                        disabled: is_submitting,
                        onchange: move |evt| {
                            if let Some(selected) = FormType::from_slug(&evt.value()) {
                                form_type.set(selected);
                            }
                        },
                        for kind in FormType::ALL {
                            option {
                                value: kind.slug(),
                                selected: kind == form_type(),
                                {kind.label()}
                            }
                        }
                    }
                }
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
