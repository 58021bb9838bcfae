use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ConfirmationModal, Page},
        constant::SITE_NAME,
        model::{error::ApiError, toast::ToastContext},
        router::Route,
    },
    model::{
        checklist::FormResponseDto,
        container::FormType,
        format::{format_date_br, format_datetime_br},
        inspection::InspectionDto,
        role::Role,
    },
};

#[cfg(feature = "web")]
use crate::client::api::{
    form_response::{delete_response, get_responses},
    inspection::{delete_inspection, get_inspections},
};

/// Which kind of record a pending delete targets.
#[derive(Clone, Copy, PartialEq)]
pub enum RecordKind {
    Response,
    Inspection,
}

#[component]
pub fn Responses() -> Element {
    let refetch_trigger = use_signal(|| 0u32);

    rsx! {
        Title { "Respostas | {SITE_NAME}" }
        Page {
            div {
                class: "w-full max-w-6xl mx-auto flex flex-col gap-6",
                h1 { class: "text-2xl font-bold", "Respostas" }
                ChecklistResponses { refetch_trigger }
                InspectionRecords { refetch_trigger }
            }
        }
    }
}

/// Stored role rendered with its label, or verbatim when unrecognised.
fn role_label(role: &str) -> String {
    Role::parse(role)
        .map(|role| role.label().to_string())
        .unwrap_or_else(|| role.to_string())
}

#[component]
fn ChecklistResponses(refetch_trigger: Signal<u32>) -> Element {
    #[allow(unused_mut)]
    let mut responses = use_signal(|| None::<Result<Vec<FormResponseDto>, ApiError>>);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_responses().await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch responses: {}", err);
            }
            responses.set(Some(result.clone()));
        }
    });

    let mut pending_delete = use_signal(|| None::<(RecordKind, i32, String)>);

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 { class: "card-title mb-4", "Checklists de container" }
                match responses() {
                    None => rsx! { span { class: "loading loading-spinner" } },
                    Some(Err(err)) => rsx! { div { class: "alert alert-error", "{err.message}" } },
                    Some(Ok(data)) if data.is_empty() => rsx! {
                        p { class: "opacity-70", "Nenhum checklist enviado." }
                    },
                    Some(Ok(data)) => rsx! {
                        div {
                            class: "overflow-x-auto",
                            table {
                                class: "table table-zebra w-full",
                                thead {
                                    tr {
                                        th { "Container" }
                                        th { "Enviado por" }
                                        th { "Perfil" }
                                        th { "Conteúdo" }
                                        th { "Data" }
                                        th { class: "text-right", "Ações" }
                                    }
                                }
                                tbody {
                                    for response in data {
                                        {
                                            let response_id = response.id;
                                            let container_name = response.container_name.clone();
                                            rsx! {
                                                tr {
                                                    key: "{response_id}",
                                                    td {
                                                        "{response.container_name}"
                                                        if response.container_id.is_none() {
                                                            span { class: "badge badge-ghost badge-sm ml-2", "excluído" }
                                                        }
                                                    }
                                                    td { "{response.submitted_by}" }
                                                    td { {role_label(&response.role)} }
                                                    td {
                                                        if response.content.is_auditor_comment() {
                                                            span { class: "badge badge-info badge-sm", "Comentário" }
                                                        } else {
                                                            span { class: "badge badge-success badge-sm", "Respostas" }
                                                        }
                                                    }
                                                    td { {format_datetime_br(response.created_at)} }
                                                    td {
                                                        div {
                                                            class: "flex gap-2 justify-end",
                                                            Link {
                                                                to: Route::ResponseDetail { response_id },
                                                                class: "btn btn-sm btn-ghost",
                                                                "Detalhes"
                                                            }
                                                            button {
                                                                class: "btn btn-sm btn-error",
                                                                onclick: move |_| pending_delete.set(Some((RecordKind::Response, response_id, container_name.clone()))),
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
                    },
                }
            }
        }
        DeleteRecordModal { pending_delete, refetch_trigger }
    }
}

#[component]
fn InspectionRecords(refetch_trigger: Signal<u32>) -> Element {
    let mut filter = use_signal(|| None::<FormType>);
    #[allow(unused_mut)]
    let mut inspections = use_signal(|| None::<Result<Vec<InspectionDto>, ApiError>>);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_inspections(filter()).await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch inspections: {}", err);
            }
            inspections.set(Some(result.clone()));
        }
    });

    let mut pending_delete = use_signal(|| None::<(RecordKind, i32, String)>);

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                div {
                    class: "flex flex-wrap justify-between items-center gap-2 mb-4",
                    h2 { class: "card-title", "Inspeções" }
                    select {
                        class: "select select-sm w-fit",
                        onchange: move |evt| filter.set(FormType::from_slug(&evt.value())),
                        option { value: "", selected: filter().is_none(), "Todos os formulários" }
                        for kind in FormType::INSPECTIONS {
                            option {
                                value: kind.slug(),
                                selected: filter() == Some(kind),
                                {kind.label()}
                            }
                        }
                    }
                }
                match inspections() {
                    None => rsx! { span { class: "loading loading-spinner" } },
                    Some(Err(err)) => rsx! { div { class: "alert alert-error", "{err.message}" } },
                    Some(Ok(data)) if data.is_empty() => rsx! {
                        p { class: "opacity-70", "Nenhuma inspeção enviada." }
                    },
                    Some(Ok(data)) => rsx! {
                        div {
                            class: "overflow-x-auto",
                            table {
                                class: "table table-zebra w-full",
                                thead {
                                    tr {
                                        th { "Formulário" }
                                        th { "Identificação" }
                                        th { "Responsável" }
                                        th { "Verificação" }
                                        th { "Avaria" }
                                        th { "Enviado em" }
                                        th { class: "text-right", "Ações" }
                                    }
                                }
                                tbody {
                                    for inspection in data {
                                        {
                                            let inspection_id = inspection.id;
                                            let subject = inspection.subject.clone();
                                            rsx! {
                                                tr {
                                                    key: "{inspection_id}",
                                                    td { {inspection.form_type.label()} }
                                                    td { "{inspection.subject}" }
                                                    td { "{inspection.responsible}" }
                                                    td { {format_date_br(inspection.verification_date)} }
                                                    td {
                                                        if inspection.damage {
                                                            span { class: "badge badge-warning badge-sm", "Sim" }
                                                        } else {
                                                            span { class: "badge badge-ghost badge-sm", "Não" }
                                                        }
                                                    }
                                                    td { {format_datetime_br(inspection.created_at)} }
                                                    td {
                                                        div {
                                                            class: "flex gap-2 justify-end",
                                                            Link {
                                                                to: Route::InspectionDetail { inspection_id },
                                                                class: "btn btn-sm btn-ghost",
                                                                "Detalhes"
                                                            }
                                                            button {
                                                                class: "btn btn-sm btn-error",
                                                                onclick: move |_| pending_delete.set(Some((RecordKind::Inspection, inspection_id, subject.clone()))),
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
                    },
                }
            }
        }
        DeleteRecordModal { pending_delete, refetch_trigger }
    }
}

/// Confirms and runs the delete of whichever record `pending_delete` names.
#[component]
pub fn DeleteRecordModal(
    mut pending_delete: Signal<Option<(RecordKind, i32, String)>>,
    mut refetch_trigger: Signal<u32>,
    on_deleted: Option<EventHandler<()>>,
) -> Element {
    #[allow(unused_mut)]
    let mut toast = use_context::<ToastContext>();
    let mut show = use_signal(|| false);
    let mut is_deleting = use_signal(|| false);

    use_effect(move || {
        if pending_delete().is_some() {
            show.set(true);
        }
    });

    // Closing the modal forgets the target
    use_effect(move || {
        if !show() {
            pending_delete.set(None);
        }
    });

    #[cfg(feature = "web")]
    let delete_future = use_resource(move || async move {
        if !is_deleting() {
            return None;
        }
        let (kind, id, _) = pending_delete.peek().clone()?;
        let result = match kind {
            RecordKind::Response => delete_response(id).await,
            RecordKind::Inspection => delete_inspection(id).await,
        };
        Some(result)
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = delete_future.read_unchecked().as_ref() {
            match result {
                Ok(()) => {
                    toast.success("Registro excluído.");
                    refetch_trigger.set(refetch_trigger() + 1);
                    show.set(false);
                    if let Some(handler) = on_deleted {
                        handler.call(());
                    }
                }
                Err(err) => {
                    tracing::error!("Failed to delete record: {}", err);
                    toast.error(err.message.clone());
                }
            }
            is_deleting.set(false);
        }
    });

    let (title, name) = match pending_delete() {
        Some((RecordKind::Response, _, name)) => ("Excluir resposta", name),
        Some((RecordKind::Inspection, _, name)) => ("Excluir inspeção", name),
        None => ("Excluir registro", String::new()),
    };

    rsx! {
        ConfirmationModal {
            show,
            title: title.to_string(),
            message: rsx! {
                p {
                    "Excluir o registro "
                    strong { "{name}" }
                    "? Esta ação não pode ser desfeita."
                }
            },
            is_processing: is_deleting(),
            on_confirm: move |_| is_deleting.set(true),
        }
    }
}
