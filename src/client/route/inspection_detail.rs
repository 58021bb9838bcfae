use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Page},
        constant::SITE_NAME,
        model::error::ApiError,
        route::responses::{DeleteRecordModal, RecordKind},
        router::Route,
    },
    model::{
        format::{format_date_br, format_datetime_br},
        inspection::InspectionDto,
        role::Role,
    },
};

#[cfg(feature = "web")]
use crate::client::api::inspection::get_inspection;

#[component]
pub fn InspectionDetail(inspection_id: i32) -> Element {
    #[allow(unused_mut)]
    let mut inspection = use_signal(|| None::<Result<InspectionDto, ApiError>>);
    let nav = navigator();
    let mut pending_delete = use_signal(|| None::<(RecordKind, i32, String)>);
    let refetch_trigger = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    let future = use_resource(use_reactive!(|inspection_id| async move {
        get_inspection(inspection_id).await
    }));

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch inspection {}: {}", inspection_id, err);
            }
            inspection.set(Some(result.clone()));
        }
    });

    let data = match inspection() {
        None => return rsx! { LoadingPage {} },
        Some(Err(err)) => return rsx! { ErrorPage { status: err.status, message: err.message } },
        Some(Ok(data)) => data,
    };

    let subject_label = data
        .form_type
        .inspection_definition()
        .map(|d| d.subject_label)
        .unwrap_or("Identificação");
    let role = Role::parse(&data.role)
        .map(|role| role.label().to_string())
        .unwrap_or_else(|| data.role.clone());
    let subject = data.subject.clone();
    let form_label = data.form_type.label();

    let mut fields: Vec<(&str, String)> = vec![
        ("Responsável", data.responsible.clone()),
        ("Data da verificação", format_date_br(data.verification_date)),
        (subject_label, data.subject.clone()),
        ("Status", data.status.clone()),
        ("Tipo de inspeção", data.inspection_type.clone()),
        ("Houve avaria?", if data.damage { "Sim" } else { "Não" }.to_string()),
    ];
    if data.damage {
        fields.push(("Tipo de avaria", data.damage_type.clone().unwrap_or_default()));
        fields.push(("Medida corretiva", data.corrective_action.clone().unwrap_or_default()));
    }
    fields.push(("Enviado por", format!("{} ({})", data.submitted_by, role)));
    fields.push(("Enviado em", format_datetime_br(data.created_at)));

    rsx! {
        Title { "{form_label} #{data.id} | {SITE_NAME}" }
        Page {
            div {
                class: "w-full max-w-3xl mx-auto flex flex-col gap-4",
                Link { to: Route::Responses {}, class: "btn btn-ghost w-fit", "← Voltar às respostas" }
                div {
                    class: "card bg-base-200",
                    div {
                        class: "card-body gap-4",
                        div {
                            class: "flex justify-between items-start gap-4",
                            h1 { class: "text-2xl font-bold", "{form_label}" }
                            button {
                                class: "btn btn-sm btn-error",
                                onclick: move |_| pending_delete.set(Some((RecordKind::Inspection, inspection_id, subject.clone()))),
                                "Excluir"
                            }
                        }
                        dl {
                            class: "grid sm:grid-cols-2 gap-3",
                            for (label, value) in fields {
                                div {
                                    dt { class: "text-sm opacity-70", "{label}" }
                                    dd { "{value}" }
                                }
                            }
                        }
                        div {
                            h2 { class: "font-semibold mb-2", "Itens inspecionados" }
                            if data.items.is_empty() {
                                p { class: "opacity-70", "Nenhum item marcado." }
                            } else {
                                ul {
                                    class: "list-disc list-inside",
                                    for item in data.items.iter() {
                                        li { "{item}" }
                                    }
                                }
                            }
                        }
                        if let Some(notes) = data.notes.clone() {
                            div {
                                h2 { class: "font-semibold mb-2", "Observações" }
                                p { class: "whitespace-pre-wrap", "{notes}" }
                            }
                        }
                    }
                }
            }
        }
        DeleteRecordModal {
            pending_delete,
            refetch_trigger,
            on_deleted: move |_| {
                nav.replace(Route::Responses {});
            },
        }
    }
}
