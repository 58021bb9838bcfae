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
        checklist::{question_label, FormResponseDto, ResponseContent, CONTAINER_QUESTIONS, NO, YES},
        format::format_datetime_br,
        role::Role,
    },
};

#[cfg(feature = "web")]
use crate::client::api::form_response::get_response;

/// Answers in questionnaire order, unknown question ids last.
fn ordered_answers(content: &ResponseContent) -> Vec<(String, String)> {
    let ResponseContent::Answers(answers) = content else {
        return Vec::new();
    };

    let mut rows: Vec<(String, String)> = answers
        .iter()
        .map(|(id, value)| (id.clone(), value.clone()))
        .collect();
    rows.sort_by_key(|(id, _)| {
        CONTAINER_QUESTIONS
            .iter()
            .position(|q| q.id == id.as_str())
            .unwrap_or(usize::MAX)
    });
    rows
}

fn display_answer(value: &str) -> &str {
    match value {
        YES => "Sim",
        NO => "Não",
        other => other,
    }
}

#[component]
pub fn ResponseDetail(response_id: i32) -> Element {
    #[allow(unused_mut)]
    let mut response = use_signal(|| None::<Result<FormResponseDto, ApiError>>);
    let nav = navigator();
    let mut pending_delete = use_signal(|| None::<(RecordKind, i32, String)>);
    let refetch_trigger = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    let future = use_resource(use_reactive!(|response_id| async move {
        get_response(response_id).await
    }));

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch response {}: {}", response_id, err);
            }
            response.set(Some(result.clone()));
        }
    });

    let data = match response() {
        None => return rsx! { LoadingPage {} },
        Some(Err(err)) => return rsx! { ErrorPage { status: err.status, message: err.message } },
        Some(Ok(data)) => data,
    };

    let role = Role::parse(&data.role)
        .map(|role| role.label().to_string())
        .unwrap_or_else(|| data.role.clone());
    let location = data.container_location.clone().unwrap_or_else(|| "-".to_string());
    let answers = ordered_answers(&data.content);
    let container_name = data.container_name.clone();

    rsx! {
        Title { "Resposta #{data.id} | {SITE_NAME}" }
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
                            div {
                                h1 { class: "text-2xl font-bold", "{data.container_name}" }
                                p { class: "opacity-70", "{location}" }
                            }
                            button {
                                class: "btn btn-sm btn-error",
                                onclick: move |_| pending_delete.set(Some((RecordKind::Response, response_id, container_name.clone()))),
                                "Excluir"
                            }
                        }
                        div {
                            class: "grid sm:grid-cols-3 gap-2 text-sm",
                            div { span { class: "opacity-70", "Enviado por: " } "{data.submitted_by}" }
                            div { span { class: "opacity-70", "Perfil: " } "{role}" }
                            div { span { class: "opacity-70", "Data: " } {format_datetime_br(data.created_at)} }
                        }
                        match &data.content {
                            ResponseContent::AuditorComment(comment) => rsx! {
                                div {
                                    h2 { class: "font-semibold mb-2", "Comentário do auditor" }
                                    p { class: "whitespace-pre-wrap", "{comment}" }
                                }
                            },
                            ResponseContent::Answers(_) => rsx! {
                                table {
                                    class: "table w-full",
                                    thead {
                                        tr {
                                            th { "Pergunta" }
                                            th { "Resposta" }
                                        }
                                    }
                                    tbody {
                                        for (id, value) in answers {
                                            tr {
                                                key: "{id}",
                                                td { {question_label(&id)} }
                                                td { {display_answer(&value)} }
                                            }
                                        }
                                    }
                                }
                            },
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
