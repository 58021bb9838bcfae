use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        component::Page,
        constant::SITE_NAME,
        model::error::ApiError,
        route::containers::ContainerSection,
        router::Route,
    },
    model::{checklist::FormResponseDto, format::format_datetime_br},
};

#[cfg(feature = "web")]
use crate::client::api::form_response::get_responses;

/// How many responses the dashboard lists.
const RECENT_RESPONSES: usize = 10;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        Title { "Dashboard | {SITE_NAME}" }
        Page {
            div {
                class: "w-full max-w-6xl mx-auto flex flex-col gap-6",
                h1 { class: "text-2xl font-bold", "Dashboard" }
                ContainerSection { manage: true }
                RecentResponses {}
            }
        }
    }
}

#[component]
fn RecentResponses() -> Element {
    #[allow(unused_mut)]
    let mut responses = use_signal(|| None::<Result<Vec<FormResponseDto>, ApiError>>);

    #[cfg(feature = "web")]
    let future = use_resource(get_responses);

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch recent responses: {}", err);
            }
            responses.set(Some(result.clone()));
        }
    });

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                div {
                    class: "flex justify-between items-center mb-4",
                    h2 { class: "card-title", "Respostas recentes" }
                    Link { to: Route::Responses {}, class: "btn btn-ghost btn-sm", "Ver todas" }
                }
                match responses() {
                    None => rsx! { span { class: "loading loading-spinner" } },
                    Some(Err(err)) => rsx! { div { class: "alert alert-error", "{err.message}" } },
                    Some(Ok(data)) if data.is_empty() => rsx! {
                        p { class: "opacity-70", "Nenhuma resposta enviada ainda." }
                    },
                    Some(Ok(data)) => rsx! {
                        ul {
                            class: "list",
                            for response in data.into_iter().take(RECENT_RESPONSES) {
                                li {
                                    key: "{response.id}",
                                    class: "list-row items-center",
                                    div {
                                        p { class: "font-semibold", "{response.container_name}" }
                                        p {
                                            class: "text-sm opacity-70",
                                            "{response.submitted_by} · "
                                            {format_datetime_br(response.created_at)}
                                        }
                                    }
                                    if response.content.is_auditor_comment() {
                                        span { class: "badge badge-info badge-sm", "Comentário" }
                                    }
                                    Link {
                                        to: Route::ResponseDetail { response_id: response.id },
                                        class: "btn btn-sm btn-ghost",
                                        "Detalhes"
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
