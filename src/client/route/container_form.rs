use std::collections::BTreeMap;

use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Page, SubmitButton},
        constant::SITE_NAME,
        model::{auth::UserState, error::ApiError, toast::ToastContext},
        router::{form_route, parse_container_id, Route},
    },
    model::{
        checklist::{
            CreateFormResponseDto, Question, QuestionKind, ResponseContent, CONTAINER_QUESTIONS, NO, YES,
        },
        container::{ContainerDto, FormType},
        role::{AfterSubmit, Role},
    },
};

#[cfg(feature = "web")]
use crate::client::api::{container::get_container, form_response::create_response};

#[derive(Clone, Copy, PartialEq)]
enum ChecklistMode {
    Answers,
    Comment,
}

/// Container checklist page, reached from the container list or its QR code.
#[component]
pub fn ContainerForm(container_id: String) -> Element {
    let Some(container_id) = parse_container_id(&container_id) else {
        return rsx! {
            ErrorPage { status: 400, message: "Container não informado." }
        };
    };

    rsx! {
        ContainerFormLoader { container_id }
    }
}

#[component]
fn ContainerFormLoader(container_id: i32) -> Element {
    #[allow(unused_mut)]
    let mut container = use_signal(|| None::<Result<ContainerDto, ApiError>>);
    let nav = navigator();

    #[cfg(feature = "web")]
    let future = use_resource(use_reactive!(|container_id| async move {
        get_container(container_id).await
    }));

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch container {}: {}", container_id, err);
            }
            container.set(Some(result.clone()));
        }
    });

    // A container with another checklist sends the user to the right page
    use_effect(move || {
        if let Some(Ok(data)) = container() {
            if data.form_type != FormType::ContainerChecklist {
                nav.replace(form_route(data.form_type, data.id));
            }
        }
    });

    match container() {
        None => rsx! { LoadingPage {} },
        Some(Err(err)) => rsx! { ErrorPage { status: err.status, message: err.message } },
        Some(Ok(data)) if data.form_type != FormType::ContainerChecklist => rsx! { LoadingPage {} },
        Some(Ok(data)) => rsx! { ChecklistPage { container: data } },
    }
}

#[component]
fn ChecklistPage(container: ContainerDto) -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let mut toast = use_context::<ToastContext>();
    #[allow(unused_variables)]
    let nav = navigator();

    let role = user_state().role().unwrap_or(Role::Auditor);
    let can_answer = role.can_submit_checklist();
    let can_comment = role.can_submit_auditor_comment();

    let mut mode = use_signal(move || {
        if can_answer {
            ChecklistMode::Answers
        } else {
            ChecklistMode::Comment
        }
    });
    #[allow(unused_mut)]
    let mut answers = use_signal(BTreeMap::<String, String>::new);
    let mut comment = use_signal(String::new);
    let mut submit_data = use_signal(|| None::<CreateFormResponseDto>);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let payload = submit_data()?;
        Some(create_response(payload).await)
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = future.read_unchecked().as_ref() {
            match result {
                Ok(_) => {
                    toast.success("Formulário enviado com sucesso!");
                    match role.after_submit() {
                        AfterSubmit::ShowResponses => {
                            nav.push(Route::Responses {});
                        }
                        AfterSubmit::ResetForm => {
                            answers.set(BTreeMap::new());
                            comment.set(String::new());
                        }
                    }
                }
                Err(err) => {
                    tracing::error!("Failed to submit checklist: {}", err);
                    toast.error(err.message.clone());
                }
            }
            submit_data.set(None);
        }
    });

    let container_id = container.id;
    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        let content = match mode() {
            ChecklistMode::Answers => ResponseContent::Answers(answers()),
            ChecklistMode::Comment => ResponseContent::AuditorComment(comment()),
        };
        match content.validated() {
            Ok(content) => submit_data.set(Some(CreateFormResponseDto {
                container_id,
                content,
            })),
            Err(err) => toast.error(err.to_string()),
        }
    };

    let is_submitting = submit_data().is_some();
    let current_mode = mode();
    let location = container.location.clone().unwrap_or_default();

    rsx! {
        Title { "Checklist {container.name} | {SITE_NAME}" }
        Page {
            div {
                class: "w-full max-w-3xl mx-auto flex flex-col gap-4",
                div {
                    h1 { class: "text-2xl font-bold", "Checklist Container" }
                    p { class: "opacity-80", "{container.name}" }
                    if !location.is_empty() {
                        p { class: "text-sm opacity-70", "{location}" }
                    }
                }

                if can_answer && can_comment {
                    div {
                        role: "tablist",
                        class: "tabs tabs-box w-fit",
                        a {
                            role: "tab",
                            class: if current_mode == ChecklistMode::Answers { "tab tab-active" } else { "tab" },
                            onclick: move |_| mode.set(ChecklistMode::Answers),
                            "Checklist"
                        }
                        a {
                            role: "tab",
                            class: if current_mode == ChecklistMode::Comment { "tab tab-active" } else { "tab" },
                            onclick: move |_| mode.set(ChecklistMode::Comment),
                            "Comentário de auditoria"
                        }
                    }
                }

                form {
                    class: "card bg-base-200",
                    onsubmit: on_submit,
                    div {
                        class: "card-body gap-4",
                        if current_mode == ChecklistMode::Answers {
                            for question in CONTAINER_QUESTIONS {
                                QuestionField { key: "{question.id}", question, answers, disabled: is_submitting }
                            }
                        } else {
                            label {
                                class: "flex flex-col gap-1",
                                span { class: "text-sm", "Comentário do auditor" }
                                textarea {
                                    class: "textarea w-full",
                                    rows: 5,
                                    value: "{comment}",
                                    disabled: is_submitting,
                                    oninput: move |evt| comment.set(evt.value()),
                                }
                            }
                        }
                        div {
                            class: "card-actions justify-end",
                            SubmitButton { is_submitting, label: "Enviar" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn QuestionField(question: Question, answers: Signal<BTreeMap<String, String>>, disabled: bool) -> Element {
    let id = question.id;
    let current = answers.read().get(id).cloned().unwrap_or_default();
    let mut set_answer = move |value: String| {
        answers.write().insert(id.to_string(), value);
    };

    rsx! {
        fieldset {
            class: "fieldset",
            legend { class: "fieldset-legend", "{question.label}" }
            match question.kind {
                QuestionKind::YesNo => rsx! {
                    div {
                        class: "flex gap-6",
                        for (value, text) in [(YES, "Sim"), (NO, "Não")] {
                            label {
                                class: "flex items-center gap-2 cursor-pointer",
                                input {
                                    r#type: "radio",
                                    class: "radio",
                                    name: id,
                                    value,
                                    checked: current == value,
                                    disabled,
                                    onchange: move |_| set_answer(value.to_string()),
                                }
                                span { "{text}" }
                            }
                        }
                    }
                },
                QuestionKind::Number => rsx! {
                    input {
                        r#type: "number",
                        class: "input w-full",
                        step: "any",
                        value: "{current}",
                        disabled,
                        oninput: move |evt| set_answer(evt.value()),
                    }
                },
                QuestionKind::Text => rsx! {
                    textarea {
                        class: "textarea w-full",
                        rows: 2,
                        value: "{current}",
                        disabled,
                        oninput: move |evt| set_answer(evt.value()),
                    }
                },
            }
        }
    }
}
