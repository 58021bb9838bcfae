use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ErrorPage, Page, SubmitButton},
        constant::SITE_NAME,
        model::{auth::UserState, toast::ToastContext},
        router::{parse_container_id, Route},
    },
    model::{
        container::{ContainerDto, FormType},
        format::{format_iso_br, today_br},
        inspection::{CreateInspectionDto, InspectionDefinition, InspectionForm, CORRECTIVE_ACTIONS},
        role::{AfterSubmit, Role},
    },
};

#[cfg(feature = "web")]
use crate::client::api::{container::get_container, inspection::create_inspection};

#[component]
pub fn MaintenanceExecution(container_id: String) -> Element {
    rsx! {
        InspectionFormPage { form_type: FormType::MaintenanceExecution, container_id }
    }
}

#[component]
pub fn VehicleInspection(container_id: String) -> Element {
    rsx! {
        InspectionFormPage { form_type: FormType::VehicleInspection, container_id }
    }
}

#[component]
pub fn VesselInspection(container_id: String) -> Element {
    rsx! {
        InspectionFormPage { form_type: FormType::VesselInspection, container_id }
    }
}

/// Shared page of the three inspection checklists. The container is optional; when given it
/// is shown in the header and linked to the record.
#[component]
fn InspectionFormPage(form_type: FormType, container_id: String) -> Element {
    let Some(definition) = form_type.inspection_definition() else {
        return rsx! {
            ErrorPage { status: 404, message: "Formulário não encontrado." }
        };
    };
    let container_id = parse_container_id(&container_id);

    let user_state = use_context::<Signal<UserState>>();
    let mut toast = use_context::<ToastContext>();
    #[allow(unused_variables)]
    let nav = navigator();

    let user = user_state().user;
    let role = user.as_ref().map(|u| u.role).unwrap_or(Role::Tecnico);
    let responsible = user.map(|u| u.name).unwrap_or_default();

    let mut form = use_signal(|| InspectionForm::new(responsible, today_br()));
    #[allow(unused_mut)]
    let mut container = use_signal(|| None::<ContainerDto>);
    let mut submit_data = use_signal(|| None::<CreateInspectionDto>);

    #[cfg(feature = "web")]
    let container_future = use_resource(use_reactive!(|container_id| async move {
        match container_id {
            Some(id) => Some(get_container(id).await),
            None => None,
        }
    }));

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = container_future.read_unchecked().as_ref() {
            match result {
                Ok(data) => container.set(Some(data.clone())),
                Err(err) => {
                    tracing::error!("Failed to fetch container: {}", err);
                    toast.error(err.message.clone());
                }
            }
        }
    });

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let payload = submit_data()?;
        Some(create_inspection(payload).await)
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = future.read_unchecked().as_ref() {
            match result {
                Ok(_) => {
                    toast.success("Inspeção enviada com sucesso!");
                    match role.after_submit() {
                        AfterSubmit::ShowResponses => {
                            nav.push(Route::Responses {});
                        }
                        AfterSubmit::ResetForm => {
                            form.write().reset_keeping_responsible(today_br());
                        }
                    }
                }
                Err(err) => {
                    tracing::error!("Failed to submit inspection: {}", err);
                    toast.error(err.message.clone());
                }
            }
            submit_data.set(None);
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        let dto = form.read().to_dto(form_type, container_id);
        match dto.validate(today_br()) {
            Ok(_) => submit_data.set(Some(dto)),
            Err(err) => toast.error(err.to_string()),
        }
    };

    let is_submitting = submit_data().is_some();
    let state = form();
    let verification_date_label = format_iso_br(&state.verification_date);
    let container_label = container().map(|c| match c.location {
        Some(location) => format!("{} · {}", c.name, location),
        None => c.name,
    });

    rsx! {
        Title { "{definition.title} | {SITE_NAME}" }
        Page {
            div {
                class: "w-full max-w-3xl mx-auto flex flex-col gap-4",
                div {
                    h1 { class: "text-2xl font-bold", "{definition.title}" }
                    if let Some(label) = container_label {
                        p { class: "opacity-80", "{label}" }
                    }
                }
                form {
                    class: "card bg-base-200",
                    onsubmit: on_submit,
                    div {
                        class: "card-body gap-4",
                        div {
                            class: "grid md:grid-cols-2 gap-4",
                            label {
                                class: "flex flex-col gap-1",
                                span { class: "text-sm", "Responsável" }
                                input {
                                    r#type: "text",
                                    class: "input w-full",
                                    value: "{state.responsible}",
                                    readonly: true,
                                }
                            }
                            label {
                                class: "flex flex-col gap-1",
                                span { class: "text-sm", "Data da verificação" }
                                input {
                                    r#type: "date",
                                    class: "input w-full",
                                    value: "{state.verification_date}",
                                    disabled: is_submitting,
                                    oninput: move |evt| form.write().verification_date = evt.value(),
                                }
                                span { class: "text-xs opacity-70", {verification_date_label} }
                            }
                            label {
                                class: "flex flex-col gap-1",
                                span { class: "text-sm", "{definition.subject_label}" }
                                input {
                                    r#type: "text",
                                    class: "input w-full",
                                    value: "{state.subject}",
                                    disabled: is_submitting,
                                    oninput: move |evt| form.write().subject = evt.value(),
                                }
                            }
                            SelectField {
                                label: "Status",
                                options: definition.status_options,
                                value: state.status.clone(),
                                disabled: is_submitting,
                                onchange: move |value| form.write().status = value,
                            }
                            InspectionTypeField { definition, form, disabled: is_submitting }
                        }

                        fieldset {
                            class: "fieldset",
                            legend { class: "fieldset-legend", "Houve avaria?" }
                            div {
                                class: "flex gap-6",
                                for (flag, text) in [(true, "Sim"), (false, "Não")] {
                                    label {
                                        class: "flex items-center gap-2 cursor-pointer",
                                        input {
                                            r#type: "radio",
                                            class: "radio",
                                            name: "damage",
                                            checked: state.damage == flag,
                                            disabled: is_submitting,
                                            onchange: move |_| form.write().damage = flag,
                                        }
                                        span { "{text}" }
                                    }
                                }
                            }
                        }

                        if state.damage {
                            div {
                                class: "grid md:grid-cols-2 gap-4",
                                label {
                                    class: "flex flex-col gap-1",
                                    span { class: "text-sm", "Tipo de avaria" }
                                    input {
                                        r#type: "text",
                                        class: "input w-full",
                                        value: "{state.damage_type}",
                                        disabled: is_submitting,
                                        oninput: move |evt| form.write().damage_type = evt.value(),
                                    }
                                }
                                SelectField {
                                    label: "Medida corretiva",
                                    options: &CORRECTIVE_ACTIONS,
                                    value: state.corrective_action.clone(),
                                    disabled: is_submitting,
                                    onchange: move |value| form.write().corrective_action = value,
                                }
                            }
                        }

                        fieldset {
                            class: "fieldset",
                            legend { class: "fieldset-legend", "Itens inspecionados" }
                            div {
                                class: "grid md:grid-cols-2 gap-2",
                                for item in definition.items.iter().copied() {
                                    label {
                                        key: "{item}",
                                        class: "flex items-center gap-2 cursor-pointer",
                                        input {
                                            r#type: "checkbox",
                                            class: "checkbox checkbox-sm",
                                            checked: state.items.iter().any(|i| i == item),
                                            disabled: is_submitting,
                                            onchange: move |_| form.write().toggle_item(item),
                                        }
                                        span { class: "text-sm", "{item}" }
                                    }
                                }
                            }
                        }

                        label {
                            class: "flex flex-col gap-1",
                            span { class: "text-sm", "Observações" }
                            textarea {
                                class: "textarea w-full",
                                rows: 3,
                                value: "{state.notes}",
                                disabled: is_submitting,
                                oninput: move |evt| form.write().notes = evt.value(),
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

/// Fixed list when the form defines inspection types, free text otherwise.
#[component]
fn InspectionTypeField(
    definition: &'static InspectionDefinition,
    form: Signal<InspectionForm>,
    disabled: bool,
) -> Element {
    let value = form.read().inspection_type.clone();

    if definition.inspection_types.is_empty() {
        return rsx! {
            label {
                class: "flex flex-col gap-1",
                span { class: "text-sm", "Tipo de inspeção" }
                input {
                    r#type: "text",
                    class: "input w-full",
                    value: "{value}",
                    disabled,
                    oninput: move |evt| form.write().inspection_type = evt.value(),
                }
            }
        };
    }

    rsx! {
        SelectField {
            label: "Tipo de inspeção",
            options: definition.inspection_types,
            value,
            disabled,
            onchange: move |value| form.write().inspection_type = value,
        }
    }
}

#[component]
fn SelectField(
    label: &'static str,
    options: &'static [&'static str],
    value: String,
    disabled: bool,
    onchange: EventHandler<String>,
) -> Element {
    rsx! {
        label {
            class: "flex flex-col gap-1",
            span { class: "text-sm", "{label}" }
            select {
                class: "select w-full",
                disabled,
                onchange: move |evt| onchange.call(evt.value()),
                option { value: "", disabled: true, selected: value.is_empty(), "Selecione" }
                for choice in options.iter().copied() {
                    option { value: choice, selected: value == choice, "{choice}" }
                }
            }
        }
    }
}
