use dioxus::prelude::*;

/// Labelled input bound to a string signal.
#[component]
pub fn TextField(
    label: &'static str,
    value: Signal<String>,
    #[props(default = "text")] input_type: &'static str,
    #[props(default)] autocomplete: &'static str,
    #[props(default)] disabled: bool,
    #[props(default)] readonly: bool,
) -> Element {
    rsx! {
        label {
            class: "flex flex-col gap-1",
            span { class: "text-sm", "{label}" }
            input {
                r#type: input_type,
                class: "input w-full",
                autocomplete,
                value: "{value}",
                disabled,
                readonly,
                oninput: move |evt| value.set(evt.value()),
            }
        }
    }
}

#[component]
pub fn SubmitButton(
    is_submitting: bool,
    label: &'static str,
    #[props(default = "btn-primary")] class: &'static str,
) -> Element {
    rsx! {
        button {
            r#type: "submit",
            class: "btn {class}",
            disabled: is_submitting,
            if is_submitting {
                span { class: "loading loading-spinner loading-sm" }
            }
            "{label}"
        }
    }
}
