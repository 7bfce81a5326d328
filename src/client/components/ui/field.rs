use dioxus::prelude::*;

use crate::model::Choice;

/// `(value, label)` pairs of every option of `C`
pub fn choice_options<C: Choice>() -> Vec<(&'static str, &'static str)> {
    C::ALL
        .iter()
        .map(|choice| (choice.value(), choice.label()))
        .collect()
}

#[component]
fn FieldError(error: Option<String>) -> Element {
    rsx!(
        if let Some(error) = error {
            p { class: "text-error text-sm mt-1", "{error}" }
        }
    )
}

/// Labelled input with its validation message
#[component]
pub fn TextField(
    label: &'static str,
    name: &'static str,
    value: String,
    error: Option<String>,
    on_input: EventHandler<String>,
    #[props(default = "text")] input_type: &'static str,
    placeholder: Option<&'static str>,
) -> Element {
    let class = if error.is_some() {
        "input input-error w-full"
    } else {
        "input w-full"
    };

    rsx!(
        fieldset { class: "fieldset",
            label { class: "fieldset-legend", r#for: name, "{label}" }
            input {
                class: class,
                id: name,
                name: name,
                r#type: input_type,
                value: value,
                placeholder: placeholder,
                oninput: move |evt| on_input.call(evt.value()),
            }
            FieldError { error: error }
        }
    )
}

/// Labelled multi-line input with its validation message
#[component]
pub fn TextAreaField(
    label: &'static str,
    name: &'static str,
    value: String,
    error: Option<String>,
    on_input: EventHandler<String>,
    #[props(default = 3)] rows: u32,
) -> Element {
    rsx!(
        fieldset { class: "fieldset",
            label { class: "fieldset-legend", r#for: name, "{label}" }
            textarea {
                class: "textarea w-full",
                id: name,
                name: name,
                rows: "{rows}",
                value: value,
                oninput: move |evt| on_input.call(evt.value()),
            }
            FieldError { error: error }
        }
    )
}

/// Labelled select over a closed set of options
///
/// An empty `value` shows the placeholder option, which cannot be selected again.
#[component]
pub fn SelectField(
    label: &'static str,
    name: &'static str,
    value: String,
    options: Vec<(&'static str, &'static str)>,
    error: Option<String>,
    on_change: EventHandler<String>,
    #[props(default = "Select an option")] placeholder: &'static str,
) -> Element {
    let class = if error.is_some() {
        "select select-error w-full"
    } else {
        "select w-full"
    };

    rsx!(
        fieldset { class: "fieldset",
            label { class: "fieldset-legend", r#for: name, "{label}" }
            select {
                class: class,
                id: name,
                name: name,
                value: value.clone(),
                onchange: move |evt| on_change.call(evt.value()),
                option { value: "", disabled: true, selected: value.is_empty(), "{placeholder}" }
                for (option_value, option_label) in options {
                    option {
                        key: "{option_value}",
                        value: option_value,
                        selected: value == option_value,
                        "{option_label}"
                    }
                }
            }
            FieldError { error: error }
        }
    )
}
