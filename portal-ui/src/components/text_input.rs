//! Reusable text input component

use dioxus::prelude::*;

/// Value of the input's `type` attribute
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TextInputType {
    #[default]
    Text,
    Password,
}

impl TextInputType {
    pub fn as_str(self) -> &'static str {
        match self {
            TextInputType::Text => "text",
            TextInputType::Password => "password",
        }
    }
}

/// Labelled form input.
///
/// `trailing` renders inside the field on the right, used for the password
/// visibility toggle.
#[component]
pub fn TextInput(
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] input_type: TextInputType,
    #[props(default)] label: Option<String>,
    #[props(default)] placeholder: Option<String>,
    #[props(default)] id: Option<String>,
    #[props(default)] autocomplete: Option<&'static str>,
    #[props(default)] autofocus: bool,
    #[props(default)] trailing: Option<Element>,
) -> Element {
    let padding = if trailing.is_some() {
        "pl-4 pr-11 py-3"
    } else {
        "px-4 py-3"
    };

    let class = format!(
        "w-full {padding} bg-white/5 border border-white/10 rounded-lg text-gray-100 \
         placeholder-gray-500 focus:outline-none focus:ring-1 focus:ring-accent/60"
    );

    rsx! {
        div { class: "flex flex-col gap-1.5",
            if let Some(label) = label {
                label { class: "text-sm text-gray-400", r#for: id.clone(), "{label}" }
            }
            div { class: "relative",
                input {
                    r#type: input_type.as_str(),
                    class: "{class}",
                    id: id.as_deref(),
                    value: "{value}",
                    placeholder: placeholder.as_deref(),
                    autocomplete,
                    oninput: move |e| on_input.call(e.value()),
                    onmounted: move |event| async move {
                        if autofocus {
                            let _ = event.data().set_focus(true).await;
                        }
                    },
                }
                if let Some(trailing) = trailing {
                    div { class: "absolute inset-y-0 right-0 flex items-center pr-3", {trailing} }
                }
            }
        }
    }
}
