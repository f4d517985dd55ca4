//! Reusable button components

use crate::components::icons::LoaderIcon;
use dioxus::prelude::*;

/// Unstyled button. Swallows clicks while disabled and exposes
/// `aria-disabled` so icon-only controls stay accessible.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: class.as_deref(),
            r#type: r#type.unwrap_or("button"),
            disabled,
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_disabled: if disabled { Some("true") } else { None },
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Accent gradient, full width - the form's submit control
    Primary,
    /// Round translucent - transport controls
    Round,
}

/// Form submit button.
///
/// Renders `type="submit"` so the enclosing form's `onsubmit` fires; while
/// `loading` it is disabled and shows a spinner next to the label.
#[component]
pub fn SubmitButton(
    #[props(default)] loading: bool,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let base = "w-full inline-flex items-center justify-center gap-2 py-3 rounded-lg font-semibold \
                text-white bg-gradient-to-r from-accent to-fuchsia-500 transition-opacity \
                hover:opacity-90 disabled:opacity-50 disabled:cursor-not-allowed";

    let computed_class = match &class {
        Some(extra) => format!("{base} {extra}"),
        None => base.to_string(),
    };

    rsx! {
        button {
            class: "{computed_class}",
            r#type: "submit",
            disabled: loading,
            aria_busy: if loading { Some("true") } else { None },
            if loading {
                LoaderIcon { class: "w-4 h-4 animate-spin" }
            }
            {children}
        }
    }
}

/// Icon button used by the transport bar
#[component]
pub fn IconButton(
    variant: ButtonVariant,
    aria_label: String,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let class = match variant {
        ButtonVariant::Primary => {
            "w-10 h-10 rounded-full flex items-center justify-center bg-accent text-white hover:opacity-90"
        }
        ButtonVariant::Round => {
            "w-8 h-8 rounded-full flex items-center justify-center bg-white/10 text-gray-200 hover:bg-white/20"
        }
    };

    rsx! {
        ChromelessButton {
            class: Some(class.to_string()),
            title: Some(aria_label.clone()),
            aria_label: Some(aria_label),
            onclick,
            {children}
        }
    }
}
