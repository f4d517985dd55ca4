//! Login/register card
//!
//! Pure, props-based view. The web crate owns the inputs' values and the
//! controller; this only renders them and reports intent.

use crate::components::icons::{AlertTriangleIcon, CheckIcon, EyeIcon, EyeOffIcon};
use crate::components::{ChromelessButton, SubmitButton, TextInput, TextInputType};
use dioxus::prelude::*;
use portal_common::{Feedback, FormCopy};

/// Auth card view (pure, props-based)
#[component]
pub fn AuthFormView(
    copy: FormCopy,
    username: String,
    password: String,
    password_visible: bool,
    submitting: bool,
    feedback: Feedback,
    #[props(default)] forgot_href: Option<String>,
    on_username_input: EventHandler<String>,
    on_password_input: EventHandler<String>,
    on_submit: EventHandler<()>,
    on_toggle_mode: EventHandler<()>,
    on_toggle_password: EventHandler<()>,
) -> Element {
    let input_type = if password_visible {
        TextInputType::Text
    } else {
        TextInputType::Password
    };
    let forgot_href = forgot_href.unwrap_or_else(|| "#".to_string());

    rsx! {
        div { class: "w-full max-w-md bg-gray-900/80 backdrop-blur rounded-2xl p-8 shadow-2xl",
            h1 { class: "text-3xl font-bold text-white",
                "{copy.title_lead} "
                span { class: "text-accent", "{copy.title_highlight}" }
            }
            p { class: "mt-2 mb-6 text-sm text-gray-400", "{copy.subtitle}" }

            form {
                class: "flex flex-col gap-4",
                onsubmit: move |e| {
                    e.prevent_default();
                    on_submit.call(());
                },
                TextInput {
                    id: "username".to_string(),
                    label: copy.username_label.to_string(),
                    value: username,
                    autocomplete: "username",
                    autofocus: true,
                    on_input: on_username_input,
                }
                TextInput {
                    id: "password".to_string(),
                    label: copy.password_label.to_string(),
                    value: password,
                    input_type,
                    autocomplete: "current-password",
                    on_input: on_password_input,
                    trailing: rsx! {
                        ChromelessButton {
                            class: Some("text-gray-400 hover:text-gray-200".to_string()),
                            aria_label: Some(if password_visible { "Hide password" } else { "Show password" }.to_string()),
                            onclick: move |_| on_toggle_password.call(()),
                            if password_visible {
                                EyeOffIcon { class: "w-5 h-5" }
                            } else {
                                EyeIcon { class: "w-5 h-5" }
                            }
                        }
                    },
                }

                if copy.show_forgot_link {
                    a {
                        class: "self-end text-sm text-gray-400 hover:text-accent",
                        href: "{forgot_href}",
                        "{copy.forgot_label}"
                    }
                }

                FeedbackLine { feedback }

                SubmitButton { loading: submitting, "{copy.submit_label}" }
            }

            p { class: "mt-6 text-center text-sm text-gray-400",
                "{copy.toggle_prompt}"
                a {
                    class: "text-accent hover:underline cursor-pointer",
                    href: "#",
                    onclick: move |e| {
                        e.prevent_default();
                        on_toggle_mode.call(());
                    },
                    "{copy.toggle_action}"
                }
            }
        }
    }
}

/// Success or error line; renders nothing for `Feedback::None`.
#[component]
fn FeedbackLine(feedback: Feedback) -> Element {
    match feedback {
        Feedback::None => rsx! {},
        Feedback::Success(message) => rsx! {
            div {
                class: "flex items-center gap-2 rounded-lg px-3 py-2 text-sm bg-green-900/30 text-green-300",
                role: "status",
                CheckIcon { class: "w-4 h-4 flex-shrink-0" }
                span { "{message}" }
            }
        },
        Feedback::Error(message) => rsx! {
            div {
                class: "flex items-center gap-2 rounded-lg px-3 py-2 text-sm bg-red-900/30 text-red-300",
                role: "alert",
                AlertTriangleIcon { class: "w-4 h-4 flex-shrink-0" }
                span { "{message}" }
            }
        },
    }
}
