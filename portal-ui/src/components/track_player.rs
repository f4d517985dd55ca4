//! Background music transport bar
//!
//! Pure, props-based component for the looping page playlist.

use crate::components::icons::{PauseIcon, PlayIcon, SkipBackIcon, SkipForwardIcon};
use crate::components::{ButtonVariant, IconButton};
use dioxus::prelude::*;

/// Transport bar view (pure, props-based)
/// All callbacks are required.
#[component]
pub fn TrackPlayerView(
    is_playing: bool,
    current_index: usize,
    track_count: usize,
    progress_percent: f64,
    elapsed: String,
    total: String,
    on_toggle: EventHandler<()>,
    on_previous: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    let position = current_index + 1;

    rsx! {
        div { class: "flex items-center gap-3 px-4 py-3 bg-gray-900/70 backdrop-blur rounded-xl text-gray-200",
            IconButton {
                variant: ButtonVariant::Round,
                aria_label: "Previous track".to_string(),
                onclick: move |_| on_previous.call(()),
                SkipBackIcon {}
            }
            IconButton {
                variant: ButtonVariant::Primary,
                aria_label: if is_playing { "Pause".to_string() } else { "Play".to_string() },
                onclick: move |_| on_toggle.call(()),
                if is_playing {
                    PauseIcon { class: "w-5 h-5" }
                } else {
                    PlayIcon { class: "w-5 h-5" }
                }
            }
            IconButton {
                variant: ButtonVariant::Round,
                aria_label: "Next track".to_string(),
                onclick: move |_| on_next.call(()),
                SkipForwardIcon {}
            }

            div { class: "flex-1 flex flex-col gap-1 min-w-32",
                ProgressBarView { progress_percent }
                div { class: "flex justify-between text-xs text-gray-400 tabular-nums",
                    span { "{elapsed}" }
                    if track_count > 1 {
                        span { class: "text-gray-500", "{position}/{track_count}" }
                    }
                    span { "{total}" }
                }
            }
        }
    }
}

#[component]
fn ProgressBarView(progress_percent: f64) -> Element {
    let width = progress_percent.clamp(0.0, 100.0);
    let value_now = format!("{width:.0}");

    rsx! {
        div {
            class: "w-full h-1 bg-white/10 rounded-full overflow-hidden",
            role: "progressbar",
            aria_valuemin: "0",
            aria_valuemax: "100",
            aria_valuenow: "{value_now}",
            div { class: "h-full bg-accent rounded-full", style: "width: {width}%" }
        }
    }
}
