use crate::auth_service::WebAuthService;
use crate::bridge::{CefBridge, HostResponse};
use crate::config::load_config;
use crate::player_service::WebPlayerService;
use crate::timer::sleep_ms;
use dioxus::prelude::*;
use futures::channel::mpsc;
use futures::StreamExt;
use portal_common::{Dispatched, ResponseOutcome};
use portal_ui::stores::auth::{AuthUiState, AuthUiStateStoreExt};
use portal_ui::stores::player::{PlayerUiState, PlayerUiStateStoreExt};
use portal_ui::{AuthFormView, TrackPlayerView};
use tracing::{debug, error};
use wasm_bindgen_x::JsCast;

#[component]
pub fn PortalPage() -> Element {
    let config = use_hook(load_config);
    let auth_state = use_store(AuthUiState::default);
    let player_state = use_store(PlayerUiState::default);

    let locale = config.locale;
    let mut auth = use_signal(move || WebAuthService::new(locale, auth_state));
    let track_count = config.playlist.len();
    let volume = config.initial_volume;
    let mut player =
        use_signal(move || WebPlayerService::new(track_count, volume, player_state));

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);

    // Host callbacks can fire at any time from JS, so they go through a
    // channel drained by a task owned by this scope.
    use_hook(move || {
        let (tx, mut rx) = mpsc::unbounded::<HostResponse>();
        let connected = CefBridge::connect(move |response| {
            if tx.unbounded_send(response).is_err() {
                debug!("Page torn down, dropping host response");
            }
        });
        match connected {
            Ok(Some(bridge)) => auth.write().set_bridge(bridge),
            Ok(None) => {}
            Err(e) => error!("Failed to bind CEF host, using demo mode: {e:?}"),
        }

        spawn(async move {
            while let Some(response) = rx.next().await {
                let action = response.action;
                let outcome = auth.write().handle_response(response);
                if outcome != ResponseOutcome::Applied {
                    debug!("{action} response not applied: {outcome:?}");
                }
            }
        });
    });

    let autoplay = config.autoplay;
    let autoplay_delay_ms = config.autoplay_delay_ms;
    use_hook(move || {
        if autoplay {
            spawn(async move {
                sleep_ms(autoplay_delay_ms).await;
                player.write().play();
            });
        }
    });

    let demo_delay_ms = config.demo_delay_ms;
    let on_submit = move |_: ()| {
        let result = auth.write().submit(&username.peek(), &password.peek());
        match result {
            Ok(Dispatched::Demo(id)) => {
                spawn(async move {
                    sleep_ms(demo_delay_ms).await;
                    auth.write().complete_demo(id);
                });
            }
            Ok(_) => {}
            Err(e) => debug!("Submit not sent: {e}"),
        }
    };

    let form_copy = *auth_state.form_copy().read();
    let feedback = auth_state.feedback().read().clone();
    let submitting = *auth_state.submitting().read();
    let password_visible = *auth_state.password_visible().read();

    rsx! {
        div { class: "min-h-screen flex flex-col items-center justify-center gap-6 p-6",
            AuthFormView {
                copy: form_copy,
                username: username(),
                password: password(),
                password_visible,
                submitting,
                feedback,
                forgot_href: config.forgot_password_url.clone(),
                on_username_input: move |value| username.set(value),
                on_password_input: move |value| password.set(value),
                on_submit,
                on_toggle_mode: move |_| auth.write().toggle_mode(),
                on_toggle_password: move |_| auth.write().toggle_password_visibility(),
            }

            TrackPlayerView {
                is_playing: *player_state.is_playing().read(),
                current_index: *player_state.current_index().read(),
                track_count: *player_state.track_count().read(),
                progress_percent: *player_state.progress_percent().read(),
                elapsed: player_state.elapsed().read().clone(),
                total: player_state.total().read().clone(),
                on_toggle: move |_| player.write().toggle_playback(),
                on_previous: move |_| player.write().previous(),
                on_next: move |_| player.write().next(),
            }

            for (index, src) in config.playlist.iter().cloned().enumerate() {
                audio {
                    key: "{index}",
                    src: "{src}",
                    preload: "auto",
                    onmounted: move |e: MountedEvent| {
                        let data = e.data();
                        let Some(element) = data.downcast::<web_sys_x::Element>().cloned() else {
                            return;
                        };
                        match element.dyn_into::<web_sys_x::HtmlMediaElement>() {
                            Ok(media) => player.write().set_audio_element(index, media),
                            Err(_) => error!("Playlist entry {index} did not mount as a media element"),
                        }
                    },
                    ontimeupdate: move |_| player.write().on_time_update(index),
                    onended: move |_| player.write().on_ended(index),
                    onloadedmetadata: move |_| player.write().on_loaded_metadata(index),
                }
            }
        }
    }
}
