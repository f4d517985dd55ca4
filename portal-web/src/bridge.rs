//! Binding to the CEF host object (`window.Cef`)
//!
//! The host exposes two functions:
//! - `Cef.sendEvent(name, payload)` for outbound events
//! - `Cef.registerEventCallback(event, functionName)`, after which the host
//!   calls the named global function with each event's payload
//!
//! `CefBridge` installs those globals and owns their closures. Dropping it
//! removes the globals, so a late host call finds nothing to invoke instead
//! of a freed closure.

use portal_common::{AuthAction, BridgeCallback, BridgeError, BridgeEvent, HostBridge};
use tracing::{debug, info, warn};
use wasm_bindgen_x::prelude::*;
use wasm_bindgen_x::JsCast;

/// Payload delivered by a host callback, tagged with the action it answers
#[derive(Debug, Clone)]
pub struct HostResponse {
    pub action: AuthAction,
    pub payload: String,
}

struct InstalledCallback {
    handler_name: &'static str,
    closure: Closure<dyn FnMut(JsValue)>,
}

pub struct CefBridge {
    window: web_sys_x::Window,
    cef: JsValue,
    callbacks: Vec<InstalledCallback>,
}

impl CefBridge {
    /// Look for `window.Cef` and, when present, register the response
    /// callbacks. Returns `Ok(None)` when there is no host (demo mode).
    pub fn connect(
        on_response: impl Fn(HostResponse) + Clone + 'static,
    ) -> Result<Option<Self>, JsValue> {
        let window = web_sys_x::window().ok_or("no window")?;
        let cef = js_sys_x::Reflect::get(&window, &"Cef".into())?;
        if cef.is_undefined() || cef.is_null() {
            info!("No CEF host object, running in demo mode");
            return Ok(None);
        }

        let register = js_sys_x::Reflect::get(&cef, &"registerEventCallback".into())?;
        let register = register
            .dyn_ref::<js_sys_x::Function>()
            .ok_or("Cef.registerEventCallback is not a function")?;

        let mut bridge = Self {
            window,
            cef: cef.clone(),
            callbacks: Vec::with_capacity(BridgeCallback::ALL.len()),
        };

        for callback in BridgeCallback::ALL {
            let action = callback.action();
            let on_response = on_response.clone();
            let closure: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(move |data| {
                match payload_to_string(&data) {
                    Some(payload) => on_response(HostResponse { action, payload }),
                    None => warn!("Host sent a non-string {action} payload"),
                }
            }));

            js_sys_x::Reflect::set(&bridge.window, &callback.handler_name().into(), closure.as_ref())?;
            // Tracked before registering so Drop cleans up even if the host call throws
            bridge.callbacks.push(InstalledCallback {
                handler_name: callback.handler_name(),
                closure,
            });

            register.call2(
                &cef,
                &callback.event_name().into(),
                &callback.handler_name().into(),
            )?;
            debug!(
                "Registered {} -> {}",
                callback.event_name(),
                callback.handler_name()
            );
        }

        info!("CEF host detected, response callbacks registered");
        Ok(Some(bridge))
    }
}

impl HostBridge for CefBridge {
    fn send_event(&self, event: BridgeEvent, payload: &str) -> Result<(), BridgeError> {
        let send = js_sys_x::Reflect::get(&self.cef, &"sendEvent".into())
            .map_err(|e| bridge_error(event, &e))?;
        let send = send.dyn_ref::<js_sys_x::Function>().ok_or_else(|| BridgeError {
            event,
            reason: "Cef.sendEvent is not a function".to_string(),
        })?;
        send.call2(&self.cef, &event.name().into(), &payload.into())
            .map_err(|e| bridge_error(event, &e))?;
        Ok(())
    }
}

impl Drop for CefBridge {
    fn drop(&mut self) {
        for callback in &self.callbacks {
            let installed = js_sys_x::Reflect::get(&self.window, &callback.handler_name.into())
                .map(|f| f == *callback.closure.as_ref())
                .unwrap_or(false);
            if installed {
                let _ = js_sys_x::Reflect::delete_property(
                    self.window.unchecked_ref::<js_sys_x::Object>(),
                    &callback.handler_name.into(),
                );
            }
        }
    }
}

/// Hosts differ on whether they pass the JSON text or an already parsed object.
fn payload_to_string(data: &JsValue) -> Option<String> {
    if let Some(text) = data.as_string() {
        return Some(text);
    }
    if data.is_object() {
        return js_sys_x::JSON::stringify(data).ok().map(String::from);
    }
    None
}

fn bridge_error(event: BridgeEvent, err: &JsValue) -> BridgeError {
    BridgeError {
        event,
        reason: err
            .as_string()
            .unwrap_or_else(|| format!("{err:?}")),
    }
}
