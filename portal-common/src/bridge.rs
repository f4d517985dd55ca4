//! Host bridge vocabulary
//!
//! The embedding application exposes an event channel to the page. Outbound
//! events carry credentials, inbound callbacks carry `{success, message}`.
//! This module only names the events; binding them to a concrete host object
//! is the web crate's job.

use std::fmt;
use thiserror::Error;

use crate::auth::AuthAction;

/// Events the page sends to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeEvent {
    Login,
    Register,
}

impl BridgeEvent {
    /// Name the host listens on
    pub fn name(self) -> &'static str {
        match self {
            BridgeEvent::Login => "onLogin",
            BridgeEvent::Register => "onRegister",
        }
    }
}

impl fmt::Display for BridgeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<AuthAction> for BridgeEvent {
    fn from(action: AuthAction) -> Self {
        match action {
            AuthAction::Login => BridgeEvent::Login,
            AuthAction::Register => BridgeEvent::Register,
        }
    }
}

/// Callbacks the host invokes on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeCallback {
    LoginResponse,
    RegisterResponse,
}

impl BridgeCallback {
    pub const ALL: [BridgeCallback; 2] =
        [BridgeCallback::LoginResponse, BridgeCallback::RegisterResponse];

    /// Host-side event name
    pub fn event_name(self) -> &'static str {
        match self {
            BridgeCallback::LoginResponse => "loginResponse",
            BridgeCallback::RegisterResponse => "registerResponse",
        }
    }

    /// Global function the host calls when the event fires
    pub fn handler_name(self) -> &'static str {
        match self {
            BridgeCallback::LoginResponse => "onLoginResponse",
            BridgeCallback::RegisterResponse => "onRegisterResponse",
        }
    }

    /// The submission kind this callback answers
    pub fn action(self) -> AuthAction {
        match self {
            BridgeCallback::LoginResponse => AuthAction::Login,
            BridgeCallback::RegisterResponse => AuthAction::Register,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("host bridge rejected {event}: {reason}")]
pub struct BridgeError {
    pub event: BridgeEvent,
    pub reason: String,
}

/// Outbound half of the host bridge.
///
/// Sending is fire-and-forget: the answer, if any, arrives later through a
/// [`BridgeCallback`].
pub trait HostBridge {
    fn send_event(&self, event: BridgeEvent, payload: &str) -> Result<(), BridgeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_match_host_contract() {
        assert_eq!(BridgeEvent::Login.name(), "onLogin");
        assert_eq!(BridgeEvent::Register.name(), "onRegister");
        assert_eq!(BridgeEvent::from(AuthAction::Register), BridgeEvent::Register);
    }

    #[test]
    fn test_callback_names() {
        let names: Vec<_> = BridgeCallback::ALL
            .iter()
            .map(|c| (c.event_name(), c.handler_name()))
            .collect();
        assert_eq!(
            names,
            vec![
                ("loginResponse", "onLoginResponse"),
                ("registerResponse", "onRegisterResponse"),
            ]
        );
        assert_eq!(BridgeCallback::RegisterResponse.action(), AuthAction::Register);
    }
}
