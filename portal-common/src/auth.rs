//! Login / registration form state
//!
//! `AuthForm` owns the form mode, the single feedback slot, the in-flight
//! submission, and the password visibility flag. Every mutation goes through
//! its methods; the web layer renders whatever the accessors report.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::bridge::{BridgeError, HostBridge};
use crate::form_mode::{FormCopy, FormMode, Locale};

/// Which kind of submission a request or response belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    Login,
    Register,
}

impl From<FormMode> for AuthAction {
    fn from(mode: FormMode) -> Self {
        match mode {
            FormMode::Login => AuthAction::Login,
            FormMode::Register => AuthAction::Register,
        }
    }
}

impl fmt::Display for AuthAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthAction::Login => f.write_str("login"),
            AuthAction::Register => f.write_str("register"),
        }
    }
}

/// Correlation token for one submission, echoed by the host as `requestId`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(u64);

impl SubmissionId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("username and password are required")]
    EmptyFields,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("submission {0} is still in flight")]
    InFlight(SubmissionId),
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("invalid auth payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error(transparent)]
    Bridge(#[from] BridgeError),
}

/// Trimmed credentials for a single submit attempt. Never stored.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    pub fn from_input(raw_username: &str, raw_password: &str) -> Result<Self, ValidationError> {
        let username = raw_username.trim();
        let password = raw_password.trim();
        if username.is_empty() || password.is_empty() {
            return Err(ValidationError::EmptyFields);
        }
        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

#[derive(Serialize)]
struct OutboundPayload<'a> {
    username: &'a str,
    password: &'a str,
    #[serde(rename = "requestId")]
    request_id: SubmissionId,
}

/// JSON body of an `onLogin` / `onRegister` event
pub fn encode_payload(credentials: &Credentials, id: SubmissionId) -> Result<String, AuthError> {
    let payload = OutboundPayload {
        username: &credentials.username,
        password: &credentials.password,
        request_id: id,
    };
    Ok(serde_json::to_string(&payload)?)
}

/// Body of a `loginResponse` / `registerResponse` callback
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    /// Absent when the host does not echo correlation tokens
    #[serde(default, rename = "requestId")]
    pub request_id: Option<SubmissionId>,
}

impl AuthResponse {
    pub fn decode(payload: &str) -> Result<Self, AuthError> {
        Ok(serde_json::from_str(payload)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthResult {
    Accepted(String),
    Rejected(String),
}

impl AuthResult {
    pub fn message(&self) -> &str {
        match self {
            AuthResult::Accepted(m) | AuthResult::Rejected(m) => m,
        }
    }
}

impl From<AuthResponse> for AuthResult {
    fn from(response: AuthResponse) -> Self {
        if response.success {
            AuthResult::Accepted(response.message)
        } else {
            AuthResult::Rejected(response.message)
        }
    }
}

/// The one feedback line under the form. Success and error never coexist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Feedback {
    #[default]
    None,
    Success(String),
    Error(String),
}

impl Feedback {
    pub fn success_message(&self) -> Option<&str> {
        match self {
            Feedback::Success(m) => Some(m),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Feedback::Error(m) => Some(m),
            _ => None,
        }
    }
}

/// What the caller has to do after a submit that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatched {
    /// Event handed to the host; the answer arrives through a bridge callback
    Bridge(SubmissionId),
    /// No host present. Call [`AuthForm::complete_demo`] after the demo delay.
    Demo(SubmissionId),
    /// The host refused the event. The submission has already been failed.
    Failed(SubmissionId),
}

/// How an incoming response was treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseOutcome {
    Applied,
    /// Echoed a token other than the in-flight one
    Stale,
    /// Payload was not a valid response; nothing changed
    Undecodable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InFlight {
    id: SubmissionId,
    action: AuthAction,
}

pub struct AuthForm {
    locale: Locale,
    mode: FormMode,
    feedback: Feedback,
    in_flight: Option<InFlight>,
    next_id: u64,
    password_visible: bool,
}

impl Default for AuthForm {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl AuthForm {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            mode: FormMode::Login,
            feedback: Feedback::None,
            in_flight: None,
            next_id: 1,
            password_visible: false,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Copy for the current mode
    pub fn copy(&self) -> FormCopy {
        self.locale.copy(self.mode)
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Whether the submit control is disabled
    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn pending_submission(&self) -> Option<SubmissionId> {
        self.in_flight.map(|f| f.id)
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    /// `type` attribute for the password input
    pub fn password_input_type(&self) -> &'static str {
        if self.password_visible {
            "text"
        } else {
            "password"
        }
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.feedback = Feedback::None;
        debug!("Form mode is now {:?}", self.mode);
    }

    pub fn toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    /// Validate the raw inputs and hand them to the host, or to demo mode
    /// when there is no host.
    ///
    /// Validation failures show the empty-fields error and leave the form
    /// idle. A submit while another one is in flight is refused without
    /// touching the feedback.
    pub fn submit(
        &mut self,
        raw_username: &str,
        raw_password: &str,
        bridge: Option<&dyn HostBridge>,
    ) -> Result<Dispatched, SubmitError> {
        if let Some(current) = self.in_flight {
            debug!("Ignoring submit while {} is in flight", current.id);
            return Err(SubmitError::InFlight(current.id));
        }

        self.feedback = Feedback::None;

        let credentials = match Credentials::from_input(raw_username, raw_password) {
            Ok(credentials) => credentials,
            Err(e) => {
                self.feedback = Feedback::Error(self.locale.messages().empty_fields.to_string());
                return Err(e.into());
            }
        };

        let action = AuthAction::from(self.mode);
        let id = self.allocate_id();
        self.in_flight = Some(InFlight { id, action });

        let Some(bridge) = bridge else {
            info!("No host bridge, simulating {action} response for {id}");
            return Ok(Dispatched::Demo(id));
        };

        match send_to_host(bridge, action, id, &credentials) {
            Ok(()) => {
                info!("Sent {action} {id} to host");
                Ok(Dispatched::Bridge(id))
            }
            Err(e) => {
                error!("Failed to send {action} {id} to host: {e}");
                self.in_flight = None;
                self.feedback =
                    Feedback::Error(self.locale.messages().bridge_unavailable.to_string());
                Ok(Dispatched::Failed(id))
            }
        }
    }

    /// Finish a demo-mode submission with the canned success message
    pub fn complete_demo(&mut self, id: SubmissionId) -> ResponseOutcome {
        let action = self
            .in_flight
            .map(|f| f.action)
            .unwrap_or_else(|| self.mode.into());
        let message = self.locale.messages().demo_success.to_string();
        self.handle_result(action, Some(id), AuthResult::Accepted(message))
    }

    /// Raw callback payload from the host.
    ///
    /// Undecodable payloads are logged and dropped; the submission stays in
    /// flight.
    pub fn handle_payload(&mut self, action: AuthAction, payload: &str) -> ResponseOutcome {
        match AuthResponse::decode(payload) {
            Ok(response) => {
                let request_id = response.request_id;
                self.handle_result(action, request_id, response.into())
            }
            Err(e) => {
                warn!("Ignoring undecodable {action} response: {e}");
                ResponseOutcome::Undecodable
            }
        }
    }

    /// Apply a decoded result. Login and register answers share this path.
    pub fn handle_result(
        &mut self,
        action: AuthAction,
        request_id: Option<SubmissionId>,
        result: AuthResult,
    ) -> ResponseOutcome {
        if let Some(id) = request_id {
            match self.in_flight {
                Some(current) if current.id == id => {}
                Some(current) => {
                    warn!(
                        "Ignoring stale {action} response {id}, waiting for {}",
                        current.id
                    );
                    return ResponseOutcome::Stale;
                }
                None => {
                    warn!("Ignoring {action} response {id}, nothing in flight");
                    return ResponseOutcome::Stale;
                }
            }
        }

        if let Some(current) = self.in_flight {
            if current.action != action {
                warn!(
                    "Got {action} response while {} {} was in flight",
                    current.action, current.id
                );
            }
        }

        self.in_flight = None;
        self.feedback = match result {
            AuthResult::Accepted(message) => {
                info!("{action} accepted");
                Feedback::Success(message)
            }
            AuthResult::Rejected(message) => {
                info!("{action} rejected: {message}");
                Feedback::Error(message)
            }
        };
        ResponseOutcome::Applied
    }

    fn allocate_id(&mut self) -> SubmissionId {
        let id = SubmissionId(self.next_id);
        self.next_id += 1;
        id
    }
}

fn send_to_host(
    bridge: &dyn HostBridge,
    action: AuthAction,
    id: SubmissionId,
    credentials: &Credentials,
) -> Result<(), AuthError> {
    let payload = encode_payload(credentials, id)?;
    bridge.send_event(action.into(), &payload)?;
    Ok(())
}
