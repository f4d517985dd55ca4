use crate::bridge::{CefBridge, HostResponse};
use portal_common::{
    AuthForm, Dispatched, HostBridge, Locale, ResponseOutcome, SubmissionId, SubmitError,
};
use dioxus::prelude::*;
use portal_ui::stores::auth::{AuthUiState, AuthUiStateStoreExt};
use tracing::debug;

/// Web auth service wrapping the form controller, the optional host bridge,
/// and store updates
pub struct WebAuthService {
    form: AuthForm,
    bridge: Option<CefBridge>,
    store: Store<AuthUiState>,
}

impl WebAuthService {
    pub fn new(locale: Locale, store: Store<AuthUiState>) -> Self {
        let mut service = Self {
            form: AuthForm::new(locale),
            bridge: None,
            store,
        };
        service.sync_store();
        service
    }

    /// Attach the host bridge once it is connected. Without one every
    /// submission goes through demo mode.
    pub fn set_bridge(&mut self, bridge: CefBridge) {
        self.bridge = Some(bridge);
    }

    pub fn has_bridge(&self) -> bool {
        self.bridge.is_some()
    }

    pub fn submit(&mut self, username: &str, password: &str) -> Result<Dispatched, SubmitError> {
        let bridge = self.bridge.as_ref().map(|b| b as &dyn HostBridge);
        let result = self.form.submit(username, password, bridge);
        self.sync_store();
        result
    }

    /// Demo timer fired for `id`
    pub fn complete_demo(&mut self, id: SubmissionId) {
        let outcome = self.form.complete_demo(id);
        debug!("Demo completion for {id}: {outcome:?}");
        self.sync_store();
    }

    pub fn handle_response(&mut self, response: HostResponse) -> ResponseOutcome {
        let outcome = self.form.handle_payload(response.action, &response.payload);
        if outcome == ResponseOutcome::Applied {
            self.sync_store();
        }
        outcome
    }

    pub fn toggle_mode(&mut self) {
        self.form.toggle_mode();
        self.sync_store();
    }

    pub fn toggle_password_visibility(&mut self) {
        self.form.toggle_password_visibility();
        self.store
            .password_visible()
            .set(self.form.password_visible());
    }

    fn sync_store(&mut self) {
        self.store.form_copy().set(self.form.copy());
        self.store.submitting().set(self.form.is_submitting());
        self.store.feedback().set(self.form.feedback().clone());
        self.store
            .password_visible()
            .set(self.form.password_visible());
    }
}
