//! Auth form UI state store

use dioxus::prelude::*;
use portal_common::{Feedback, FormCopy};

/// UI state for the login/register card
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AuthUiState {
    /// Copy for the active mode and locale
    pub form_copy: FormCopy,
    /// Submit control disabled while a submission is in flight
    pub submitting: bool,
    pub feedback: Feedback,
    pub password_visible: bool,
}
