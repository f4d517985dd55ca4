mod support;
use crate::support::{tracing_init, RecordingBridge};
use portal_common::{
    AuthAction, AuthForm, BridgeCallback, BridgeEvent, Dispatched, Feedback, FormMode, Locale,
    ResponseOutcome,
};

/// Login rejected, switch to register, register accepted: the full host round trip.
#[test]
fn test_login_then_register_round_trip() {
    tracing_init();
    let bridge = RecordingBridge::default();
    let mut form = AuthForm::new(Locale::En);

    assert!(matches!(
        form.submit("alice", "secret", Some(&bridge)).unwrap(),
        Dispatched::Bridge(_)
    ));
    let request_id = bridge.last_request_id().unwrap();
    let response = format!(
        r#"{{"success": false, "message": "Bad credentials", "requestId": {request_id}}}"#
    );
    let callback = BridgeCallback::LoginResponse;
    assert_eq!(
        form.handle_payload(callback.action(), &response),
        ResponseOutcome::Applied
    );
    assert_eq!(form.feedback(), &Feedback::Error("Bad credentials".into()));
    assert!(!form.is_submitting());

    form.toggle_mode();
    assert_eq!(form.mode(), FormMode::Register);
    assert_eq!(form.feedback(), &Feedback::None);

    form.submit("alice", "secret", Some(&bridge)).unwrap();
    let sent = bridge.sent.borrow();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1].0, BridgeEvent::Register);
    let request_id = sent[1].1["requestId"].as_u64().unwrap();
    drop(sent);

    let response =
        format!(r#"{{"success": true, "message": "Welcome", "requestId": {request_id}}}"#);
    form.handle_payload(BridgeCallback::RegisterResponse.action(), &response);
    assert_eq!(form.feedback().success_message(), Some("Welcome"));
    assert!(!form.is_submitting());
}

/// A slow answer to an earlier submission must not overwrite the current one.
#[test]
fn test_late_answer_for_old_submission_is_dropped() {
    tracing_init();
    let bridge = RecordingBridge::default();
    let mut form = AuthForm::new(Locale::En);

    form.submit("alice", "secret", Some(&bridge)).unwrap();
    let first = bridge.last_request_id().unwrap();
    form.handle_payload(AuthAction::Login, r#"{"success": false, "message": "Try again"}"#);

    form.submit("alice", "secret2", Some(&bridge)).unwrap();
    let second = bridge.last_request_id().unwrap();
    assert_ne!(first, second);

    let late = format!(r#"{{"success": true, "message": "old", "requestId": {first}}}"#);
    assert_eq!(
        form.handle_payload(AuthAction::Login, &late),
        ResponseOutcome::Stale
    );
    assert!(form.is_submitting());
    assert_eq!(form.feedback(), &Feedback::None);
}

#[test]
fn test_demo_mode_uses_locale_copy() {
    tracing_init();
    let mut form = AuthForm::new(Locale::PtBr);
    let Dispatched::Demo(id) = form.submit("ana", "senha", None).unwrap() else {
        panic!("Expected Demo");
    };
    form.complete_demo(id);
    assert_eq!(
        form.feedback().success_message(),
        Some("Demo: Login seria enviado ao servidor via CEF.")
    );
    assert_eq!(form.copy().submit_label, "Entrar");
}
