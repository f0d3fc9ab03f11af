use lumen_page_core::{Config, Effect, Engine, FormRequest, TimerId};

fn engine_from_fixture(name: &str) -> Engine {
    let raw = lumen_test_fixtures::config_json(name).unwrap();
    let cfg: Config = serde_json::from_str(&raw).unwrap();
    let mut eng = Engine::new(cfg);
    eng.register_form();
    eng
}

fn sent_request(effects: &[Effect]) -> &FormRequest {
    effects
        .iter()
        .find_map(|e| match e {
            Effect::SendRequest(req) => Some(req),
            _ => None,
        })
        .expect("a SendRequest effect")
}

fn set_timer(effects: &[Effect]) -> (TimerId, f64) {
    effects
        .iter()
        .find_map(|e| match e {
            Effect::SetTimer { timer, delay_ms } => Some((*timer, *delay_ms)),
            _ => None,
        })
        .expect("a SetTimer effect")
}

#[test]
fn builtin_mode_posts_urlencoded_to_root() {
    let mut eng = engine_from_fixture("builtin-hosting");
    let fields = lumen_test_fixtures::submission("contact-basic").unwrap();

    let out = eng.form_submitted(&fields).clone();
    assert!(out.iter().any(|e| matches!(e, Effect::PreventDefault)));
    assert!(out
        .iter()
        .any(|e| matches!(e, Effect::SetSubmitEnabled { enabled: false })));

    let req = sent_request(&out.effects);
    assert_eq!(req.url, "/");
    assert_eq!(req.content_type, "application/x-www-form-urlencoded");
    assert_eq!(req.body, "form-name=contact&name=A&email=b%40x.com");
}

#[test]
fn default_config_falls_back_to_builtin_mode() {
    let mut eng = engine_from_fixture("default");
    let fields = lumen_test_fixtures::submission("name-only").unwrap();

    let out = eng.form_submitted(&fields).clone();
    let req = sent_request(&out.effects);
    assert_eq!(req.url, "/");
    assert_eq!(req.body, "form-name=contact&name=A");
}

#[test]
fn custom_endpoint_posts_json() {
    let mut eng = engine_from_fixture("custom-endpoint");
    let fields = lumen_test_fixtures::submission("name-only").unwrap();

    let out = eng.form_submitted(&fields).clone();
    let req = sent_request(&out.effects);
    assert_eq!(req.url, "https://api.example.com/contact");
    assert_eq!(req.content_type, "application/json");
    assert_eq!(req.body, r#"{"name":"A"}"#);
}

#[test]
fn failure_restores_control_without_clearing_form() {
    let mut eng = engine_from_fixture("custom-endpoint");
    let fields = lumen_test_fixtures::submission("name-only").unwrap();
    eng.form_submitted(&fields);

    let out = eng.fetch_completed(false, 500, Some("server error".to_string())).clone();
    assert!(out.iter().any(|e| matches!(e, Effect::RestoreSubmitLabel)));
    assert!(out
        .iter()
        .any(|e| matches!(e, Effect::SetSubmitEnabled { enabled: true })));
    assert!(out.iter().any(|e| matches!(e, Effect::ShowErrorNotice { .. })));
    assert!(!out.iter().any(|e| matches!(e, Effect::ResetForm)));
    assert!(!out.iter().any(|e| matches!(e, Effect::SetTimer { .. })));

    // The controller is idle again: a retry submits normally.
    let out = eng.form_submitted(&fields).clone();
    assert!(out.iter().any(|e| matches!(e, Effect::SendRequest(_))));
}

#[test]
fn body_read_failure_degrades_to_empty_detail() {
    let mut eng = engine_from_fixture("custom-endpoint");
    let fields = lumen_test_fixtures::submission("name-only").unwrap();
    eng.form_submitted(&fields);

    // None body must still resolve the failure path.
    let out = eng.fetch_completed(false, 502, None).clone();
    assert!(out.iter().any(|e| matches!(e, Effect::ShowErrorNotice { .. })));
}

#[test]
fn success_confirms_then_resets_after_delay() {
    let mut eng = engine_from_fixture("builtin-hosting");
    let fields = lumen_test_fixtures::submission("contact-basic").unwrap();
    eng.form_submitted(&fields);

    let out = eng.fetch_completed(true, 200, None).clone();
    assert!(out.iter().any(
        |e| matches!(e, Effect::SetSubmitLabel { label } if label == "\u{2713} Sent!")
    ));
    assert!(out
        .iter()
        .any(|e| matches!(e, Effect::SetSubmitBackground { background: Some(_) })));
    let (timer, delay_ms) = set_timer(&out.effects);
    assert_eq!(delay_ms, 1800.0);

    let out = eng.timer_fired(timer, 1800.0).clone();
    assert!(out.iter().any(|e| matches!(e, Effect::ResetForm)));
    assert!(out.iter().any(|e| matches!(e, Effect::RestoreSubmitLabel)));
    assert!(out
        .iter()
        .any(|e| matches!(e, Effect::SetSubmitEnabled { enabled: true })));
    assert!(out
        .iter()
        .any(|e| matches!(e, Effect::SetSubmitBackground { background: None })));
}

#[test]
fn second_submit_while_sending_is_dropped() {
    let mut eng = engine_from_fixture("builtin-hosting");
    let fields = lumen_test_fixtures::submission("contact-basic").unwrap();
    eng.form_submitted(&fields);

    let out = eng.form_submitted(&fields).clone();
    assert!(!out.iter().any(|e| matches!(e, Effect::SendRequest(_))));
}

#[test]
fn completion_without_submit_is_ignored() {
    let mut eng = engine_from_fixture("default");
    let out = eng.fetch_completed(true, 200, None).clone();
    assert!(out.is_empty());
}

#[test]
fn field_feedback_debounces_and_ignores_stale_timers() {
    let mut eng = engine_from_fixture("default");
    let field = eng.observe_field().unwrap();

    let out = eng.field_input(field, true, 0.0).clone();
    let (first_timer, delay_ms) = set_timer(&out.effects);
    assert_eq!(delay_ms, 300.0);

    // Newer input supersedes the pending feedback.
    let out = eng.field_input(field, false, 100.0).clone();
    let (second_timer, _) = set_timer(&out.effects);

    // The first wakeup lands at its original deadline and must not fire.
    let out = eng.timer_fired(first_timer, 300.0).clone();
    assert!(out.is_empty());

    let out = eng.timer_fired(second_timer, 400.0).clone();
    assert!(out.iter().any(
        |e| matches!(e, Effect::SetFieldBorder { field: f, color: None } if *f == field)
    ));
}

#[test]
fn valid_field_gets_highlight_color() {
    let mut eng = engine_from_fixture("default");
    let field = eng.observe_field().unwrap();

    let out = eng.field_input(field, true, 0.0).clone();
    let (timer, _) = set_timer(&out.effects);
    let out = eng.timer_fired(timer, 300.0).clone();
    assert!(out.iter().any(|e| matches!(
        e,
        Effect::SetFieldBorder { color: Some(c), .. } if c == "rgba(0, 255, 255, 0.3)"
    )));
}

#[test]
fn without_registered_form_everything_is_inert() {
    let mut eng = Engine::new(Config::default());
    assert!(eng.observe_field().is_err());
    let fields = lumen_test_fixtures::submission("name-only").unwrap();
    assert!(eng.form_submitted(&fields).is_empty());
    assert!(eng.fetch_completed(true, 200, None).is_empty());
}
