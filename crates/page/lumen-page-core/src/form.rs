//! Contact form controller: live validity feedback, the submit lifecycle,
//! transport selection, and wire encoding.
//!
//! The controller never parses field contents; the host reports native
//! validity per field and hands over the collected name/value pairs on
//! submit. Whatever happens, the failure path re-enables the submit
//! control, so the user is never stuck in the sending state.

use lumen_timing::Debouncer;
use serde_json::{Map, Value as JsonValue};

use crate::config::{DEFAULT_FORM_NAME, FormConfig};
use crate::effects::{Effect, FormRequest, Outputs};
use crate::error::FormError;
use crate::ids::FieldId;

pub const FORM_NAME_FIELD: &str = "form-name";
pub const CONTENT_TYPE_URLENCODED: &str = "application/x-www-form-urlencoded";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// How a submission travels to the collaborator endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transport {
    /// URL-encoded POST to the site root, `form-name` field included.
    BuiltinHosting,
    /// JSON POST to a configured API endpoint.
    Api { endpoint: String },
}

/// Built-in hosting applies when the marker attribute is set or when no
/// distinct endpoint is configured (the root path is not a distinct API).
pub fn select_transport(cfg: &FormConfig) -> Transport {
    let endpoint = cfg.endpoint_override.as_deref().unwrap_or("/");
    if cfg.use_builtin_hosting || endpoint == "/" {
        Transport::BuiltinHosting
    } else {
        Transport::Api {
            endpoint: endpoint.to_string(),
        }
    }
}

/// Percent-encoded `key=value` pairs joined by `&`, `form-name` first,
/// field order preserved.
pub fn encode_urlencoded(form_name: &str, fields: &[(String, String)]) -> String {
    let mut pairs = Vec::with_capacity(fields.len() + 1);
    pairs.push(format!(
        "{}={}",
        urlencoding::encode(FORM_NAME_FIELD),
        urlencoding::encode(form_name)
    ));
    for (key, value) in fields {
        pairs.push(format!(
            "{}={}",
            urlencoding::encode(key),
            urlencoding::encode(value)
        ));
    }
    pairs.join("&")
}

/// JSON object of the submitted fields, insertion order preserved.
pub fn encode_json(fields: &[(String, String)]) -> Result<String, FormError> {
    let mut map = Map::new();
    for (key, value) in fields {
        map.insert(key.clone(), JsonValue::String(value.clone()));
    }
    serde_json::to_string(&JsonValue::Object(map)).map_err(|e| FormError::Serialize(e.to_string()))
}

#[derive(Debug)]
enum Phase {
    Idle,
    Sending(Transport),
    Confirming,
}

/// Submit lifecycle and per-field debounced validity feedback.
#[derive(Debug)]
pub struct FormController {
    cfg: FormConfig,
    phase: Phase,
    validators: Vec<Debouncer<bool>>,
}

impl FormController {
    pub fn new(cfg: FormConfig) -> Self {
        Self {
            cfg,
            phase: Phase::Idle,
            validators: Vec::new(),
        }
    }

    pub fn cfg(&self) -> &FormConfig {
        &self.cfg
    }

    /// Register a form input; returns its dense id.
    pub fn observe_field(&mut self) -> FieldId {
        self.validators
            .push(Debouncer::new(self.cfg.input_debounce_ms));
        FieldId(self.validators.len() as u32 - 1)
    }

    pub fn field_count(&self) -> usize {
        self.validators.len()
    }

    /// Record an input event with the host-reported native validity. The
    /// engine arms a wakeup at the debounce deadline.
    pub fn field_input(
        &mut self,
        field: FieldId,
        is_valid: bool,
        now_ms: f64,
    ) -> Result<(), FormError> {
        let validator = self
            .validators
            .get_mut(field.0 as usize)
            .ok_or(FormError::UnknownField(field))?;
        validator.call(now_ms, is_valid);
        Ok(())
    }

    /// Debounce wakeup for a field. Emits the border effect when the quiet
    /// window has actually elapsed; wakeups superseded by newer input do
    /// nothing. A valid field gets the highlight color, an invalid one is
    /// cleared back to the default (never an error color).
    pub fn poll_field(&mut self, field: FieldId, now_ms: f64, out: &mut Outputs) {
        if let Some(validator) = self.validators.get_mut(field.0 as usize) {
            if let Some(is_valid) = validator.poll(now_ms) {
                let color = is_valid.then(|| self.cfg.valid_border_color.clone());
                out.push(Effect::SetFieldBorder { field, color });
            }
        }
    }

    /// Start a submission from the host-collected field pairs. Emits the
    /// sending state and the wire request; the host performs the POST and
    /// reports back via `fetch_completed`.
    pub fn submit(
        &mut self,
        fields: &[(String, String)],
        out: &mut Outputs,
    ) -> Result<(), FormError> {
        if !matches!(self.phase, Phase::Idle) {
            return Err(FormError::SubmissionInFlight);
        }

        let transport = select_transport(&self.cfg);
        let request = match &transport {
            Transport::BuiltinHosting => {
                let form_name = self.cfg.form_name.as_deref().unwrap_or(DEFAULT_FORM_NAME);
                FormRequest {
                    url: "/".to_string(),
                    content_type: CONTENT_TYPE_URLENCODED.to_string(),
                    body: encode_urlencoded(form_name, fields),
                }
            }
            Transport::Api { endpoint } => FormRequest {
                url: endpoint.clone(),
                content_type: CONTENT_TYPE_JSON.to_string(),
                body: encode_json(fields)?,
            },
        };

        out.push(Effect::SetSubmitLabel {
            label: self.cfg.sending_label.clone(),
        });
        out.push(Effect::SetSubmitEnabled { enabled: false });
        out.push(Effect::SendRequest(request));
        self.phase = Phase::Sending(transport);
        Ok(())
    }

    /// Resolve the in-flight submission. `body` is the host's best-effort
    /// read of a failure response; a failed read degrades to `None` without
    /// masking the failure itself. Returns true when the engine should arm
    /// the confirmation reset timer.
    pub fn fetch_completed(
        &mut self,
        ok: bool,
        status: u16,
        body: Option<String>,
        out: &mut Outputs,
    ) -> Result<bool, FormError> {
        let transport = match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Sending(transport) => transport,
            other => {
                self.phase = other;
                return Err(FormError::NoSubmissionInFlight);
            }
        };

        if ok {
            out.push(Effect::SetSubmitLabel {
                label: self.cfg.confirmed_label.clone(),
            });
            out.push(Effect::SetSubmitBackground {
                background: Some(self.cfg.confirmed_background.clone()),
            });
            self.phase = Phase::Confirming;
            match &transport {
                Transport::BuiltinHosting => {
                    log::info!("form submitted successfully (built-in hosting)")
                }
                Transport::Api { endpoint } => log::info!("form submitted successfully to {endpoint}"),
            }
            Ok(true)
        } else {
            let detail = body.unwrap_or_default();
            log::error!("form submit failed: status {status} - {detail}");
            out.push(Effect::RestoreSubmitLabel);
            out.push(Effect::SetSubmitEnabled { enabled: true });
            out.push(Effect::ShowErrorNotice {
                message: self.cfg.failure_notice.clone(),
            });
            Ok(false)
        }
    }

    /// Confirmation window elapsed: pristine form, control restored.
    pub fn confirm_reset(&mut self, out: &mut Outputs) {
        self.phase = Phase::Idle;
        out.push(Effect::ResetForm);
        out.push(Effect::RestoreSubmitLabel);
        out.push(Effect::SetSubmitEnabled { enabled: true });
        out.push(Effect::SetSubmitBackground { background: None });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(fields: &[(&str, &str)]) -> Vec<(String, String)> {
        fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn builtin_body_percent_encodes_in_order() {
        let body = encode_urlencoded("contact", &pairs(&[("name", "A"), ("email", "b@x.com")]));
        assert_eq!(body, "form-name=contact&name=A&email=b%40x.com");
    }

    #[test]
    fn json_body_preserves_insertion_order() {
        let body = encode_json(&pairs(&[("name", "A"), ("message", "hi there")])).unwrap();
        assert_eq!(body, r#"{"name":"A","message":"hi there"}"#);
    }

    #[test]
    fn root_endpoint_falls_back_to_builtin() {
        let cfg = FormConfig::default();
        assert_eq!(select_transport(&cfg), Transport::BuiltinHosting);

        let cfg = FormConfig {
            endpoint_override: Some("/".to_string()),
            ..FormConfig::default()
        };
        assert_eq!(select_transport(&cfg), Transport::BuiltinHosting);
    }

    #[test]
    fn marker_wins_over_endpoint() {
        let cfg = FormConfig {
            endpoint_override: Some("https://api.example.com/contact".to_string()),
            use_builtin_hosting: true,
            ..FormConfig::default()
        };
        assert_eq!(select_transport(&cfg), Transport::BuiltinHosting);
    }

    #[test]
    fn distinct_endpoint_selects_api() {
        let cfg = FormConfig {
            endpoint_override: Some("https://api.example.com/contact".to_string()),
            ..FormConfig::default()
        };
        assert_eq!(
            select_transport(&cfg),
            Transport::Api {
                endpoint: "https://api.example.com/contact".to_string()
            }
        );
    }
}
