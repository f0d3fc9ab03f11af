//! Engine configuration.

use serde::{Deserialize, Serialize};

/// `form-name` value used in built-in hosting mode when the host supplies
/// no explicit form name.
pub const DEFAULT_FORM_NAME: &str = "contact";

/// Top-level configuration. Every section carries defaults matching the
/// production page, so hosts typically construct this from an empty or
/// partial JSON object.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub form: FormConfig,
    pub navbar: NavbarConfig,
    pub glow: GlowConfig,
    pub reveal: RevealConfig,
}

/// Contact-form behavior and submit-control copy.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Custom API endpoint. `None` (or `"/"`) selects built-in hosting.
    pub endpoint_override: Option<String>,
    /// Host marker for built-in hosting-platform form handling.
    pub use_builtin_hosting: bool,
    /// Explicit form name for the `form-name` field.
    pub form_name: Option<String>,
    /// Quiet window for per-field validity feedback.
    pub input_debounce_ms: f64,
    /// How long the confirmation state stays up before the form resets.
    pub confirm_reset_ms: f64,
    /// Border color applied to a field that passes native validation.
    pub valid_border_color: String,
    pub sending_label: String,
    pub confirmed_label: String,
    pub confirmed_background: String,
    /// Generic user-facing message on submit failure.
    pub failure_notice: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            endpoint_override: None,
            use_builtin_hosting: false,
            form_name: None,
            input_debounce_ms: 300.0,
            confirm_reset_ms: 1800.0,
            valid_border_color: "rgba(0, 255, 255, 0.3)".to_string(),
            sending_label: "Sending...".to_string(),
            confirmed_label: "✓ Sent!".to_string(),
            confirmed_background: "rgba(0, 255, 0, 0.15)".to_string(),
            failure_notice:
                "Oops — something went wrong sending your message. Please try again later."
                    .to_string(),
        }
    }
}

/// Two discrete navbar states around a scroll-offset threshold.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub threshold: f64,
    pub raised: NavbarSkin,
    pub base: NavbarSkin,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NavbarSkin {
    pub background: String,
    pub backdrop_filter: String,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            threshold: 50.0,
            raised: NavbarSkin {
                background: "rgba(255, 255, 255, 0.12)".to_string(),
                backdrop_filter: "blur(30px) saturate(180%)".to_string(),
            },
            base: NavbarSkin {
                background: "rgba(255, 255, 255, 0.08)".to_string(),
                backdrop_filter: "blur(25px) saturate(180%)".to_string(),
            },
        }
    }
}

/// Pointer-glow rate limiting. 16ms caps updates at roughly one per frame.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GlowConfig {
    pub throttle_ms: f64,
}

impl Default for GlowConfig {
    fn default() -> Self {
        Self { throttle_ms: 16.0 }
    }
}

/// Appearance-on-view observation and hidden-state styling. `threshold` and
/// `root_margin` are handed to the host's IntersectionObserver verbatim.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
    /// Initial downward offset of hidden elements, in px.
    pub hidden_offset_px: f64,
    pub transition: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            hidden_offset_px: 20.0,
            transition: "opacity 0.6s ease-out, transform 0.6s ease-out".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_constants() {
        let cfg = Config::default();
        assert_eq!(cfg.form.input_debounce_ms, 300.0);
        assert_eq!(cfg.form.confirm_reset_ms, 1800.0);
        assert_eq!(cfg.navbar.threshold, 50.0);
        assert_eq!(cfg.glow.throttle_ms, 16.0);
        assert_eq!(cfg.reveal.threshold, 0.1);
        assert_eq!(cfg.reveal.root_margin, "0px 0px -50px 0px");
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: Config =
            serde_json::from_str(r#"{ "form": { "use_builtin_hosting": true } }"#).unwrap();
        assert!(cfg.form.use_builtin_hosting);
        assert_eq!(cfg.form.input_debounce_ms, 300.0);
        assert_eq!(cfg.navbar.raised.background, "rgba(255, 255, 255, 0.12)");
    }
}
