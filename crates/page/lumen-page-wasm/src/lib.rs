//! lumen-page-wasm: JS-facing surface over the Lumen page engine.
//!
//! The host script queries the DOM, registers what it finds, forwards
//! events, and applies the returned effect batches. Effects serialize as
//! tagged objects (`{ "SetStyleVar": { ... } }`); `RequestFrame` and
//! `SetTimer` are the host's cue to call `frame` / `timer_fired` back.

use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use lumen_page_core::{CardId, Config, Engine, FieldId, Outputs, RevealId, TimerId};

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn outputs_to_js(out: &Outputs) -> Result<JsValue, JsError> {
    swb::to_value(&out.effects).map_err(|e| JsError::new(&format!("effects error: {e}")))
}

#[derive(serde::Serialize)]
struct RevealRegistration<'a> {
    id: u32,
    effects: &'a [lumen_page_core::Effect],
}

#[wasm_bindgen]
pub struct LumenPage {
    core: Engine,
}

#[wasm_bindgen]
impl LumenPage {
    /// Create an engine. Pass a JSON config object or undefined/null for
    /// defaults. Example:
    ///   new LumenPage({ form: { endpoint_override: "https://api.example.com/contact" } })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<LumenPage, JsError> {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };

        Ok(LumenPage {
            core: Engine::new(cfg),
        })
    }

    /// Register the contact form, if the page has one.
    #[wasm_bindgen(js_name = register_form)]
    pub fn register_form(&mut self) {
        self.core.register_form();
    }

    #[wasm_bindgen(js_name = register_navbar)]
    pub fn register_navbar(&mut self) {
        self.core.register_navbar();
    }

    /// Register a project card; returns its CardId (u32).
    #[wasm_bindgen(js_name = observe_card)]
    pub fn observe_card(&mut self) -> u32 {
        self.core.observe_card().0
    }

    /// Register a form input; returns its FieldId (u32). Errors when no
    /// form was registered first.
    #[wasm_bindgen(js_name = observe_field)]
    pub fn observe_field(&mut self) -> Result<u32, JsError> {
        self.core
            .observe_field()
            .map(|id| id.0)
            .map_err(|e| JsError::new(&format!("observe_field error: {e}")))
    }

    /// Register a reveal target. Returns `{ id, effects }`: the staging
    /// effects put the element into its hidden pre-animation state.
    #[wasm_bindgen(js_name = observe_reveal)]
    pub fn observe_reveal(&mut self) -> Result<JsValue, JsError> {
        let id = self.core.observe_reveal();
        let registration = RevealRegistration {
            id: id.0,
            effects: &self.core.outputs().effects,
        };
        swb::to_value(&registration).map_err(|e| JsError::new(&format!("effects error: {e}")))
    }

    /// IntersectionObserver options the host should use for reveal targets.
    #[wasm_bindgen(js_name = reveal_options)]
    pub fn reveal_options(&self) -> Result<JsValue, JsError> {
        swb::to_value(&self.core.config().reveal)
            .map_err(|e| JsError::new(&format!("config error: {e}")))
    }

    /// Click on an anchor with an `href` starting with `#`.
    #[wasm_bindgen(js_name = anchor_clicked)]
    pub fn anchor_clicked(&mut self, href: String) -> Result<JsValue, JsError> {
        outputs_to_js(self.core.anchor_clicked(&href))
    }

    /// Input event on a field; `is_valid` is the input's native
    /// `checkValidity()` result, `now_ms` is `performance.now()`.
    #[wasm_bindgen(js_name = field_input)]
    pub fn field_input(
        &mut self,
        field: u32,
        is_valid: bool,
        now_ms: f64,
    ) -> Result<JsValue, JsError> {
        outputs_to_js(self.core.field_input(FieldId(field), is_valid, now_ms))
    }

    /// Submit event. `fields` is an array of `[name, value]` pairs in form
    /// order (what `FormData` iteration yields).
    #[wasm_bindgen(js_name = form_submitted)]
    pub fn form_submitted(&mut self, fields: JsValue) -> Result<JsValue, JsError> {
        let fields: Vec<(String, String)> =
            swb::from_value(fields).map_err(|e| JsError::new(&format!("fields error: {e}")))?;
        outputs_to_js(self.core.form_submitted(&fields))
    }

    /// Outcome of the POST issued for `SendRequest`. `ok` mirrors
    /// `response.ok`; `body` is the best-effort text of a failure response
    /// (pass undefined when reading it threw).
    #[wasm_bindgen(js_name = fetch_completed)]
    pub fn fetch_completed(
        &mut self,
        ok: bool,
        status: u16,
        body: Option<String>,
    ) -> Result<JsValue, JsError> {
        outputs_to_js(self.core.fetch_completed(ok, status, body))
    }

    /// Pointer move over a card. `x`/`y` are offsets into the card's
    /// bounding rect of `width` by `height`.
    #[wasm_bindgen(js_name = pointer_moved)]
    pub fn pointer_moved(
        &mut self,
        card: u32,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        now_ms: f64,
    ) -> Result<JsValue, JsError> {
        outputs_to_js(
            self.core
                .pointer_moved(CardId(card), x, y, width, height, now_ms),
        )
    }

    #[wasm_bindgen(js_name = pointer_left)]
    pub fn pointer_left(&mut self, card: u32) -> Result<JsValue, JsError> {
        outputs_to_js(self.core.pointer_left(CardId(card)))
    }

    /// Scroll event with `window.scrollY`.
    pub fn scrolled(&mut self, offset: f64) -> Result<JsValue, JsError> {
        outputs_to_js(self.core.scrolled(offset))
    }

    /// Intersection report for a reveal target.
    pub fn intersection(
        &mut self,
        target: u32,
        is_intersecting: bool,
    ) -> Result<JsValue, JsError> {
        outputs_to_js(self.core.intersection(RevealId(target), is_intersecting))
    }

    /// Animation-frame callback, owed after any `RequestFrame` effect.
    pub fn frame(&mut self) -> Result<JsValue, JsError> {
        outputs_to_js(self.core.frame())
    }

    /// Timeout callback, owed after any `SetTimer` effect.
    #[wasm_bindgen(js_name = timer_fired)]
    pub fn timer_fired(&mut self, timer: u32, now_ms: f64) -> Result<JsValue, JsError> {
        outputs_to_js(self.core.timer_fired(TimerId(timer), now_ms))
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
