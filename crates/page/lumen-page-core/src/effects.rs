//! Output contracts from the engine.
//!
//! Every entry point returns an effect batch describing the DOM, network,
//! and scheduling work the host must perform. The engine decides; the host
//! applies. `RequestFrame` and `SetTimer` are the only effects that feed
//! back into the engine (via `frame` and `timer_fired`).

use serde::{Deserialize, Serialize};

use crate::ids::{CardId, FieldId, RevealId, TimerId};

/// One network request the host should perform for an in-flight submit.
/// Always a POST; completion is reported back via `fetch_completed`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRequest {
    pub url: String,
    pub content_type: String,
    pub body: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Effect {
    /// Stop the browser default for the event being handled.
    PreventDefault,
    /// Smooth-scroll the element carrying this fragment id so its top edge
    /// meets the viewport top. An unknown fragment is a silent no-op.
    ScrollIntoView { fragment: String },
    /// `None` clears back to the stylesheet default.
    SetFieldBorder {
        field: FieldId,
        color: Option<String>,
    },
    SetSubmitLabel { label: String },
    /// Put the submit control back to the label it had before the submit.
    RestoreSubmitLabel,
    SetSubmitEnabled { enabled: bool },
    /// `None` clears back to the stylesheet default.
    SetSubmitBackground { background: Option<String> },
    SendRequest(FormRequest),
    ShowErrorNotice { message: String },
    /// Restore the form's pristine input state.
    ResetForm,
    SetStyleVar {
        card: CardId,
        name: String,
        value: String,
    },
    ClearStyleVar { card: CardId, name: String },
    SetNavbarStyle {
        background: String,
        backdrop_filter: String,
    },
    SetRevealHidden {
        target: RevealId,
        opacity: String,
        transform: String,
        transition: String,
    },
    SetRevealVisible {
        target: RevealId,
        opacity: String,
        transform: String,
    },
    /// Stop intersection observation for this element.
    Unobserve { target: RevealId },
    /// Call `frame` on the next animation frame.
    RequestFrame,
    /// Call `timer_fired` with this id after the delay.
    SetTimer { timer: TimerId, delay_ms: f64 },
}

/// Effect batch returned by engine entry points.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub effects: Vec<Effect>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.effects.clear();
    }

    #[inline]
    pub fn push(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Effect> {
        self.effects.iter()
    }
}
