//! Engine: registration, event dispatch, and scheduling plumbing.
//!
//! One engine per page. Hosts register the elements they found (form,
//! fields, navbar, cards, reveal targets), then forward events; every entry
//! point clears and refills the shared [`Outputs`] buffer. Components never
//! talk to each other; the engine routes.

use hashbrown::HashMap;

use lumen_timing::Throttler;

use crate::config::Config;
use crate::effects::{Effect, Outputs};
use crate::error::FormError;
use crate::form::FormController;
use crate::frame::{FrameOp, FrameScheduler};
use crate::glow::{self, MOUSE_X_VAR, MOUSE_Y_VAR};
use crate::ids::{CardId, FieldId, IdAllocator, RevealId, TimerId};
use crate::navbar::{self, NavbarState};
use crate::reveal::RevealTracker;
use crate::scroll::{classify_anchor_click, ClickAction};

/// What an armed host timeout is for.
#[derive(Clone, Copy, Debug, PartialEq)]
enum TimerPurpose {
    FieldDebounce(FieldId),
    ConfirmReset,
}

#[derive(Debug)]
pub struct Engine {
    cfg: Config,
    ids: IdAllocator,
    frames: FrameScheduler,
    timers: HashMap<TimerId, TimerPurpose>,
    form: Option<FormController>,
    navbar: Option<NavbarState>,
    glow_gates: Vec<Throttler>,
    reveals: RevealTracker,
    outputs: Outputs,
}

impl Engine {
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            ids: IdAllocator::new(),
            frames: FrameScheduler::new(),
            timers: HashMap::new(),
            form: None,
            navbar: None,
            glow_gates: Vec::new(),
            reveals: RevealTracker::new(),
            outputs: Outputs::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Effects produced by the most recent entry point.
    pub fn outputs(&self) -> &Outputs {
        &self.outputs
    }

    /// Register the contact form. Without this every form entry point is a
    /// no-op; registering twice is idempotent.
    pub fn register_form(&mut self) {
        if self.form.is_none() {
            self.form = Some(FormController::new(self.cfg.form.clone()));
        }
    }

    pub fn register_navbar(&mut self) {
        if self.navbar.is_none() {
            self.navbar = Some(NavbarState::new());
        }
    }

    /// Register a project card for the glow effect.
    pub fn observe_card(&mut self) -> CardId {
        let id = self.ids.alloc_card();
        self.glow_gates.push(Throttler::new(self.cfg.glow.throttle_ms));
        id
    }

    /// Register a form input for live validity feedback.
    pub fn observe_field(&mut self) -> Result<FieldId, FormError> {
        self.form
            .as_mut()
            .map(FormController::observe_field)
            .ok_or(FormError::NotRegistered)
    }

    /// Register an element for one-shot appearance animation. The staging
    /// effects (hidden state plus transition) land in `outputs`.
    pub fn observe_reveal(&mut self) -> RevealId {
        self.outputs.clear();
        let id = self.ids.alloc_reveal();
        let index = self.reveals.observe();
        debug_assert_eq!(index, id.0 as usize);
        self.outputs.push(Effect::SetRevealHidden {
            target: id,
            opacity: "0".to_string(),
            transform: format!("translateY({}px)", self.cfg.reveal.hidden_offset_px),
            transition: self.cfg.reveal.transition.clone(),
        });
        id
    }

    /// Click on an `href^="#"` anchor. A bare `#` passes through; anything
    /// else prevents default and schedules a smooth scroll for the next
    /// frame.
    pub fn anchor_clicked(&mut self, href: &str) -> &Outputs {
        self.outputs.clear();
        if let ClickAction::Intercept { fragment } = classify_anchor_click(href) {
            self.outputs.push(Effect::PreventDefault);
            if self.frames.push(FrameOp::ScrollTo { fragment }) {
                self.outputs.push(Effect::RequestFrame);
            }
        }
        &self.outputs
    }

    /// Input event on a registered field with its current native validity.
    pub fn field_input(&mut self, field: FieldId, is_valid: bool, now_ms: f64) -> &Outputs {
        self.outputs.clear();
        let Some(form) = self.form.as_mut() else {
            return &self.outputs;
        };
        match form.field_input(field, is_valid, now_ms) {
            Ok(()) => {
                let timer = self.ids.alloc_timer();
                self.timers.insert(timer, TimerPurpose::FieldDebounce(field));
                self.outputs.push(Effect::SetTimer {
                    timer,
                    delay_ms: self.cfg.form.input_debounce_ms,
                });
            }
            Err(err) => log::warn!("field input ignored: {err}"),
        }
        &self.outputs
    }

    /// Submit event with the host-collected field pairs. The adapter
    /// prevents the browser default before forwarding; the batch repeats
    /// `PreventDefault` for hosts that apply effects synchronously instead.
    pub fn form_submitted(&mut self, fields: &[(String, String)]) -> &Outputs {
        self.outputs.clear();
        let Some(form) = self.form.as_mut() else {
            return &self.outputs;
        };
        self.outputs.push(Effect::PreventDefault);
        if let Err(err) = form.submit(fields, &mut self.outputs) {
            log::warn!("submit dropped: {err}");
        }
        &self.outputs
    }

    /// Outcome of the host's POST: `ok` for a 2xx status, `body` the
    /// best-effort failure detail (`None` when reading it failed too).
    pub fn fetch_completed(&mut self, ok: bool, status: u16, body: Option<String>) -> &Outputs {
        self.outputs.clear();
        let Some(form) = self.form.as_mut() else {
            return &self.outputs;
        };
        match form.fetch_completed(ok, status, body, &mut self.outputs) {
            Ok(true) => {
                let timer = self.ids.alloc_timer();
                self.timers.insert(timer, TimerPurpose::ConfirmReset);
                self.outputs.push(Effect::SetTimer {
                    timer,
                    delay_ms: self.cfg.form.confirm_reset_ms,
                });
            }
            Ok(false) => {}
            Err(err) => log::warn!("fetch completion ignored: {err}"),
        }
        &self.outputs
    }

    /// Pointer move over a card; `x`/`y` are offsets within its `width` by
    /// `height` bounding box. Throttled per card, applied next frame.
    pub fn pointer_moved(
        &mut self,
        card: CardId,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        now_ms: f64,
    ) -> &Outputs {
        self.outputs.clear();
        let Some(gate) = self.glow_gates.get_mut(card.0 as usize) else {
            return &self.outputs;
        };
        if !gate.admit(now_ms) {
            return &self.outputs;
        }
        if let Some(point) = glow::glow_point(x, y, width, height) {
            let op = FrameOp::GlowAt {
                card,
                x_pct: point.x_pct,
                y_pct: point.y_pct,
            };
            if self.frames.push(op) {
                self.outputs.push(Effect::RequestFrame);
            }
        }
        &self.outputs
    }

    /// Pointer left a card: clear both glow variables next frame.
    pub fn pointer_left(&mut self, card: CardId) -> &Outputs {
        self.outputs.clear();
        if (card.0 as usize) < self.glow_gates.len()
            && self.frames.push(FrameOp::GlowClear { card })
        {
            self.outputs.push(Effect::RequestFrame);
        }
        &self.outputs
    }

    /// Scroll event with the current offset. At most one navbar restyle is
    /// queued per frame regardless of how many of these arrive.
    pub fn scrolled(&mut self, offset: f64) -> &Outputs {
        self.outputs.clear();
        let Some(nav) = self.navbar.as_mut() else {
            return &self.outputs;
        };
        if nav.scrolled(offset) && self.frames.push(FrameOp::NavbarRestyle) {
            self.outputs.push(Effect::RequestFrame);
        }
        &self.outputs
    }

    /// Intersection report for a reveal target. The first intersecting
    /// report transitions the element and stops its observation for good.
    pub fn intersection(&mut self, target: RevealId, is_intersecting: bool) -> &Outputs {
        self.outputs.clear();
        if self.reveals.on_intersection(target.0 as usize, is_intersecting) {
            self.outputs.push(Effect::SetRevealVisible {
                target,
                opacity: "1".to_string(),
                transform: "translateY(0)".to_string(),
            });
            self.outputs.push(Effect::Unobserve { target });
        }
        &self.outputs
    }

    /// Animation-frame callback: drain every deferred visual op queued
    /// since the last frame.
    pub fn frame(&mut self) -> &Outputs {
        self.outputs.clear();
        for op in self.frames.drain() {
            match op {
                FrameOp::ScrollTo { fragment } => {
                    self.outputs.push(Effect::ScrollIntoView { fragment });
                }
                FrameOp::GlowAt { card, x_pct, y_pct } => {
                    self.outputs.push(Effect::SetStyleVar {
                        card,
                        name: MOUSE_X_VAR.to_string(),
                        value: glow::format_pct(x_pct),
                    });
                    self.outputs.push(Effect::SetStyleVar {
                        card,
                        name: MOUSE_Y_VAR.to_string(),
                        value: glow::format_pct(y_pct),
                    });
                }
                FrameOp::GlowClear { card } => {
                    self.outputs.push(Effect::ClearStyleVar {
                        card,
                        name: MOUSE_X_VAR.to_string(),
                    });
                    self.outputs.push(Effect::ClearStyleVar {
                        card,
                        name: MOUSE_Y_VAR.to_string(),
                    });
                }
                FrameOp::NavbarRestyle => {
                    if let Some(nav) = self.navbar.as_mut() {
                        let offset = nav.drained();
                        let skin = navbar::skin_for_offset(&self.cfg.navbar, offset);
                        self.outputs.push(Effect::SetNavbarStyle {
                            background: skin.background.clone(),
                            backdrop_filter: skin.backdrop_filter.clone(),
                        });
                    }
                }
            }
        }
        &self.outputs
    }

    /// Host timeout callback. Unknown ids (already superseded or already
    /// fired) are ignored.
    pub fn timer_fired(&mut self, timer: TimerId, now_ms: f64) -> &Outputs {
        self.outputs.clear();
        let Some(purpose) = self.timers.remove(&timer) else {
            return &self.outputs;
        };
        match purpose {
            TimerPurpose::FieldDebounce(field) => {
                if let Some(form) = self.form.as_mut() {
                    form.poll_field(field, now_ms, &mut self.outputs);
                }
            }
            TimerPurpose::ConfirmReset => {
                if let Some(form) = self.form.as_mut() {
                    form.confirm_reset(&mut self.outputs);
                }
            }
        }
        &self.outputs
    }
}
