//! Lumen Page Core (host-agnostic)
//!
//! Interactive behavior for the portfolio page expressed as a sans-IO
//! engine: the host forwards DOM events (anchor clicks, form input/submit,
//! pointer moves, scrolls, intersection reports) plus its scheduling
//! callbacks (animation frames, timeouts, fetch completions), and the
//! engine returns batches of [`effects::Effect`] for the host to apply.
//! The host owns every real DOM and network call.

pub mod config;
pub mod effects;
pub mod engine;
pub mod error;
pub mod form;
pub mod frame;
pub mod glow;
pub mod ids;
pub mod navbar;
pub mod reveal;
pub mod scroll;

// Re-exports for consumers (adapters)
pub use config::{Config, FormConfig, GlowConfig, NavbarConfig, NavbarSkin, RevealConfig};
pub use effects::{Effect, FormRequest, Outputs};
pub use engine::Engine;
pub use error::FormError;
pub use form::{FormController, Transport};
pub use ids::{CardId, FieldId, RevealId, TimerId};
