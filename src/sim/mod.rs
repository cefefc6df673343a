//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied deltas only
//! - Injected zone picker only (no global RNG)
//! - Stable iteration order (by zone index)
//! - No rendering or platform dependencies

pub mod events;
pub mod rng;
pub mod state;
pub mod tick;
pub mod zone;

pub use events::{EventLog, GameEvent, Observers, SubscriptionId};
pub use rng::{ScriptedPicker, SeededPicker, ZonePicker};
pub use state::GameModel;
pub use zone::DripZone;
