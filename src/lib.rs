//! Brain Freeze - lick the ice cream before it drips
//!
//! Core modules:
//! - `sim`: Deterministic simulation (drip zones, brain freeze, ice-cream integrity)
//! - `settings`: Data-driven game balance, loadable from JSON
//! - `driver`: Headless frame driver standing in for a presentation layer

pub mod driver;
pub mod settings;
pub mod sim;

pub use driver::{Autoplay, FrameDriver, LickInput};
pub use settings::{GameSettings, SettingsError};
pub use sim::{DripZone, EventLog, GameEvent, GameModel, SeededPicker, ZonePicker};

/// Game configuration constants
pub mod consts {
    /// Max simultaneous drips per difficulty tier (only medium drives gameplay)
    pub const SIMULTANEOUS_DRIPS_EASY: usize = 2;
    pub const SIMULTANEOUS_DRIPS_MEDIUM: usize = 3;
    pub const SIMULTANEOUS_DRIPS_HARD: usize = 5;

    /// Seconds between drip zone top-ups
    pub const DRIP_ZONE_ACTIVATION_INTERVAL: f32 = 3.0;
    /// Seconds an active zone takes to drip
    pub const DRIP_INTERVAL: f32 = 5.0;

    /// Ice-cream integrity
    pub const ICECREAM_HP_FULL: i32 = 100;
    pub const LICK_ICECREAM_DAMAGE: i32 = 10;

    /// Brain freeze meter
    pub const BRAIN_HP_FULL: f32 = 100.0;
    pub const BRAIN_HP_RECHARGE_PER_SECOND: f32 = 10.0;
    pub const LICK_BRAIN_DAMAGE: f32 = 10.0;

    /// Declared but not read by any rule
    pub const CLEAN_HP_FULL: i32 = 100;

    /// Fixed simulation timestep for the headless driver (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the driver will account for (hitches are clamped)
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// Shortest non-zero frame the driver will account for (1000 fps).
    /// Anything smaller would round away in the f32 accumulator.
    pub const MIN_FRAME_DT: f32 = 1.0 / 1000.0;
}
