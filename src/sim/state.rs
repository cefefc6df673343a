//! Game model state and queries
//!
//! The model owns every piece of session state. Presentation code reads it
//! through the query methods and mutates it only via `tick`, `lick`,
//! `lick_dripless` and `reset`.

use super::events::{GameEvent, Observers, SubscriptionId};
use super::rng::{SeededPicker, ZonePicker};
use super::zone::DripZone;
use crate::settings::GameSettings;

/// The drip / brain-freeze simulation
#[derive(Debug)]
pub struct GameModel<P = SeededPicker> {
    pub(super) settings: GameSettings,
    pub(super) zones: Vec<DripZone>,
    /// Brain freeze meter, kept within [0, brain_hp_full]
    pub(super) brain_freeze: f32,
    /// Lose condition; allowed to go negative
    pub(super) icecream_integrity: i32,
    /// Tracked but never read by any rule
    pub(super) clean_hp: i32,
    /// Seconds until the next reactivation round
    pub(super) reactivation_timer: f32,
    /// Latched once game over has fired
    pub(super) game_over: bool,
    pub(super) picker: P,
    pub(super) observers: Observers,
}

impl GameModel<SeededPicker> {
    /// Create a model whose zone picks are driven by `seed`
    pub fn new(settings: GameSettings, zone_count: usize, seed: u64) -> Self {
        Self::with_picker(settings, zone_count, SeededPicker::new(seed))
    }
}

impl<P: ZonePicker> GameModel<P> {
    /// Create a model drawing zone picks from `picker`
    pub fn with_picker(settings: GameSettings, zone_count: usize, picker: P) -> Self {
        let mut model = Self {
            brain_freeze: settings.brain_hp_full,
            icecream_integrity: settings.icecream_hp_full,
            clean_hp: settings.clean_hp_full,
            reactivation_timer: settings.drip_zone_activation_interval,
            settings,
            zones: Vec::new(),
            game_over: false,
            picker,
            observers: Observers::default(),
        };
        let settings = model.settings.clone();
        model.reset(settings, zone_count);
        model
    }

    /// Start a fresh session.
    ///
    /// Allocates `zone_count` idle zones, then arms `drip_target()` random
    /// picks (with replacement, so fewer zones may end up active). Observers
    /// stay registered; no events fire.
    pub fn reset(&mut self, settings: GameSettings, zone_count: usize) {
        debug_assert!(
            settings.validate().is_ok(),
            "invalid settings: {:?}",
            settings.validate()
        );

        self.brain_freeze = settings.brain_hp_full;
        self.icecream_integrity = settings.icecream_hp_full;
        self.clean_hp = settings.clean_hp_full;
        self.reactivation_timer = settings.drip_zone_activation_interval;
        self.game_over = false;
        self.zones = vec![DripZone::idle(settings.drip_interval); zone_count];
        self.settings = settings;

        let target = self.settings.drip_target();
        self.activate_random_zones(target);

        log::info!(
            "Session reset: {} zones, {} active",
            self.zones.len(),
            self.active_zone_count()
        );
    }

    /// Arm `count` independently picked zones (duplicates re-arm the same zone)
    pub(super) fn activate_random_zones(&mut self, count: usize) {
        if self.zones.is_empty() {
            return;
        }
        let interval = self.settings.drip_interval;
        for _ in 0..count {
            let idx = self.picker.pick_zone(self.zones.len());
            self.zones[idx].activate(interval);
            log::debug!("Drip {} activated", idx);
        }
    }

    // === Observers ===

    /// Register an observer for every event
    pub fn subscribe(&mut self, observer: impl FnMut(&GameEvent) + 'static) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    /// Register an observer for drips only; it receives the zone index
    pub fn on_drip(&mut self, mut observer: impl FnMut(usize) + 'static) -> SubscriptionId {
        self.observers.subscribe(move |event| {
            if let GameEvent::Drip { zone } = *event {
                observer(zone);
            }
        })
    }

    /// Register an observer for game over only
    pub fn on_game_over(&mut self, mut observer: impl FnMut() + 'static) -> SubscriptionId {
        self.observers.subscribe(move |event| {
            if *event == GameEvent::GameOver {
                observer();
            }
        })
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    // === Queries ===

    fn zone(&self, idx: usize) -> &DripZone {
        assert!(
            idx < self.zones.len(),
            "drip zone {} out of range (zone count {})",
            idx,
            self.zones.len()
        );
        &self.zones[idx]
    }

    pub fn is_zone_active(&self, idx: usize) -> bool {
        self.zone(idx).is_active
    }

    /// How close zone `idx` is to dripping: 0 at activation, approaching 1.
    ///
    /// Idle zones read 0.
    pub fn drip_progress_normalized(&self, idx: usize) -> f32 {
        self.zone(idx).progress(self.settings.drip_interval)
    }

    pub fn seconds_to_drip(&self, idx: usize) -> f32 {
        self.zone(idx).seconds_to_drip
    }

    pub fn brain_freeze(&self) -> f32 {
        self.brain_freeze
    }

    pub fn brain_freeze_capacity(&self) -> f32 {
        self.settings.brain_hp_full
    }

    /// Meter fill in [0, 1]
    pub fn brain_freeze_normalized(&self) -> f32 {
        self.brain_freeze / self.settings.brain_hp_full
    }

    pub fn icecream_integrity(&self) -> i32 {
        self.icecream_integrity
    }

    pub fn icecream_capacity(&self) -> i32 {
        self.settings.icecream_hp_full
    }

    pub fn clean_hp(&self) -> i32 {
        self.clean_hp
    }

    pub fn reactivation_timer(&self) -> f32 {
        self.reactivation_timer
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    pub fn active_zone_count(&self) -> usize {
        self.zones.iter().filter(|z| z.is_active).count()
    }

    pub fn zones(&self) -> &[DripZone] {
        &self.zones
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn picker(&self) -> &P {
        &self.picker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::ScriptedPicker;

    #[test]
    fn test_new_seeds_medium_target() {
        let model = GameModel::with_picker(
            GameSettings::default(),
            6,
            ScriptedPicker::new(vec![0, 2, 4]),
        );
        assert_eq!(model.zone_count(), 6);
        assert_eq!(model.active_zone_count(), 3);
        for idx in [0, 2, 4] {
            assert!(model.is_zone_active(idx));
            assert_eq!(model.seconds_to_drip(idx), 5.0);
            assert_eq!(model.drip_progress_normalized(idx), 0.0);
        }
        assert!(!model.is_zone_active(1));
        assert_eq!(model.brain_freeze(), 100.0);
        assert_eq!(model.icecream_integrity(), 100);
        assert_eq!(model.clean_hp(), 100);
        assert_eq!(model.reactivation_timer(), 3.0);
    }

    #[test]
    fn test_duplicate_picks_arm_fewer_zones() {
        let model = GameModel::with_picker(
            GameSettings::default(),
            5,
            ScriptedPicker::new(vec![1, 1, 3]),
        );
        assert_eq!(model.active_zone_count(), 2);
        assert_eq!(model.picker().drawn(), 3);
    }

    #[test]
    fn test_zero_zones_draws_nothing() {
        let model = GameModel::with_picker(GameSettings::default(), 0, ScriptedPicker::new(vec![0]));
        assert_eq!(model.zone_count(), 0);
        assert_eq!(model.picker().drawn(), 0);
    }

    #[test]
    fn test_reset_restores_resources() {
        let mut model = GameModel::new(GameSettings::default(), 4, 7);
        model.brain_freeze = 12.0;
        model.icecream_integrity = -5;
        model.game_over = true;

        let settings = GameSettings {
            brain_hp_full: 50.0,
            ..Default::default()
        };
        model.reset(settings, 9);

        assert_eq!(model.zone_count(), 9);
        assert_eq!(model.brain_freeze(), 50.0);
        assert_eq!(model.brain_freeze_capacity(), 50.0);
        assert_eq!(model.icecream_integrity(), 100);
        assert!(!model.is_game_over());
    }

    #[test]
    fn test_reset_keeps_observers() {
        let mut model = GameModel::new(GameSettings::default(), 4, 7);
        model.on_game_over(|| {});
        model.reset(GameSettings::default(), 4);
        assert_eq!(model.observers.len(), 1);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_query_out_of_range_panics() {
        let model = GameModel::new(GameSettings::default(), 3, 1);
        model.is_zone_active(3);
    }
}
