//! Per-frame simulation step and lick actions
//!
//! Order inside `tick` matters for determinism: recharge, reactivation, then
//! the per-zone countdown.

use super::events::GameEvent;
use super::rng::ZonePicker;
use super::state::GameModel;

impl<P: ZonePicker> GameModel<P> {
    /// Advance the simulation by `dt` seconds.
    ///
    /// Drip events are delivered to observers before this returns.
    pub fn tick(&mut self, dt: f32) {
        debug_assert!(dt >= 0.0, "negative tick delta: {}", dt);

        // Brain freeze recovers passively
        self.brain_freeze = (self.brain_freeze
            + self.settings.brain_hp_recharge_per_second * dt)
            .min(self.settings.brain_hp_full);

        self.reactivate_zones(dt);

        let interval = self.settings.drip_interval;
        for idx in 0..self.zones.len() {
            let zone = &mut self.zones[idx];
            if !zone.count_down(dt) {
                if zone.is_active {
                    log::trace!("Drip {} seconds to drip: {}", idx, zone.seconds_to_drip);
                }
                continue;
            }

            log::info!("Drip {} dripped", idx);
            self.observers.emit(GameEvent::Drip { zone: idx });
            self.zones[idx].reset(interval);
        }
    }

    /// Top active zones back up to the target once per activation interval
    fn reactivate_zones(&mut self, dt: f32) {
        self.reactivation_timer -= dt;
        if self.reactivation_timer > 0.0 {
            return;
        }
        self.reactivation_timer = self.settings.drip_zone_activation_interval;

        let active = self.active_zone_count();
        let deficit = self.settings.drip_target().saturating_sub(active);
        if deficit > 0 {
            log::debug!("Reactivating {} zones ({} active)", deficit, active);
            self.activate_random_zones(deficit);
        }
    }

    /// Lick the ice cream itself (no zone hit).
    ///
    /// Costs brain freeze (floored at 0) and ice-cream integrity (unfloored).
    /// Game over fires the first time integrity drops to zero or below.
    pub fn lick_dripless(&mut self) {
        self.brain_freeze = (self.brain_freeze - self.settings.lick_brain_damage).max(0.0);
        self.icecream_integrity -= self.settings.lick_icecream_damage;

        if self.icecream_integrity <= 0 && !self.game_over {
            log::info!("Game Over: Ice Cream melted");
            self.game_over = true;
            self.observers.emit(GameEvent::GameOver);
        }
    }

    /// Lick drip zone `idx`: pays the lick cost, then clears the zone whether
    /// or not it was active.
    pub fn lick(&mut self, idx: usize) {
        assert!(
            idx < self.zones.len(),
            "drip zone {} out of range (zone count {})",
            idx,
            self.zones.len()
        );
        self.lick_dripless();
        self.zones[idx].reset(self.settings.drip_interval);
        log::debug!("Drip {} licked", idx);
    }
}
