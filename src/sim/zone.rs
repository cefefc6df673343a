//! Drip zone state
//!
//! A zone is either idle (countdown parked at the full interval) or active and
//! counting down toward a drip.

use serde::{Deserialize, Serialize};

/// One tappable spot on the ice cream that can drip
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DripZone {
    /// Seconds until this zone drips (only meaningful while active)
    pub seconds_to_drip: f32,
    /// Whether the zone is counting down
    pub is_active: bool,
}

impl DripZone {
    /// An idle zone with its countdown parked at `drip_interval`
    pub fn idle(drip_interval: f32) -> Self {
        Self {
            seconds_to_drip: drip_interval,
            is_active: false,
        }
    }

    /// Deactivate and park the countdown at the full interval
    pub fn reset(&mut self, drip_interval: f32) {
        self.seconds_to_drip = drip_interval;
        self.is_active = false;
    }

    /// Re-arm: reset the countdown, then start counting
    pub fn activate(&mut self, drip_interval: f32) {
        self.reset(drip_interval);
        self.is_active = true;
    }

    /// Advance an active zone by `dt`. Returns true when the countdown expired.
    ///
    /// Idle zones are left untouched. The caller is responsible for resetting
    /// a zone that expired.
    pub fn count_down(&mut self, dt: f32) -> bool {
        if !self.is_active {
            return false;
        }
        self.seconds_to_drip -= dt;
        self.seconds_to_drip <= 0.0
    }

    /// 0 at activation, approaching 1 just before the drip
    #[inline]
    pub fn progress(&self, drip_interval: f32) -> f32 {
        1.0 - self.seconds_to_drip / drip_interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_zone_ignores_countdown() {
        let mut zone = DripZone::idle(5.0);
        assert!(!zone.count_down(10.0));
        assert_eq!(zone.seconds_to_drip, 5.0);
        assert_eq!(zone.progress(5.0), 0.0);
    }

    #[test]
    fn test_active_zone_expires() {
        let mut zone = DripZone::idle(5.0);
        zone.activate(5.0);
        assert!(!zone.count_down(4.0));
        assert!((zone.progress(5.0) - 0.8).abs() < 1e-6);
        assert!(zone.count_down(1.0));
    }

    #[test]
    fn test_activate_rearms_countdown() {
        let mut zone = DripZone::idle(5.0);
        zone.activate(5.0);
        zone.count_down(3.0);
        zone.activate(5.0);
        assert!(zone.is_active);
        assert_eq!(zone.seconds_to_drip, 5.0);
    }
}
