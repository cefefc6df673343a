//! Game balance settings
//!
//! Immutable per session. Defaults are the shipped tuning; a JSON file
//! may override any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Why a settings block could not be used
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("setting `{field}` must be greater than zero")]
    NonPositive { field: &'static str },
    #[error("setting `{field}` must be finite")]
    NotFinite { field: &'static str },
}

/// Tunable constants for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    // === Difficulty tiers ===
    /// Max simultaneous drips (easy). Not read by any rule.
    pub easy_simultaneous_drips: usize,
    /// Max simultaneous drips (medium). The target reset and reactivation aim for.
    pub medium_simultaneous_drips: usize,
    /// Max simultaneous drips (hard). Not read by any rule.
    pub hard_simultaneous_drips: usize,

    // === Timing ===
    /// Seconds between reactivation rounds
    pub drip_zone_activation_interval: f32,
    /// Seconds from activation to drip
    pub drip_interval: f32,

    // === Ice cream ===
    pub icecream_hp_full: i32,
    pub lick_icecream_damage: i32,

    // === Brain freeze ===
    pub brain_hp_full: f32,
    pub brain_hp_recharge_per_second: f32,
    pub lick_brain_damage: f32,

    /// Cleanliness capacity (inert)
    pub clean_hp_full: i32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            easy_simultaneous_drips: SIMULTANEOUS_DRIPS_EASY,
            medium_simultaneous_drips: SIMULTANEOUS_DRIPS_MEDIUM,
            hard_simultaneous_drips: SIMULTANEOUS_DRIPS_HARD,

            drip_zone_activation_interval: DRIP_ZONE_ACTIVATION_INTERVAL,
            drip_interval: DRIP_INTERVAL,

            icecream_hp_full: ICECREAM_HP_FULL,
            lick_icecream_damage: LICK_ICECREAM_DAMAGE,

            brain_hp_full: BRAIN_HP_FULL,
            brain_hp_recharge_per_second: BRAIN_HP_RECHARGE_PER_SECOND,
            lick_brain_damage: LICK_BRAIN_DAMAGE,

            clean_hp_full: CLEAN_HP_FULL,
        }
    }
}

impl GameSettings {
    /// Number of zones the model keeps active.
    ///
    /// Always the medium tier, whatever the other tiers say.
    pub fn drip_target(&self) -> usize {
        self.medium_simultaneous_drips
    }

    /// Check that every field is usable by the simulation
    pub fn validate(&self) -> Result<(), SettingsError> {
        let floats = [
            ("drip_zone_activation_interval", self.drip_zone_activation_interval, false),
            ("drip_interval", self.drip_interval, false),
            ("brain_hp_full", self.brain_hp_full, false),
            ("brain_hp_recharge_per_second", self.brain_hp_recharge_per_second, true),
            ("lick_brain_damage", self.lick_brain_damage, true),
        ];
        for (field, value, zero_ok) in floats {
            if !value.is_finite() {
                return Err(SettingsError::NotFinite { field });
            }
            if value < 0.0 || (!zero_ok && value == 0.0) {
                return Err(SettingsError::NonPositive { field });
            }
        }

        if self.icecream_hp_full <= 0 {
            return Err(SettingsError::NonPositive {
                field: "icecream_hp_full",
            });
        }
        if self.lick_icecream_damage < 0 {
            return Err(SettingsError::NonPositive {
                field: "lick_icecream_damage",
            });
        }
        if self.clean_hp_full <= 0 {
            return Err(SettingsError::NonPositive {
                field: "clean_hp_full",
            });
        }
        Ok(())
    }

    /// Parse and validate settings from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Serialize to pretty JSON (for writing a starter file)
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = GameSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.drip_target(), 3);
        assert_eq!(settings.drip_interval, 5.0);
        assert_eq!(settings.icecream_hp_full, 100);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = GameSettings::from_json(r#"{ "drip_interval": 2.5 }"#).unwrap();
        assert_eq!(settings.drip_interval, 2.5);
        assert_eq!(settings.medium_simultaneous_drips, 3);
        assert_eq!(settings.brain_hp_full, 100.0);
    }

    #[test]
    fn test_drip_target_ignores_other_tiers() {
        let settings = GameSettings {
            easy_simultaneous_drips: 1,
            hard_simultaneous_drips: 9,
            ..Default::default()
        };
        assert_eq!(settings.drip_target(), 3);
    }

    #[test]
    fn test_rejects_zero_interval() {
        let err = GameSettings::from_json(r#"{ "drip_interval": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::NonPositive {
                field: "drip_interval"
            }
        ));
    }

    #[test]
    fn test_rejects_non_finite() {
        let settings = GameSettings {
            brain_hp_full: f32::INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::NotFinite {
                field: "brain_hp_full"
            })
        ));
    }

    #[test]
    fn test_rejects_empty_icecream() {
        let settings = GameSettings {
            icecream_hp_full: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = GameSettings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_json_roundtrip_preserves_fields() {
        let settings = GameSettings {
            lick_brain_damage: 25.0,
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(GameSettings::from_json(&json).unwrap(), settings);
    }
}
