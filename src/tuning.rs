//! Data-driven game balance
//!
//! Every coefficient the difficulty curve depends on lives here, so the
//! feel of a run can be adjusted from a JSON blob without touching the
//! simulation. Defaults reproduce the shipped balance.

use serde::{Deserialize, Serialize};

/// Balance policy for a run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player physics (per tick) ===
    /// Downward acceleration applied while airborne
    pub gravity: f32,
    /// Initial vertical velocity of a jump (negative = upward)
    pub jump_impulse: f32,

    // === Health deltas ===
    /// Health lost on contact with a hazard
    pub hazard_damage: i32,
    /// Health gained on contact with a remedy
    pub remedy_heal: i32,

    // === Scroll speed (units per tick) ===
    /// Speed at score 0, level 1
    pub base_speed: f32,
    /// Extra speed per level beyond the first
    pub level_speed_bonus: f32,
    /// Score divisor for the linear speed term
    pub score_speed_divisor: f32,
    /// Score divisor for the extra climb past `hard_tier`
    pub surge_speed_divisor: f32,

    // === Spawn cadence (ticks between spawns) ===
    /// Gap at score 0, level 1
    pub base_spawn_gap: f32,
    /// Gap reduction per level
    pub level_spawn_relief: f32,
    /// Score divisor for the early-game gap reduction
    pub score_spawn_divisor: f32,
    /// Gap anchor for the late-game regime (past `hard_tier`)
    pub late_spawn_gap: f32,
    /// Score divisor for the late-game gap reduction
    pub late_spawn_divisor: f32,
    /// Gap never drops below this
    pub min_spawn_gap: f32,

    // === Spawn mix ===
    /// Probability a spawn is a hazard (early game)
    pub hazard_chance: f64,
    /// Probability a spawn is a hazard past `hard_tier`
    pub late_hazard_chance: f64,
    /// Probability a hazard flies at jump height past `elevated_tier`
    pub elevated_chance: f64,
    /// Probability a ground hazard brings an adjacent twin past `hard_tier`
    pub double_chance: f64,

    // === Tier boundaries (score) ===
    /// Score past which the hazard mix and cadence tighten
    pub hard_tier: u64,
    /// Score past which elevated hazards appear
    pub elevated_tier: u64,
    /// Score span of one level
    pub level_span: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.6,
            jump_impulse: -13.0,

            hazard_damage: 34,
            remedy_heal: 15,

            base_speed: 5.0,
            level_speed_bonus: 1.5,
            score_speed_divisor: 500.0,
            surge_speed_divisor: 2000.0,

            base_spawn_gap: 120.0,
            level_spawn_relief: 10.0,
            score_spawn_divisor: 100.0,
            late_spawn_gap: 90.0,
            late_spawn_divisor: 40.0,
            min_spawn_gap: 30.0,

            hazard_chance: 0.65,
            late_hazard_chance: 0.85,
            elevated_chance: 0.25,
            double_chance: 0.40,

            hard_tier: 1000,
            elevated_tier: 1200,
            level_span: 500,
        }
    }
}

impl Tuning {
    /// Parse a tuning override from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_shipped_balance() {
        let t = Tuning::default();
        assert_eq!(t.hazard_damage, 34);
        assert_eq!(t.remedy_heal, 15);
        assert_eq!(t.level_span, 500);
        assert!((t.gravity - 0.6).abs() < f32::EPSILON);
        assert!((t.jump_impulse - -13.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let t = Tuning::from_json(r#"{"hazard_damage": 20}"#).unwrap();
        assert_eq!(t.hazard_damage, 20);
        assert_eq!(t.remedy_heal, 15);
        assert!((t.base_speed - 5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_garbage_json_is_an_error() {
        assert!(Tuning::from_json("not json").is_err());
    }
}
