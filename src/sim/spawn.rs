//! Procedural item spawning
//!
//! The decision itself is a pure function over an injected random source,
//! so the branching policy is testable without a live run. The gate
//! (timer, threshold, live-item cap) lives in `advance`.

use glam::Vec2;
use rand::Rng;

use super::progression;
use super::state::{GameState, Item, ItemKind};
use crate::consts::*;
use crate::tuning::Tuning;

/// What a spawn attempt produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOutcome {
    /// One item of the given kind, optionally flying at jump height
    Single { kind: ItemKind, elevated: bool },
    /// Two ground hazards, the second immediately adjacent to the first
    DoubleHazard,
}

/// Choose what to spawn at the current score.
///
/// Uniform draws, in order: hazard-vs-remedy, then (hazards only) the
/// elevated variant, then (ground hazards only) the adjacent twin. The
/// elevated and double draws are dead weight below their tier boundaries
/// but still consumed, keeping the draw sequence stable across tiers.
pub fn decide_spawn(score: u64, tuning: &Tuning, rng: &mut impl Rng) -> SpawnOutcome {
    let hazard_chance = if score > tuning.hard_tier {
        tuning.late_hazard_chance
    } else {
        tuning.hazard_chance
    };
    if rng.random::<f64>() >= hazard_chance {
        return SpawnOutcome::Single {
            kind: ItemKind::Remedy,
            elevated: false,
        };
    }

    let elevated_chance = if score > tuning.elevated_tier {
        tuning.elevated_chance
    } else {
        0.0
    };
    if rng.random::<f64>() < elevated_chance {
        return SpawnOutcome::Single {
            kind: ItemKind::Hazard,
            elevated: true,
        };
    }

    let double_chance = if score > tuning.hard_tier {
        tuning.double_chance
    } else {
        0.0
    };
    if rng.random::<f64>() < double_chance {
        SpawnOutcome::DoubleHazard
    } else {
        SpawnOutcome::Single {
            kind: ItemKind::Hazard,
            elevated: false,
        }
    }
}

/// Run the spawn gate for one Running tick and materialize the outcome.
///
/// The timer only resets when a spawn actually happens; at the item cap
/// it keeps accumulating so the next free slot fills immediately.
pub(crate) fn advance(state: &mut GameState) {
    state.spawn_timer += 1;
    let threshold = progression::spawn_threshold(state.score, state.level, &state.tuning);
    if state.spawn_timer as f32 <= threshold || state.items.len() >= MAX_ITEMS {
        return;
    }

    let outcome = decide_spawn(state.score, &state.tuning, &mut state.rng);
    let size = Vec2::new(ITEM_WIDTH, ITEM_HEIGHT);
    let ground_y = state.field.ground_top() - ITEM_HEIGHT;
    let right_edge = state.field.width;

    match outcome {
        SpawnOutcome::Single { kind, elevated } => {
            let y = if elevated {
                ground_y - ELEVATED_OFFSET
            } else {
                ground_y
            };
            state.items.push(Item {
                pos: Vec2::new(right_edge, y),
                size,
                kind,
                elevated,
            });
        }
        SpawnOutcome::DoubleHazard => {
            state.items.push(Item {
                pos: Vec2::new(right_edge, ground_y),
                size,
                kind: ItemKind::Hazard,
                elevated: false,
            });
            state.items.push(Item {
                pos: Vec2::new(right_edge + ITEM_WIDTH + DOUBLE_GAP, ground_y),
                size,
                kind: ItemKind::Hazard,
                elevated: false,
            });
        }
    }
    state.spawn_timer = 0;
    log::trace!("spawned {:?} at score {}", outcome, state.score);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn outcomes(score: u64, n: usize) -> Vec<SpawnOutcome> {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        (0..n).map(|_| decide_spawn(score, &tuning, &mut rng)).collect()
    }

    #[test]
    fn test_no_elevated_or_double_below_the_tiers() {
        // Both special chances are exactly zero at score 0
        for outcome in outcomes(0, 500) {
            match outcome {
                SpawnOutcome::Single { elevated, .. } => assert!(!elevated),
                SpawnOutcome::DoubleHazard => panic!("double spawn below the tier"),
            }
        }
    }

    #[test]
    fn test_both_kinds_appear() {
        let all = outcomes(0, 500);
        let hazards = all
            .iter()
            .filter(|o| matches!(o, SpawnOutcome::Single { kind: ItemKind::Hazard, .. }))
            .count();
        let remedies = all
            .iter()
            .filter(|o| matches!(o, SpawnOutcome::Single { kind: ItemKind::Remedy, .. }))
            .count();
        assert!(hazards > 0);
        assert!(remedies > 0);
        // Hazards dominate at the 0.65 mix
        assert!(hazards > remedies);
    }

    #[test]
    fn test_doubles_appear_past_the_hard_tier() {
        let all = outcomes(1100, 500);
        assert!(all.iter().any(|o| matches!(o, SpawnOutcome::DoubleHazard)));
    }

    #[test]
    fn test_elevated_appear_past_the_elevated_tier() {
        let all = outcomes(1500, 500);
        assert!(all
            .iter()
            .any(|o| matches!(o, SpawnOutcome::Single { elevated: true, .. })));
    }

    #[test]
    fn test_gate_spawns_at_right_edge_and_resets_timer() {
        let mut state = GameState::new(3);
        state.start();
        state.spawn_timer = 200; // already past any threshold
        advance(&mut state);
        assert!(!state.items.is_empty());
        assert_eq!(state.spawn_timer, 0);
        assert_eq!(state.items[0].pos.x, state.field.width);
    }

    #[test]
    fn test_gate_holds_at_item_cap() {
        let mut state = GameState::new(3);
        state.start();
        let filler = Item {
            pos: Vec2::new(400.0, 400.0),
            size: Vec2::new(ITEM_WIDTH, ITEM_HEIGHT),
            kind: ItemKind::Remedy,
            elevated: false,
        };
        state.items = vec![filler; MAX_ITEMS];
        state.spawn_timer = 200;
        advance(&mut state);
        assert_eq!(state.items.len(), MAX_ITEMS);
        // Timer keeps accumulating while the cap blocks spawning
        assert_eq!(state.spawn_timer, 201);
    }
}
