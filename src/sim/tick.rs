//! Fixed-step simulation tick
//!
//! The host's frame scheduler calls `tick()` once per frame with the
//! tick's one-shot commands. One tick = one fixed nominal step; there is
//! no delta-time. Order within a Running tick: commands, player motion,
//! spawning, item motion and cull, collisions, then score/progression.

use super::collision::player_hitbox;
use super::progression;
use super::spawn;
use super::state::{GameEvent, GameState, ItemKind, Phase};
use crate::consts::MAX_HEALTH;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump (or begin a game while none is active)
    pub jump: bool,
    /// Toggle pause
    pub pause: bool,
    /// End the run
    pub stop: bool,
    /// Demo mode - the built-in pilot plays
    pub auto_play: bool,
}

/// How many ticks of item travel ahead the demo pilot scans for hazards
const PILOT_LEAD_TICKS: f32 = 14.0;

/// Advance the game by one tick. Returns the events the host should act
/// on (notifications to forward, the run-ended summary request).
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let mut input = input.clone();

    if input.auto_play && state.phase == Phase::Running {
        drive_pilot(state, &mut input);
    }

    if input.stop {
        if let Some(event) = state.stop() {
            events.push(event);
            return events;
        }
    }

    if input.pause {
        match state.phase {
            Phase::Running => {
                state.pause();
                return events;
            }
            Phase::Paused => state.resume(),
            _ => {}
        }
    }

    if input.jump {
        state.jump();
    }

    // Idle, Paused, and Ended ticks change nothing
    if state.phase != Phase::Running {
        return events;
    }

    state.player.step(state.field.ground_top());

    spawn::advance(state);

    let speed = state.game_speed;
    for item in &mut state.items {
        item.pos.x -= speed;
    }
    state.items.retain(|item| item.pos.x + item.size.x >= 0.0);

    if resolve_collisions(state, &mut events) {
        // Health hit zero - the run is already over, within this tick
        return events;
    }

    progression::advance(state, &mut events);

    events
}

/// Consume overlapping items in spawn order, applying exactly one health
/// delta per item. Returns true when the run ended.
fn resolve_collisions(state: &mut GameState, events: &mut Vec<GameEvent>) -> bool {
    let hitbox = player_hitbox(&state.player);
    let mut i = 0;
    while i < state.items.len() {
        if hitbox.overlaps(&state.items[i].aabb()) {
            let item = state.items.remove(i);
            let delta = match item.kind {
                ItemKind::Hazard => -state.tuning.hazard_damage,
                ItemKind::Remedy => state.tuning.remedy_heal,
            };
            state.health = (state.health + delta).clamp(0, MAX_HEALTH);
            log::debug!("consumed {:?}, health now {}", item.kind, state.health);
            if state.health == 0 {
                events.push(state.finish_run());
                return true;
            }
        } else {
            i += 1;
        }
    }
    false
}

/// Demo pilot: jump whenever a hazard would reach the player soon.
/// Elevated hazards fly at standing height, so the same rule clears them.
fn drive_pilot(state: &GameState, input: &mut TickInput) {
    if state.player.airborne {
        return;
    }
    let front = state.player.x + state.player.width;
    let reach = state.game_speed * PILOT_LEAD_TICKS;
    let threat = state.items.iter().any(|item| {
        item.kind == ItemKind::Hazard
            && item.pos.x + item.size.x > state.player.x
            && item.pos.x - front < reach
    });
    if threat {
        input.jump = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::Item;
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn running_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        state.start();
        state
    }

    /// A balance where hazards do no damage, for long scripted runs
    fn harmless() -> Tuning {
        Tuning {
            hazard_damage: 0,
            ..Tuning::default()
        }
    }

    fn ground_item(state: &GameState, x: f32, kind: ItemKind) -> Item {
        Item {
            pos: Vec2::new(x, state.field.ground_top() - ITEM_HEIGHT),
            size: Vec2::new(ITEM_WIDTH, ITEM_HEIGHT),
            kind,
            elevated: false,
        }
    }

    #[test]
    fn test_idle_tick_is_a_no_op() {
        let mut state = GameState::new(1);
        let events = tick(&mut state, &TickInput::default());
        assert!(events.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, Phase::Idle);
    }

    #[test]
    fn test_score_advances_one_per_running_tick() {
        let mut state = running_state(1);
        for expected in 1..=25 {
            tick(&mut state, &TickInput::default());
            assert_eq!(state.score, expected);
        }
    }

    #[test]
    fn test_paused_ticks_change_nothing() {
        let mut state = running_state(1);
        for _ in 0..40 {
            tick(&mut state, &TickInput::default());
        }
        state.items.push(ground_item(&state, 700.0, ItemKind::Hazard));

        tick(&mut state, &TickInput { pause: true, ..Default::default() });
        assert_eq!(state.phase, Phase::Paused);

        let score = state.score;
        let health = state.health;
        let player_y = state.player.y;
        let item_xs: Vec<f32> = state.items.iter().map(|i| i.pos.x).collect();
        for _ in 0..50 {
            let events = tick(&mut state, &TickInput::default());
            assert!(events.is_empty());
        }
        assert_eq!(state.score, score);
        assert_eq!(state.health, health);
        assert_eq!(state.player.y, player_y);
        let after: Vec<f32> = state.items.iter().map(|i| i.pos.x).collect();
        assert_eq!(item_xs, after);
    }

    #[test]
    fn test_pause_toggle_resumes() {
        let mut state = running_state(1);
        let toggle = TickInput { pause: true, ..Default::default() };
        tick(&mut state, &toggle);
        assert_eq!(state.phase, Phase::Paused);
        tick(&mut state, &toggle);
        assert_eq!(state.phase, Phase::Running);
    }

    #[test]
    fn test_stop_command_ends_the_run() {
        let mut state = running_state(1);
        let events = tick(&mut state, &TickInput { stop: true, ..Default::default() });
        assert_eq!(state.phase, Phase::Ended);
        assert!(matches!(events[0], GameEvent::RunEnded { .. }));

        // Further ticks change nothing
        let score = state.score;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.score, score);
    }

    #[test]
    fn test_hazard_applies_one_delta_and_is_removed() {
        let mut state = running_state(1);
        state.items.push(ground_item(&state, 80.0, ItemKind::Hazard));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.health, MAX_HEALTH - state.tuning.hazard_damage);
        assert!(state.items.is_empty());

        // No lingering item, no second delta
        tick(&mut state, &TickInput::default());
        assert_eq!(state.health, MAX_HEALTH - state.tuning.hazard_damage);
    }

    #[test]
    fn test_remedy_heal_clamps_at_max() {
        let mut state = running_state(1);
        state.items.push(ground_item(&state, 80.0, ItemKind::Remedy));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.health, MAX_HEALTH);

        state.health = 90;
        state.items.push(ground_item(&state, 80.0, ItemKind::Remedy));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.health, MAX_HEALTH);
    }

    #[test]
    fn test_lethal_hazard_ends_the_run_same_tick() {
        let mut state = running_state(1);
        state.set_best(150);
        state.score = 209;
        state.health = 34;
        // A remedy queued behind the hazard must not rescue a dead run
        state.items.push(ground_item(&state, 80.0, ItemKind::Hazard));
        state.items.push(ground_item(&state, 82.0, ItemKind::Remedy));

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(state.health, 0);
        assert_eq!(state.phase, Phase::Ended);
        // Death tick ends the run before the score increment
        assert_eq!(state.score, 209);
        assert_eq!(state.best, 209);
        assert_eq!(state.items.len(), 1);
        assert!(matches!(
            events[0],
            GameEvent::RunEnded { score: 209, health: 0, new_best: true, .. }
        ));
    }

    #[test]
    fn test_items_culled_past_left_boundary_without_skips() {
        let mut state = running_state(1);
        state.items.push(ground_item(&state, -30.0, ItemKind::Hazard));
        state.items.push(ground_item(&state, -28.0, ItemKind::Hazard));
        state.items.push(ground_item(&state, 700.0, ItemKind::Remedy));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].kind, ItemKind::Remedy);
    }

    #[test]
    fn test_jump_only_while_running_and_grounded() {
        let mut state = running_state(1);
        tick(&mut state, &TickInput { jump: true, ..Default::default() });
        assert!(state.player.airborne);

        // Airborne jump ignored
        let dy = state.player.dy;
        tick(&mut state, &TickInput { jump: true, ..Default::default() });
        assert!(state.player.dy >= dy); // gravity only, no re-impulse

        // Paused jump ignored
        let mut state = running_state(2);
        tick(&mut state, &TickInput { pause: true, ..Default::default() });
        tick(&mut state, &TickInput { jump: true, ..Default::default() });
        assert!(!state.player.airborne);
        assert_eq!(state.phase, Phase::Paused);
    }

    #[test]
    fn test_level_up_fires_exactly_once_per_transition() {
        let mut state = GameState::with_tuning(1, harmless());
        state.start();
        let mut level_ups = 0;
        for _ in 0..1_050 {
            for event in tick(&mut state, &TickInput::default()) {
                if let GameEvent::Notification { kind: super::super::state::NotificationKind::LevelUp, ref text, .. } = event {
                    level_ups += 1;
                    assert_eq!(text, &format!("You reached Level {}!", state.level));
                }
            }
        }
        assert_eq!(state.level, 3);
        assert_eq!(level_ups, 2);
    }

    #[test]
    fn test_fact_200_fires_once_with_fixed_text() {
        let mut state = GameState::with_tuning(1, harmless());
        state.start();
        let mut fired = Vec::new();
        for _ in 0..450 {
            for event in tick(&mut state, &TickInput::default()) {
                if let GameEvent::Notification {
                    kind: super::super::state::NotificationKind::Fact,
                    text,
                    duration_ms,
                } = event
                {
                    assert_eq!(duration_ms, progression::FACT_DURATION_MS);
                    fired.push(text);
                }
            }
        }
        assert_eq!(
            fired,
            vec![
                "Did you know? Alcohol is a depressant that slows down the brain and body."
                    .to_string()
            ]
        );
    }

    #[test]
    fn test_game_speed_never_decreases_within_a_run() {
        let mut state = GameState::with_tuning(5, harmless());
        state.start();
        let mut last = state.game_speed;
        for _ in 0..2_000 {
            tick(&mut state, &TickInput::default());
            assert!(state.game_speed >= last);
            last = state.game_speed;
        }
    }

    #[test]
    fn test_pilot_jumps_over_an_approaching_hazard() {
        let mut state = running_state(1);
        let front = state.player.x + state.player.width + 20.0;
        state.items.push(ground_item(&state, front, ItemKind::Hazard));
        tick(&mut state, &TickInput { auto_play: true, ..Default::default() });
        assert!(state.player.airborne);
    }

    #[test]
    fn test_pilot_stays_grounded_for_remedies() {
        let mut state = running_state(1);
        let front = state.player.x + state.player.width + 20.0;
        state.items.push(ground_item(&state, front, ItemKind::Remedy));
        tick(&mut state, &TickInput { auto_play: true, ..Default::default() });
        assert!(!state.player.airborne);
    }

    #[test]
    fn test_pilot_survives_a_long_run() {
        let mut state = running_state(99);
        let input = TickInput { auto_play: true, ..Default::default() };
        for _ in 0..3_000 {
            tick(&mut state, &input);
            if state.phase == Phase::Ended {
                break;
            }
        }
        // The pilot clears the early game comfortably
        assert!(state.score > 500, "pilot died at score {}", state.score);
    }
}
