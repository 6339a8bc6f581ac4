//! Score, level, speed, and the educational fact schedule
//!
//! Difficulty only ever tightens within a run: the scroll speed is
//! non-decreasing in score and the spawn gap is non-increasing, with a
//! floor that keeps the game playable.

use super::state::{GameEvent, GameState, NotificationKind, Phase};
use crate::tuning::Tuning;

/// How long a level-up toast stays up
pub const LEVEL_UP_DURATION_MS: u32 = 3_000;
/// How long a health-fact toast stays up
pub const FACT_DURATION_MS: u32 = 5_000;

/// A score-keyed educational message, fired at most once per run
#[derive(Debug, Clone, Copy)]
pub struct Fact {
    pub score: u64,
    pub text: &'static str,
}

/// Fixed ascending fact schedule
pub const HEALTH_FACTS: [Fact; 7] = [
    Fact {
        score: 200,
        text: "Did you know? Alcohol is a depressant that slows down the brain and body.",
    },
    Fact {
        score: 500,
        text: "Underage drinking can lead to poor decision-making and long-term health problems.",
    },
    Fact {
        score: 1000,
        text: "The brain is still developing during the teen years, and alcohol can harm this process.",
    },
    Fact {
        score: 1500,
        text: "Mixing alcohol with energy drinks is a dangerous combination.",
    },
    Fact {
        score: 2000,
        text: "It's okay to say 'no' to peer pressure. True friends will respect your decision.",
    },
    Fact {
        score: 2500,
        text: "Alcohol can impair coordination and judgment, increasing the risk of accidents and injuries.",
    },
    Fact {
        score: 3000,
        text: "Binge drinking can lead to alcohol poisoning, a serious and sometimes deadly condition.",
    },
];

/// Level derived from score: one level per `level_span` points
pub fn level_for(score: u64, tuning: &Tuning) -> u32 {
    (score / tuning.level_span) as u32 + 1
}

/// Scroll speed for a given score and level.
///
/// Base speed plus linear terms in level and score, with an extra
/// continuous climb once score passes the hard tier. Never decreases
/// within a run.
pub fn game_speed(score: u64, level: u32, tuning: &Tuning) -> f32 {
    let surge = score.saturating_sub(tuning.hard_tier) as f32 / tuning.surge_speed_divisor;
    tuning.base_speed
        + tuning.level_speed_bonus * (level - 1) as f32
        + score as f32 / tuning.score_speed_divisor
        + surge
}

/// Ticks between spawn attempts for a given score and level.
///
/// Two regimes, early and late; taking the smaller keeps the gap
/// non-increasing across the tier boundary. Floored at `min_spawn_gap`.
pub fn spawn_threshold(score: u64, level: u32, tuning: &Tuning) -> f32 {
    let early = tuning.base_spawn_gap
        - tuning.level_spawn_relief * level as f32
        - score as f32 / tuning.score_spawn_divisor;
    let gap = if score > tuning.hard_tier {
        let late =
            tuning.late_spawn_gap - (score - tuning.hard_tier) as f32 / tuning.late_spawn_divisor;
        early.min(late)
    } else {
        early
    };
    gap.max(tuning.min_spawn_gap)
}

/// Advance score-derived state by one Running tick
pub(crate) fn advance(state: &mut GameState, events: &mut Vec<GameEvent>) {
    debug_assert_eq!(state.phase, Phase::Running);

    state.score += 1;

    let level = level_for(state.score, &state.tuning);
    if level != state.level {
        state.level = level;
        events.push(GameEvent::Notification {
            kind: NotificationKind::LevelUp,
            text: format!("You reached Level {level}!"),
            duration_ms: LEVEL_UP_DURATION_MS,
        });
    }

    state.game_speed = game_speed(state.score, state.level, &state.tuning);

    for fact in &HEALTH_FACTS {
        if state.score >= fact.score && !state.fired_facts.contains(&fact.score) {
            state.fired_facts.insert(fact.score);
            events.push(GameEvent::Notification {
                kind: NotificationKind::Fact,
                text: fact.text.to_string(),
                duration_ms: FACT_DURATION_MS,
            });
        }
    }
}
