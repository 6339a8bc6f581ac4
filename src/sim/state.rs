//! Game state and core simulation types
//!
//! Everything a run consists of lives here; it is owned by a single
//! logical actor and mutated only inside `tick()` and the command
//! handlers below.

use std::collections::HashSet;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::snapshot::HudSnapshot;
use super::summary::SummarySlot;
use crate::consts::*;
use crate::tuning::Tuning;

/// Lifecycle phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No run active yet (initial state)
    Idle,
    /// Active gameplay
    Running,
    /// Run frozen; no physics, spawning, scoring, or collisions
    Paused,
    /// Run over; terminal display state until the next start
    Ended,
}

/// What touching an item does to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// Damages health on contact (a beer can)
    Hazard,
    /// Restores health on contact (a water bottle)
    Remedy,
}

/// Kinds of toast the notification sink can be asked to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    /// Score-threshold health fact
    Fact,
    /// Level transition
    LevelUp,
}

/// Events emitted by a tick for the host to act on
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Forward to the notification sink, fire-and-forget
    Notification {
        kind: NotificationKind,
        text: String,
        duration_ms: u32,
    },
    /// The run just ended. Carries the closing-message request: the host
    /// may call `resolve_summary` with this generation whenever (if ever)
    /// the generator responds.
    RunEnded {
        score: u64,
        health: i32,
        generation: u64,
        new_best: bool,
    },
}

/// The player figure. `x` is fixed; only `y` moves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Vertical velocity (positive = downward)
    pub dy: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub airborne: bool,
}

impl Player {
    /// A player standing on the ground line
    pub fn grounded(tuning: &Tuning, ground_top: f32) -> Self {
        Self {
            x: PLAYER_X,
            y: ground_top - PLAYER_HEIGHT,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            dy: 0.0,
            gravity: tuning.gravity,
            jump_impulse: tuning.jump_impulse,
            airborne: false,
        }
    }

    /// Advance vertical motion by one tick and clamp to the ground line.
    /// Landing zeroes `dy` and clears `airborne`.
    pub fn step(&mut self, ground_top: f32) {
        if self.airborne {
            self.dy += self.gravity;
            self.y += self.dy;
        }
        // Clamp unconditionally - also re-grounds after a field resize
        if self.y > ground_top - self.height {
            self.y = ground_top - self.height;
            self.dy = 0.0;
            self.airborne = false;
        }
    }

    /// Launch a jump. No-op while already airborne.
    pub fn jump(&mut self) {
        if !self.airborne {
            self.airborne = true;
            self.dy = self.jump_impulse;
        }
    }
}

/// A falling/ground item scrolling toward the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: ItemKind,
    /// Hazard variant flying at jump height
    pub elevated: bool,
}

impl Item {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// Dimensions of the play area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayField {
    pub width: f32,
    pub height: f32,
}

impl Default for PlayField {
    fn default() -> Self {
        Self {
            width: FIELD_MAX_WIDTH,
            height: FIELD_MAX_WIDTH / FIELD_ASPECT,
        }
    }
}

impl PlayField {
    /// Fit the field to a host surface.
    ///
    /// A zero-width surface (hidden container) falls back to the parent
    /// measurement, and a degenerate result falls back to the default
    /// field; the field is never non-positive.
    pub fn fit(container_width: f32, parent_width: f32, max_height: f32) -> Self {
        let mut width = container_width.min(FIELD_MAX_WIDTH);
        if width <= 0.0 {
            width = parent_width.min(FIELD_MAX_WIDTH);
        }
        let mut height = width / FIELD_ASPECT;
        if max_height > 0.0 && height > max_height {
            height = max_height;
            width = height * FIELD_ASPECT;
        }
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }
        Self { width, height }
    }

    /// Top of the ground strip - the line the player stands on
    pub fn ground_top(&self) -> f32 {
        self.height - GROUND_THICKNESS
    }
}

/// Complete game state for one client
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from, for reproducibility
    pub seed: u64,
    pub field: PlayField,
    pub phase: Phase,
    pub player: Player,
    /// Live items in spawn order (stable iteration for deterministic
    /// collision resolution)
    pub items: Vec<Item>,
    pub score: u64,
    pub health: i32,
    pub level: u32,
    /// Horizontal scroll speed, units per tick
    pub game_speed: f32,
    /// Ticks since the last spawn attempt
    pub spawn_timer: u32,
    /// Best score across runs (display value; persistence is the host's)
    pub best: u64,
    /// Run counter guarding stale closing-message results
    pub generation: u64,
    pub summary: SummarySlot,
    pub tuning: Tuning,
    /// Fact thresholds already fired this run
    pub(crate) fired_facts: HashSet<u64>,
    pub(crate) rng: Pcg32,
    pub(crate) last_hud: Option<HudSnapshot>,
}

impl GameState {
    /// Create a fresh state in the Idle phase
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a fresh state with a custom balance policy
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let field = PlayField::default();
        let player = Player::grounded(&tuning, field.ground_top());
        Self {
            seed,
            field,
            phase: Phase::Idle,
            player,
            items: Vec::new(),
            score: 0,
            health: MAX_HEALTH,
            level: 1,
            game_speed: tuning.base_speed,
            spawn_timer: 0,
            best: 0,
            generation: 0,
            summary: SummarySlot::default(),
            tuning,
            fired_facts: HashSet::new(),
            rng: Pcg32::seed_from_u64(seed),
            last_hud: None,
        }
    }

    /// Seed the best-score display value (read from storage at startup)
    pub fn set_best(&mut self, best: u64) {
        self.best = best;
    }

    /// Refit the play field to a resized host surface
    pub fn set_viewport(&mut self, container_width: f32, parent_width: f32, max_height: f32) {
        self.field = PlayField::fit(container_width, parent_width, max_height);
        if !self.player.airborne {
            self.player.y = self.field.ground_top() - self.player.height;
        }
    }

    /// Begin a run. Valid from Idle and Ended; ignored otherwise.
    pub fn start(&mut self) {
        if !matches!(self.phase, Phase::Idle | Phase::Ended) {
            return;
        }
        self.reset_run();
        self.phase = Phase::Running;
        log::info!("run {} started (seed {})", self.generation, self.seed);
    }

    /// Freeze the run. Valid only while Running.
    pub fn pause(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Paused;
        }
    }

    /// Unfreeze the run. Valid only while Paused.
    pub fn resume(&mut self) {
        if self.phase == Phase::Paused {
            self.phase = Phase::Running;
        }
    }

    /// End the run on request. Valid from Running and Paused.
    pub fn stop(&mut self) -> Option<GameEvent> {
        if matches!(self.phase, Phase::Running | Phase::Paused) {
            Some(self.finish_run())
        } else {
            None
        }
    }

    /// Jump command. Doubles as "begin game" while no run is active;
    /// ignored while airborne or Paused.
    pub fn jump(&mut self) {
        match self.phase {
            Phase::Idle | Phase::Ended => self.start(),
            Phase::Running => self.player.jump(),
            Phase::Paused => {}
        }
    }

    /// Reset all run state to initial values and open a new generation
    fn reset_run(&mut self) {
        self.generation += 1;
        self.score = 0;
        self.health = MAX_HEALTH;
        self.level = 1;
        self.game_speed = self.tuning.base_speed;
        self.spawn_timer = 0;
        self.items.clear();
        self.fired_facts.clear();
        self.summary = SummarySlot::default();
        self.player = Player::grounded(&self.tuning, self.field.ground_top());
    }

    /// Close out the run: enter Ended, settle the best score, and hand
    /// the host a closing-message request for this generation.
    pub(crate) fn finish_run(&mut self) -> GameEvent {
        self.phase = Phase::Ended;
        let new_best = self.score > self.best;
        if new_best {
            self.best = self.score;
        }
        self.summary.pending = true;
        log::info!(
            "run {} ended: score {}, health {}{}",
            self.generation,
            self.score,
            self.health,
            if new_best { " (new best)" } else { "" }
        );
        GameEvent::RunEnded {
            score: self.score,
            health: self.health,
            generation: self.generation,
            new_best,
        }
    }
}
