//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed nominal step per tick, no delta-time
//! - Seeded RNG only
//! - Stable item iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod progression;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod summary;
pub mod tick;

pub use collision::{Aabb, player_hitbox};
pub use progression::{Fact, HEALTH_FACTS, game_speed, level_for, spawn_threshold};
pub use snapshot::{HudSnapshot, ItemView, RectView, Snapshot};
pub use spawn::{SpawnOutcome, decide_spawn};
pub use state::{
    GameEvent, GameState, Item, ItemKind, NotificationKind, Phase, PlayField, Player,
};
pub use summary::{
    CLOSING_MESSAGES, FALLBACK_SUMMARY, MessagePool, SummaryError, SummaryGenerator, SummarySlot,
};
pub use tick::{TickInput, tick};
