//! Health Dash - an endless-runner mini-game about healthy choices
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, lifecycle)
//! - `input`: Command mapping and touch-gesture classification
//! - `bestscore`: Persisted best score
//! - `notify`: Notification sink boundary
//! - `tuning`: Data-driven game balance

pub mod bestscore;
pub mod input;
pub mod notify;
pub mod sim;
pub mod tuning;

pub use bestscore::BestScore;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Widest the play field ever gets
    pub const FIELD_MAX_WIDTH: f32 = 1024.0;
    /// Play field aspect ratio (width / height)
    pub const FIELD_ASPECT: f32 = 16.0 / 9.0;
    /// Ground strip thickness along the bottom of the field
    pub const GROUND_THICKNESS: f32 = 10.0;

    /// Player defaults - x is fixed, only y moves
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 70.0;
    /// Horizontal inset of the collision hitbox from each sprite edge
    pub const HITBOX_INSET: f32 = 10.0;

    /// Item dimensions (cans and bottles share a sprite box)
    pub const ITEM_WIDTH: f32 = 25.0;
    pub const ITEM_HEIGHT: f32 = 40.0;
    /// Height above the ground line at which elevated hazards fly
    pub const ELEVATED_OFFSET: f32 = 60.0;
    /// Gap between the two hazards of a double spawn
    pub const DOUBLE_GAP: f32 = 10.0;

    /// Health bounds
    pub const MAX_HEALTH: i32 = 100;

    /// Live item cap
    pub const MAX_ITEMS: usize = 10;

    /// Minimum vertical travel for a touch gesture to count as a swipe-up
    pub const MIN_SWIPE_DISTANCE: f32 = 50.0;
}
