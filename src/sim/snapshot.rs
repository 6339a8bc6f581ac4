//! Presentation projections of the authoritative state
//!
//! Drawing is a pure external projection: after each tick the host reads
//! a `Snapshot` for the canvas and, separately, a `HudSnapshot` that is
//! handed out only when its values actually changed, so the UI update
//! rate is decoupled from the simulation tick rate.

use serde::Serialize;

use super::state::{GameState, ItemKind, Phase};

/// Screen-space rectangle, position = top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RectView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// One drawable item
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ItemView {
    pub rect: RectView,
    pub kind: ItemKind,
    pub elevated: bool,
}

/// The slow-moving values the HUD displays
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HudSnapshot {
    pub score: u64,
    pub health: i32,
    pub level: u32,
    pub best: u64,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub field_width: f32,
    pub field_height: f32,
    /// Top of the ground strip
    pub ground_top: f32,
    pub player: RectView,
    pub items: Vec<ItemView>,
    pub hud: HudSnapshot,
}

impl GameState {
    /// Current HUD values
    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            score: self.score,
            health: self.health,
            level: self.level,
            best: self.best,
        }
    }

    /// The HUD, but only when something changed since the last call
    pub fn take_hud_delta(&mut self) -> Option<HudSnapshot> {
        let hud = self.hud();
        if self.last_hud == Some(hud) {
            return None;
        }
        self.last_hud = Some(hud);
        Some(hud)
    }

    /// Full frame projection for the render surface
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            field_width: self.field.width,
            field_height: self.field.height,
            ground_top: self.field.ground_top(),
            player: RectView {
                x: self.player.x,
                y: self.player.y,
                width: self.player.width,
                height: self.player.height,
            },
            items: self
                .items
                .iter()
                .map(|item| ItemView {
                    rect: RectView {
                        x: item.pos.x,
                        y: item.pos.y,
                        width: item.size.x,
                        height: item.size.y,
                    },
                    kind: item.kind,
                    elevated: item.elevated,
                })
                .collect(),
            hud: self.hud(),
        }
    }
}
