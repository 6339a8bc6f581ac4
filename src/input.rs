//! Command mapping and touch-gesture classification
//!
//! The game understands three discrete commands. Keyboard and pointer
//! hosts map presses straight to `Command`; touch hosts feed raw touch
//! positions through a `SwipeTracker`, which classifies an upward swipe
//! (or a plain tap) as a jump.

use crate::consts::MIN_SWIPE_DISTANCE;
use crate::sim::TickInput;

/// A discrete player command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Jump,
    TogglePause,
    Stop,
}

impl Command {
    /// Set the matching one-shot flag on this tick's input
    pub fn apply(self, input: &mut TickInput) {
        match self {
            Command::Jump => input.jump = true,
            Command::TogglePause => input.pause = true,
            Command::Stop => input.stop = true,
        }
    }
}

/// Classifies a touch gesture from its vertical travel.
///
/// A gesture whose start-to-end travel moves upward by more than the
/// minimum distance is a swipe-up; a touch that never reports movement is
/// a tap. Both mean "jump". A measurable but too-short or downward swipe
/// means nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start_y: Option<f32>,
    last_y: Option<f32>,
}

impl SwipeTracker {
    /// Gesture began at the given vertical position
    pub fn touch_start(&mut self, y: f32) {
        self.start_y = Some(y);
        self.last_y = None;
    }

    /// Gesture moved to the given vertical position
    pub fn touch_move(&mut self, y: f32) {
        self.last_y = Some(y);
    }

    /// Gesture ended. Returns the command it classified as, if any.
    pub fn touch_end(&mut self) -> Option<Command> {
        let result = match (self.start_y, self.last_y) {
            // No measurable travel: a tap
            (None, _) | (_, None) => Some(Command::Jump),
            (Some(start), Some(end)) => {
                // Screen y grows downward, so upward travel is start - end
                if start - end > MIN_SWIPE_DISTANCE {
                    Some(Command::Jump)
                } else {
                    None
                }
            }
        };
        self.start_y = None;
        self.last_y = None;
        result
    }
}
