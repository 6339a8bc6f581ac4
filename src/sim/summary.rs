//! End-of-run closing message boundary
//!
//! The generator is an external, fallible, possibly slow service. The
//! simulation only hands out a request (via `GameEvent::RunEnded`) and
//! accepts the eventual result here; a generation check discards results
//! that arrive after the player has already started a new run.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use thiserror::Error;

use super::state::GameState;

/// Shown when the generator fails or times out
pub const FALLBACK_SUMMARY: &str = "Remember to always make healthy choices.";

/// Why a closing message could not be generated
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("summary service unavailable: {0}")]
    Unavailable(String),
    #[error("summary request timed out")]
    TimedOut,
}

/// External closing-message service
pub trait SummaryGenerator {
    /// Produce a human-readable closing message for a finished run
    fn summarize(&mut self, score: u64, health: i32) -> Result<String, SummaryError>;
}

/// The built-in pool of closing messages, drawn from when no remote
/// generator is wired up
pub const CLOSING_MESSAGES: &[&str] = &[
    // Brain Development
    "The brain continues to develop until the mid-20s.",
    "Alcohol can impair memory, attention, decision-making, and learning.",
    "Long-term drinking in adolescence is linked to reduced cognitive performance and brain changes.",
    // Mental Health
    "Alcohol increases the risk of depression, anxiety, and suicidal behavior.",
    "Alcohol can worsen underlying mental health disorders and affect emotional regulation.",
    // Addiction Risk
    "Starting young increases the chance of developing alcohol dependence later in life.",
    "Drinking before age 15 makes you 4-5x more likely to develop alcohol abuse or dependence.",
    // Risky Behavior
    "Alcohol use increases the risk of unsafe sex, driving under the influence, or violent behavior.",
    "Alcohol impairs judgment and increases impulsivity.",
    // Academic and Social Problems
    "Underage drinking can lead to poor academic performance.",
    "Alcohol increases truancy, disciplinary issues, and family conflicts.",
    // Physical Health
    "Alcohol use increases the risk of liver damage, hormonal imbalances, and delayed puberty.",
    "Alcohol poisoning is a serious, sometimes fatal, risk - especially with binge drinking.",
    // Healthy Alternatives
    "Host alcohol-free game nights, sports competitions, or movie marathons with friends.",
    "Join school clubs, community groups, or volunteer organizations.",
    "Try music, art, photography, writing, or filmmaking to channel creativity.",
    "Sports, martial arts, dance, or gym workouts help reduce stress and boost mental health.",
    "Physical activity builds confidence and a sense of purpose.",
    "Meditation, journaling, or yoga can reduce anxiety and improve emotional well-being.",
    "Alcohol-free drinks like fruit-infused sparkling water, herbal teas, or mocktails are fun substitutes.",
    // Talk & Support
    "Peer pressure is real - learn assertiveness skills to say no confidently.",
    "Talk to a trusted adult, counselor, or friend if you're feeling overwhelmed or pressured to drink.",
    "If alcohol use has started, early intervention can prevent long-term damage.",
];

/// A `SummaryGenerator` that draws uniformly from the built-in pool
#[derive(Debug, Clone)]
pub struct MessagePool {
    rng: Pcg32,
}

impl MessagePool {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl SummaryGenerator for MessagePool {
    fn summarize(&mut self, _score: u64, _health: i32) -> Result<String, SummaryError> {
        let idx = self.rng.random_range(0..CLOSING_MESSAGES.len());
        Ok(CLOSING_MESSAGES[idx].to_string())
    }
}

/// Where the closing message for the current run lives
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummarySlot {
    /// A request is outstanding (UI may show a "thinking" state)
    pub pending: bool,
    /// Message to display in the Ended state
    pub message: Option<String>,
}

impl GameState {
    /// Apply a closing-message result for the run identified by
    /// `generation`. Results from older runs are discarded; failures fall
    /// back to the fixed message. Never touches simulation state.
    pub fn resolve_summary(&mut self, generation: u64, result: Result<String, SummaryError>) {
        if generation != self.generation {
            log::debug!(
                "discarding closing message for run {generation} (current run {})",
                self.generation
            );
            return;
        }
        self.summary.pending = false;
        self.summary.message = Some(match result {
            Ok(message) => message,
            Err(err) => {
                log::warn!("closing message failed: {err}");
                FALLBACK_SUMMARY.to_string()
            }
        });
    }

    /// Closing message for display in the Ended state, if resolved
    pub fn closing_message(&self) -> Option<&str> {
        self.summary.message.as_deref()
    }
}
