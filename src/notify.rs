//! Notification sink boundary
//!
//! The simulation never draws toasts; it emits `GameEvent::Notification`
//! values and the host forwards them to whatever presents notifications.
//! Fire-and-forget: no return value flows back into the simulation.

use crate::sim::{GameEvent, NotificationKind};

/// Something that can present a transient notification
pub trait NotificationSink {
    fn notify(&mut self, kind: NotificationKind, text: &str, duration_ms: u32);
}

/// A sink that writes notifications to the log (headless hosts)
#[derive(Debug, Default)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&mut self, kind: NotificationKind, text: &str, duration_ms: u32) {
        let title = match kind {
            NotificationKind::Fact => "Health Fact!",
            NotificationKind::LevelUp => "Level Up!",
        };
        log::info!("[{title}] {text} ({duration_ms}ms)");
    }
}

/// Forward the notification events of a tick to a sink
pub fn forward(events: &[GameEvent], sink: &mut impl NotificationSink) {
    for event in events {
        if let GameEvent::Notification {
            kind,
            text,
            duration_ms,
        } = event
        {
            sink.notify(*kind, text, *duration_ms);
        }
    }
}
