//! The logging collaborator `HeroService` reports outcomes to.
//!
//! `MessageLog::add` is fire-and-forget: it cannot fail and returns nothing.
//! `MessageService` keeps messages in memory so a UI (or a test) can display
//! them; `TracingLog` forwards them to `tracing` instead.

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Receives human-readable status messages.
pub trait MessageLog: Send + Sync {
    fn add(&self, message: &str);
}

/// In-memory message list shared between the service and whoever displays it.
#[derive(Debug, Default)]
pub struct MessageService {
    messages: Mutex<Vec<String>>,
}

impl MessageService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every message added since the last `clear`, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic while holding the lock cannot leave a Vec<String> half-written.
    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl MessageLog for MessageService {
    fn add(&self, message: &str) {
        self.lock().push(message.to_string());
    }
}

/// Emits every message as a `tracing` info event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl MessageLog for TracingLog {
    fn add(&self, message: &str) {
        tracing::info!(target: "hero_core::messages", "{message}");
    }
}
