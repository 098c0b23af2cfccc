//! Feedback channel with self-expiring message slots.
//!
//! ## Design
//!
//! One slot per [`FeedbackKind`]. Notifying a slot:
//! 1. cancels the slot's pending expiry task (if any)
//! 2. bumps the slot generation and stores the new message
//! 3. spawns an expiry task that sleeps for the TTL, then clears the slot
//!    only if its generation is still current
//!
//! The generation check covers the window where an old task has already
//! woken up but not yet taken the lock, so a replaced message is never
//! cleared early. Current state is published on a `watch` channel so a
//! front-end can redraw when a message expires.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, Mutex};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// How long a message stays visible
pub const DEFAULT_FEEDBACK_TTL: Duration = Duration::from_millis(2500);

/// Kind of feedback message; each kind has its own slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackKind {
    Success,
    Error,
}

impl FeedbackKind {
    fn index(self) -> usize {
        match self {
            Self::Success => 0,
            Self::Error => 1,
        }
    }
}

/// Messages currently visible
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feedback {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl Feedback {
    pub fn get(&self, kind: FeedbackKind) -> Option<&str> {
        match kind {
            FeedbackKind::Success => self.success.as_deref(),
            FeedbackKind::Error => self.error.as_deref(),
        }
    }

    fn slot_mut(&mut self, kind: FeedbackKind) -> &mut Option<String> {
        match kind {
            FeedbackKind::Success => &mut self.success,
            FeedbackKind::Error => &mut self.error,
        }
    }
}

#[derive(Default)]
struct SlotTimer {
    generation: u64,
    cancel: Option<CancellationToken>,
}

struct Inner {
    state: watch::Sender<Feedback>,
    timers: Mutex<[SlotTimer; 2]>,
    shutdown: CancellationToken,
}

impl Inner {
    async fn expire(&self, kind: FeedbackKind, generation: u64) {
        let mut timers = self.timers.lock().await;
        let slot = &mut timers[kind.index()];
        if slot.generation != generation {
            return;
        }
        slot.cancel = None;
        self.state.send_modify(|f| *f.slot_mut(kind) = None);
        debug!(kind = ?kind, "Feedback expired");
    }
}

/// Owner of the two feedback slots.
///
/// Must be used inside a tokio runtime. Dropping the channel cancels every
/// pending expiry task.
pub struct FeedbackChannel {
    inner: Arc<Inner>,
    ttl: Duration,
}

impl FeedbackChannel {
    pub fn new(ttl: Duration) -> Self {
        let (state, _) = watch::channel(Feedback::default());
        Self {
            inner: Arc::new(Inner {
                state,
                timers: Mutex::new(Default::default()),
                shutdown: CancellationToken::new(),
            }),
            ttl,
        }
    }

    pub async fn notify_success(&self, text: impl Into<String>) {
        self.notify(FeedbackKind::Success, text.into()).await;
    }

    pub async fn notify_error(&self, text: impl Into<String>) {
        self.notify(FeedbackKind::Error, text.into()).await;
    }

    /// Show `text` in the `kind` slot, replacing any pending message of that kind
    pub async fn notify(&self, kind: FeedbackKind, text: String) {
        let mut timers = self.inner.timers.lock().await;
        let slot = &mut timers[kind.index()];
        if let Some(previous) = slot.cancel.take() {
            previous.cancel();
        }
        slot.generation += 1;
        let generation = slot.generation;
        let token = self.inner.shutdown.child_token();
        slot.cancel = Some(token.clone());

        debug!(kind = ?kind, message = %text, "Feedback shown");
        self.inner.state.send_modify(|f| *f.slot_mut(kind) = Some(text));

        let inner = Arc::clone(&self.inner);
        let ttl = self.ttl;
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(ttl) => inner.expire(kind, generation).await,
            }
        });
    }

    /// Messages visible right now
    pub fn current(&self) -> Feedback {
        self.inner.state.borrow().clone()
    }

    /// Subscribe to feedback changes, including expiries
    pub fn subscribe(&self) -> watch::Receiver<Feedback> {
        self.inner.state.subscribe()
    }
}

impl Default for FeedbackChannel {
    fn default() -> Self {
        Self::new(DEFAULT_FEEDBACK_TTL)
    }
}

impl Drop for FeedbackChannel {
    fn drop(&mut self) {
        self.inner.shutdown.cancel();
    }
}
