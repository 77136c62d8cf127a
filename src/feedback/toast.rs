// Transient, non-blocking user notifications.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

pub const SUCCESS_DURATION_MS: u64 = 3000;
pub const ERROR_DURATION_MS: u64 = 4500;
pub const INFO_DURATION_MS: u64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub duration_ms: u64,
}

/// Queue of pending toasts. Messages are trimmed and empty ones dropped;
/// auto-dismissal after `duration_ms` is the rendering layer's concern.
#[derive(Debug, Default)]
pub struct ToastService {
    toasts: Mutex<Vec<Toast>>,
    next_id: AtomicU64,
}

impl ToastService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&self, message: &str) {
        self.push(ToastKind::Success, message, SUCCESS_DURATION_MS);
    }

    pub fn error(&self, message: &str) {
        self.push(ToastKind::Error, message, ERROR_DURATION_MS);
    }

    pub fn info(&self, message: &str) {
        self.push(ToastKind::Info, message, INFO_DURATION_MS);
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .retain(|toast| toast.id != id);
    }

    /// Snapshot of pending toasts, in emission order.
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Take all pending toasts, leaving the queue empty.
    pub fn drain(&self) -> Vec<Toast> {
        std::mem::take(
            &mut *self
                .toasts
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner()),
        )
    }

    fn push(&self, kind: ToastKind, message: &str, duration_ms: u64) {
        let message = message.trim();
        if message.is_empty() {
            return;
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.toasts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(Toast {
                id,
                kind,
                message: message.to_string(),
                duration_ms,
            });
    }
}
