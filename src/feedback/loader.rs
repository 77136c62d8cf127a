// Shared in-flight request counter behind the global loading indicator.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Counts requests currently in flight. `is_loading` is true while the count
/// is above zero. The release side is floored at zero so an unmatched release
/// can never underflow the counter.
#[derive(Debug, Default)]
pub struct LoaderService {
    active: AtomicUsize,
}

impl LoaderService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_started(&self) {
        self.active.fetch_add(1, Ordering::SeqCst);
    }

    pub fn request_ended(&self) {
        let _ = self
            .active
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |count| {
                count.checked_sub(1)
            });
    }

    pub fn active_requests(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }

    pub fn is_loading(&self) -> bool {
        self.active_requests() > 0
    }

    /// Scoped acquisition: increments now, decrements exactly once when the
    /// guard drops, on every exit path.
    pub fn track(self: &Arc<Self>) -> LoaderGuard {
        self.request_started();
        LoaderGuard {
            loader: Arc::clone(self),
        }
    }
}

#[must_use = "dropping the guard releases the in-flight slot"]
pub struct LoaderGuard {
    loader: Arc<LoaderService>,
}

impl Drop for LoaderGuard {
    fn drop(&mut self) {
        self.loader.request_ended();
    }
}
