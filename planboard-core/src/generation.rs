//! Refresh generation counting.
//!
//! Every refresh cycle takes a token at start and re-checks it after each
//! await. A token that is no longer current means a newer cycle has begun
//! and this one must discard its results without touching the store.

use std::sync::atomic::{AtomicU64, Ordering};

/// Token identifying one refresh cycle. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// Monotonic cycle counter: last invocation wins.
#[derive(Debug, Default)]
pub struct GenerationGuard {
    counter: AtomicU64,
}

impl GenerationGuard {
    pub fn new() -> Self {
        GenerationGuard::default()
    }

    /// Advance the counter and return the new generation. Synchronous, so
    /// the caller holds the newest token before its first await.
    pub fn begin(&self) -> Generation {
        Generation(self.counter.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `token` still belongs to the newest invocation.
    pub fn is_current(&self, token: Generation) -> bool {
        self.counter.load(Ordering::SeqCst) == token.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_increase_and_never_repeat() {
        let guard = GenerationGuard::new();
        let a = guard.begin();
        let b = guard.begin();
        let c = guard.begin();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn test_only_newest_token_is_current() {
        let guard = GenerationGuard::new();
        let a = guard.begin();
        assert!(guard.is_current(a));

        let b = guard.begin();
        assert!(!guard.is_current(a));
        assert!(guard.is_current(b));
    }

    #[test]
    fn test_old_token_stays_stale_forever() {
        let guard = GenerationGuard::new();
        let a = guard.begin();
        let _b = guard.begin();
        let _c = guard.begin();
        assert!(!guard.is_current(a));
    }
}
