use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Generation of a single card click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefetchToken(u64);

/// Hands out tokens; a newer token invalidates every older one.
///
/// Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct PrefetchGuard {
    generation: Arc<AtomicU64>,
}

impl PrefetchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> PrefetchToken {
        PrefetchToken(self.generation.fetch_add(1, Ordering::Relaxed) + 1)
    }

    pub fn is_current(&self, token: PrefetchToken) -> bool {
        self.generation.load(Ordering::Relaxed) == token.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_token_invalidates_older() {
        let guard = PrefetchGuard::new();
        let first = guard.begin();
        assert!(guard.is_current(first));

        let second = guard.begin();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }

    #[test]
    fn test_clones_share_generation() {
        let guard = PrefetchGuard::new();
        let handle = guard.clone();
        let token = guard.begin();
        handle.begin();
        assert!(!guard.is_current(token));
    }
}
