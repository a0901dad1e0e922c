//! Time-bounded cache for deck templates.
//!
//! The card catalog is static per deployment but reloadable, so callers
//! cache the assembled template lists with an explicit TTL instead of a
//! module-level singleton. The clock is injected so tests control expiry.

use parking_lot::Mutex;
use time::{Duration, OffsetDateTime};

use crate::catalog::DeckTemplates;

/// Source of "now" for cache expiry decisions.
pub trait Clock: Send + Sync {
    fn now(&self) -> OffsetDateTime;
}

/// Wall-clock implementation used outside tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

struct CacheSlot {
    built_at: OffsetDateTime,
    templates: DeckTemplates,
}

/// TTL cache over the deck template lists.
pub struct DeckTemplateCache<C: Clock = SystemClock> {
    ttl: Duration,
    clock: C,
    slot: Mutex<Option<CacheSlot>>,
}

impl DeckTemplateCache<SystemClock> {
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, SystemClock)
    }
}

impl<C: Clock> DeckTemplateCache<C> {
    pub fn with_clock(ttl: Duration, clock: C) -> Self {
        Self {
            ttl,
            clock,
            slot: Mutex::new(None),
        }
    }

    /// Return the cached templates, rebuilding via `build` once the TTL has
    /// elapsed (or on first use).
    pub fn get_or_build(&self, build: impl FnOnce() -> DeckTemplates) -> DeckTemplates {
        let now = self.clock.now();
        let mut slot = self.slot.lock();
        if let Some(cached) = slot.as_ref() {
            if now - cached.built_at < self.ttl {
                return cached.templates.clone();
            }
        }
        let templates = build();
        *slot = Some(CacheSlot {
            built_at: now,
            templates: templates.clone(),
        });
        templates
    }

    pub fn invalidate(&self) {
        *self.slot.lock() = None;
    }
}
