use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use codee::string::FromToStringCodec;
use consts::TIER_STORE;
use leptos::prelude::*;
use leptos_use::storage::use_local_storage;
use utils::matches::Tier;

/// Where the selected tier filter survives between page views
pub trait TierStore: Send + Sync {
    /// Stored tier, [`Tier::Top`] when nothing usable is stored
    fn load(&self) -> Tier;
    fn save(&self, tier: Tier);
}

/// Browser local storage, key `"tier"`, values `"1"` / `"all"`
#[derive(Clone, Copy)]
pub struct LocalTierStore {
    stored: Signal<Tier>,
    set_stored: WriteSignal<Tier>,
}

impl Default for LocalTierStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalTierStore {
    /// Has to run inside a reactive owner, storage is only touched in the browser
    pub fn new() -> Self {
        let (stored, set_stored, _) = use_local_storage::<Tier, FromToStringCodec>(TIER_STORE);
        Self { stored, set_stored }
    }
}

impl TierStore for LocalTierStore {
    fn load(&self) -> Tier {
        self.stored.get_untracked()
    }

    fn save(&self, tier: Tier) {
        self.set_stored.set(tier);
    }
}

#[derive(Default)]
pub struct MemoryTierStore {
    stored: Mutex<Option<Tier>>,
    writes: AtomicUsize,
}

impl MemoryTierStore {
    pub fn with_tier(tier: Tier) -> Self {
        Self {
            stored: Mutex::new(Some(tier)),
            writes: AtomicUsize::new(0),
        }
    }

    pub fn stored(&self) -> Option<Tier> {
        *self.stored.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::Relaxed)
    }
}

impl TierStore for MemoryTierStore {
    fn load(&self) -> Tier {
        self.stored().unwrap_or_default()
    }

    fn save(&self, tier: Tier) {
        *self.stored.lock().unwrap_or_else(PoisonError::into_inner) = Some(tier);
        self.writes.fetch_add(1, Ordering::Relaxed);
    }
}

/// Handle to the tier store a list view reads from and writes to
#[derive(Clone)]
pub struct TierPreference(Arc<dyn TierStore>);

impl TierPreference {
    pub fn new(store: impl TierStore + 'static) -> Self {
        Self(Arc::new(store))
    }

    pub fn load(&self) -> Tier {
        self.0.load()
    }

    pub fn save(&self, tier: Tier) {
        log::debug!("persisting tier preference {tier}");
        self.0.save(tier);
    }
}

impl<S: TierStore + 'static> From<Arc<S>> for TierPreference {
    fn from(store: Arc<S>) -> Self {
        Self(store)
    }
}
