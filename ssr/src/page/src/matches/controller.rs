use std::future::Future;
use std::sync::Arc;

use consts::MATCHES_PAGE_LIMIT;
use leptos::prelude::*;
use state::tier_pref::TierPreference;
use utils::matches::{MatchQuery, MatchesSource, Tier};
use utils::request::{Aborted, LatestRequest};

use super::view_state::MatchesView;

/// State behind one match list: the tier filter, what is on screen, and the
/// request currently feeding it.
#[derive(Clone)]
pub struct MatchesController {
    endpoint: Arc<str>,
    prefs: TierPreference,
    tier: RwSignal<Tier>,
    view: RwSignal<MatchesView>,
    requests: LatestRequest,
}

impl MatchesController {
    /// Starts on the default tier, the same one the server renders with.
    /// Call [`Self::restore_tier`] once mounted to pick up the stored choice.
    pub fn new(endpoint: impl Into<Arc<str>>, prefs: TierPreference) -> Self {
        Self {
            endpoint: endpoint.into(),
            prefs,
            tier: RwSignal::new(Tier::default()),
            view: RwSignal::new(MatchesView::Loading),
            requests: LatestRequest::new(),
        }
    }

    pub fn tier(&self) -> Signal<Tier> {
        self.tier.into()
    }

    pub fn view(&self) -> Signal<MatchesView> {
        self.view.into()
    }

    /// Applies the stored tier without writing it back
    pub fn restore_tier(&self) {
        let stored = self.prefs.load();
        if self.tier.get_untracked() != stored {
            self.tier.set(stored);
        }
    }

    /// Switches the filter and persists it, reselecting the current tier is a no-op
    pub fn select_tier(&self, tier: Tier) {
        if self.tier.get_untracked() == tier {
            return;
        }
        self.tier.set(tier);
        self.prefs.save(tier);
    }

    /// Puts the list into `Loading` and starts a request for the current tier,
    /// aborting the previous one. The returned future applies the outcome.
    pub fn load(&self, source: &dyn MatchesSource) -> impl Future<Output = ()> + 'static {
        let query = MatchQuery::new(self.tier.get_untracked(), MATCHES_PAGE_LIMIT);
        self.view.set(MatchesView::Loading);

        let request = self.requests.start(source.fetch(&self.endpoint, query));
        let endpoint = self.endpoint.clone();
        let view = self.view;

        async move {
            match request.await {
                Ok(outcome) => {
                    if let Err(e) = &outcome {
                        log::warn!("failed to load {endpoint}: {e}");
                    }
                    // the list may be gone by now
                    _ = view.try_set(MatchesView::from_result(outcome));
                }
                Err(Aborted) => log::debug!("request for {endpoint} superseded"),
            }
        }
    }

    pub fn cancel(&self) {
        self.requests.abort();
    }
}
