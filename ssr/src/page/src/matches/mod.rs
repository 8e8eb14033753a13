mod controller;
mod view_state;

pub use controller::MatchesController;
pub use view_state::MatchesView;

use std::rc::Rc;

use component::{match_card::MatchCard, tier_toggle::TierToggle};
use leptos::prelude::*;
use leptos::task::spawn_local;
use state::tier_pref::TierPreference;
use utils::matches::{MatchesClient, MatchesSource, Tier};

/// One list of matches (upcoming, live or recent) with its tier filter
#[component]
pub fn MatchesPage(
    /// API path the list is fetched from
    endpoint: &'static str,
    title: &'static str,
    prefs: TierPreference,
    /// Defaults to [`MatchesClient`] against the configured API base
    #[prop(optional)]
    source: Option<Rc<dyn MatchesSource>>,
) -> impl IntoView {
    let controller = MatchesController::new(endpoint, prefs);
    let source =
        source.unwrap_or_else(|| Rc::new(MatchesClient::default()) as Rc<dyn MatchesSource>);
    let tier = controller.tier();
    let view_state = controller.view();

    watch_tier(&controller, source);

    let on_select = Callback::new(move |tier: Tier| controller.select_tier(tier));

    view! {
        <section>
            <div class="row">
                <h1>{title}</h1>
                <TierToggle selected=tier on_select=on_select />
            </div>
            {move || matches_content(view_state.get())}
        </section>
    }
}

/// Restores the stored tier once mounted, then fetches on mount and on every
/// tier change. The in-flight request is aborted when the owner is cleaned up.
fn watch_tier(controller: &MatchesController, source: Rc<dyn MatchesSource>) {
    on_cleanup({
        let controller = controller.clone();
        move || controller.cancel()
    });

    let controller = controller.clone();
    let tier = controller.tier();
    Effect::new(move |restored: Option<()>| {
        // applied after hydration so the first client render agrees with the server's
        if restored.is_none() {
            controller.restore_tier();
        }
        tier.track();
        spawn_local(controller.load(source.as_ref()));
    });
}

fn matches_content(state: MatchesView) -> AnyView {
    match state {
        MatchesView::Loading => view! { <div class="muted">"Loading…"</div> }.into_any(),
        MatchesView::Failed(message) => view! { <div class="error">{message}</div> }.into_any(),
        MatchesView::Empty => view! { <div class="muted">"Нет данных"</div> }.into_any(),
        MatchesView::Loaded(matches) => view! {
            <div class="grid">
                <For
                    each=move || matches.clone()
                    key=|record| record.id
                    children=|record| view! { <MatchCard record=record /> }
                />
            </div>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::sync::Arc;

    use any_spawner::Executor;
    use futures::future::{pending, ready, FutureExt, LocalBoxFuture};
    use state::tier_pref::MemoryTierStore;
    use utils::matches::{FetchError, Match, MatchQuery};

    use super::*;

    const PATH: &str = "/api/matches/live";

    /// Records every query; optionally never answers so cancellation is observable
    #[derive(Default)]
    struct RecordingSource {
        queries: RefCell<Vec<MatchQuery>>,
        hang: bool,
        dropped: Rc<Cell<usize>>,
    }

    struct DropCount(Rc<Cell<usize>>);

    impl Drop for DropCount {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    impl RecordingSource {
        fn hanging() -> Self {
            Self {
                hang: true,
                ..Default::default()
            }
        }

        fn tiers(&self) -> Vec<Tier> {
            self.queries.borrow().iter().map(|q| q.tier).collect()
        }
    }

    impl MatchesSource for RecordingSource {
        fn fetch(
            &self,
            _path: &str,
            query: MatchQuery,
        ) -> LocalBoxFuture<'static, Result<Vec<Match>, FetchError>> {
            self.queries.borrow_mut().push(query);
            if !self.hang {
                return ready(Ok(vec![])).boxed_local();
            }
            let guard = DropCount(self.dropped.clone());
            async move {
                let _guard = guard;
                pending::<()>().await;
                Ok(vec![])
            }
            .boxed_local()
        }
    }

    fn reactive_owner() -> Owner {
        _ = Executor::init_futures_executor();
        let owner = Owner::new();
        owner.set();
        owner
    }

    fn mount_page(store: MemoryTierStore, source: Rc<RecordingSource>) {
        let source: Rc<dyn MatchesSource> = source;
        let prefs = TierPreference::new(store);
        let _page = view! {
            <MatchesPage endpoint=PATH title="Live matches" prefs=prefs source=source />
        };
    }

    #[test]
    fn mount_fetches_once_with_stored_tier() {
        let _owner = reactive_owner();
        let source = Rc::new(RecordingSource::default());

        mount_page(MemoryTierStore::with_tier(Tier::All), source.clone());
        Executor::poll_local();

        assert_eq!(source.tiers(), vec![Tier::All]);
        assert_eq!(source.queries.borrow()[0].limit, 50);
    }

    #[test]
    fn restored_tier_matches_toggle_and_query() {
        let _owner = reactive_owner();
        let store = Arc::new(MemoryTierStore::with_tier(Tier::All));
        let controller = MatchesController::new(PATH, TierPreference::from(store.clone()));
        let source = Rc::new(RecordingSource::default());

        // built on the server default, like a hydrating page
        assert_eq!(controller.tier().get_untracked(), Tier::Top);

        watch_tier(&controller, source.clone());
        Executor::poll_local();

        assert_eq!(controller.tier().get_untracked(), Tier::All);
        assert_eq!(source.tiers(), vec![Tier::All]);
        assert_eq!(store.writes(), 0);

        let selected = controller.tier();
        let html = view! { <TierToggle selected=selected on_select=|_: Tier| {} /> }.to_html();
        let all = html.rfind(">All<").unwrap();
        let active = html.find(r#"class="active""#).unwrap();
        assert!(active > html.find("Top Tier").unwrap() && active < all);
    }

    #[test]
    fn each_tier_change_fetches_once() {
        let _owner = reactive_owner();
        let store = Arc::new(MemoryTierStore::default());
        let controller = MatchesController::new(PATH, TierPreference::from(store.clone()));
        let source = Rc::new(RecordingSource::default());

        watch_tier(&controller, source.clone());
        Executor::poll_local();
        assert_eq!(source.tiers(), vec![Tier::Top]);

        controller.select_tier(Tier::All);
        Executor::poll_local();
        assert_eq!(source.tiers(), vec![Tier::Top, Tier::All]);

        // reselecting the current tier is not a change
        controller.select_tier(Tier::All);
        Executor::poll_local();
        assert_eq!(source.tiers(), vec![Tier::Top, Tier::All]);

        controller.select_tier(Tier::Top);
        Executor::poll_local();
        assert_eq!(source.tiers(), vec![Tier::Top, Tier::All, Tier::Top]);
        assert_eq!(store.writes(), 2);
    }

    #[test]
    fn cleanup_aborts_in_flight_request() {
        let owner = reactive_owner();
        let source = Rc::new(RecordingSource::hanging());

        mount_page(MemoryTierStore::default(), source.clone());
        Executor::poll_local();
        assert_eq!(source.tiers(), vec![Tier::Top]);
        assert_eq!(source.dropped.get(), 0);

        owner.cleanup();
        Executor::poll_local();

        assert_eq!(source.dropped.get(), 1);
    }

    fn render(state: MatchesView) -> String {
        Owner::new().with(|| matches_content(state).to_html())
    }

    fn named(id: u64, name: &str) -> Match {
        Match {
            id,
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn loading_shows_indicator_only() {
        let html = render(MatchesView::Loading);
        assert!(html.contains("Loading…"));
        assert!(!html.contains("card"));
    }

    #[test]
    fn one_card_per_match_in_api_order() {
        let html = render(MatchesView::Loaded(vec![
            named(30, "Third"),
            named(10, "First"),
            named(20, "Second"),
        ]));

        assert_eq!(html.matches(r#"<article class="card">"#).count(), 3);
        let third = html.find("Third").unwrap();
        let first = html.find("First").unwrap();
        let second = html.find("Second").unwrap();
        assert!(third < first && first < second);
    }

    #[test]
    fn empty_batch_shows_message_without_cards() {
        let html = render(MatchesView::from_result(Ok(vec![])));
        assert!(html.contains("Нет данных"));
        assert!(!html.contains("card"));
    }

    #[test]
    fn server_error_shows_status() {
        let html = render(MatchesView::from_result(Err(FetchError::Status(500))));
        assert!(html.contains(r#"class="error""#));
        assert!(html.contains("500"));
        assert!(!html.contains("card"));
    }
}
