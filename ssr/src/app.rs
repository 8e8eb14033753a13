use consts::{
    LIVE_MATCHES_PATH, RECENT_MATCHES_PATH, TELEGRAM_SUBSCRIBE_URL, UPCOMING_MATCHES_PATH,
};
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};
use page::{matches::MatchesPage, not_found::NotFound};
use state::tier_pref::{LocalTierStore, TierPreference};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ru">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options=options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
fn UpcomingMatches() -> impl IntoView {
    let prefs = expect_context::<TierPreference>();
    view! { <MatchesPage endpoint=UPCOMING_MATCHES_PATH title="Upcoming matches" prefs=prefs /> }
}

#[component]
fn LiveMatches() -> impl IntoView {
    let prefs = expect_context::<TierPreference>();
    view! { <MatchesPage endpoint=LIVE_MATCHES_PATH title="Live matches" prefs=prefs /> }
}

#[component]
fn RecentMatches() -> impl IntoView {
    let prefs = expect_context::<TierPreference>();
    view! { <MatchesPage endpoint=RECENT_MATCHES_PATH title="Recent matches" prefs=prefs /> }
}

#[component]
fn TopNav() -> impl IntoView {
    view! {
        <header class="topnav">
            <nav>
                <A href="/">"Upcoming"</A>
                <A href="/live">"Live"</A>
                <A href="/recent">"Recent"</A>
                <a class="cta" href=TELEGRAM_SUBSCRIBE_URL target="_blank" rel="noreferrer">
                    "Подписаться в Telegram"
                </a>
            </nav>
        </header>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    // one store for every list so the filter follows the user across tabs
    provide_context(TierPreference::new(LocalTierStore::new()));

    view! {
        <Stylesheet id="leptos" href="/pkg/esports-matches-web.css" />
        <Title text="CS2 Matches" />

        <Router>
            <TopNav />
            <main class="container">
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=UpcomingMatches />
                    <Route path=path!("/live") view=LiveMatches />
                    <Route path=path!("/recent") view=RecentMatches />
                </Routes>
            </main>
        </Router>
    }
}
