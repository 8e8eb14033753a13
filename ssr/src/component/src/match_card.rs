use leptos::prelude::*;
use utils::matches::Match;

#[component]
pub fn MatchCard(record: Match) -> impl IntoView {
    let tournament = record.tournament_name().to_string();
    let start_time = record.start_time().to_string();
    let title = record.title().to_string();
    let matchup = record.matchup();
    let winner = record.winner_name().map(str::to_string);
    let id = record.id;

    view! {
        <article class="card">
            <div class="meta">
                <div class="tournament">{tournament}</div>
                <div class="time">{start_time}</div>
            </div>
            <div class="title">{title}</div>
            {matchup.map(|line| view! { <div class="matchup">{line}</div> })}
            {winner.map(|name| view! { <div class="winner">"Winner: " {name}</div> })}
            <div class="actions">
                // placeholder until streams get wired up
                <a
                    class="watch"
                    href="#"
                    on:click=move |ev| {
                        ev.prevent_default();
                        log::debug!("watch requested for match {id}");
                    }
                >
                    "Watch"
                </a>
            </div>
        </article>
    }
}
