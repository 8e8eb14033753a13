use leptos::prelude::*;
use utils::matches::Tier;

/// "Top Tier" / "All" switch above the match lists
#[component]
pub fn TierToggle(
    #[prop(into)] selected: Signal<Tier>,
    #[prop(into)] on_select: Callback<Tier>,
) -> impl IntoView {
    let button = move |tier: Tier| {
        view! {
            <button
                class=move || if selected.get() == tier { "active" } else { "" }
                on:click=move |_| on_select.run(tier)
            >
                {tier.label()}
            </button>
        }
    };

    view! {
        <div class="toggle">
            {button(Tier::Top)}
            {button(Tier::All)}
        </div>
    }
}
