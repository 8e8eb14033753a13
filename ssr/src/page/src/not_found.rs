use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(res) = use_context::<leptos_axum::ResponseOptions>() {
        res.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <section>
            <h1>"Page not found"</h1>
            <a href="/">"Back to upcoming matches"</a>
        </section>
    }
}
