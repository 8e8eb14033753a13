use axum::{
    body::Body as AxumBody,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use leptos_axum::{handle_server_fns, LeptosRoutes};
use state::server::AppState;
use tower_http::trace::TraceLayer;
use tracing::instrument;

use crate::{app::shell, fallback::file_and_error_handler};

#[instrument(skip(state))]
pub async fn leptos_routes_handler(state: State<AppState>, req: Request<AxumBody>) -> Response {
    let State(app_state) = state.clone();
    let handler = leptos_axum::render_route(app_state.routes.clone(), move || {
        shell(app_state.leptos_options.clone())
    });
    handler(state, req).await.into_response()
}

/// Server functions, the rendered app routes, then static files with the app's 404 page
pub fn app_router(app_state: AppState) -> Router {
    let routes = app_state.routes.clone();

    Router::new()
        .route(
            "/api/{*fn_name}",
            get(handle_server_fns).post(handle_server_fns),
        )
        .leptos_routes_with_handler(routes, get(leptos_routes_handler))
        .fallback(file_and_error_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
