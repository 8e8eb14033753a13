use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode, Uri},
    response::{IntoResponse, Response as AxumResponse},
};
use leptos::prelude::*;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::app::shell;

/// Serves built assets from the site root, anything else renders the app (and its 404 route)
pub async fn file_and_error_handler(
    uri: Uri,
    State(options): State<LeptosOptions>,
    req: Request<Body>,
) -> AxumResponse {
    let root = options.site_root.clone();
    match get_static_file(uri, &root).await {
        Ok(res) if res.status() == StatusCode::OK => res.into_response(),
        Ok(_) => {
            let handler = leptos_axum::render_app_to_stream(move || shell(options.clone()));
            handler(req).await.into_response()
        }
        Err((status, message)) => {
            tracing::error!("static file lookup failed: {message}");
            (status, message).into_response()
        }
    }
}

async fn get_static_file(uri: Uri, root: &str) -> Result<AxumResponse, (StatusCode, String)> {
    let req = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("Invalid request: {e}")))?;

    match ServeDir::new(root).oneshot(req).await {
        Ok(res) => Ok(res.into_response()),
        Err(err) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Something went wrong: {err}"),
        )),
    }
}
