#![cfg(feature = "ssr")]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use esports_matches_web::{app::App, routes::app_router};
use leptos::prelude::LeptosOptions;
use leptos_axum::generate_route_list;
use state::server::AppState;
use tower::ServiceExt;

fn router() -> Router {
    let leptos_options = LeptosOptions::builder()
        .output_name("esports-matches-web")
        .site_root("target/site")
        .build();
    app_router(AppState {
        leptos_options,
        routes: generate_route_list(App),
    })
}

async fn get(path: &str) -> (StatusCode, String) {
    let req = Request::builder().uri(path).body(Body::empty()).unwrap();
    let res = router().oneshot(req).await.unwrap();
    let status = res.status();
    let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&body).into_owned())
}

#[tokio::test]
async fn list_route_renders_shell_and_nav() {
    let (status, body) = get("/live").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"lang="ru""#));
    assert!(body.contains("Live matches"));
    assert!(body.contains("Подписаться в Telegram"));
}

#[tokio::test]
async fn unknown_path_renders_not_found_with_404() {
    let (status, body) = get("/no-such-page").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found"));
}
