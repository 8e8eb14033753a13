use leptos::prelude::*;
use leptos::server;

/// Liveness probe, answers with the matches API base the bundle was built against
#[server(endpoint = "healthz")]
pub async fn healthz() -> Result<String, ServerFnError> {
    Ok(consts::API_BASE.to_string())
}
