#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
mod server {
    use esports_matches_web::{app::App, routes::app_router};
    use leptos::prelude::*;
    use leptos_axum::generate_route_list;
    use state::server::AppState;
    use telemetry_axum::{Config as TelemetryConfig, Exporter};

    const SERVICE_NAME: &str = "esports_matches_web";

    /// `RUST_LOG` overrides the default level, `LOG_FILE` adds a daily rolling file
    fn telemetry_config() -> TelemetryConfig {
        let mut config = TelemetryConfig {
            service_name: SERVICE_NAME.to_string(),
            level: format!("info,{SERVICE_NAME}=debug,tower_http=info"),
            ..Default::default()
        };
        if let Ok(level) = std::env::var("RUST_LOG") {
            config.level = level;
        }
        if let Ok(file_path) = std::env::var("LOG_FILE") {
            config.exporter = Exporter::FileAndStdout;
            config.file_path = file_path;
        }
        config
    }

    async fn shutdown_signal() {
        use tokio::signal;

        let ctrl_c = async {
            if let Err(e) = signal::ctrl_c().await {
                tracing::error!("failed to listen for Ctrl+C: {e}");
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        let terminate = async {
            match signal::unix::signal(signal::unix::SignalKind::terminate()) {
                Ok(mut sig) => {
                    sig.recv().await;
                }
                Err(e) => {
                    tracing::error!("failed to install SIGTERM handler: {e}");
                    std::future::pending::<()>().await;
                }
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {},
            _ = terminate => {},
        }
        tracing::info!("stopping...");
    }

    pub async fn main_impl() -> Result<(), Box<dyn std::error::Error>> {
        dotenv::dotenv().ok();

        telemetry_axum::init_telemetry(&telemetry_config())?;

        // cargo-leptos provides the LEPTOS_* env values, see its deployment docs
        let conf = get_configuration(None)?;
        let leptos_options = conf.leptos_options;
        let addr = leptos_options.site_addr;
        let routes = generate_route_list(App);

        let app_state = AppState {
            leptos_options,
            routes,
        };

        let app = app_router(app_state);

        tracing::info!("listening on http://{addr}, matches API at {}", *consts::API_BASE);
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await?;

        Ok(())
    }
}

#[cfg(feature = "ssr")]
fn main() {
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to start runtime: {e}");
            std::process::exit(1);
        }
    };

    runtime.block_on(async {
        if let Err(e) = server::main_impl().await {
            eprintln!("Server error: {e}");
            std::process::exit(1);
        }
    });
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // client-only builds start from `hydrate` in lib.rs
}
