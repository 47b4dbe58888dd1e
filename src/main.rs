#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> std::process::ExitCode {
    use std::process::ExitCode;

    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use lingo_landing::app::*;
    use lingo_landing::core::config::Config;
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::ServeDir;
    use tracing::Level;

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    // Load application config from environment variables
    let config = Config::from_env();

    // Initialize tracing, falling back to INFO when the config is unusable
    let level = config.as_ref().map(|c| c.log_level).unwrap_or(Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = match config {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("Invalid configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        "Config loaded: log_level={}, compression={}, precompressed_assets={}",
        config.log_level,
        config.compression,
        config.precompressed_assets
    );

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = match get_configuration(None) {
        Ok(conf) => conf,
        Err(err) => {
            tracing::error!("Failed to load Leptos configuration: {err}");
            return ExitCode::FAILURE;
        }
    };
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    // Serve the bundle from /pkg, with .br/.gz variants when enabled
    let mut pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root));
    if config.precompressed_assets {
        pkg_service = pkg_service.precompressed_br().precompressed_gzip();
    }

    let app = Router::new()
        .nest_service("/pkg", pkg_service)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options)
        .layer(
            CompressionLayer::new()
                .br(config.compression)
                .gzip(config.compression)
                .deflate(false)
                .zstd(false)
                .quality(CompressionLevel::Best),
        );

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("Failed to bind {addr}: {err}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("listening on http://{}", &addr);

    if let Err(err) = axum::serve(listener, app.into_make_service()).await {
        tracing::error!("Server error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
