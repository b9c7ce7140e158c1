// SPDX-License-Identifier: Apache-2.0

//! HTTP server for Vulnpix, an intentionally vulnerable photo service
//! used for security training.
//!
//! Every route is a thin adapter from a request field to one of the
//! core sinks. The vulnerable halves of the teaching pairs stay
//! compiled in every build: the interpolated `/search` is always
//! mounted next to the bound `/advanced-search`, and the `vulnerable`
//! cargo feature swaps `POST /lookup` from the argv handler to the
//! shell-string handler.

use std::net::SocketAddr;

use anyhow::Context;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use vulnpix_core::{PhotoStore, load_config};

pub mod cli;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod seed;
pub mod state;

pub use state::AppState;

/// Maximum accepted size of a request body, in bytes.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Builds the application router.
///
/// The route table mirrors the teaching layout: `/search` runs the
/// interpolated query in every build, `/advanced-search` the bound
/// one, and `POST /lookup` picks its handler from the `vulnerable`
/// feature.
#[must_use]
pub fn app(state: AppState) -> Router {
    #[cfg(feature = "vulnerable")]
    let lookup_routes = get(handlers::lookup::form).post(handlers::lookup::perform_shell);
    #[cfg(not(feature = "vulnerable"))]
    let lookup_routes = get(handlers::lookup::form).post(handlers::lookup::perform);

    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/lookup", lookup_routes)
        .route("/search", get(handlers::search::raw))
        .route("/advanced-search", get(handlers::search::advanced))
        .route("/api/search/xml", post(handlers::search::xml))
        .route("/api/search/yaml", post(handlers::search::yaml))
        .route("/photos", post(handlers::photos::create))
        .route("/photos/{id}", get(handlers::photos::detail))
        .route("/users/{username}/photos", get(handlers::photos::by_owner))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Loads configuration, prepares storage, and serves until ctrl-c.
///
/// # Errors
///
/// Returns an error when configuration, the database, or the listener
/// cannot be set up, or when the server itself fails.
pub async fn run(cli: cli::Cli) -> anyhow::Result<()> {
    let mut config = load_config().context("failed to load configuration")?;
    if let Some(url) = cli.database_url {
        config.database.url = url;
    }

    // Parsed before storage opens: a rejected --bind must not leave a
    // freshly created database file behind. Handles IPv4 and IPv6
    // hosts.
    let addr: SocketAddr = match cli.bind {
        Some(bind) => bind.parse().context("invalid --bind address")?,
        None if config.server.host.contains(':') => {
            format!("[{}]:{}", config.server.host, config.server.port).parse()?
        }
        None => format!("{}:{}", config.server.host, config.server.port).parse()?,
    };

    let store = PhotoStore::connect(&config.database)
        .await
        .with_context(|| format!("failed to open photo database {}", config.database.url))?;
    if cli.seed {
        seed::seed_demo_photos(&store)
            .await
            .context("failed to seed demo photos")?;
    }

    let state = AppState {
        store,
        lookup: config.lookup.clone(),
        search: config.search.clone(),
    };

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(
        %addr,
        vulnerable_lookup = cfg!(feature = "vulnerable"),
        "vulnpix listening"
    );

    axum::serve(listener, app(state))
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install Ctrl+C handler");
            tracing::info!("Received Ctrl+C, shutting down gracefully");
        })
        .await?;

    Ok(())
}
