//! Sentiment Report Service: Binary Entrypoint
//! Boots the Axum HTTP server: config, tracing, resources, routes, metrics.

use shuttle_axum::ShuttleAxum;
use tracing::{info, warn};

use sentiment_report::{
    api::{create_router, AppState},
    config::AppConfig,
    logging,
    metrics::Metrics,
};

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    let cfg = AppConfig::load()?;
    logging::init(&cfg.logging);

    // Fail startup rather than the first request if resources are broken.
    sentiment_report::init()?;
    let state = AppState::from_config(&cfg)?;

    let metrics = if cfg.server.metrics_enabled {
        match Metrics::init() {
            Ok(m) => Some(m),
            Err(e) => {
                warn!(error = %e, "metrics disabled");
                None
            }
        }
    } else {
        None
    };

    info!(
        max_input_bytes = cfg.server.max_input_bytes,
        static_dir = %cfg.server.static_dir.display(),
        metrics = metrics.is_some(),
        lexicon_overrides = cfg.analysis.lexicon_path.is_some(),
        "sentiment service starting"
    );

    let router = create_router(state, &cfg.server, metrics.as_ref());
    Ok(router.into())
}
