//! # Academy API
//!
//! HTTP surface over the schedule extractor, used by the admin portal to turn
//! typed or dictated schedule text into structured days and slots.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Request processing
//! - **Middleware**: Error-to-response mapping
//! - **Config**: Environment configuration
//!
//! The server keeps no state between requests beyond its configuration and
//! the optional language-model client.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Error handling shared by all handlers
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use academy_extractor::model::ScheduleModel;
use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use eyre::Result;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Longest schedule text, in characters, a request may submit
    pub max_input_chars: usize,
    /// Language model tried before the rule-based extractor, if configured
    pub model: Option<Arc<dyn ScheduleModel>>,
}

impl ApiState {
    pub fn new(config: &config::ApiConfig, model: Option<Arc<dyn ScheduleModel>>) -> Self {
        Self {
            max_input_chars: config.max_input_chars,
            model,
        }
    }
}

/// Builds the application router with all routes attached to `state`.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Schedule parsing endpoints
        .merge(routes::schedule::routes())
        .with_state(state)
}

/// Starts the API server with the provided configuration
///
/// # Example
///
/// ```ignore
/// let config = ApiConfig::from_env()?;
/// start_server(config, None).await?;
/// ```
pub async fn start_server(
    config: config::ApiConfig,
    model: Option<Arc<dyn ScheduleModel>>,
) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if model.is_none() {
        warn!("No schedule model configured, all text goes to the rule-based extractor");
    }

    let state = Arc::new(ApiState::new(&config, model));
    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();
        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
            .allow_origin(origins);

        app.layer(cors)
    } else {
        app
    };

    // Request tracing and timeout
    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
