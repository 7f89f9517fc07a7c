//! HTTP server implementation

use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::Any;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::handlers::AppState;
use crate::api::routes;
use crate::config::AppConfig;
use crate::Result;

/// Assemble the application router with middleware layers
pub fn build_app(state: AppState, enable_cors: bool) -> Router {
    let mut app = Router::new()
        .nest("/api", routes::api_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new());

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

/// Start the API server
pub async fn serve_api(config: &AppConfig, host: String, port: u16, enable_cors: bool) -> Result<()> {
    info!("Starting EchoPulse API server...");

    let state = AppState::from_config(config);
    info!(
        "Lexicons loaded: {} positive, {} negative keywords (max {} replies per request)",
        state.classifier.positive_lexicon().len(),
        state.classifier.negative_lexicon().len(),
        state.max_replies
    );

    let app = build_app(state, enable_cors);
    if enable_cors {
        info!("CORS enabled");
    }

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("API server listening on http://{}", addr);
    info!("Available endpoints:");
    info!("  GET  /api/health     - Health check");
    info!("  POST /api/summarize  - Narrative summary of replies");
    info!("  POST /api/analyze    - Sentiment counts and top themes");

    axum::serve(listener, app).await?;

    Ok(())
}
