use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use napa_concierge::{
    agents::WineAgent,
    config::Config,
    db::{ConversationStore, PgConversationStore},
    llm::LLM,
    middleware::apply_cors,
    routes::create_router,
    tools::{SearchTool, WeatherClient},
    utils::init_logger,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing
    let _log_guard = init_logger(&config.logging);
    info!("Configuration loaded: {:?}", config.server);

    // Connect to database
    let pool = napa_concierge::db::create_pool(&config.database).await?;

    info!("Running database migrations...");
    napa_concierge::db::run_migrations(&pool).await?;
    info!("Database migrations completed");

    let store: Arc<dyn ConversationStore> = Arc::new(PgConversationStore::new(pool));

    // Build the agent
    let llm = LLM::new(&config.llm)?;
    info!(provider = llm.provider_name(), model = llm.model(), "LLM configured");
    let weather = WeatherClient::new(&config.weather);
    if !weather.is_configured() {
        info!("No OpenWeatherMap API key configured, weather lookups return demo data");
    }
    let agent = WineAgent::new(llm, weather, SearchTool::new());

    // Create shared state
    let state = AppState::new(agent, store.clone());

    // Create router
    let app = apply_cors(create_router(state), &config.server.cors_allowed_origins);

    // Start server
    let ip: std::net::IpAddr = config.server.host.parse()?;
    let addr = SocketAddr::from((ip, config.server.port));
    info!("Server listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e));

    // Release the pool on every exit path of the server
    store.close().await;
    info!("Shutdown complete");

    served
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
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

    info!("Shutdown signal received");
}
