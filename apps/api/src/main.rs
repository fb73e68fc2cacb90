use promptforge_api::api::{router, AppState};
use promptforge_api::config::Config;
use promptforge_api::infrastructure::database;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = Config::from_env().expect("Invalid configuration");

    // Pick storage backend
    let state = match &config.database_url {
        Some(database_url) => {
            let pool = database::connect(database_url, config.max_connections)
                .await
                .expect("Failed to connect to database");
            AppState::postgres(pool)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory storage");
            AppState::in_memory()
        }
    };

    let app = router(state);

    // Start server
    let addr = config.bind_addr();
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
