use norrland_api::config::ServerConfig;
use norrland_app::AppContext;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let server_config = ServerConfig::from_env().expect("Invalid server configuration");
    let addr = server_config.addr;

    let app_context = AppContext::from_env();
    let app = norrland_api::router(app_context);

    tracing::info!("Listening on http://{}", addr);
    tracing::info!("Chat function served at {}", norrland_api::CHAT_ROUTE);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
