use axum::{body::Bytes, routing::get, Router};
use norrland_app::AppContext;
use norrland_errors::AppError;
use tower_http::compression::CompressionLayer;

pub mod config;

/// Route the Functions host forwards the `chat` function to.
pub const CHAT_ROUTE: &str = "/api/chat";

pub fn router(app_context: AppContext) -> Router {
    Router::new()
        .route(
            CHAT_ROUTE,
            get({
                let ctx = app_context.clone();
                move |body: Bytes| {
                    let ctx = ctx.clone();
                    async move { handle_chat(ctx, body).await }
                }
            })
            .post({
                let ctx = app_context.clone();
                move |body: Bytes| {
                    let ctx = ctx.clone();
                    async move { handle_chat(ctx, body).await }
                }
            }),
        )
        .route("/health", get(|| async { "ok" }))
        .layer(CompressionLayer::new())
}

async fn handle_chat(ctx: AppContext, body: Bytes) -> Result<String, AppError> {
    tracing::info!("chat invoked with {} byte body", body.len());

    let result = ctx.chat.handle(&body).await;
    if let Err(e) = &result {
        tracing::info!("chat answered with status {}: {}", e.status_code(), e);
    }
    result
}
