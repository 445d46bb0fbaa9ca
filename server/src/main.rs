mod routes;
mod services;
mod state;
mod store;

use std::sync::Arc;

use store::TableStore;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Initialize the table store (non-fatal: falls back to an in-memory
    // store when the hosted store is not configured).
    let store: Arc<dyn TableStore> = match store::RestTableStore::from_env() {
        Ok(rest) => {
            tracing::info!(base_url = rest.base_url(), "table store client initialized");
            Arc::new(rest)
        }
        Err(e) => {
            tracing::warn!(error = %e, "table store not configured; using in-memory store, rows are not persisted");
            Arc::new(store::MemoryStore::new())
        }
    };

    let state = state::AppState::new(store);

    let app = routes::leptos_app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "trial-and-error listening");
    axum::serve(listener, app).await.expect("server failed");
}
