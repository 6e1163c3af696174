use coursevault::router::init_router;
use coursevault::state::init_app_state;
use coursevault_cli::seeder::seed_demo_data;
use coursevault_config::ServerConfig;
use coursevault_core::DEFAULT_HASH_COST;
use coursevault_observability::{init_metrics, init_tracing};
use dotenvy::dotenv;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    init_tracing()?;
    let metrics = init_metrics()?;

    let server_config = ServerConfig::from_env();
    let state = init_app_state(metrics).await?;

    if server_config.seed_on_startup {
        seed_demo_data(state.store.as_ref(), &state.cipher, DEFAULT_HASH_COST)
            .await
            .map_err(|e| e.error)?;
    }

    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(&server_config.addr).await?;
    tracing::info!("🚀 Server running on http://{}", server_config.addr);
    tracing::info!("📖 Scalar UI available at http://{}/scalar", server_config.addr);
    axum::serve(listener, app).await?;

    Ok(())
}
