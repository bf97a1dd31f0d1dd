use anyhow::Context;

use bomkit_api::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    bomkit_observability::init();

    let config = AppConfig::from_env().context("invalid configuration")?;
    let app = bomkit_api::app::build_app(&config).context("failed to load inventory data")?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
