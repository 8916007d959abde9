use anyhow::Context;

use forgebom_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    forgebom_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;
    let app = forgebom_api::app::build_app(&config).context("failed to build app")?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        fan_out = %config.fan_out,
        dev_routes = config.enable_dev_routes,
        "listening on {}",
        listener.local_addr()?
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
