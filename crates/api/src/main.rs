use anyhow::Context;

use camp_infra::{AppConfig, db};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    camp_observability::init();

    let config = AppConfig::from_env()?;
    if std::env::var_os("DB_URI").is_none() {
        tracing::warn!("DB_URI not set; using {}", config.database.url);
    }

    let pool = db::open(&config.database)
        .await
        .with_context(|| format!("failed to open store at {}", config.database.url))?;

    let app = camp_api::app::build_app(pool);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
