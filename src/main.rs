use reelshelf::{AppState, config::Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,reelshelf=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;
    let addr = config.addr;

    let state = AppState::init(config).await?;
    let app = reelshelf::app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
