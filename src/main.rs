//src/main.rs

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use xfinance::config::{AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Se a configuração falhar, a aplicação não deve iniciar.
    let settings = Settings::from_env()?;

    // RUST_LOG tem prioridade sobre XFINANCE_LOG_LEVEL
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();

    let app_state = AppState::new(&settings);
    let app = xfinance::app(app_state);

    // Inicia o servidor
    let listener = TcpListener::bind(settings.socket_addr()?).await?;
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
