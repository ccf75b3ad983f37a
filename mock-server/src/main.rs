use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let seeded = std::env::var("MOCK_SEED").is_ok_and(|v| v == "1");

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, seeded, "listening");

    let app = if seeded {
        mock_server::app_with(mock_server::fixture())
    } else {
        mock_server::app()
    };
    mock_server::serve(listener, app).await
}
