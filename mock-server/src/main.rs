use mock_server::Store;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mock_server=info")),
        )
        .with_target(false)
        .compact()
        .init();

    let mut store = Store::default();
    if let Ok(key) = std::env::var("TILDA_PUBLICKEY") {
        store.public_key = key;
    }
    if let Ok(key) = std::env::var("TILDA_SECRETKEY") {
        store.secret_key = key;
    }

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, public_key = %store.public_key, "mock Tilda API listening");
    mock_server::run_with(listener, store).await
}
