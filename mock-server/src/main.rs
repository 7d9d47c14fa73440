use tokio::net::TcpListener;

/// Serves the collector stand-in so `sse-send` can be pointed at it by hand.
#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let addr = std::env::var("MOCK_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    let listener = TcpListener::bind(&addr).await?;
    println!("collecting POSTs on http://{}", listener.local_addr()?);
    mock_server::run(listener).await
}
