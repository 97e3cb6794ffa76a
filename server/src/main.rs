use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    booking_server::init_tracing();

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let data_file = booking_core::config::data_file_from_env()?;
    let store = booking_core::BookingStore::open(data_file);

    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("listening on {addr}");
    booking_server::run(listener, store).await
}
