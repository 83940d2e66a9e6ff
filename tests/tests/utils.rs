use std::net::SocketAddr;
use std::sync::OnceLock;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[allow(unused)]
pub fn init() {
    static ONCE_LOCK: OnceLock<()> = OnceLock::new();

    ONCE_LOCK.get_or_init(|| {
        let _ = FmtSubscriber::builder()
            .with_max_level(Level::INFO)
            .try_init();
    });
}

/// Boots an in-process mock endpoint on an ephemeral port and returns its
/// address. Each call gets its own listener, so tests never share a port.
#[allow(unused)]
pub async fn start_mock() -> SocketAddr {
    init();
    mock_service::spawn("127.0.0.1:0".parse().unwrap()).await
}
