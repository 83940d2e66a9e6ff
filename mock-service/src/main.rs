use std::net::SocketAddr;

#[tokio::main]
async fn main() {
    tokio::task::spawn(async { mock_service::tps_measure_task().await });

    let addr: SocketAddr = "0.0.0.0:3000".parse().unwrap();
    mock_service::run(addr).await;
}
