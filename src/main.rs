#[tokio::main]
async fn main() -> std::io::Result<()> {
    vehicle_sim::run_with_config().await
}
