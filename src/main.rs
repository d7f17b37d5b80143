use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    devicedeck::bootstrap::init_tracing()?;

    // Optional path to a config file; platform default otherwise.
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    devicedeck::demo::run(config_path).await
}
