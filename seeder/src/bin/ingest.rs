use common::config::Config;
use common::logger::init_logger;
use log::error;
use seeder::seed::SeedError;
use seeder::seeds::metric_window::reference_now;

#[tokio::main]
async fn main() {
    let config = Config::init(".env");
    if let Err(err) = init_logger(&config.log_level, &config.log_file) {
        println!("failed to initialize logger: {}", err);
        std::process::exit(1);
    }

    if let Err(err) = run(config).await {
        error!("Ingestion failed: {}", err);
        std::process::exit(1);
    }
}

async fn run(config: &Config) -> Result<(), SeedError> {
    let reference = reference_now();
    let mut rng = seeder::ingest_rng(config)?;

    let store = db::connect(config).await?;
    seeder::ingest(&store, config, reference, &mut rng).await?;
    store.close().await;
    Ok(())
}
