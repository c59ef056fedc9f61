use common::config::Config;
use common::logger::init_logger;
use log::error;
use seeder::seed::SeedError;

#[tokio::main]
async fn main() {
    let config = Config::init(".env");
    if let Err(err) = init_logger(&config.log_level, &config.log_file) {
        println!("failed to initialize logger: {}", err);
        std::process::exit(1);
    }

    if let Err(err) = run(config).await {
        error!("Bootstrap failed: {}", err);
        std::process::exit(1);
    }
}

async fn run(config: &Config) -> Result<(), SeedError> {
    let store = db::connect(config).await?;
    seeder::bootstrap(&store, config).await?;
    store.close().await;
    Ok(())
}
