use clap::Parser;
use hello_services::config::DEFAULT_LAST_NAME_BIND;
use hello_services::server::{self, routes};
use hello_services::utils::{logger, validation::Validate};
use hello_services::NameServiceConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = NameServiceConfig::parse();
    logger::init_service_logger(config.verbose);

    tracing::info!("Starting last-name-service");
    if config.verbose {
        tracing::debug!("Config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let app = routes::last_name_routes();
    server::serve(app, &config.bind_addr(DEFAULT_LAST_NAME_BIND)).await
}
