use clap::Parser;
use hello_services::server::{self, routes};
use hello_services::utils::{logger, validation::Validate};
use hello_services::{HelloService, HttpFirstNameClient, HttpLastNameClient, OrchestratorConfig};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = OrchestratorConfig::parse();
    logger::init_service_logger(config.verbose);

    tracing::info!("Starting hello-orchestrator");
    if config.verbose {
        tracing::debug!("Config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    // One connection pool shared by both collaborator clients
    let client = reqwest::Client::new();
    let first_name_client =
        HttpFirstNameClient::with_client(client.clone(), config.first_name_url.clone());
    let last_name_client =
        HttpLastNameClient::with_client(client, config.last_name_url.clone());

    let service = Arc::new(HelloService::new(first_name_client, last_name_client));
    let app = routes::hello_routes(service);

    server::serve(app, &config.bind).await
}
