use crate::utils::error::Result;
use crate::utils::validation::{validate_bind_addr, validate_url, Validate};
use clap::Parser;

pub const DEFAULT_FIRST_NAME_BIND: &str = "127.0.0.1:8081";
pub const DEFAULT_LAST_NAME_BIND: &str = "127.0.0.1:8082";
pub const DEFAULT_ORCHESTRATOR_BIND: &str = "127.0.0.1:8080";

/// CLI configuration shared by the two leaf services. Each binary supplies
/// its own default bind address.
#[derive(Debug, Clone, Parser)]
#[command(about = "Serves a random name from a fixed list")]
pub struct NameServiceConfig {
    #[arg(long, help = "Address to bind, host:port")]
    pub bind: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl NameServiceConfig {
    pub fn bind_addr(&self, default: &str) -> String {
        self.bind.clone().unwrap_or_else(|| default.to_string())
    }
}

impl Validate for NameServiceConfig {
    fn validate(&self) -> Result<()> {
        if let Some(bind) = &self.bind {
            validate_bind_addr("bind", bind)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "hello-orchestrator")]
#[command(about = "Composes a greeting from the two name services")]
pub struct OrchestratorConfig {
    #[arg(long, default_value = DEFAULT_ORCHESTRATOR_BIND)]
    pub bind: String,

    #[arg(long, default_value = "http://127.0.0.1:8081")]
    pub first_name_url: String,

    #[arg(long, default_value = "http://127.0.0.1:8082")]
    pub last_name_url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for OrchestratorConfig {
    fn validate(&self) -> Result<()> {
        validate_bind_addr("bind", &self.bind)?;
        validate_url("first_name_url", &self.first_name_url)?;
        validate_url("last_name_url", &self.last_name_url)?;
        Ok(())
    }
}
