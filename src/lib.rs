pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use crate::adapters::{HttpFirstNameClient, HttpLastNameClient};
pub use crate::config::{NameServiceConfig, OrchestratorConfig};
pub use crate::core::{names::NamePool, orchestrator::HelloService};
pub use crate::domain::model::{FirstNameResponse, HelloResponse, LastNameResponse};
pub use crate::utils::error::{Result, ServiceError};
