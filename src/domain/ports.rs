use crate::domain::model::{FirstNameResponse, LastNameResponse};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Capability of the first-name collaborator: one call, one random name.
#[async_trait]
pub trait FirstNameClient: Send + Sync {
    async fn random_first_name(&self) -> Result<FirstNameResponse>;
}

/// Capability of the last-name collaborator.
#[async_trait]
pub trait LastNameClient: Send + Sync {
    async fn random_last_name(&self) -> Result<LastNameResponse>;
}
