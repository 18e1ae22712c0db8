// Adapters layer: hand-written HTTP wrappers for the two leaf collaborators.

use crate::domain::model::{FirstNameResponse, LastNameResponse};
use crate::domain::ports::{FirstNameClient, LastNameClient};
use crate::utils::error::{Result, ServiceError};
use async_trait::async_trait;
use reqwest::Client;

async fn get_json<T: serde::de::DeserializeOwned>(
    client: &Client,
    service: &str,
    base_url: &str,
    path: &str,
) -> Result<T> {
    let url = format!("{}{}", base_url.trim_end_matches('/'), path);
    tracing::debug!("Making API request to: {}", url);

    let response = client.get(&url).send().await?;
    tracing::debug!("API response status: {}", response.status());

    if !response.status().is_success() {
        return Err(ServiceError::UpstreamStatus {
            service: service.to_string(),
            status: response.status().as_u16(),
        });
    }

    Ok(response.json().await?)
}

#[derive(Debug, Clone)]
pub struct HttpFirstNameClient {
    client: Client,
    base_url: String,
}

impl HttpFirstNameClient {
    pub fn new(base_url: String) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl FirstNameClient for HttpFirstNameClient {
    async fn random_first_name(&self) -> Result<FirstNameResponse> {
        get_json(
            &self.client,
            "first-name-service",
            &self.base_url,
            "/first-name/random",
        )
        .await
    }
}

#[derive(Debug, Clone)]
pub struct HttpLastNameClient {
    client: Client,
    base_url: String,
}

impl HttpLastNameClient {
    pub fn new(base_url: String) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl LastNameClient for HttpLastNameClient {
    async fn random_last_name(&self) -> Result<LastNameResponse> {
        get_json(
            &self.client,
            "last-name-service",
            &self.base_url,
            "/last-name/random",
        )
        .await
    }
}
