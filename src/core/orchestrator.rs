use crate::domain::model::HelloResponse;
use crate::domain::ports::{FirstNameClient, LastNameClient};
use crate::utils::error::Result;

/// Composes one greeting from the two leaf services. Stateless; the two
/// collaborator clients are passed in at construction.
pub struct HelloService<F: FirstNameClient, L: LastNameClient> {
    first_name_client: F,
    last_name_client: L,
}

impl<F: FirstNameClient, L: LastNameClient> HelloService<F, L> {
    pub fn new(first_name_client: F, last_name_client: L) -> Self {
        Self {
            first_name_client,
            last_name_client,
        }
    }

    /// Calls both collaborators, then builds "Hallo <first> <last>!".
    /// Any collaborator failure propagates; there is no fallback name.
    pub async fn hello(&self) -> Result<HelloResponse> {
        let first = self.first_name_client.random_first_name().await?;
        let last = self.last_name_client.random_last_name().await?;

        tracing::info!("firstName: {:?}", first);
        tracing::info!("lastName: {:?}", last);

        let message = format!("Hallo {} {}!", first.first_name, last.last_name);
        Ok(HelloResponse {
            message,
            first_name: first.first_name,
            last_name: last.last_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{FirstNameResponse, LastNameResponse};
    use crate::utils::error::ServiceError;
    use async_trait::async_trait;

    struct FixedFirstName(&'static str);

    #[async_trait]
    impl FirstNameClient for FixedFirstName {
        async fn random_first_name(&self) -> Result<FirstNameResponse> {
            Ok(FirstNameResponse {
                first_name: self.0.to_string(),
            })
        }
    }

    struct FixedLastName(&'static str);

    #[async_trait]
    impl LastNameClient for FixedLastName {
        async fn random_last_name(&self) -> Result<LastNameResponse> {
            Ok(LastNameResponse {
                last_name: self.0.to_string(),
            })
        }
    }

    struct FailingFirstName;

    #[async_trait]
    impl FirstNameClient for FailingFirstName {
        async fn random_first_name(&self) -> Result<FirstNameResponse> {
            Err(ServiceError::UpstreamStatus {
                service: "first-name-service".to_string(),
                status: 500,
            })
        }
    }

    struct FailingLastName;

    #[async_trait]
    impl LastNameClient for FailingLastName {
        async fn random_last_name(&self) -> Result<LastNameResponse> {
            Err(ServiceError::UpstreamStatus {
                service: "last-name-service".to_string(),
                status: 500,
            })
        }
    }

    #[tokio::test]
    async fn test_hello_composes_exact_message() {
        let service = HelloService::new(FixedFirstName("Max"), FixedLastName("Müller"));
        let response = service.hello().await.unwrap();

        assert_eq!(response.message, "Hallo Max Müller!");
        assert_eq!(response.first_name, "Max");
        assert_eq!(response.last_name, "Müller");
    }

    #[tokio::test]
    async fn test_hello_serializes_with_camel_case_fields() {
        let service = HelloService::new(FixedFirstName("Anna"), FixedLastName("Schmidt"));
        let response = service.hello().await.unwrap();

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["message"], "Hallo Anna Schmidt!");
        assert_eq!(json["firstName"], "Anna");
        assert_eq!(json["lastName"], "Schmidt");
    }

    #[tokio::test]
    async fn test_hello_propagates_first_name_failure() {
        let service = HelloService::new(FailingFirstName, FixedLastName("Müller"));
        let result = service.hello().await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_hello_propagates_last_name_failure() {
        let service = HelloService::new(FixedFirstName("Max"), FailingLastName);
        let result = service.hello().await;
        assert!(result.is_err());
    }
}
