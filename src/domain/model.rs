use serde::{Deserialize, Serialize};

/// Body of `GET /first-name/random`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirstNameResponse {
    pub first_name: String,
}

/// Body of `GET /last-name/random`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastNameResponse {
    pub last_name: String,
}

/// Body of `GET /hello`, composed from the two leaf responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelloResponse {
    pub message: String,
    pub first_name: String,
    pub last_name: String,
}
