use crate::core::names::NamePool;
use crate::core::orchestrator::HelloService;
use crate::domain::model::{FirstNameResponse, HelloResponse, LastNameResponse};
use crate::domain::ports::{FirstNameClient, LastNameClient};
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn first_name_routes() -> Router {
    Router::new()
        .route("/first-name/random", get(random_first_name))
        .with_state(NamePool::first_names())
        .layer(TraceLayer::new_for_http())
}

async fn random_first_name(State(pool): State<NamePool>) -> Json<FirstNameResponse> {
    Json(FirstNameResponse {
        first_name: pool.random_name().to_string(),
    })
}

pub fn last_name_routes() -> Router {
    Router::new()
        .route("/last-name/random", get(random_last_name))
        .with_state(NamePool::last_names())
        .layer(TraceLayer::new_for_http())
}

async fn random_last_name(State(pool): State<NamePool>) -> Json<LastNameResponse> {
    Json(LastNameResponse {
        last_name: pool.random_name().to_string(),
    })
}

pub fn hello_routes<F, L>(service: Arc<HelloService<F, L>>) -> Router
where
    F: FirstNameClient + 'static,
    L: LastNameClient + 'static,
{
    Router::new()
        .route("/hello", get(hello::<F, L>))
        .with_state(service)
        .layer(TraceLayer::new_for_http())
}

async fn hello<F, L>(
    State(service): State<Arc<HelloService<F, L>>>,
) -> Result<Json<HelloResponse>, (StatusCode, String)>
where
    F: FirstNameClient + 'static,
    L: LastNameClient + 'static,
{
    let response = service.hello().await.map_err(|e| {
        tracing::error!("Greeting composition failed: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    Ok(Json(response))
}
