use std::sync::Arc;
use std::time::Duration;

use axum::error_handling::HandleErrorLayer;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use railnet_core::{
    AdvancedMetrics, Algorithm, DualPathResult, GraphData, MstStep, NetworkStats, ScoredNode,
    SpanningTreeAlgorithm, WeightDimension, WeightedGraph, build_spanning_tree, network_stats,
    plan_dual_path, plan_multi_stop_path, top_advanced_metrics, top_betweenness,
};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ApiError;

/// Shared by every handler; the graph is never mutated after loading
#[derive(Clone)]
pub struct AppState {
    pub graph: Arc<WeightedGraph>,
    pub top_n: usize,
}

pub fn router(state: AppState, config: &ServerConfig) -> Router {
    let routes = Router::new()
        .route("/api/graph-data", get(graph_data))
        .route("/api/cities", get(cities))
        .route("/api/path", post(find_path))
        .route("/api/path/geojson", post(find_path_geojson))
        .route("/api/mst", get(spanning_tree))
        .route("/api/hubs", get(hubs))
        .route("/api/advanced-analysis", get(advanced_analysis))
        .route("/api/stats", get(stats));

    with_middleware(routes, config).with_state(state)
}

/// Wraps every route in load shedding, timeouts, tracing and CORS.
///
/// `Router::layer` wraps every route on its own, so the concurrency limit
/// uses the global layer to keep one semaphore for the whole router.
fn with_middleware<S>(routes: Router<S>, config: &ServerConfig) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let middleware = ServiceBuilder::new()
        .layer(HandleErrorLayer::new(ApiError::from_middleware))
        .load_shed()
        .layer(GlobalConcurrencyLimitLayer::new(
            config.max_concurrent_requests,
        ))
        .timeout(Duration::from_secs(config.request_timeout_secs));

    routes
        .layer(middleware)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[derive(Debug, Deserialize)]
struct PathRequest {
    start: Option<String>,
    end: Option<String>,
    #[serde(default)]
    waypoints: Vec<String>,
    algorithm: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MstQuery {
    algorithm: Option<String>,
    weight: Option<String>,
}

#[derive(Debug, Serialize)]
struct MstResponse {
    algorithm: SpanningTreeAlgorithm,
    weight: WeightDimension,
    steps: Vec<MstStep>,
}

async fn graph_data(State(state): State<AppState>) -> Json<GraphData> {
    Json(state.graph.graph_data())
}

async fn cities(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.graph.cities().map(|city| city.id.clone()).collect())
}

async fn find_path(
    State(state): State<AppState>,
    payload: Result<Json<PathRequest>, JsonRejection>,
) -> Result<Json<DualPathResult>, ApiError> {
    Ok(Json(plan_route(&state.graph, payload)?))
}

async fn find_path_geojson(
    State(state): State<AppState>,
    payload: Result<Json<PathRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let result = plan_route(&state.graph, payload)?;
    let body = result.to_geojson_string(&state.graph)?;
    Ok(([(header::CONTENT_TYPE, "application/geo+json")], body).into_response())
}

/// Plain start/end queries go to the dual-objective router, anything with
/// waypoints to the multi-stop router. The algorithm is validated either way,
/// although multi-stop routes always use Dijkstra.
fn plan_route(
    graph: &WeightedGraph,
    payload: Result<Json<PathRequest>, JsonRejection>,
) -> Result<DualPathResult, ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let (Some(start), Some(end)) = (request.start, request.end) else {
        return Err(ApiError::BadRequest("Missing start or end".to_string()));
    };

    let algorithm = match request.algorithm.as_deref() {
        Some(name) => name.parse::<Algorithm>()?,
        None => Algorithm::default(),
    };

    let result = if request.waypoints.is_empty() {
        tracing::debug!(%start, %end, %algorithm, "planning route");
        plan_dual_path(graph, &start, &end, algorithm)?
    } else {
        tracing::debug!(
            %start,
            %end,
            %algorithm,
            waypoints = request.waypoints.len(),
            "planning multi-stop route with dijkstra"
        );
        plan_multi_stop_path(graph, &start, &end, &request.waypoints)?
    };
    Ok(result)
}

async fn spanning_tree(
    State(state): State<AppState>,
    Query(query): Query<MstQuery>,
) -> Result<Json<MstResponse>, ApiError> {
    let algorithm = match query.algorithm.as_deref() {
        Some(name) => name.parse()?,
        None => SpanningTreeAlgorithm::default(),
    };
    let weight = match query.weight.as_deref() {
        Some(name) => name.parse()?,
        None => WeightDimension::Cost,
    };

    Ok(Json(MstResponse {
        algorithm,
        weight,
        steps: build_spanning_tree(&state.graph, algorithm, weight),
    }))
}

async fn hubs(State(state): State<AppState>) -> Json<Vec<ScoredNode>> {
    Json(top_betweenness(&state.graph, state.top_n))
}

async fn advanced_analysis(State(state): State<AppState>) -> Json<AdvancedMetrics> {
    Json(top_advanced_metrics(&state.graph, state.top_n))
}

async fn stats(State(state): State<AppState>) -> Json<NetworkStats> {
    Json(network_stats(&state.graph))
}
