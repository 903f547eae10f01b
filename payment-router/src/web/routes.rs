//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tracing::{info, warn};

use crate::domain::RailType;
use crate::routing::{RouteQuery, RouteSelection};
use crate::transfer::{TransferDraft, TransferRequestPayload, Violations};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/routes/sources", get(sources))
        .route("/api/routes/destinations", get(destinations))
        .route("/api/routes/wallet", post(wallet_destinations))
        .route("/api/routes/selection", post(selection))
        .route("/api/transfers/validate", post(validate_transfer))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Source rails, and the currencies on one rail when it is given.
async fn sources(
    State(state): State<AppState>,
    query: Result<Query<SourcesRequest>, QueryRejection>,
) -> Result<Json<SourcesResponse>, AppError> {
    let Query(req) = query?;

    let rail_type = req
        .rail_type
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(|s| {
            RailType::parse_name(s).ok_or_else(|| AppError::BadRequest {
                message: format!("Invalid rail type: {}", s),
            })
        })
        .transpose()?;

    let resolver = state.resolver();
    let source_currencies = req
        .source_rail
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(|rail| resolver.source_currencies(rail_type, rail));

    Ok(Json(SourcesResponse {
        source_rails: resolver.source_rails(rail_type),
        source_currencies,
    }))
}

/// Destination rails for a source, currencies for a chosen rail, and the
/// route minimum once a destination currency is chosen.
async fn destinations(
    State(state): State<AppState>,
    query: Result<Query<DestinationsRequest>, QueryRejection>,
) -> Result<Json<DestinationsResponse>, AppError> {
    let Query(req) = query?;

    let resolver = state.resolver();
    let route_query = RouteQuery::new(req.source_rail, req.source_currency);
    let destination_rail = req.destination_rail.as_deref().filter(|s| !s.is_empty());
    let routes = resolver.resolve(&route_query, destination_rail);

    let transaction_minimum = match (destination_rail, req.destination_currency.as_deref()) {
        (Some(rail), Some(currency)) if !currency.is_empty() => {
            let rows = resolver.query_by_source(
                route_query.source_rail.as_str(),
                route_query.source_currency.as_str(),
            );
            resolver
                .transaction_minimum(&rows, rail, currency)
                .map(|minimum| minimum.to_string())
        }
        _ => None,
    };

    Ok(Json(DestinationsResponse {
        routes,
        transaction_minimum,
    }))
}

/// Destination currencies when paying into an existing wallet.
async fn wallet_destinations(
    State(state): State<AppState>,
    body: Result<Json<WalletRequest>, JsonRejection>,
) -> Result<Json<WalletResponse>, AppError> {
    let Json(req) = body?;

    let resolver = state.resolver();
    let rows = resolver.query_by_source(&req.source_rail, &req.source_currency);
    let route = resolver.wallet_destinations(&rows, &req.wallet);

    Ok(Json(WalletResponse::from(route)))
}

/// Re-derive a cascading selection, dropping choices no longer offered.
async fn selection(
    State(state): State<AppState>,
    body: Result<Json<RouteSelection>, JsonRejection>,
) -> Result<Json<RouteSelection>, AppError> {
    let Json(mut selection) = body?;
    selection.refresh(&state.resolver());
    Ok(Json(selection))
}

/// Validate a transfer draft into the payload to submit upstream.
async fn validate_transfer(
    State(state): State<AppState>,
    body: Result<Json<TransferDraft>, JsonRejection>,
) -> Result<Json<TransferRequestPayload>, AppError> {
    let Json(draft) = body?;

    let payload = state.validator().validate(&draft)?;
    info!(on_behalf_of = %payload.on_behalf_of, "transfer draft accepted");
    Ok(Json(payload))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Rejected(Violations),
}

impl From<QueryRejection> for AppError {
    fn from(e: QueryRejection) -> Self {
        AppError::BadRequest {
            message: e.body_text(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::BadRequest {
            message: e.body_text(),
        }
    }
}

impl From<Violations> for AppError {
    fn from(violations: Violations) -> Self {
        AppError::Rejected(violations)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest { message } => {
                warn!(status = %StatusCode::BAD_REQUEST, %message, "bad request");
                let body = Json(ErrorResponse { error: message });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            AppError::Rejected(violations) => {
                let body = Json(ViolationReport::from(&violations));
                (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
            }
        }
    }
}
