//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::domain::ModeFilter;
use crate::search::{OfferGenerator, ResultsEvent, ResultsState};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/cities/search", get(search_cities))
        .route("/api/routes/search", get(search_routes))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search cities by name, for the search form's autocomplete.
async fn search_cities(
    State(state): State<AppState>,
    Query(req): Query<CitySearchRequest>,
) -> Json<CitySearchResponse> {
    let limit = req.limit.unwrap_or(10).min(50);
    let cities = state
        .cities
        .search(&req.q, limit)
        .into_iter()
        .filter_map(|name| {
            let coord = state.cities.lookup(name)?;
            Some(CityResult {
                name: name.to_string(),
                coordinates: [coord.lon, coord.lat],
            })
        })
        .collect();

    Json(CitySearchResponse { cities })
}

/// Search for routes between two cities.
///
/// Runs the full pipeline: generate a fresh batch, feed it through the
/// results state under the requested filter, and return the snapshot.
/// Unknown cities are not an error; they yield an empty batch.
async fn search_routes(
    State(state): State<AppState>,
    Query(req): Query<SearchRoutesRequest>,
) -> Result<Response, AppError> {
    // This handler is the form validation in front of the generator:
    // empty or identical endpoints never reach it.
    if req.from.is_empty() || req.to.is_empty() {
        return Err(AppError::BadRequest {
            message: "both 'from' and 'to' cities are required".to_string(),
        });
    }
    if req.from == req.to {
        return Err(AppError::BadRequest {
            message: "origin and destination must differ".to_string(),
        });
    }

    // The travel date is validated but plays no part in generation.
    if let Some(ref date) = req.date {
        NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| AppError::BadRequest {
            message: format!("invalid date (expected YYYY-MM-DD): {}", date),
        })?;
    }

    let filter = match req.mode {
        Some(ref mode) => ModeFilter::parse(mode).map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?,
        None => ModeFilter::All,
    };

    let generator = OfferGenerator::new(&state.cities);
    let mut rng = SmallRng::from_entropy();
    let offers = generator.generate(&req.from, &req.to, &mut rng);

    if offers.is_empty() {
        tracing::debug!(from = %req.from, to = %req.to, "no offers: unknown city");
    }

    let mut results = ResultsState::new();
    results.apply(ResultsEvent::SetBatch(offers));
    results.apply(ResultsEvent::SetFilter(filter));

    tracing::debug!(
        from = %req.from,
        to = %req.to,
        filter = %filter,
        offers = results.filtered().len(),
        "served route search"
    );

    Ok(Json(SearchRoutesResponse::from_state(&results)).into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        tracing::warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
