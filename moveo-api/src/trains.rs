use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use moveo_core::{train::normalize_station, ClassFilter, SearchQuery, Train};

use crate::{error::AppError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub date: Option<String>,
    pub passengers: Option<u32>,
    pub class: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub date: NaiveDate,
    pub passengers: u32,
    pub trains: Vec<Train>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/stations", get(list_stations))
        .route("/v1/trains", get(list_trains))
        .route("/v1/trains/search", get(search_trains))
}

async fn list_stations(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.ledger.lock().await.stations())
}

async fn list_trains(State(state): State<AppState>) -> Json<Vec<Train>> {
    Json(state.ledger.lock().await.trains().to_vec())
}

async fn search_trains(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    let (date, query) = params.into_query()?;
    let trains = state.ledger.lock().await.search(&query);

    tracing::debug!("Search {:?} matched {} trains", query, trains.len());
    Ok(Json(SearchResponse {
        date,
        passengers: query.min_seats,
        trains,
    }))
}

impl SearchParams {
    fn into_query(self) -> Result<(NaiveDate, SearchQuery), AppError> {
        let date = match self.date.as_deref().map(str::trim) {
            None | Some("") => {
                return Err(AppError::ValidationError("Please select a travel date.".to_string()))
            }
            Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                AppError::ValidationError(format!("Invalid travel date: {}", raw))
            })?,
        };

        let from = self.from.as_deref().map(normalize_station).filter(|s| !s.is_empty());
        let to = self.to.as_deref().map(normalize_station).filter(|s| !s.is_empty());
        if from.is_some() && from == to {
            return Err(AppError::ValidationError(
                "Source and Destination cannot be the same.".to_string(),
            ));
        }

        let class = match self.class.as_deref() {
            Some(raw) => raw.parse::<ClassFilter>()?,
            None => ClassFilter::All,
        };
        let passengers = self.passengers.unwrap_or(1).max(1);

        Ok((date, SearchQuery::new(from.as_deref(), to.as_deref(), class, passengers)))
    }
}
