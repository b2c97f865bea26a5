use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use moveo_catalog::TrainForm;
use moveo_core::{FareClassName, Train};

use crate::{error::AppError, middleware::admin_auth_middleware, state::AppState};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct AdminTrainView {
    #[serde(flatten)]
    pub train: Train,
    pub utilization: BTreeMap<FareClassName, f64>,
}

impl From<&Train> for AdminTrainView {
    fn from(train: &Train) -> Self {
        Self {
            train: train.clone(),
            utilization: train
                .classes
                .iter()
                .map(|(name, fare)| (name, fare.utilization()))
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TrainResponse {
    pub train: Train,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct DescriptionRequest {
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub destination: String,
    pub price_first: Option<Decimal>,
    pub price_economy: Option<Decimal>,
}

#[derive(Debug, Serialize)]
pub struct DescriptionResponse {
    pub description: String,
}

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/v1/admin/trains", get(list_trains).post(create_train))
        .route("/v1/admin/trains/description", post(generate_description))
        .route("/v1/admin/trains/{id}", put(update_train).delete(delete_train))
        .route_layer(axum::middleware::from_fn_with_state(state, admin_auth_middleware))
}

// ============================================================================
// Train Management Handlers
// ============================================================================

/// GET /v1/admin/trains
async fn list_trains(State(state): State<AppState>) -> Json<Vec<AdminTrainView>> {
    let ledger = state.ledger.lock().await;
    Json(ledger.trains().iter().map(AdminTrainView::from).collect())
}

/// POST /v1/admin/trains
async fn create_train(
    State(state): State<AppState>,
    Json(form): Json<TrainForm>,
) -> Result<(StatusCode, Json<TrainResponse>), AppError> {
    let new_train = form.into_new_train()?;
    let train = state.ledger.lock().await.add_train(new_train)?;

    let message = format!("Train {} added successfully!", train.train_number);
    Ok((StatusCode::CREATED, Json(TrainResponse { train, message })))
}

/// PUT /v1/admin/trains/{id}
async fn update_train(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(form): Json<TrainForm>,
) -> Result<Json<TrainResponse>, AppError> {
    let train = form.into_train(id)?;
    let train = state.ledger.lock().await.update_train(train)?;

    Ok(Json(TrainResponse {
        train,
        message: "Train details updated successfully!".to_string(),
    }))
}

/// DELETE /v1/admin/trains/{id}
async fn delete_train(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TrainResponse>, AppError> {
    let train = state.ledger.lock().await.delete_train(&id)?;

    let message = format!("Train ID {} has been deleted.", train.id);
    Ok(Json(TrainResponse { train, message }))
}

/// POST /v1/admin/trains/description
async fn generate_description(
    State(state): State<AppState>,
    Json(req): Json<DescriptionRequest>,
) -> Result<Json<DescriptionResponse>, AppError> {
    let (price_first, price_economy) = match (req.price_first, req.price_economy) {
        (Some(first), Some(economy))
            if !req.source.trim().is_empty() && !req.destination.trim().is_empty() =>
        {
            (first, economy)
        }
        _ => {
            return Err(AppError::ValidationError(
                "Please fill in Source, Destination, First Class Price, and Economy Class Price before generating a description.".to_string(),
            ))
        }
    };

    let description = state
        .generator
        .generate_marketing_description(
            req.source.trim(),
            req.destination.trim(),
            price_first,
            price_economy,
        )
        .await?;
    Ok(Json(DescriptionResponse { description }))
}
