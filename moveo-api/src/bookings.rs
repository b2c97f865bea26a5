use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Extension, Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use moveo_core::{Booking, FareClassName};
use moveo_genai::ItineraryResult;

use crate::{
    error::AppError,
    middleware::{user_auth_middleware, SessionClaims},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub train_id: String,
    pub date: NaiveDate,
    pub passengers: u32,
    pub class: FareClassName,
}

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub booking: Booking,
    pub message: String,
}

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/v1/bookings", get(list_bookings).post(create_booking))
        .route("/v1/bookings/{id}", delete(cancel_booking))
        .route("/v1/bookings/{id}/itinerary", post(generate_itinerary))
        .route_layer(axum::middleware::from_fn_with_state(state, user_auth_middleware))
}

async fn list_bookings(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
) -> Json<Vec<Booking>> {
    Json(state.ledger.lock().await.bookings_for(&claims.sub))
}

async fn create_booking(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), AppError> {
    let booking = state.ledger.lock().await.reserve(
        &claims.sub,
        &req.train_id,
        req.date,
        req.passengers,
        req.class,
    )?;

    let message = format!("Booking confirmed! Total: ₹{:.2}.", booking.total_price);
    Ok((StatusCode::CREATED, Json(BookingResponse { booking, message })))
}

async fn cancel_booking(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    Path(id): Path<Uuid>,
) -> Result<Json<BookingResponse>, AppError> {
    let mut ledger = state.ledger.lock().await;
    owned_booking(ledger.booking(&id), &claims, id)?;
    let booking = ledger.release(&id)?;
    drop(ledger);

    let message = format!("Booking {} has been cancelled.", booking.id);
    Ok(Json(BookingResponse { booking, message }))
}

async fn generate_itinerary(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    Path(id): Path<Uuid>,
) -> Result<Json<ItineraryResult>, AppError> {
    let booking = {
        let ledger = state.ledger.lock().await;
        owned_booking(ledger.booking(&id), &claims, id)?.clone()
    };

    let itinerary = state
        .generator
        .generate_itinerary(&booking.destination, booking.date)
        .await?;
    Ok(Json(itinerary))
}

/// Another user's booking is reported exactly like a missing one.
fn owned_booking<'a>(
    booking: Option<&'a Booking>,
    claims: &SessionClaims,
    id: Uuid,
) -> Result<&'a Booking, AppError> {
    booking
        .filter(|b| b.user_id == claims.sub)
        .ok_or_else(|| AppError::NotFoundError(format!("Booking not found: {}", id)))
}
