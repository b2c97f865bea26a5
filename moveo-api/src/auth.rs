use axum::{extract::State, routing::post, Json, Router};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use moveo_core::{Credentials, User};

use crate::{error::AppError, middleware::SessionClaims, state::AppState};

#[derive(Debug, Deserialize)]
struct SignupRequest {
    email: String,
    password: String,
}

#[derive(Debug, Serialize)]
struct AuthResponse {
    token: String,
    user: User,
    message: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/auth/login", post(login))
        .route("/v1/auth/signup", post(signup))
}

async fn login(
    State(state): State<AppState>,
    Json(creds): Json<Credentials>,
) -> Result<Json<AuthResponse>, AppError> {
    let user = state.identity.login(&creds)?;
    let message = format!("Welcome, {} {}!", user.role.as_str(), user.email);
    respond(&state, user, message)
}

async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let user = state.identity.signup(&req.email, &req.password)?;
    let message = format!("Account created for {}. Welcome!", user.email);
    respond(&state, user, message)
}

fn respond(state: &AppState, user: User, message: String) -> Result<Json<AuthResponse>, AppError> {
    let claims = SessionClaims {
        sub: user.uid.clone(),
        email: user.email.clone(),
        role: user.role,
        exp: (Utc::now() + Duration::seconds(state.auth.expiration as i64)).timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(state.auth.secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalServerError(format!("Token encoding failed: {}", e)))?;

    Ok(Json(AuthResponse { token, user, message }))
}
