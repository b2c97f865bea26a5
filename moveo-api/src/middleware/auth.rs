use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use moveo_core::Role;

use crate::{error::AppError, state::AppState};

// ============================================================================
// JWT Claims
// ============================================================================

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionClaims {
    pub sub: String,
    pub email: String,
    pub role: Role,
    pub exp: usize,
}

fn session_claims(state: &AppState, req: &Request) -> Result<SessionClaims, AppError> {
    let token = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::AuthenticationError("Please log in to continue.".to_string()))?;

    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(state.auth.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::AuthenticationError(format!("Invalid session: {}", e)))
}

// ============================================================================
// Role Middleware
// ============================================================================

pub async fn user_auth_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    require_role(&state, req, next, Role::User).await
}

pub async fn admin_auth_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    require_role(&state, req, next, Role::Admin).await
}

async fn require_role(
    state: &AppState,
    mut req: Request,
    next: Next,
    role: Role,
) -> Result<Response, AppError> {
    let claims = session_claims(state, &req)?;

    if claims.role != role {
        return Err(AppError::AuthorizationError(format!(
            "This action requires the {} role.",
            role.as_str()
        )));
    }

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
