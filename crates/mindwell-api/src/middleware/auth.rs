use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use mindwell_auth::error::AuthError;
use mindwell_auth::jwt::bearer_token;

use crate::error::ApiError;
use crate::state::AppState;

/// JWT validation middleware.
///
/// Extracts the `Authorization: Bearer <token>` header and validates the JWT.
/// On success, inserts `AuthUser` into request extensions for handlers to use.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let sub = {
        let header = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AuthError::MissingToken)?;

        state.verifier.verify(bearer_token(header)?)?
    };

    req.extensions_mut().insert(AuthUser { sub });

    Ok(next.run(req).await)
}

/// Authenticated user extracted from JWT claims.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub sub: String,
}
