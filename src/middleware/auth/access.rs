//! Access token (JWT) verification → AuthCtx into request extensions.
//!
//! - Extracts `Authorization: Bearer <jwt>`, verifies it via AuthService
//!   (signature + iss/aud/exp + strict claim checks), and stores the verified
//!   subject as `AuthCtx.user_id`.
//! - Any failure is 401 before the request reaches a handler; no persistence
//!   access happens for unauthenticated requests.
//! - Ownership (subject == path owner) is checked in the handlers, after this.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::AuthCtx;
use crate::error::AppError;
use crate::state::AppState;

/// Wrap a router so every route in it requires a verified access token.
///
/// Example:
/// ```ignore
/// let v1 = middleware::auth::access::apply(api::v1::routes(), state.clone());
/// app = app.nest("/api/v1", v1);
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8's from_fn cannot take a State extractor, so pass state explicitly.
    router.layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let auth = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = auth.strip_prefix("Bearer ").ok_or(AppError::Unauthorized)?;

    let verified = match state.auth.verify_verified(token) {
        Ok(verified) => verified,
        Err(err) => {
            tracing::warn!(
                error = ?err,
                "access token verification failed"
            );
            return Err(AppError::Unauthorized);
        }
    };

    let auth_ctx = AuthCtx::new(verified.user_id);

    // middleware → extractor handoff
    req.extensions_mut().insert(auth_ctx);

    Ok(next.run(req).await)
}
