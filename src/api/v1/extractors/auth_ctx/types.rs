/*
 * Responsibility
 * - The "authenticated context" type as seen from handlers.
 * - The middleware verifies the credential and stores this in request
 *   extensions; handlers only ever see this type.
 *
 * Notes
 * - JWT verification itself lives in middleware/services. This is the contract.
 */

/// Context attached to an authenticated request.
///
/// - `user_id` is the verified `sub` claim: the authoritative owner identifier
///   for every task operation. Path-level ownership (subject == path owner) is
///   checked separately, per request.
/// - `jti` is kept for log correlation only.
#[derive(Debug, Clone)]
pub struct AuthCtx {
    pub user_id: String,
    pub jti: Option<String>,
}

impl AuthCtx {
    pub fn new(user_id: String) -> Self {
        Self { user_id, jti: None }
    }
}
