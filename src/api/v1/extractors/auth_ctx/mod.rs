/*!
 * Authentication context extractor
 *
 * Responsibility:
 * - Provide the authenticated request context (AuthCtx) to handlers
 * - HTTP / axum specifics stay in core; the type itself lives in types
 *
 * Public API:
 * - AuthCtx
 * - AuthCtxExtractor
 */

mod core;
mod types;

pub use core::AuthCtxExtractor;
pub use types::AuthCtx;
