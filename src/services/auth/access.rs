//! Ownership check: verified identity vs. the owner id from the URL path.
//!
//! This must run before any repo call — list included — so nothing about
//! another user's tasks leaks through errors or timing.

use crate::error::AppError;

/// Exact-equality comparison of the verified subject and the path owner id.
///
/// `Forbidden` means: the credential is valid, but the resource belongs to
/// someone else. This is distinct from `Unauthorized` (no valid credential),
/// which the auth middleware has already ruled out by the time this runs.
pub fn verify_user_access(identity: &str, path_user_id: &str) -> Result<(), AppError> {
    if identity == path_user_id {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_identity_passes() {
        assert!(verify_user_access("u1", "u1").is_ok());
    }

    #[test]
    fn mismatched_identity_is_forbidden() {
        assert!(matches!(
            verify_user_access("u1", "u2"),
            Err(AppError::Forbidden)
        ));
    }

    #[test]
    fn comparison_is_exact_not_prefix() {
        assert!(verify_user_access("u1", "u10").is_err());
        assert!(verify_user_access("u1", "U1").is_err());
        assert!(verify_user_access("u1", " u1").is_err());
    }
}
