//! Role-based authorization policy.
//!
//! Authorization is an explicit predicate evaluated at the top of each
//! restricted handler, after token validation has produced an [`Identity`].

use wellbeat_auth_types::identity::Identity;
use wellbeat_domain::user::UserRole;

use crate::error::ApiServiceError;

/// Require the caller to hold the Manager role.
///
/// Fails with [`ApiServiceError::Forbidden`] (403) — distinct from the 401
/// the extractor produces for missing or invalid tokens.
pub fn require_manager(identity: &Identity) -> Result<(), ApiServiceError> {
    if identity.role == UserRole::Manager {
        Ok(())
    } else {
        Err(ApiServiceError::Forbidden)
    }
}
