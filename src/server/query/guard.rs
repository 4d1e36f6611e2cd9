//! Ownership checks applied before mutating author-owned resources.

use crate::server::error::{auth::AuthError, AppError};

/// Requires `user_id` to be the owner of the resource.
///
/// # Arguments
/// - `user_id` - Acting user
/// - `owner_id` - Author or owner stored on the resource
/// - `resource` - Resource label for the log message
/// - `resource_id` - Id of the resource
///
/// # Returns
/// - `Ok(())` - The acting user owns the resource
/// - `Err(AppError::AuthErr(AuthError::NotOwner))` - Someone else owns it
pub fn ensure_owner(
    user_id: i32,
    owner_id: i32,
    resource: &'static str,
    resource_id: i32,
) -> Result<(), AppError> {
    if user_id == owner_id {
        Ok(())
    } else {
        Err(AuthError::NotOwner {
            user_id,
            resource,
            resource_id,
        }
        .into())
    }
}
