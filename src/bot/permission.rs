use std::collections::HashSet;

use serenity::all::{CommandInteraction, Permissions};

use crate::{error::AppError, state::AppState};

pub static ACCESS_DENIED_MESSAGE: &str = "You don't have access to this command";

/// True when the user is a configured owner or holds the Administrator permission.
pub fn is_admin(owner_ids: &HashSet<u64>, user_id: u64, permissions: Option<Permissions>) -> bool {
    owner_ids.contains(&user_id) || permissions.is_some_and(|p| p.administrator())
}

/// Gate for administration-only commands.
///
/// # Returns
/// - `Ok(())` - Caller may run the command
/// - `Err(AppError::PermissionDenied)` - Caller is not an admin; replied to ephemerally
pub fn administration_only(state: &AppState, command: &CommandInteraction) -> Result<(), AppError> {
    let permissions = command.member.as_ref().and_then(|member| member.permissions);

    if is_admin(&state.owner_ids, command.user.id.get(), permissions) {
        return Ok(());
    }

    tracing::info!(
        "Denied /{} for user {}",
        command.data.name,
        command.user.id
    );

    Err(AppError::PermissionDenied(ACCESS_DENIED_MESSAGE.to_string()))
}
