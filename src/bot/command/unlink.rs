use serenity::all::{CommandInteraction, Context, CreateCommand};

use crate::{
    bot::component::menu, error::AppError, menu::Screen, service::account::AccountService,
    state::AppState,
};

pub const NAME: &str = "unlinkme";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Unlink one of your governor accounts")
}

/// Offers the user's linked slots for unlinking.
pub async fn run(
    ctx: &Context,
    state: &AppState,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let linked = AccountService::new(&state.db)
        .get_linked(command.user.id.get())
        .await?
        .map(|linked| linked.linked_slots())
        .unwrap_or_default();

    if linked.is_empty() {
        return Err(AppError::NotFound(
            "Sorry, I cannot find you! Seems like your account isn't linked.".to_string(),
        ));
    }

    menu::open_from_command(
        ctx,
        state,
        command,
        Screen::UnlinkSlot { linked },
        state.menu_timeout,
    )
    .await
}
