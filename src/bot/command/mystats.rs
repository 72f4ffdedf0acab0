use serenity::all::{CommandInteraction, Context, CreateCommand, Message};

use crate::{
    bot::component::menu, error::AppError, menu::Screen, service::account::AccountService,
    state::AppState,
};

pub const NAME: &str = "mystats";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Show the stats of one of your linked accounts")
}

/// Opens the category then slot menu for the caller's linked governors.
pub async fn run(
    ctx: &Context,
    state: &AppState,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    AccountService::new(&state.db)
        .require_linked(command.user.id.get())
        .await?;

    let screen = Screen::StatsCategory { slot: None };

    menu::open_from_command(ctx, state, command, screen, state.menu_timeout).await
}

pub async fn run_from_message(
    ctx: &Context,
    state: &AppState,
    message: &Message,
) -> Result<(), AppError> {
    AccountService::new(&state.db)
        .require_linked(message.author.id.get())
        .await?;

    let screen = Screen::StatsCategory { slot: None };

    menu::open_from_message(ctx, state, message, screen, state.menu_timeout).await
}
