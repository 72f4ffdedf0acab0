use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    Mentionable,
};

use crate::{
    bot::{command::integer_option, component::menu},
    error::AppError,
    menu::Screen,
    service::account::AccountService,
    state::AppState,
};

pub const NAME: &str = "linkme";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Link your governor account to your Discord profile")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                "governor_id",
                "Your in-game governor ID",
            )
            .required(true)
            .min_int_value(1),
        )
}

/// Shows the governor for confirmation, then asks which slot to link it into.
pub async fn run(
    ctx: &Context,
    state: &AppState,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let governor_id = integer_option(command, "governor_id")
        .and_then(|id| u64::try_from(id).ok())
        .unwrap_or_default();

    let governor = AccountService::new(&state.db)
        .find_governor(governor_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "{} Sorry, I cannot find you! Please verify the ID you provided or check if you're included in the scan.",
                command.user.mention()
            ))
        })?;

    let screen = Screen::LinkConfirm {
        governor_id: governor.governor_id,
        governor_name: governor.governor_name,
    };

    menu::open_from_command(ctx, state, command, screen, state.menu_timeout).await
}
