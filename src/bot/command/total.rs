use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};

use crate::{
    bot::embed,
    error::AppError,
    service::stats::{StatsService, TOTALS_TOP_K},
    state::AppState,
};

pub const NAME: &str = "total";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Kingdom KvK totals of the top 300 governors by power")
}

pub async fn run(
    ctx: &Context,
    state: &AppState,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let totals = StatsService::new(&state.db).kingdom_totals().await?;

    if totals.rows == 0 {
        return Err(AppError::NotFound("No KvK stats available yet.".to_string()));
    }

    let response =
        CreateInteractionResponseMessage::new().embed(embed::kingdom_totals(&totals, TOTALS_TOP_K));

    command
        .create_response(&ctx.http, CreateInteractionResponse::Message(response))
        .await?;

    Ok(())
}
