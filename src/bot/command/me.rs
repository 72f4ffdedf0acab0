use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateInteractionResponse,
    CreateInteractionResponseMessage, CreateMessage, Message,
};

use crate::{
    bot::embed::{self, Requester},
    error::AppError,
    service::account::AccountService,
    state::AppState,
};

pub const NAME: &str = "me";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Show the governor accounts linked to you")
}

pub async fn run(
    ctx: &Context,
    state: &AppState,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let accounts = AccountService::new(&state.db)
        .get_linked(command.user.id.get())
        .await?;

    let response = CreateInteractionResponseMessage::new()
        .embed(embed::linked_accounts(&Requester::from(&command.user), accounts.as_ref()));

    command
        .create_response(&ctx.http, CreateInteractionResponse::Message(response))
        .await?;

    Ok(())
}

/// Prefix variant, replying in the channel.
pub async fn run_from_message(
    ctx: &Context,
    state: &AppState,
    message: &Message,
) -> Result<(), AppError> {
    let accounts = AccountService::new(&state.db)
        .get_linked(message.author.id.get())
        .await?;

    let reply = CreateMessage::new()
        .embed(embed::linked_accounts(
            &Requester::from(&message.author),
            accounts.as_ref(),
        ))
        .reference_message(message);

    message.channel_id.send_message(&ctx.http, reply).await?;

    Ok(())
}
