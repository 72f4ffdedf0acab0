//! Error replies at the command boundary.
//!
//! Every handler returns `Result<(), AppError>`; these helpers turn the error into what
//! the user sees so no failure escapes to serenity.

use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
    CreateMessage, EditInteractionResponse, Message,
};

use crate::{
    bot::embed,
    error::{AppError, ErrorReply},
};

/// Replies to a failed slash command.
///
/// Uses a fresh response when the command has not been answered yet, otherwise edits
/// the existing one.
pub async fn respond_error(ctx: &Context, command: &CommandInteraction, err: AppError) {
    let reply = err.into_reply();

    let message = match &reply {
        ErrorReply::Notice { message, ephemeral } => CreateInteractionResponseMessage::new()
            .content(message)
            .ephemeral(*ephemeral),
        ErrorReply::Failure => CreateInteractionResponseMessage::new()
            .embed(embed::error())
            .ephemeral(true),
    };

    if command
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await
        .is_ok()
    {
        return;
    }

    let edit = match reply {
        ErrorReply::Notice { message, .. } => EditInteractionResponse::new()
            .content(message)
            .components(Vec::new()),
        ErrorReply::Failure => EditInteractionResponse::new()
            .content("")
            .embed(embed::error())
            .components(Vec::new()),
    };

    if let Err(e) = command.edit_response(&ctx.http, edit).await {
        tracing::error!(
            "Failed to report error for /{}: {:?}",
            command.data.name,
            e
        );
    }
}

/// Replies to a failed prefix command in the same channel.
pub async fn send_error(ctx: &Context, message: &Message, err: AppError) {
    let reply = match err.into_reply() {
        ErrorReply::Notice { message: text, .. } => CreateMessage::new().content(text),
        ErrorReply::Failure => CreateMessage::new().embed(embed::error()),
    };

    if let Err(e) = message
        .channel_id
        .send_message(&ctx.http, reply.reference_message(message))
        .await
    {
        tracing::error!("Failed to report prefix command error: {:?}", e);
    }
}
