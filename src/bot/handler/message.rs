use serenity::all::{Context, CreateMessage, Message};

use crate::{
    bot::{command, reply},
    state::AppState,
};

/// Text commands understood after the configured prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixCommand {
    MyStats,
    Me,
}

/// Parses `content` as a prefix command, e.g. `!mystats`.
///
/// The command name is matched case-insensitively; anything after it is ignored.
pub fn parse_prefix_command(content: &str, prefix: &str) -> Option<PrefixCommand> {
    let rest = content.trim_start().strip_prefix(prefix)?;
    let name = rest.split_whitespace().next()?;

    match name.to_lowercase().as_str() {
        "mystats" => Some(PrefixCommand::MyStats),
        "me" => Some(PrefixCommand::Me),
        _ => None,
    }
}

/// Handle message creation in a channel
pub async fn handle_message(state: &AppState, ctx: Context, message: Message) {
    if message.author.bot {
        return;
    }

    if let Some(prefix_command) = parse_prefix_command(&message.content, &state.command_prefix) {
        tracing::debug!(
            "Prefix command {:?} from user {}",
            prefix_command,
            message.author.id
        );

        let result = match prefix_command {
            PrefixCommand::MyStats => command::mystats::run_from_message(&ctx, state, &message).await,
            PrefixCommand::Me => command::me::run_from_message(&ctx, state, &message).await,
        };

        if let Err(err) = result {
            reply::send_error(&ctx, &message, err).await;
        }
        return;
    }

    let current_user_id = ctx.cache.current_user().id;
    if message.mentions_user_id(current_user_id) {
        let reply = CreateMessage::new()
            .content("You mentioned me!")
            .reference_message(&message);

        if let Err(e) = message.channel_id.send_message(&ctx.http, reply).await {
            tracing::error!("Failed to reply to mention: {:?}", e);
        }
    }
}
