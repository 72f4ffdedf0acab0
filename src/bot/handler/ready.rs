use serenity::all::{ActivityData, Command, Context, GuildId, Ready};

use crate::bot::command;

/// Handle the bot connecting to Discord
///
/// Registers the slash commands, to one guild when configured (applies instantly) or
/// globally otherwise.
pub async fn handle_ready(ctx: Context, ready: Ready, guild_id: Option<u64>) {
    tracing::info!("{} is connected to Discord!", ready.user.name);

    ctx.set_activity(Some(ActivityData::watching("the kingdom stats")));

    let commands = command::definitions();
    let count = commands.len();

    let result = match guild_id {
        Some(guild_id) => GuildId::new(guild_id)
            .set_commands(&ctx.http, commands)
            .await
            .map(|_| format!("guild {}", guild_id)),
        None => Command::set_global_commands(&ctx.http, commands)
            .await
            .map(|_| "global scope".to_string()),
    };

    match result {
        Ok(scope) => tracing::info!("Registered {} slash commands in {}", count, scope),
        Err(e) => tracing::error!("Failed to register slash commands: {:?}", e),
    }
}
