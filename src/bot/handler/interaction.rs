use serenity::all::{Context, Interaction};

use crate::{
    bot::{command, component},
    state::AppState,
};

/// Handle an interaction: slash commands and button presses
pub async fn handle_interaction(state: &AppState, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(command) => {
            tracing::debug!(
                "Command /{} from user {}",
                command.data.name,
                command.user.id
            );
            command::handle_command(&ctx, state, &command).await;
        }
        Interaction::Component(component) => {
            component::handle_component(&ctx, state, &component).await;
        }
        _ => {}
    }
}
