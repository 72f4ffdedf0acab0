//! Slash command definitions and dispatch.
//!
//! Each command lives in its own module exposing `NAME`, `register()` and `run()`.
//! `run` returns `Result<(), AppError>`; failures are turned into replies here, at the
//! single command boundary.

pub mod link;
pub mod me;
pub mod mystats;
pub mod stats;
pub mod sync;
pub mod top10;
pub mod total;
pub mod unlink;

use serenity::all::{CommandInteraction, Context, CreateCommand};

use crate::{bot::reply, state::AppState};

/// Every slash command the bot registers on ready.
pub fn definitions() -> Vec<CreateCommand> {
    vec![
        link::register(),
        unlink::register(),
        me::register(),
        mystats::register(),
        stats::register(),
        top10::register(),
        total::register(),
        sync::register(),
    ]
}

/// Runs a slash command and reports any error to the invoking user.
pub async fn handle_command(ctx: &Context, state: &AppState, command: &CommandInteraction) {
    let result = match command.data.name.as_str() {
        link::NAME => link::run(ctx, state, command).await,
        unlink::NAME => unlink::run(ctx, state, command).await,
        me::NAME => me::run(ctx, state, command).await,
        mystats::NAME => mystats::run(ctx, state, command).await,
        stats::NAME => stats::run(ctx, state, command).await,
        top10::NAME => top10::run(ctx, state, command).await,
        total::NAME => total::run(ctx, state, command).await,
        sync::NAME => sync::run(ctx, state, command).await,
        other => {
            tracing::warn!("Received unknown command /{}", other);
            Ok(())
        }
    };

    if let Err(err) = result {
        reply::respond_error(ctx, command, err).await;
    }
}

fn string_option<'a>(command: &'a CommandInteraction, name: &str) -> Option<&'a str> {
    command
        .data
        .options
        .iter()
        .find(|option| option.name == name)
        .and_then(|option| option.value.as_str())
}

fn integer_option(command: &CommandInteraction, name: &str) -> Option<i64> {
    command
        .data
        .options
        .iter()
        .find(|option| option.name == name)
        .and_then(|option| option.value.as_i64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_names_are_unique() {
        let mut names = vec![
            link::NAME,
            unlink::NAME,
            me::NAME,
            mystats::NAME,
            stats::NAME,
            top10::NAME,
            total::NAME,
            sync::NAME,
        ];
        names.sort_unstable();
        names.dedup();

        assert_eq!(names.len(), definitions().len());
    }
}
