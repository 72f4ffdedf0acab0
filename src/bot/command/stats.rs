use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateInteractionResponse, CreateInteractionResponseMessage,
};

use crate::{
    bot::{
        command::string_option,
        component::menu,
        embed::{self, Requester},
    },
    error::AppError,
    menu::Screen,
    model::{
        account::AccountSlot,
        snapshot::{PlayerSnapshot, StatsCategory},
    },
    service::{account::AccountService, stats::StatsService},
    state::AppState,
    util::parse::parse_governor_id,
};

pub const NAME: &str = "stats";

pub fn register() -> CreateCommand {
    let category = StatsCategory::ALL.into_iter().fold(
        CreateCommandOption::new(CommandOptionType::String, "category", "Stats category"),
        |option, category| option.add_string_choice(category.label(), category.key()),
    );

    let account = AccountSlot::ALL.into_iter().fold(
        CreateCommandOption::new(CommandOptionType::String, "account", "Linked account"),
        |option, slot| option.add_string_choice(slot.name(), slot.key()),
    );

    CreateCommand::new(NAME)
        .description("Show governor stats")
        .add_option(category)
        .add_option(account)
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "id",
            "Look up any governor by ID",
        ))
}

/// Shows a stats card directly when enough options are given, otherwise opens the menu
/// at the first missing choice. An `account` given without `category` is kept and only
/// the category is asked for.
///
/// Only users with at least one linked governor may use it, including ID lookups.
pub async fn run(
    ctx: &Context,
    state: &AppState,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    AccountService::new(&state.db)
        .require_linked(command.user.id.get())
        .await?;

    let category = string_option(command, "category").and_then(StatsCategory::from_key);
    let slot = string_option(command, "account").and_then(AccountSlot::from_key);
    let stats = StatsService::new(&state.db);

    if let Some(raw_id) = string_option(command, "id") {
        let governor_id = parse_governor_id(raw_id).ok_or_else(|| {
            AppError::NotFound(format!("'{}' is not a valid governor ID.", raw_id.trim()))
        })?;

        let snapshot = stats
            .governor_stats(governor_id, category.unwrap_or(StatsCategory::General))
            .await?;

        return respond_card(ctx, state, command, &snapshot).await;
    }

    match (category, slot) {
        (Some(category), Some(slot)) => {
            let snapshot = stats
                .linked_stats(command.user.id.get(), category, slot)
                .await?;

            respond_card(ctx, state, command, &snapshot).await
        }
        (Some(category), None) => {
            menu::open_from_command(
                ctx,
                state,
                command,
                Screen::StatsSlot { category },
                state.menu_timeout,
            )
            .await
        }
        (None, slot) => {
            menu::open_from_command(
                ctx,
                state,
                command,
                Screen::StatsCategory { slot },
                state.menu_timeout,
            )
            .await
        }
    }
}

async fn respond_card(
    ctx: &Context,
    state: &AppState,
    command: &CommandInteraction,
    snapshot: &PlayerSnapshot,
) -> Result<(), AppError> {
    let card = embed::stats_card(
        snapshot,
        &Requester::from(&command.user),
        state.stats_updated_label.as_deref(),
    );

    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(CreateInteractionResponseMessage::new().embed(card)),
        )
        .await?;

    Ok(())
}
