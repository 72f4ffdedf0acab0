use std::time::Duration;

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
};

use crate::{
    bot::{command::string_option, component::menu},
    error::AppError,
    menu::Screen,
    model::snapshot::Metric,
    state::AppState,
};

pub const NAME: &str = "top10";

/// The leaderboard stays interactive longer than the other menus.
const LEADERBOARD_TIMEOUT: Duration = Duration::from_secs(120);

pub fn register() -> CreateCommand {
    let category = Metric::LEADERBOARD.into_iter().fold(
        CreateCommandOption::new(CommandOptionType::String, "category", "Ranking metric")
            .required(true),
        |option, metric| option.add_string_choice(metric.label(), metric.key()),
    );

    CreateCommand::new(NAME)
        .description("Top 10 governors of the current KvK")
        .add_option(category)
}

pub async fn run(
    ctx: &Context,
    state: &AppState,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let metric = string_option(command, "category")
        .and_then(Metric::from_key)
        .filter(|metric| Metric::LEADERBOARD.contains(metric))
        .ok_or_else(|| AppError::NotFound("Unknown leaderboard category.".to_string()))?;

    let screen = Screen::Leaderboard {
        metric,
        show_ids: false,
    };

    menu::open_from_command(ctx, state, command, screen, LEADERBOARD_TIMEOUT).await
}
