use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateInteractionResponse,
    CreateInteractionResponseMessage, EditInteractionResponse, Permissions,
};

use crate::{
    bot::permission,
    error::AppError,
    model::sync::SyncReport,
    service::sync::SyncService,
    state::AppState,
};

pub const NAME: &str = "sync_to_sheet";

static SYNC_FAILED_MESSAGE: &str =
    "An error occurred while syncing the database. Please check the logs for details.";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Replace accounts and stats with the contents of the Google Sheet")
        .default_member_permissions(Permissions::ADMINISTRATOR)
}

/// Replaces all three tables from the spreadsheet.
///
/// The caller sees an ephemeral status message that is edited once the sync finishes.
/// Only one sync runs at a time, whether started here or by the scheduler.
pub async fn run(
    ctx: &Context,
    state: &AppState,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    permission::administration_only(state, command)?;

    let Ok(_guard) = state.sync_lock.try_lock() else {
        return respond(ctx, command, "A sync is already running.").await;
    };

    respond(ctx, command, "Syncing database with Google Sheets...").await?;

    tracing::info!("Sheet sync started by user {}", command.user.id);

    let result = SyncService::new(&state.db, state.sheets.as_ref(), &state.sheet_names)
        .sync()
        .await;

    let message = match result {
        Ok(report) => success_message(&report),
        Err(AppError::SyncErr(err)) => {
            tracing::warn!("Sheet sync rejected: {}", err);
            err.to_string()
        }
        Err(err) => {
            tracing::error!("Sheet sync failed: {}", err);
            SYNC_FAILED_MESSAGE.to_string()
        }
    };

    command
        .edit_response(&ctx.http, EditInteractionResponse::new().content(message))
        .await?;

    Ok(())
}

async fn respond(
    ctx: &Context,
    command: &CommandInteraction,
    message: &str,
) -> Result<(), AppError> {
    let response = CreateInteractionResponseMessage::new()
        .content(message)
        .ephemeral(true);

    command
        .create_response(&ctx.http, CreateInteractionResponse::Message(response))
        .await?;

    Ok(())
}

fn success_message(report: &SyncReport) -> String {
    format!(
        "Database successfully synced with Google Sheets. ({} accounts, {} general rows, {} KvK rows)",
        report.accounts, report.general, report.event
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_message_lists_row_counts() {
        let report = SyncReport {
            accounts: 3,
            general: 600,
            event: 598,
        };

        assert_eq!(
            success_message(&report),
            "Database successfully synced with Google Sheets. (3 accounts, 600 general rows, 598 KvK rows)"
        );
    }
}
