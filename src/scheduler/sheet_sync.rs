use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, service::sync::SyncService, state::AppState};

/// Starts the automatic sheet sync
///
/// Runs the same sync as the `sync_to_sheet` command on the given cron schedule. A run is
/// skipped when a sync is already in progress.
///
/// # Arguments
/// - `state`: Shared bot state with the database, sheets client and sync lock
/// - `schedule`: 6-field cron expression, e.g. `0 0 */6 * * *`
pub async fn start_scheduler(state: AppState, schedule: &str) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let state = state.clone();

        Box::pin(async move {
            run_scheduled_sync(&state).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Sheet sync scheduler started with schedule '{}'", schedule);

    Ok(())
}

async fn run_scheduled_sync(state: &AppState) {
    let Ok(_guard) = state.sync_lock.try_lock() else {
        tracing::info!("Skipping scheduled sheet sync: a sync is already running");
        return;
    };

    let service = SyncService::new(&state.db, state.sheets.as_ref(), &state.sheet_names);

    match service.sync().await {
        Ok(report) => tracing::info!(
            "Scheduled sheet sync finished: {} accounts, {} general rows, {} event rows",
            report.accounts,
            report.general,
            report.event
        ),
        Err(e) => tracing::error!("Scheduled sheet sync failed: {}", e),
    }
}
