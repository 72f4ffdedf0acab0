mod bot;
mod config;
mod data;
mod error;
mod menu;
mod model;
mod scheduler;
mod service;
mod sheet;
mod startup;
mod state;
mod util;

use crate::{
    config::Config, error::AppError, scheduler::sheet_sync, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let sheets = startup::setup_sheets_client(&config);

    let state = AppState::new(db, sheets, &config);

    if let Some(schedule) = config.sync_schedule.as_deref() {
        sheet_sync::start_scheduler(state.clone(), schedule).await?;
    } else {
        tracing::info!("SYNC_SCHEDULE not set, sheet sync only runs on command");
    }

    let client = bot::start::init_bot(&config, state).await?;

    bot::start::start_bot(client).await
}
