//! State shared by every event handler and the scheduler.
//!
//! `AppState` is built once at startup and cloned into the Discord event handler and the
//! sync scheduler. Every field is cheap to clone: the database pool, the sheets client and
//! the menu sessions are reference counted internally.

use std::{collections::HashSet, sync::Arc, time::Duration};

use sea_orm::DatabaseConnection;
use tokio::sync::Mutex;

use crate::{
    config::Config, menu::MenuSessions, model::sync::SheetNames,
    sheet::google::GoogleSheetsClient,
};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub sheets: Arc<GoogleSheetsClient>,
    pub sheet_names: Arc<SheetNames>,
    pub menus: MenuSessions,
    /// Held while a sheet sync runs so manual and scheduled syncs never overlap.
    pub sync_lock: Arc<Mutex<()>>,
    pub owner_ids: Arc<HashSet<u64>>,
    pub command_prefix: String,
    pub menu_timeout: Duration,
    pub stats_updated_label: Option<String>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, sheets: Arc<GoogleSheetsClient>, config: &Config) -> Self {
        Self {
            db,
            sheets,
            sheet_names: Arc::new(config.sheet_names.clone()),
            menus: MenuSessions::new(),
            sync_lock: Arc::new(Mutex::new(())),
            owner_ids: Arc::new(config.owner_ids.clone()),
            command_prefix: config.command_prefix.clone(),
            menu_timeout: config.menu_timeout,
            stats_updated_label: config.stats_updated_label.clone(),
        }
    }
}
