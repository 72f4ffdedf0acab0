use std::collections::BTreeMap;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{linked_account::LinkedAccountRepository, snapshot::SnapshotRepository},
    error::{sync::SyncError, AppError},
    model::sync::{AccountRow, EventSnapshotRow, GeneralSnapshotRow, SheetNames, SyncReport},
    sheet::{SheetSource, SheetTable},
    util::parse::{parse_discord_id, parse_governor_id},
};

const DISCORD_ID: &str = "Discord ID";
const DISCORD_USERNAME: &str = "Discord Username";
const GOVERNOR_ID: &str = "Governor ID";
const ALT_ID: &str = "ALT ID";
const FARM_ID: &str = "FARM ID";
const GOVERNOR_NAME: &str = "Governor Name";
const POWER: &str = "Power";
const KILL_POINTS: &str = "Kill Points";
const DEATHS: &str = "Deaths";
const T4_KILLS: &str = "T4 Kills";
const T5_KILLS: &str = "T5 Kills";
const ALLIANCE: &str = "Alliance";
const RANK: &str = "Rank";
const DKP_REQUIRED: &str = "DKP Required";
const DKP_ACHIEVED: &str = "DKP Achieved";

pub const ACCOUNT_HEADERS: [&str; 5] = [DISCORD_ID, DISCORD_USERNAME, GOVERNOR_ID, ALT_ID, FARM_ID];
pub const GENERAL_HEADERS: [&str; 8] = [
    GOVERNOR_NAME,
    GOVERNOR_ID,
    POWER,
    KILL_POINTS,
    DEATHS,
    T4_KILLS,
    T5_KILLS,
    ALLIANCE,
];
pub const EVENT_HEADERS: [&str; 10] = [
    GOVERNOR_NAME,
    GOVERNOR_ID,
    POWER,
    RANK,
    DKP_REQUIRED,
    DKP_ACHIEVED,
    DEATHS,
    T4_KILLS,
    T5_KILLS,
    ALLIANCE,
];

/// Replaces the local tables with the contents of the spreadsheet.
pub struct SyncService<'a, S: SheetSource> {
    db: &'a DatabaseConnection,
    source: &'a S,
    sheets: &'a SheetNames,
}

impl<'a, S: SheetSource> SyncService<'a, S> {
    pub fn new(db: &'a DatabaseConnection, source: &'a S, sheets: &'a SheetNames) -> Self {
        Self { db, source, sheets }
    }

    /// Reads all three sheets and replaces linked accounts and both snapshots.
    ///
    /// Every sheet is read and validated before anything is written. The three tables
    /// are then replaced inside one transaction, so readers see either the previous
    /// generation or the new one and a failure part way leaves all tables unchanged.
    ///
    /// # Returns
    /// - `Ok(SyncReport)` - Row counts written per table
    /// - `Err(AppError::SyncErr(MissingHeaders))` - A sheet lacks a required column
    /// - `Err(AppError::SheetErr)` - A sheet could not be read
    /// - `Err(AppError::DbErr)` - The replace failed and was rolled back
    pub async fn sync(&self) -> Result<SyncReport, AppError> {
        let accounts = self
            .read_validated(&self.sheets.accounts, &ACCOUNT_HEADERS)
            .await?;
        let general = self
            .read_validated(&self.sheets.general, &GENERAL_HEADERS)
            .await?;
        let event = self
            .read_validated(&self.sheets.event, &EVENT_HEADERS)
            .await?;

        let account_rows = account_rows(&accounts);
        let general_rows = general_rows(&general);
        let event_rows = event_rows(&event);

        let txn = self.db.begin().await?;

        let report = SyncReport {
            accounts: LinkedAccountRepository::new(&txn)
                .replace_all(account_rows)
                .await?,
            general: SnapshotRepository::new(&txn)
                .replace_general(general_rows)
                .await?,
            event: SnapshotRepository::new(&txn)
                .replace_event(event_rows)
                .await?,
        };

        txn.commit().await?;

        tracing::info!(
            "Synced sheets: {} accounts, {} general rows, {} event rows",
            report.accounts,
            report.general,
            report.event
        );

        Ok(report)
    }

    async fn read_validated(&self, name: &str, expected: &[&str]) -> Result<SheetTable, AppError> {
        let table = self.source.read_sheet(name).await?;
        let missing = table.missing_headers(expected);

        if !missing.is_empty() {
            return Err(SyncError::MissingHeaders {
                sheet: name.to_string(),
                headers: missing,
            }
            .into());
        }

        Ok(table)
    }
}

/// Maps accounts sheet rows, skipping rows without a usable Discord ID.
///
/// A Discord ID repeated further down the sheet replaces the earlier row.
fn account_rows(table: &SheetTable) -> Vec<AccountRow> {
    let mut rows = BTreeMap::new();

    for (index, record) in table.records().enumerate() {
        let Some(user_id) = record.get(DISCORD_ID).and_then(parse_discord_id) else {
            tracing::warn!("Skipping account row {}: no valid Discord ID", index + 2);
            continue;
        };

        rows.insert(
            user_id,
            AccountRow {
                user_id,
                display_name: record.text(DISCORD_USERNAME).unwrap_or_default(),
                main: record.get(GOVERNOR_ID).and_then(parse_governor_id),
                alt: record.get(ALT_ID).and_then(parse_governor_id),
                farm: record.get(FARM_ID).and_then(parse_governor_id),
            },
        );
    }

    rows.into_values().collect()
}

/// Maps general snapshot rows, last row winning for a repeated governor ID.
fn general_rows(table: &SheetTable) -> Vec<GeneralSnapshotRow> {
    let mut rows = BTreeMap::new();

    for (index, record) in table.records().enumerate() {
        let Some(governor_id) = record.get(GOVERNOR_ID).and_then(parse_governor_id) else {
            tracing::warn!("Skipping general row {}: no valid governor ID", index + 2);
            continue;
        };

        rows.insert(
            governor_id,
            GeneralSnapshotRow {
                governor_id,
                governor_name: record.text(GOVERNOR_NAME).unwrap_or_default(),
                power: record.text(POWER),
                kill_points: record.text(KILL_POINTS),
                deaths: record.text(DEATHS),
                tier4_kills: record.text(T4_KILLS),
                tier5_kills: record.text(T5_KILLS),
                alliance_tag: record.text(ALLIANCE),
            },
        );
    }

    rows.into_values().collect()
}

/// Maps event snapshot rows, last row winning for a repeated governor ID.
fn event_rows(table: &SheetTable) -> Vec<EventSnapshotRow> {
    let mut rows = BTreeMap::new();

    for (index, record) in table.records().enumerate() {
        let Some(governor_id) = record.get(GOVERNOR_ID).and_then(parse_governor_id) else {
            tracing::warn!("Skipping event row {}: no valid governor ID", index + 2);
            continue;
        };

        rows.insert(
            governor_id,
            EventSnapshotRow {
                governor_id,
                governor_name: record.text(GOVERNOR_NAME).unwrap_or_default(),
                power: record.text(POWER),
                rank: record.text(RANK),
                dkp_required: record.text(DKP_REQUIRED),
                dkp_achieved: record.text(DKP_ACHIEVED),
                deaths: record.text(DEATHS),
                tier4_kills: record.text(T4_KILLS),
                tier5_kills: record.text(T5_KILLS),
                alliance_tag: record.text(ALLIANCE),
            },
        );
    }

    rows.into_values().collect()
}
