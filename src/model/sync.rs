/// Names of the three worksheets read by a sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetNames {
    pub accounts: String,
    pub general: String,
    pub event: String,
}

impl Default for SheetNames {
    fn default() -> Self {
        Self {
            accounts: "ACCOUNTS LINKED TO BOTS".to_string(),
            general: "🤖BASIC STATS TOP 600 13-02-2024".to_string(),
            event: "KVK 2 STATS TOP 600".to_string(),
        }
    }
}

/// Account row read from the accounts sheet, IDs already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRow {
    pub user_id: u64,
    pub display_name: String,
    pub main: Option<u64>,
    pub alt: Option<u64>,
    pub farm: Option<u64>,
}

/// General snapshot row; stat cells keep the sheet's formatted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneralSnapshotRow {
    pub governor_id: u64,
    pub governor_name: String,
    pub power: Option<String>,
    pub kill_points: Option<String>,
    pub deaths: Option<String>,
    pub tier4_kills: Option<String>,
    pub tier5_kills: Option<String>,
    pub alliance_tag: Option<String>,
}

/// Event snapshot row; stat cells keep the sheet's formatted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSnapshotRow {
    pub governor_id: u64,
    pub governor_name: String,
    pub power: Option<String>,
    pub rank: Option<String>,
    pub dkp_required: Option<String>,
    pub dkp_achieved: Option<String>,
    pub deaths: Option<String>,
    pub tier4_kills: Option<String>,
    pub tier5_kills: Option<String>,
    pub alliance_tag: Option<String>,
}

/// Row counts written by a successful sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyncReport {
    pub accounts: usize,
    pub general: usize,
    pub event: usize,
}
