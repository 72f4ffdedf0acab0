use std::{collections::HashSet, path::PathBuf, time::Duration};

use crate::{
    error::{config::ConfigError, AppError},
    model::sync::SheetNames,
};

const DEFAULT_COMMAND_PREFIX: &str = "!";
const DEFAULT_CREDENTIALS_PATH: &str = "data/creds.json";
const DEFAULT_MENU_TIMEOUT_SECS: u64 = 60;

pub struct Config {
    pub database_url: String,

    pub discord_bot_token: String,
    pub discord_guild_id: Option<u64>,
    pub owner_ids: HashSet<u64>,
    pub command_prefix: String,

    pub google_sheet_id: String,
    pub google_credentials_path: PathBuf,
    pub sheet_names: SheetNames,
    pub sync_schedule: Option<String>,

    pub menu_timeout: Duration,
    pub stats_updated_label: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    ///
    /// Blank values are treated as unset.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let required = |name: &str| {
            var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let defaults = SheetNames::default();

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            discord_guild_id: var("DISCORD_GUILD_ID")
                .map(|value| parse_u64("DISCORD_GUILD_ID", &value))
                .transpose()?,
            owner_ids: var("OWNER_IDS")
                .map(|value| parse_id_list("OWNER_IDS", &value))
                .transpose()?
                .unwrap_or_default(),
            command_prefix: var("COMMAND_PREFIX")
                .unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.to_string()),
            google_sheet_id: required("GOOGLE_SHEET_ID")?,
            google_credentials_path: var("GOOGLE_CREDENTIALS_PATH")
                .unwrap_or_else(|| DEFAULT_CREDENTIALS_PATH.to_string())
                .into(),
            sheet_names: SheetNames {
                accounts: var("ACCOUNTS_SHEET").unwrap_or(defaults.accounts),
                general: var("GENERAL_SHEET").unwrap_or(defaults.general),
                event: var("EVENT_SHEET").unwrap_or(defaults.event),
            },
            sync_schedule: var("SYNC_SCHEDULE"),
            menu_timeout: Duration::from_secs(
                var("MENU_TIMEOUT_SECS")
                    .map(|value| parse_u64("MENU_TIMEOUT_SECS", &value))
                    .transpose()?
                    .unwrap_or(DEFAULT_MENU_TIMEOUT_SECS),
            ),
            stats_updated_label: var("STATS_UPDATED_LABEL"),
        })
    }
}

fn parse_u64(name: &str, value: &str) -> Result<u64, ConfigError> {
    value.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn parse_id_list(name: &str, value: &str) -> Result<HashSet<u64>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| parse_u64(name, id))
        .collect()
}
