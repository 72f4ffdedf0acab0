//! Error types and user-facing reply mapping.
//!
//! This module provides the application's error hierarchy. The `AppError` enum serves as
//! the top-level error type that wraps domain-specific errors. Errors never escape a
//! command handler: `AppError::into_reply` maps each variant to what the invoking user
//! sees and logs the ones that indicate a real failure.

pub mod config;
pub mod internal;
pub mod sheet;
pub mod sync;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError, sheet::SheetError, sync::SyncError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot. Most variants use
/// `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Spreadsheet source could not be read.
    #[error(transparent)]
    SheetErr(#[from] SheetError),

    /// Spreadsheet contents failed validation; nothing was written.
    #[error(transparent)]
    SyncErr(#[from] SyncError),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Internal issue with stored data or conversions.
    #[error(transparent)]
    InternalError(#[from] InternalError),

    /// Requested account, governor or slot does not exist.
    ///
    /// The message is shown to the user verbatim.
    #[error("{0}")]
    NotFound(String),

    /// Caller is not allowed to run the command.
    ///
    /// The message is shown to the user as an ephemeral notice.
    #[error("{0}")]
    PermissionDenied(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

/// What the invoking user should see for a failed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorReply {
    /// Plain text notice.
    Notice { message: String, ephemeral: bool },
    /// Generic "something went wrong" embed; details only go to the log.
    Failure,
}

impl AppError {
    /// Maps the error to the reply shown to the user.
    ///
    /// Not-found and permission errors are expected outcomes and are only logged at debug
    /// level. Validation failures name what was wrong. Everything else is logged as an
    /// error and hidden behind a generic message.
    pub fn into_reply(self) -> ErrorReply {
        match self {
            Self::NotFound(message) => {
                tracing::debug!("Not found: {}", message);
                ErrorReply::Notice {
                    message,
                    ephemeral: false,
                }
            }
            Self::PermissionDenied(message) => {
                tracing::debug!("Permission denied: {}", message);
                ErrorReply::Notice {
                    message,
                    ephemeral: true,
                }
            }
            Self::SyncErr(err) => {
                tracing::warn!("Sheet sync rejected: {}", err);
                ErrorReply::Notice {
                    message: err.to_string(),
                    ephemeral: true,
                }
            }
            err => {
                tracing::error!("{}", err);
                ErrorReply::Failure
            }
        }
    }
}
