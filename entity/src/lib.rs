//! SeaORM entities for the bot's SQLite schema.
//!
//! The schema itself is owned by the `migration` crate; these models mirror it for
//! querying and for building test tables.

pub mod event_snapshot;
pub mod general_snapshot;
pub mod linked_account;
pub mod prelude;
