//! Database repository layer for linked accounts and stat snapshots.
//!
//! Repositories use SeaORM entity models internally and return domain models from
//! `crate::model` so the service layer never sees text-encoded IDs. Every repository is
//! generic over `ConnectionTrait`, so the same code runs on the pool and inside the
//! sync transaction.

pub mod linked_account;
pub mod snapshot;

#[cfg(test)]
mod test;

/// Rows per bulk insert statement, kept well under SQLite's bound parameter limit.
const INSERT_CHUNK_SIZE: usize = 200;
