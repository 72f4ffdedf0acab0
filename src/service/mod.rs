//! Business logic layer.
//!
//! Services combine repositories into the operations commands and menus perform. They
//! take the database handle by reference and return `AppError`, with `AppError::NotFound`
//! carrying the exact text the user should see.

pub mod account;
pub mod stats;
pub mod sync;
