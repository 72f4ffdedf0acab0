//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let account = factory::create_linked_account(&db).await?;
//!     let governor = factory::create_general_snapshot(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let governor = factory::snapshot::GeneralSnapshotFactory::new(&db)
//!     .governor_id("50001")
//!     .tier4_kills("1,234")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `linked_account` - Create linked account entities
//! - `snapshot` - Create general and event snapshot rows
//! - `helpers` - Shared ID generation

pub mod helpers;
pub mod linked_account;
pub mod snapshot;

// Re-export commonly used factory functions for concise usage
pub use linked_account::create_linked_account;
pub use snapshot::{create_event_snapshot, create_general_snapshot};
