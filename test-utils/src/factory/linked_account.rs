//! Linked account factory for creating test account links.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating linked accounts with customizable slots.
///
/// All three governor slots default to empty.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::linked_account::LinkedAccountFactory;
///
/// let account = LinkedAccountFactory::new(&db)
///     .user_id("123456789")
///     .main("50001")
///     .build()
///     .await?;
/// ```
pub struct LinkedAccountFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    display_name: String,
    main_governor_id: Option<String>,
    alt_governor_id: Option<String>,
    farm_governor_id: Option<String>,
}

impl<'a> LinkedAccountFactory<'a> {
    /// Creates a new LinkedAccountFactory with default values.
    ///
    /// Defaults:
    /// - user_id: auto-incremented numeric string
    /// - display_name: `"User {id}"`
    /// - all governor slots: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: id.to_string(),
            display_name: format!("User {}", id),
            main_governor_id: None,
            alt_governor_id: None,
            farm_governor_id: None,
        }
    }

    /// Sets the Discord user ID.
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Sets the display name.
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Sets the main governor ID.
    pub fn main(mut self, governor_id: impl Into<String>) -> Self {
        self.main_governor_id = Some(governor_id.into());
        self
    }

    /// Sets the alt governor ID.
    pub fn alt(mut self, governor_id: impl Into<String>) -> Self {
        self.alt_governor_id = Some(governor_id.into());
        self
    }

    /// Sets the farm governor ID.
    pub fn farm(mut self, governor_id: impl Into<String>) -> Self {
        self.farm_governor_id = Some(governor_id.into());
        self
    }

    /// Builds and inserts the linked account into the database.
    ///
    /// # Returns
    /// - `Ok(entity::linked_account::Model)` - Created linked account
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::linked_account::Model, DbErr> {
        entity::linked_account::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            display_name: ActiveValue::Set(self.display_name),
            main_governor_id: ActiveValue::Set(self.main_governor_id),
            alt_governor_id: ActiveValue::Set(self.alt_governor_id),
            farm_governor_id: ActiveValue::Set(self.farm_governor_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a linked account with a random main governor ID.
///
/// Shorthand for `LinkedAccountFactory::new(db).main(..).build().await`.
pub async fn create_linked_account(
    db: &DatabaseConnection,
) -> Result<entity::linked_account::Model, DbErr> {
    LinkedAccountFactory::new(db)
        .main(next_id().to_string())
        .build()
        .await
}
