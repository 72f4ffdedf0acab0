use sea_orm::DatabaseConnection;

use crate::{
    data::{linked_account::LinkedAccountRepository, snapshot::SnapshotRepository},
    error::AppError,
    model::{
        account::{AccountSlot, LinkAccountParam, LinkedAccounts},
        snapshot::{PlayerSnapshot, StatsCategory},
    },
};

/// Shown when a command needs at least one linked governor and the user has none.
pub static NOT_LINKED_MESSAGE: &str = "Sorry, I cannot find you! Please use linkme to link first.";

pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user's linked accounts, `None` when the user never linked anything.
    pub async fn get_linked(&self, user_id: u64) -> Result<Option<LinkedAccounts>, AppError> {
        LinkedAccountRepository::new(self.db).get(user_id).await
    }

    /// Gets a user's linked accounts, requiring at least one linked slot.
    ///
    /// # Returns
    /// - `Ok(LinkedAccounts)` - At least one slot is set
    /// - `Err(AppError::NotFound)` - No row, or every slot is empty
    pub async fn require_linked(&self, user_id: u64) -> Result<LinkedAccounts, AppError> {
        self.get_linked(user_id)
            .await?
            .filter(|linked| !linked.is_empty())
            .ok_or_else(|| AppError::NotFound(NOT_LINKED_MESSAGE.to_string()))
    }

    /// Finds the general snapshot row a user is about to link.
    ///
    /// Returns `None` when the governor is not in the current scan.
    pub async fn find_governor(&self, governor_id: u64) -> Result<Option<PlayerSnapshot>, AppError> {
        SnapshotRepository::new(self.db)
            .lookup(governor_id, StatsCategory::General)
            .await
    }

    /// Links a governor into one of the user's slots.
    ///
    /// The governor is checked again against the general snapshot, since a sync may have
    /// replaced it while the link menu was open.
    pub async fn link(&self, param: LinkAccountParam) -> Result<LinkedAccounts, AppError> {
        if self.find_governor(param.governor_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Governor {} is no longer in the scan, nothing was linked.",
                param.governor_id
            )));
        }

        let slot = param.slot;
        let linked = LinkedAccountRepository::new(self.db).upsert(param).await?;

        tracing::info!(
            "Linked governor {:?} as {} for user {}",
            linked.get(slot),
            slot.key(),
            linked.user_id
        );

        Ok(linked)
    }

    /// Clears one of the user's slots.
    pub async fn unlink(&self, user_id: u64, slot: AccountSlot) -> Result<(), AppError> {
        LinkedAccountRepository::new(self.db)
            .clear(user_id, slot)
            .await?;

        tracing::info!("Unlinked {} account for user {}", slot.key(), user_id);

        Ok(())
    }
}
