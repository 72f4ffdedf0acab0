use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
};

use crate::{
    data::INSERT_CHUNK_SIZE,
    error::AppError,
    model::{
        account::{AccountSlot, LinkAccountParam, LinkedAccounts},
        sync::AccountRow,
    },
};

pub struct LinkedAccountRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LinkedAccountRepository<'a, C> {
    /// Creates a new instance of [`LinkedAccountRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Links a governor ID into one slot, creating the user's row if needed.
    ///
    /// Runs as a single `INSERT ... ON CONFLICT DO UPDATE` so concurrent links for the
    /// same user serialize in the database. Only the display name and the targeted slot
    /// are written; the other two slots keep their values. An existing value in the slot
    /// is replaced.
    ///
    /// # Arguments
    /// - `param` - User, slot and governor ID to link
    ///
    /// # Returns
    /// - `Ok(LinkedAccounts)` - The user's slots after the write
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn upsert(&self, param: LinkAccountParam) -> Result<LinkedAccounts, AppError> {
        let governor_id = ActiveValue::Set(Some(param.governor_id.to_string()));
        let mut account = entity::linked_account::ActiveModel {
            user_id: ActiveValue::Set(param.user_id.to_string()),
            display_name: ActiveValue::Set(param.display_name),
            ..Default::default()
        };

        match param.slot {
            AccountSlot::Main => account.main_governor_id = governor_id,
            AccountSlot::Alt => account.alt_governor_id = governor_id,
            AccountSlot::Farm => account.farm_governor_id = governor_id,
        }

        let model = entity::prelude::LinkedAccount::insert(account)
            .on_conflict(
                OnConflict::column(entity::linked_account::Column::UserId)
                    .update_columns([
                        entity::linked_account::Column::DisplayName,
                        param.slot.column(),
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await?;

        LinkedAccounts::from_entity(model)
    }

    /// Sets one slot back to null.
    ///
    /// No-op when the user has no row or the slot is already empty.
    pub async fn clear(&self, user_id: u64, slot: AccountSlot) -> Result<(), AppError> {
        entity::prelude::LinkedAccount::update_many()
            .col_expr(slot.column(), Expr::value(Option::<String>::None))
            .filter(entity::linked_account::Column::UserId.eq(user_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets a user's linked accounts.
    ///
    /// # Returns
    /// - `Ok(Some(LinkedAccounts))` - User has a row, possibly with every slot empty
    /// - `Ok(None)` - User never linked anything
    /// - `Err(AppError)` - Database error or a stored ID that isn't numeric
    pub async fn get(&self, user_id: u64) -> Result<Option<LinkedAccounts>, AppError> {
        entity::prelude::LinkedAccount::find_by_id(user_id.to_string())
            .one(self.db)
            .await?
            .map(LinkedAccounts::from_entity)
            .transpose()
    }

    /// Replaces every row with `rows`.
    ///
    /// Only used by the sheet sync, which calls it inside its transaction.
    pub async fn replace_all(&self, rows: Vec<AccountRow>) -> Result<usize, AppError> {
        entity::prelude::LinkedAccount::delete_many()
            .exec(self.db)
            .await?;

        let count = rows.len();
        let models: Vec<entity::linked_account::ActiveModel> = rows
            .into_iter()
            .map(|row| entity::linked_account::ActiveModel {
                user_id: ActiveValue::Set(row.user_id.to_string()),
                display_name: ActiveValue::Set(row.display_name),
                main_governor_id: ActiveValue::Set(row.main.map(|id| id.to_string())),
                alt_governor_id: ActiveValue::Set(row.alt.map(|id| id.to_string())),
                farm_governor_id: ActiveValue::Set(row.farm.map(|id| id.to_string())),
            })
            .collect();

        for chunk in models.chunks(INSERT_CHUNK_SIZE) {
            entity::prelude::LinkedAccount::insert_many(chunk.to_vec())
                .exec(self.db)
                .await?;
        }

        Ok(count)
    }
}
