use sea_orm::DatabaseConnection;

use crate::{
    data::{linked_account::LinkedAccountRepository, snapshot::SnapshotRepository},
    error::AppError,
    model::{
        account::AccountSlot,
        snapshot::{AggregateTotals, Metric, PlayerSnapshot, StatsCategory},
    },
};

/// Rows shown on the leaderboard.
pub const LEADERBOARD_SIZE: usize = 10;
/// Rows by power summed for the kingdom totals.
pub const TOTALS_TOP_K: usize = 300;
/// Metrics summed for the kingdom totals.
pub const TOTALS_METRICS: [Metric; 3] = [Metric::Tier4Kills, Metric::Tier5Kills, Metric::Deaths];

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a governor's stats in one category.
    ///
    /// # Returns
    /// - `Ok(PlayerSnapshot)` - Governor is in the snapshot
    /// - `Err(AppError::NotFound)` - Governor is not in the snapshot
    pub async fn governor_stats(
        &self,
        governor_id: u64,
        category: StatsCategory,
    ) -> Result<PlayerSnapshot, AppError> {
        SnapshotRepository::new(self.db)
            .lookup(governor_id, category)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Governor {} was not found in the {} stats.",
                    governor_id,
                    category.label()
                ))
            })
    }

    /// Gets the stats of the governor a user linked in `slot`.
    ///
    /// An empty slot and a linked governor missing from the snapshot both read as
    /// "No {slot} account registered".
    pub async fn linked_stats(
        &self,
        user_id: u64,
        category: StatsCategory,
        slot: AccountSlot,
    ) -> Result<PlayerSnapshot, AppError> {
        let not_registered =
            || AppError::NotFound(format!("No {} account registered", slot.key()));

        let governor_id = LinkedAccountRepository::new(self.db)
            .get(user_id)
            .await?
            .and_then(|linked| linked.get(slot))
            .ok_or_else(not_registered)?;

        SnapshotRepository::new(self.db)
            .lookup(governor_id, category)
            .await?
            .ok_or_else(not_registered)
    }

    /// Gets the KvK leaderboard for one metric.
    pub async fn top10(&self, metric: Metric) -> Result<Vec<PlayerSnapshot>, AppError> {
        SnapshotRepository::new(self.db)
            .top_n(StatsCategory::Event, metric, LEADERBOARD_SIZE)
            .await
    }

    /// Sums kills and deaths over the top 300 KvK governors by power.
    pub async fn kingdom_totals(&self) -> Result<AggregateTotals, AppError> {
        SnapshotRepository::new(self.db)
            .aggregate_top_k(StatsCategory::Event, TOTALS_TOP_K, &TOTALS_METRICS)
            .await
    }
}
