use sea_orm::{ActiveValue, ConnectionTrait, EntityTrait};

use crate::{
    data::INSERT_CHUNK_SIZE,
    error::AppError,
    model::{
        snapshot::{
            sort_descending, AggregateTotals, Metric, MetricTotal, PlayerSnapshot, StatsCategory,
        },
        sync::{EventSnapshotRow, GeneralSnapshotRow},
    },
};

/// Read access to both snapshot tables, plus the wholesale replace used by sync.
pub struct SnapshotRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SnapshotRepository<'a, C> {
    /// Creates a new instance of [`SnapshotRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a governor's row in the given snapshot.
    ///
    /// # Returns
    /// - `Ok(Some(PlayerSnapshot))` - Governor is in the snapshot
    /// - `Ok(None)` - Governor is not in the snapshot
    /// - `Err(AppError)` - Database error
    pub async fn lookup(
        &self,
        governor_id: u64,
        category: StatsCategory,
    ) -> Result<Option<PlayerSnapshot>, AppError> {
        let id = governor_id.to_string();

        match category {
            StatsCategory::General => entity::prelude::GeneralSnapshot::find_by_id(id)
                .one(self.db)
                .await?
                .map(PlayerSnapshot::from_general)
                .transpose(),
            StatsCategory::Event => entity::prelude::EventSnapshot::find_by_id(id)
                .one(self.db)
                .await?
                .map(PlayerSnapshot::from_event)
                .transpose(),
        }
    }

    /// Loads every row of the given snapshot.
    pub async fn all(&self, category: StatsCategory) -> Result<Vec<PlayerSnapshot>, AppError> {
        match category {
            StatsCategory::General => entity::prelude::GeneralSnapshot::find()
                .all(self.db)
                .await?
                .into_iter()
                .map(PlayerSnapshot::from_general)
                .collect(),
            StatsCategory::Event => entity::prelude::EventSnapshot::find()
                .all(self.db)
                .await?
                .into_iter()
                .map(PlayerSnapshot::from_event)
                .collect(),
        }
    }

    /// Returns the `n` rows with the highest `metric`, highest first.
    ///
    /// Stats are stored as formatted text, so ordering happens after parsing rather than
    /// in SQL. Rows without a value come last and ties go to the lower governor ID.
    pub async fn top_n(
        &self,
        category: StatsCategory,
        metric: Metric,
        n: usize,
    ) -> Result<Vec<PlayerSnapshot>, AppError> {
        let mut rows = self.all(category).await?;

        sort_descending(&mut rows, metric);
        rows.truncate(n);

        Ok(rows)
    }

    /// Sums `metrics` over the top `k` rows by power.
    ///
    /// Missing cells count as zero. With fewer than `k` rows every row is summed. Sums
    /// saturate at the `i64` bounds.
    pub async fn aggregate_top_k(
        &self,
        category: StatsCategory,
        k: usize,
        metrics: &[Metric],
    ) -> Result<AggregateTotals, AppError> {
        let top = self.top_n(category, Metric::Power, k).await?;

        let totals = metrics
            .iter()
            .map(|metric| MetricTotal {
                metric: *metric,
                total: top
                    .iter()
                    .map(|row| metric.value(row).unwrap_or(0))
                    .fold(0i64, i64::saturating_add),
            })
            .collect();

        Ok(AggregateTotals {
            rows: top.len(),
            totals,
        })
    }

    /// Replaces the general snapshot with `rows`.
    pub async fn replace_general(&self, rows: Vec<GeneralSnapshotRow>) -> Result<usize, AppError> {
        entity::prelude::GeneralSnapshot::delete_many()
            .exec(self.db)
            .await?;

        let count = rows.len();
        let models: Vec<entity::general_snapshot::ActiveModel> = rows
            .into_iter()
            .map(|row| entity::general_snapshot::ActiveModel {
                governor_id: ActiveValue::Set(row.governor_id.to_string()),
                governor_name: ActiveValue::Set(row.governor_name),
                power: ActiveValue::Set(row.power),
                kill_points: ActiveValue::Set(row.kill_points),
                deaths: ActiveValue::Set(row.deaths),
                tier4_kills: ActiveValue::Set(row.tier4_kills),
                tier5_kills: ActiveValue::Set(row.tier5_kills),
                alliance_tag: ActiveValue::Set(row.alliance_tag),
            })
            .collect();

        for chunk in models.chunks(INSERT_CHUNK_SIZE) {
            entity::prelude::GeneralSnapshot::insert_many(chunk.to_vec())
                .exec(self.db)
                .await?;
        }

        Ok(count)
    }

    /// Replaces the event snapshot with `rows`.
    pub async fn replace_event(&self, rows: Vec<EventSnapshotRow>) -> Result<usize, AppError> {
        entity::prelude::EventSnapshot::delete_many()
            .exec(self.db)
            .await?;

        let count = rows.len();
        let models: Vec<entity::event_snapshot::ActiveModel> = rows
            .into_iter()
            .map(|row| entity::event_snapshot::ActiveModel {
                governor_id: ActiveValue::Set(row.governor_id.to_string()),
                governor_name: ActiveValue::Set(row.governor_name),
                power: ActiveValue::Set(row.power),
                rank: ActiveValue::Set(row.rank),
                dkp_required: ActiveValue::Set(row.dkp_required),
                dkp_achieved: ActiveValue::Set(row.dkp_achieved),
                deaths: ActiveValue::Set(row.deaths),
                tier4_kills: ActiveValue::Set(row.tier4_kills),
                tier5_kills: ActiveValue::Set(row.tier5_kills),
                alliance_tag: ActiveValue::Set(row.alliance_tag),
            })
            .collect();

        for chunk in models.chunks(INSERT_CHUNK_SIZE) {
            entity::prelude::EventSnapshot::insert_many(chunk.to_vec())
                .exec(self.db)
                .await?;
        }

        Ok(count)
    }
}
