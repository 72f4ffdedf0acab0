//! Snapshot factories for creating general and event stat rows.
//!
//! Numeric stats are passed as text, exactly as they arrive from the spreadsheet, so
//! tests can exercise comma-grouped values such as `"1,234"`.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for rows of the general snapshot table.
///
/// # Example
///
/// ```rust,ignore
/// let governor = GeneralSnapshotFactory::new(&db)
///     .governor_id("50001")
///     .power("45,000,000")
///     .build()
///     .await?;
/// ```
pub struct GeneralSnapshotFactory<'a> {
    db: &'a DatabaseConnection,
    model: entity::general_snapshot::Model,
}

impl<'a> GeneralSnapshotFactory<'a> {
    /// Creates a new factory with a unique governor ID, a matching name and zeroed stats.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            model: entity::general_snapshot::Model {
                governor_id: id.to_string(),
                governor_name: format!("Governor {}", id),
                power: Some("0".to_string()),
                kill_points: Some("0".to_string()),
                deaths: Some("0".to_string()),
                tier4_kills: Some("0".to_string()),
                tier5_kills: Some("0".to_string()),
                alliance_tag: None,
            },
        }
    }

    pub fn governor_id(mut self, governor_id: impl Into<String>) -> Self {
        self.model.governor_id = governor_id.into();
        self
    }

    pub fn governor_name(mut self, governor_name: impl Into<String>) -> Self {
        self.model.governor_name = governor_name.into();
        self
    }

    pub fn power(mut self, power: impl Into<String>) -> Self {
        self.model.power = Some(power.into());
        self
    }

    pub fn kill_points(mut self, kill_points: impl Into<String>) -> Self {
        self.model.kill_points = Some(kill_points.into());
        self
    }

    pub fn deaths(mut self, deaths: impl Into<String>) -> Self {
        self.model.deaths = Some(deaths.into());
        self
    }

    pub fn tier4_kills(mut self, kills: impl Into<String>) -> Self {
        self.model.tier4_kills = Some(kills.into());
        self
    }

    pub fn tier5_kills(mut self, kills: impl Into<String>) -> Self {
        self.model.tier5_kills = Some(kills.into());
        self
    }

    pub fn alliance_tag(mut self, tag: impl Into<String>) -> Self {
        self.model.alliance_tag = Some(tag.into());
        self
    }

    /// Builds and inserts the snapshot row.
    pub async fn build(self) -> Result<entity::general_snapshot::Model, DbErr> {
        let m = self.model;
        entity::general_snapshot::ActiveModel {
            governor_id: ActiveValue::Set(m.governor_id),
            governor_name: ActiveValue::Set(m.governor_name),
            power: ActiveValue::Set(m.power),
            kill_points: ActiveValue::Set(m.kill_points),
            deaths: ActiveValue::Set(m.deaths),
            tier4_kills: ActiveValue::Set(m.tier4_kills),
            tier5_kills: ActiveValue::Set(m.tier5_kills),
            alliance_tag: ActiveValue::Set(m.alliance_tag),
        }
        .insert(self.db)
        .await
    }
}

/// Factory for rows of the KvK event snapshot table.
pub struct EventSnapshotFactory<'a> {
    db: &'a DatabaseConnection,
    model: entity::event_snapshot::Model,
}

impl<'a> EventSnapshotFactory<'a> {
    /// Creates a new factory with a unique governor ID, a matching name and zeroed stats.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            model: entity::event_snapshot::Model {
                governor_id: id.to_string(),
                governor_name: format!("Governor {}", id),
                power: Some("0".to_string()),
                rank: None,
                dkp_required: None,
                dkp_achieved: None,
                deaths: Some("0".to_string()),
                tier4_kills: Some("0".to_string()),
                tier5_kills: Some("0".to_string()),
                alliance_tag: None,
            },
        }
    }

    pub fn governor_id(mut self, governor_id: impl Into<String>) -> Self {
        self.model.governor_id = governor_id.into();
        self
    }

    pub fn governor_name(mut self, governor_name: impl Into<String>) -> Self {
        self.model.governor_name = governor_name.into();
        self
    }

    pub fn power(mut self, power: impl Into<String>) -> Self {
        self.model.power = Some(power.into());
        self
    }

    pub fn rank(mut self, rank: impl Into<String>) -> Self {
        self.model.rank = Some(rank.into());
        self
    }

    pub fn dkp(mut self, required: impl Into<String>, achieved: impl Into<String>) -> Self {
        self.model.dkp_required = Some(required.into());
        self.model.dkp_achieved = Some(achieved.into());
        self
    }

    pub fn deaths(mut self, deaths: impl Into<String>) -> Self {
        self.model.deaths = Some(deaths.into());
        self
    }

    /// Clears the deaths cell, as an empty spreadsheet cell would.
    pub fn no_deaths(mut self) -> Self {
        self.model.deaths = None;
        self
    }

    pub fn tier4_kills(mut self, kills: impl Into<String>) -> Self {
        self.model.tier4_kills = Some(kills.into());
        self
    }

    pub fn tier5_kills(mut self, kills: impl Into<String>) -> Self {
        self.model.tier5_kills = Some(kills.into());
        self
    }

    pub fn alliance_tag(mut self, tag: impl Into<String>) -> Self {
        self.model.alliance_tag = Some(tag.into());
        self
    }

    /// Builds and inserts the snapshot row.
    pub async fn build(self) -> Result<entity::event_snapshot::Model, DbErr> {
        let m = self.model;
        entity::event_snapshot::ActiveModel {
            governor_id: ActiveValue::Set(m.governor_id),
            governor_name: ActiveValue::Set(m.governor_name),
            power: ActiveValue::Set(m.power),
            rank: ActiveValue::Set(m.rank),
            dkp_required: ActiveValue::Set(m.dkp_required),
            dkp_achieved: ActiveValue::Set(m.dkp_achieved),
            deaths: ActiveValue::Set(m.deaths),
            tier4_kills: ActiveValue::Set(m.tier4_kills),
            tier5_kills: ActiveValue::Set(m.tier5_kills),
            alliance_tag: ActiveValue::Set(m.alliance_tag),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a general snapshot row with default values.
pub async fn create_general_snapshot(
    db: &DatabaseConnection,
) -> Result<entity::general_snapshot::Model, DbErr> {
    GeneralSnapshotFactory::new(db).build().await
}

/// Creates an event snapshot row with default values.
pub async fn create_event_snapshot(
    db: &DatabaseConnection,
) -> Result<entity::event_snapshot::Model, DbErr> {
    EventSnapshotFactory::new(db).build().await
}
