use sea_orm::entity::prelude::*;

/// One row of the KvK event snapshot.
///
/// Numeric columns keep the spreadsheet's formatted text, e.g. `"1,234,567"`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "event_snapshot")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub governor_id: String,
    pub governor_name: String,
    pub power: Option<String>,
    pub rank: Option<String>,
    pub dkp_required: Option<String>,
    pub dkp_achieved: Option<String>,
    pub deaths: Option<String>,
    pub tier4_kills: Option<String>,
    pub tier5_kills: Option<String>,
    pub alliance_tag: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
