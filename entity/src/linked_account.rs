use sea_orm::entity::prelude::*;

/// Governor accounts linked to a single Discord user.
///
/// Discord and governor IDs are stored as text and parsed at the repository boundary.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "linked_account")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    pub display_name: String,
    pub main_governor_id: Option<String>,
    pub alt_governor_id: Option<String>,
    pub farm_governor_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
