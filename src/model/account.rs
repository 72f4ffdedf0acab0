use crate::{
    error::AppError,
    util::parse::{parse_optional_u64, parse_u64_from_string},
};

/// Which of a user's three governor slots an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountSlot {
    Main,
    Alt,
    Farm,
}

impl AccountSlot {
    pub const ALL: [AccountSlot; 3] = [AccountSlot::Main, AccountSlot::Alt, AccountSlot::Farm];

    /// Stable lowercase key used in command options and component ids.
    pub fn key(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Alt => "alt",
            Self::Farm => "farm",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.key() == key)
    }

    /// Capitalized name, e.g. "Main".
    pub fn name(self) -> &'static str {
        match self {
            Self::Main => "Main",
            Self::Alt => "Alt",
            Self::Farm => "Farm",
        }
    }

    /// Button label, e.g. "Main Account".
    pub fn label(self) -> &'static str {
        match self {
            Self::Main => "Main Account",
            Self::Alt => "Alt Account",
            Self::Farm => "Farm Account",
        }
    }

    /// Storage column holding this slot's governor ID.
    pub fn column(self) -> entity::linked_account::Column {
        match self {
            Self::Main => entity::linked_account::Column::MainGovernorId,
            Self::Alt => entity::linked_account::Column::AltGovernorId,
            Self::Farm => entity::linked_account::Column::FarmGovernorId,
        }
    }
}

/// Governor IDs a Discord user has linked, one optional ID per slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedAccounts {
    pub user_id: u64,
    pub display_name: String,
    pub main: Option<u64>,
    pub alt: Option<u64>,
    pub farm: Option<u64>,
}

impl LinkedAccounts {
    /// Converts an entity model into linked accounts.
    ///
    /// # Arguments
    /// - `entity` - The linked account row
    ///
    /// # Returns
    /// - `Ok(LinkedAccounts)` - All stored IDs parsed
    /// - `Err(AppError::InternalError(ParseStringId))` - A stored ID is not numeric
    pub fn from_entity(entity: entity::linked_account::Model) -> Result<Self, AppError> {
        Ok(Self {
            user_id: parse_u64_from_string(entity.user_id)?,
            display_name: entity.display_name,
            main: parse_optional_u64(entity.main_governor_id)?,
            alt: parse_optional_u64(entity.alt_governor_id)?,
            farm: parse_optional_u64(entity.farm_governor_id)?,
        })
    }

    pub fn get(&self, slot: AccountSlot) -> Option<u64> {
        match slot {
            AccountSlot::Main => self.main,
            AccountSlot::Alt => self.alt,
            AccountSlot::Farm => self.farm,
        }
    }

    /// True when no slot holds a governor ID.
    pub fn is_empty(&self) -> bool {
        AccountSlot::ALL.iter().all(|slot| self.get(*slot).is_none())
    }

    /// Slots that currently hold a governor ID, in main, alt, farm order.
    pub fn linked_slots(&self) -> Vec<(AccountSlot, u64)> {
        AccountSlot::ALL
            .into_iter()
            .filter_map(|slot| self.get(slot).map(|id| (slot, id)))
            .collect()
    }
}

/// Parameters for linking a governor ID into one slot.
#[derive(Debug, Clone)]
pub struct LinkAccountParam {
    pub user_id: u64,
    pub display_name: String,
    pub slot: AccountSlot,
    pub governor_id: u64,
}
