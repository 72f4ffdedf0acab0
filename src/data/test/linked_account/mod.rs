use crate::{
    data::linked_account::LinkedAccountRepository,
    error::AppError,
    model::account::{AccountSlot, LinkAccountParam},
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod clear;
mod get;
mod replace_all;
mod upsert;

fn link(user_id: u64, slot: AccountSlot, governor_id: u64) -> LinkAccountParam {
    LinkAccountParam {
        user_id,
        display_name: format!("user-{}", user_id),
        slot,
        governor_id,
    }
}
