use crate::{
    data::snapshot::SnapshotRepository,
    error::AppError,
    model::snapshot::{Metric, StatsCategory},
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod aggregate_top_k;
mod lookup;
mod replace;
mod top_n;
