use super::*;
use crate::model::sync::{EventSnapshotRow, GeneralSnapshotRow};

fn general_row(governor_id: u64, power: &str) -> GeneralSnapshotRow {
    GeneralSnapshotRow {
        governor_id,
        governor_name: format!("Governor {}", governor_id),
        power: Some(power.to_string()),
        kill_points: None,
        deaths: None,
        tier4_kills: None,
        tier5_kills: None,
        alliance_tag: None,
    }
}

/// Tests replacing the general snapshot.
///
/// Verifies that rows from the previous generation disappear.
///
/// Expected: Ok with only the new rows readable
#[tokio::test]
async fn replaces_general_generation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_snapshot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::snapshot::GeneralSnapshotFactory::new(db)
        .governor_id("1")
        .build()
        .await?;

    let repo = SnapshotRepository::new(db);
    let count = repo
        .replace_general(vec![general_row(2, "1,000"), general_row(3, "2,000")])
        .await?;

    assert_eq!(count, 2);
    assert!(repo.lookup(1, StatsCategory::General).await?.is_none());
    assert_eq!(
        repo.lookup(3, StatsCategory::General).await?.unwrap().power,
        Some(2_000)
    );

    Ok(())
}

/// Tests replacing the event snapshot leaves the general snapshot alone.
///
/// Expected: Ok with the general row still present
#[tokio::test]
async fn event_replace_keeps_general_rows() -> Result<(), AppError> {
    let test = TestBuilder::new().with_snapshot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::snapshot::GeneralSnapshotFactory::new(db)
        .governor_id("1")
        .build()
        .await?;

    let repo = SnapshotRepository::new(db);
    repo.replace_event(vec![EventSnapshotRow {
        governor_id: 1,
        governor_name: "Governor 1".to_string(),
        power: Some("5".to_string()),
        rank: Some("1".to_string()),
        dkp_required: None,
        dkp_achieved: None,
        deaths: None,
        tier4_kills: None,
        tier5_kills: None,
        alliance_tag: None,
    }])
    .await?;

    assert_eq!(entity::prelude::GeneralSnapshot::find().all(db).await?.len(), 1);
    assert_eq!(entity::prelude::EventSnapshot::find().all(db).await?.len(), 1);

    Ok(())
}

/// Tests bulk inserts larger than one chunk.
///
/// Expected: Ok with all 600 rows stored
#[tokio::test]
async fn inserts_full_top_600() -> Result<(), AppError> {
    let test = TestBuilder::new().with_snapshot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let rows = (1..=600).map(|id| general_row(id, "1")).collect();

    let repo = SnapshotRepository::new(db);
    let count = repo.replace_general(rows).await?;

    assert_eq!(count, 600);
    assert_eq!(repo.all(StatsCategory::General).await?.len(), 600);

    Ok(())
}
