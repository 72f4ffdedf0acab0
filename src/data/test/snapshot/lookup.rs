use super::*;
use crate::model::snapshot::SnapshotDetails;

/// Tests looking up a governor in the general snapshot.
///
/// Verifies that comma-grouped cells are parsed and general-only stats are present.
///
/// Expected: Ok(Some) with parsed values
#[tokio::test]
async fn finds_general_row() -> Result<(), AppError> {
    let test = TestBuilder::new().with_snapshot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::snapshot::GeneralSnapshotFactory::new(db)
        .governor_id("50001")
        .governor_name("Aethel")
        .power("45,000,000")
        .kill_points("1,234")
        .alliance_tag("ABC")
        .build()
        .await?;

    let repo = SnapshotRepository::new(db);
    let snapshot = repo
        .lookup(50001, StatsCategory::General)
        .await?
        .unwrap();

    assert_eq!(snapshot.governor_name, "Aethel");
    assert_eq!(snapshot.power, Some(45_000_000));
    assert_eq!(snapshot.alliance_tag.as_deref(), Some("ABC"));
    assert_eq!(
        snapshot.details,
        SnapshotDetails::General {
            kill_points: Some(1_234)
        }
    );

    Ok(())
}

/// Tests that the category selects the table.
///
/// A governor present only in the general snapshot is not found in the event snapshot.
///
/// Expected: Ok(None) for the event category
#[tokio::test]
async fn category_selects_table() -> Result<(), AppError> {
    let test = TestBuilder::new().with_snapshot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::snapshot::GeneralSnapshotFactory::new(db)
        .governor_id("50001")
        .build()
        .await?;

    let repo = SnapshotRepository::new(db);

    assert!(repo.lookup(50001, StatsCategory::Event).await?.is_none());
    assert!(repo.lookup(50001, StatsCategory::General).await?.is_some());

    Ok(())
}

/// Tests looking up an event row with DKP columns.
///
/// Expected: Ok(Some) with event details
#[tokio::test]
async fn finds_event_row() -> Result<(), AppError> {
    let test = TestBuilder::new().with_snapshot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::snapshot::EventSnapshotFactory::new(db)
        .governor_id("50002")
        .rank("3")
        .dkp("2,000,000", "2,500,000")
        .no_deaths()
        .build()
        .await?;

    let repo = SnapshotRepository::new(db);
    let snapshot = repo.lookup(50002, StatsCategory::Event).await?.unwrap();

    assert_eq!(Metric::Rank.value(&snapshot), Some(3));
    assert_eq!(Metric::DkpRequired.value(&snapshot), Some(2_000_000));
    assert_eq!(Metric::DkpAchieved.value(&snapshot), Some(2_500_000));
    assert_eq!(snapshot.deaths, None);

    Ok(())
}

/// Tests that reads leave the snapshot untouched.
///
/// Expected: Ok with identical rows before and after several reads
#[tokio::test]
async fn reads_do_not_modify_snapshot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_snapshot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_event_snapshot(db).await?;
    }
    let before = entity::prelude::EventSnapshot::find().all(db).await?;

    let repo = SnapshotRepository::new(db);
    repo.top_n(StatsCategory::Event, Metric::Deaths, 10).await?;
    repo.aggregate_top_k(StatsCategory::Event, 300, &Metric::LEADERBOARD)
        .await?;
    repo.lookup(1, StatsCategory::Event).await?;

    let after = entity::prelude::EventSnapshot::find().all(db).await?;
    assert_eq!(before, after);

    Ok(())
}
