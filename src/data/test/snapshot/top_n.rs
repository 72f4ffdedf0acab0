use super::*;

/// Tests ranking by parsed numeric value rather than text.
///
/// "1,234" must rank above "999" even though it sorts lower as a string.
///
/// Expected: Ok with rows ordered by numeric value
#[tokio::test]
async fn orders_by_parsed_value() -> Result<(), AppError> {
    let test = TestBuilder::new().with_snapshot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for (id, kills) in [("1", "999"), ("2", "1,234"), ("3", "50")] {
        factory::snapshot::EventSnapshotFactory::new(db)
            .governor_id(id)
            .tier4_kills(kills)
            .build()
            .await?;
    }

    let repo = SnapshotRepository::new(db);
    let top = repo.top_n(StatsCategory::Event, Metric::Tier4Kills, 3).await?;

    let ids: Vec<u64> = top.iter().map(|row| row.governor_id).collect();
    assert_eq!(ids, vec![2, 1, 3]);
    assert_eq!(top[0].tier4_kills, Some(1_234));

    Ok(())
}

/// Tests that exactly n rows are returned when more exist.
///
/// Expected: Ok with 10 rows out of 15
#[tokio::test]
async fn returns_exactly_n_rows() -> Result<(), AppError> {
    let test = TestBuilder::new().with_snapshot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for kills in 0..15 {
        factory::snapshot::EventSnapshotFactory::new(db)
            .deaths(kills.to_string())
            .build()
            .await?;
    }

    let repo = SnapshotRepository::new(db);
    let top = repo.top_n(StatsCategory::Event, Metric::Deaths, 10).await?;

    assert_eq!(top.len(), 10);
    assert_eq!(top[0].deaths, Some(14));
    assert_eq!(top[9].deaths, Some(5));

    Ok(())
}

/// Tests tie-breaking by governor ID.
///
/// Expected: Ok with equal values ordered by ascending governor ID
#[tokio::test]
async fn ties_break_by_governor_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_snapshot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for id in ["300", "100", "200"] {
        factory::snapshot::EventSnapshotFactory::new(db)
            .governor_id(id)
            .tier5_kills("7,000")
            .build()
            .await?;
    }

    let repo = SnapshotRepository::new(db);
    let top = repo.top_n(StatsCategory::Event, Metric::Tier5Kills, 2).await?;

    let ids: Vec<u64> = top.iter().map(|row| row.governor_id).collect();
    assert_eq!(ids, vec![100, 200]);

    Ok(())
}

/// Tests that rows without a value sort after all rows with one.
///
/// Expected: Ok with the empty-deaths row last
#[tokio::test]
async fn missing_values_sort_last() -> Result<(), AppError> {
    let test = TestBuilder::new().with_snapshot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::snapshot::EventSnapshotFactory::new(db)
        .governor_id("1")
        .no_deaths()
        .build()
        .await?;
    factory::snapshot::EventSnapshotFactory::new(db)
        .governor_id("2")
        .deaths("0")
        .build()
        .await?;

    let repo = SnapshotRepository::new(db);
    let top = repo.top_n(StatsCategory::Event, Metric::Deaths, 10).await?;

    let ids: Vec<u64> = top.iter().map(|row| row.governor_id).collect();
    assert_eq!(ids, vec![2, 1]);

    Ok(())
}
