use super::*;

/// Tests aggregation over fewer rows than k.
///
/// Expected: Ok with every row summed
#[tokio::test]
async fn sums_all_rows_when_fewer_than_k() -> Result<(), AppError> {
    let test = TestBuilder::new().with_snapshot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for (power, t4, t5, deaths) in [
        ("10,000,000", "1,000", "100", "10"),
        ("20,000,000", "2,000", "200", "20"),
    ] {
        factory::snapshot::EventSnapshotFactory::new(db)
            .power(power)
            .tier4_kills(t4)
            .tier5_kills(t5)
            .deaths(deaths)
            .build()
            .await?;
    }

    let repo = SnapshotRepository::new(db);
    let totals = repo
        .aggregate_top_k(StatsCategory::Event, 300, &Metric::LEADERBOARD)
        .await?;

    assert_eq!(totals.rows, 2);
    assert_eq!(totals.get(Metric::Tier4Kills), Some(3_000));
    assert_eq!(totals.get(Metric::Tier5Kills), Some(300));
    assert_eq!(totals.get(Metric::Deaths), Some(30));

    Ok(())
}

/// Tests that only the top k rows by power are summed.
///
/// Expected: Ok with the weakest governor excluded
#[tokio::test]
async fn only_sums_top_k_by_power() -> Result<(), AppError> {
    let test = TestBuilder::new().with_snapshot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for (power, deaths) in [("300", "3"), ("100", "1000"), ("200", "2")] {
        factory::snapshot::EventSnapshotFactory::new(db)
            .power(power)
            .deaths(deaths)
            .build()
            .await?;
    }

    let repo = SnapshotRepository::new(db);
    let totals = repo
        .aggregate_top_k(StatsCategory::Event, 2, &[Metric::Deaths])
        .await?;

    assert_eq!(totals.rows, 2);
    assert_eq!(totals.get(Metric::Deaths), Some(5));

    Ok(())
}

/// Tests that missing cells and metrics the table lacks count as zero.
///
/// Expected: Ok with zero for kill points on the event table
#[tokio::test]
async fn missing_values_count_as_zero() -> Result<(), AppError> {
    let test = TestBuilder::new().with_snapshot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::snapshot::EventSnapshotFactory::new(db)
        .no_deaths()
        .build()
        .await?;

    let repo = SnapshotRepository::new(db);
    let totals = repo
        .aggregate_top_k(StatsCategory::Event, 300, &[Metric::Deaths, Metric::KillPoints])
        .await?;

    assert_eq!(totals.get(Metric::Deaths), Some(0));
    assert_eq!(totals.get(Metric::KillPoints), Some(0));

    Ok(())
}

/// Tests aggregation over an empty snapshot.
///
/// Expected: Ok with zero rows and zero totals
#[tokio::test]
async fn empty_snapshot_sums_to_zero() -> Result<(), AppError> {
    let test = TestBuilder::new().with_snapshot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SnapshotRepository::new(db);
    let totals = repo
        .aggregate_top_k(StatsCategory::Event, 300, &Metric::LEADERBOARD)
        .await?;

    assert_eq!(totals.rows, 0);
    assert!(totals.totals.iter().all(|total| total.total == 0));

    Ok(())
}

/// Tests totals whose exact sum exceeds the i64 range.
///
/// Expected: Ok with the total clamped to i64::MAX
#[tokio::test]
async fn saturates_oversized_totals() -> Result<(), AppError> {
    let test = TestBuilder::new().with_snapshot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for power in ["200", "100"] {
        factory::snapshot::EventSnapshotFactory::new(db)
            .power(power)
            .deaths("5,000,000,000,000,000,000")
            .build()
            .await?;
    }

    let repo = SnapshotRepository::new(db);
    let totals = repo
        .aggregate_top_k(StatsCategory::Event, 300, &[Metric::Deaths])
        .await?;

    assert_eq!(totals.rows, 2);
    assert_eq!(totals.get(Metric::Deaths), Some(i64::MAX));

    Ok(())
}
