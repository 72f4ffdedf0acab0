use super::*;

/// Tests the link then unlink scenario across two slots.
///
/// Links 50001 as main and 50002 as alt, then clears main.
///
/// Expected: Ok with main empty and alt still 50002
#[tokio::test]
async fn clears_only_the_target_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LinkedAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LinkedAccountRepository::new(db);
    repo.upsert(link(7, AccountSlot::Main, 50001)).await?;
    repo.upsert(link(7, AccountSlot::Alt, 50002)).await?;

    repo.clear(7, AccountSlot::Main).await?;

    let linked = repo.get(7).await?.unwrap();
    assert_eq!(linked.main, None);
    assert_eq!(linked.alt, Some(50002));
    assert_eq!(linked.farm, None);

    Ok(())
}

/// Tests clearing a slot that is already empty.
///
/// Expected: Ok with the row unchanged
#[tokio::test]
async fn empty_slot_is_noop() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LinkedAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let before = factory::linked_account::LinkedAccountFactory::new(db)
        .main("50001")
        .build()
        .await?;
    let user_id: u64 = before.user_id.parse().unwrap();

    let repo = LinkedAccountRepository::new(db);
    repo.clear(user_id, AccountSlot::Farm).await?;

    let after = entity::prelude::LinkedAccount::find_by_id(before.user_id.clone())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(after, before);

    Ok(())
}

/// Tests clearing a slot for a user that never linked.
///
/// Expected: Ok and no row created
#[tokio::test]
async fn absent_user_is_noop() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LinkedAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LinkedAccountRepository::new(db);
    repo.clear(99, AccountSlot::Main).await?;

    assert!(repo.get(99).await?.is_none());

    Ok(())
}
