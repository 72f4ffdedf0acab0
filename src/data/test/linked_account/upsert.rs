use super::*;

/// Tests linking the first governor for a new user.
///
/// Verifies that upsert creates the user's row with only the targeted slot set.
///
/// Expected: Ok with main set and alt/farm empty
#[tokio::test]
async fn creates_row_for_new_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LinkedAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LinkedAccountRepository::new(db);
    let linked = repo.upsert(link(42, AccountSlot::Main, 50001)).await?;

    assert_eq!(linked.user_id, 42);
    assert_eq!(linked.main, Some(50001));
    assert_eq!(linked.alt, None);
    assert_eq!(linked.farm, None);

    let stored = entity::prelude::LinkedAccount::find_by_id("42".to_string())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.main_governor_id, Some("50001".to_string()));

    Ok(())
}

/// Tests linking a second slot for an existing user.
///
/// Verifies that upserting the alt slot leaves the main slot untouched.
///
/// Expected: Ok with both main and alt set
#[tokio::test]
async fn keeps_other_slots() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LinkedAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::linked_account::LinkedAccountFactory::new(db)
        .user_id("42")
        .main("50001")
        .farm("50003")
        .build()
        .await?;

    let repo = LinkedAccountRepository::new(db);
    let linked = repo.upsert(link(42, AccountSlot::Alt, 50002)).await?;

    assert_eq!(linked.main, Some(50001));
    assert_eq!(linked.alt, Some(50002));
    assert_eq!(linked.farm, Some(50003));

    Ok(())
}

/// Tests linking into a slot that already holds a governor.
///
/// Verifies that the previous value is silently replaced and the display name is
/// refreshed.
///
/// Expected: Ok with the new governor ID and display name
#[tokio::test]
async fn replaces_existing_slot_value() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LinkedAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::linked_account::LinkedAccountFactory::new(db)
        .user_id("42")
        .display_name("old name")
        .main("50001")
        .build()
        .await?;

    let repo = LinkedAccountRepository::new(db);
    let linked = repo.upsert(link(42, AccountSlot::Main, 60001)).await?;

    assert_eq!(linked.main, Some(60001));
    assert_eq!(linked.display_name, "user-42");

    let count = entity::prelude::LinkedAccount::find().all(db).await?.len();
    assert_eq!(count, 1);

    Ok(())
}
