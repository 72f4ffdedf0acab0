use super::*;

/// Tests getting a user with no row.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_absent_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LinkedAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LinkedAccountRepository::new(db);

    assert!(repo.get(123).await?.is_none());

    Ok(())
}

/// Tests getting a user whose slots were all cleared.
///
/// The row remains after unlinking, so the user is found but has nothing linked.
///
/// Expected: Ok(Some) with is_empty true
#[tokio::test]
async fn returns_empty_accounts_after_unlinking_everything() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LinkedAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::linked_account::LinkedAccountFactory::new(db)
        .user_id("55")
        .build()
        .await?;

    let repo = LinkedAccountRepository::new(db);
    let linked = repo.get(55).await?.unwrap();

    assert!(linked.is_empty());
    assert!(linked.linked_slots().is_empty());

    Ok(())
}

/// Tests that a corrupted stored governor ID surfaces as an error.
///
/// Expected: Err(AppError::InternalError)
#[tokio::test]
async fn fails_on_non_numeric_governor_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LinkedAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::linked_account::LinkedAccountFactory::new(db)
        .user_id("56")
        .alt("fifty")
        .build()
        .await?;

    let repo = LinkedAccountRepository::new(db);
    let result = repo.get(56).await;

    assert!(matches!(result, Err(AppError::InternalError(_))));

    Ok(())
}
