use super::*;
use crate::model::sync::AccountRow;

/// Tests replacing every linked account with sheet rows.
///
/// Verifies that previous rows are removed and the new rows are inserted as given.
///
/// Expected: Ok(2) with only the new users present
#[tokio::test]
async fn replaces_previous_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LinkedAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_linked_account(db).await?;

    let repo = LinkedAccountRepository::new(db);
    let count = repo
        .replace_all(vec![
            AccountRow {
                user_id: 1,
                display_name: "one".to_string(),
                main: Some(50001),
                alt: None,
                farm: None,
            },
            AccountRow {
                user_id: 2,
                display_name: "two".to_string(),
                main: None,
                alt: Some(50002),
                farm: Some(50003),
            },
        ])
        .await?;

    assert_eq!(count, 2);
    assert_eq!(entity::prelude::LinkedAccount::find().all(db).await?.len(), 2);

    let second = repo.get(2).await?.unwrap();
    assert_eq!(second.alt, Some(50002));
    assert_eq!(second.farm, Some(50003));

    Ok(())
}

/// Tests replacing with an empty row set.
///
/// Expected: Ok(0) with the table empty
#[tokio::test]
async fn empty_rows_clear_table() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LinkedAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_linked_account(db).await?;

    let repo = LinkedAccountRepository::new(db);
    let count = repo.replace_all(Vec::new()).await?;

    assert_eq!(count, 0);
    assert!(entity::prelude::LinkedAccount::find().all(db).await?.is_empty());

    Ok(())
}
