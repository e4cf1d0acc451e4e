use super::*;

/// Tests that an empty table yields an empty list.
///
/// Expected: Ok(vec![])
#[tokio::test]
async fn returns_empty_when_no_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let users = repo.get_all().await?;

    assert!(users.is_empty());

    Ok(())
}

/// Tests that every row is returned.
///
/// Expected: Ok(vec) containing all seeded users
#[tokio::test]
async fn returns_every_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        test_utils::factory::create_user(db).await?;
    }

    let repo = UserRepository::new(db);
    let users = repo.get_all().await?;

    assert_eq!(users.len(), 3);

    Ok(())
}
