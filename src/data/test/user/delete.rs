use super::*;

/// Tests that delete reports true exactly once for a given identifier and
/// false afterwards.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn returns_true_exactly_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seeded = test_utils::factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.delete(seeded.id).await?);
    assert!(!repo.delete(seeded.id).await?);

    Ok(())
}

/// Tests that a deleted row is no longer retrievable.
///
/// Expected: Ok(None) after delete
#[tokio::test]
async fn removes_the_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seeded = test_utils::factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.delete(seeded.id).await?;

    assert!(repo.get_by_id(seeded.id).await?.is_none());

    Ok(())
}

/// Tests that deleting an unknown identifier reports false.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(!repo.delete(uuid::Uuid::new_v4()).await?);

    Ok(())
}
