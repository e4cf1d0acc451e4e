use super::*;

/// Tests looking up an existing user by primary key.
///
/// Expected: Ok(Some(user))
#[tokio::test]
async fn returns_matching_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seeded = test_utils::factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let found = repo.get_by_id(seeded.id).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().auth0_id, seeded.auth0_id);

    Ok(())
}

/// Tests that a never-created identifier yields the not-found sentinel
/// rather than an error.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let found = repo.get_by_id(uuid::Uuid::new_v4()).await?;

    assert!(found.is_none());

    Ok(())
}
