use super::*;

/// Tests the secondary-key lookup for an existing user.
///
/// Expected: Ok(Some(user))
#[tokio::test]
async fn returns_matching_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seeded = test_utils::factory::user::UserFactory::new(db)
        .auth0_id("auth0|lookup")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_auth0_id("auth0|lookup").await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().id, seeded.id);

    Ok(())
}

/// Tests that an unknown auth0 id yields the not-found sentinel.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_auth0_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    test_utils::factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_auth0_id("auth0|missing").await?;

    assert!(found.is_none());

    Ok(())
}
