use super::*;

/// Tests that create generates server-assigned fields and the row is
/// retrievable by the returned id.
///
/// Expected: Ok(user) with generated id; get_by_id returns an equal record
#[tokio::test]
async fn creates_row_with_generated_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    let created = repo
        .create(create_param("auth0|1").into_active_model())
        .await?;

    assert!(!created.id.is_nil());
    assert_eq!(created.auth0_id, "auth0|1");

    let fetched = repo.get_by_id(created.id).await?.unwrap();

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.auth0_id, created.auth0_id);
    assert_eq!(fetched.metadata, created.metadata);

    Ok(())
}

/// Tests that inserting a second user with the same auth0 id fails with a
/// constraint error while the first row stays retrievable.
///
/// Expected: Err(DbErr) for the duplicate; first user still found
#[tokio::test]
async fn rejects_duplicate_auth0_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    let first = repo
        .create(create_param("auth0|dup").into_active_model())
        .await?;

    let second = repo
        .create(create_param("auth0|dup").into_active_model())
        .await;

    assert!(second.is_err());

    let fetched = repo.get_by_id(first.id).await?;
    assert!(fetched.is_some());

    Ok(())
}

/// Tests that caller-supplied ids and timestamps are respected, as the
/// fixture loader relies on stable ids.
///
/// Expected: Ok(user) with the provided id
#[tokio::test]
async fn keeps_caller_supplied_id() -> Result<(), DbErr> {
    use sea_orm::ActiveValue;

    let test = TestBuilder::new().with_user_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    let id = uuid::Uuid::new_v4();
    let mut active_model = create_param("auth0|fixed").into_active_model();
    active_model.id = ActiveValue::Set(id);

    let created = repo.create(active_model).await?;

    assert_eq!(created.id, id);

    Ok(())
}
