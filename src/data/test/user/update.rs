use super::*;

/// Tests that an update replaces the supplied fields, leaves the rest
/// untouched, and refreshes the update timestamp.
///
/// Expected: Ok(Some(user)) with new metadata and updated_at >= prior
#[tokio::test]
async fn merges_fields_and_refreshes_updated_at() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    let created = repo
        .create(create_param("auth0|upd").into_active_model())
        .await?;

    let param = UpdateUserParam {
        auth0_id: None,
        metadata: Some(UserMetadata {
            facilities: vec!["f1".to_string(), "f2".to_string()],
            default_facility: "f2".to_string(),
        }),
    };

    let updated = repo
        .update(created.id, param.into_active_model())
        .await?
        .unwrap();

    assert_eq!(updated.auth0_id, "auth0|upd");
    assert_eq!(
        updated.metadata.as_ref().unwrap().default_facility,
        "f2"
    );
    assert!(updated.updated_at >= created.updated_at);
    assert_eq!(updated.created_at, created.created_at);

    Ok(())
}

/// Tests that a partial update of only the auth0 id keeps the stored
/// metadata.
///
/// Expected: Ok(Some(user)) with new auth0_id and original metadata
#[tokio::test]
async fn keeps_unset_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    let created = repo
        .create(create_param("auth0|before").into_active_model())
        .await?;

    let param = UpdateUserParam {
        auth0_id: Some("auth0|after".to_string()),
        metadata: None,
    };

    let updated = repo
        .update(created.id, param.into_active_model())
        .await?
        .unwrap();

    assert_eq!(updated.auth0_id, "auth0|after");
    assert_eq!(updated.metadata, created.metadata);

    Ok(())
}

/// Tests that updating a non-existent identifier yields the not-found
/// sentinel rather than an error.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    let param = UpdateUserParam {
        auth0_id: Some("auth0|ghost".to_string()),
        metadata: None,
    };

    let updated = repo
        .update(uuid::Uuid::new_v4(), param.into_active_model())
        .await?;

    assert!(updated.is_none());

    Ok(())
}
