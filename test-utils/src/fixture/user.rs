//! Fixed user records for tests that need known, stable data.

use chrono::Utc;
use entity::user::UserMetadata;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, TransactionTrait,
};
use uuid::{uuid, Uuid};

/// Stable primary key for the first fixture user.
pub const USER_ONE_ID: Uuid = uuid!("00000000-0000-4000-8000-000000000001");
/// Stable primary key for the second fixture user.
pub const USER_TWO_ID: Uuid = uuid!("00000000-0000-4000-8000-000000000002");

/// Fixture providing a fixed set of user records.
///
/// Seeding runs all inserts inside one transaction: either the full set is
/// loaded or none of it is.
pub struct UserFixture;

impl UserFixture {
    pub fn new() -> Self {
        Self
    }

    /// The fixture's user records as active models ready for insert.
    pub fn records(&self) -> Vec<entity::user::ActiveModel> {
        let now = Utc::now();

        vec![
            entity::user::ActiveModel {
                id: ActiveValue::Set(USER_ONE_ID),
                auth0_id: ActiveValue::Set("auth0|fixture_one".to_string()),
                metadata: ActiveValue::Set(Some(UserMetadata {
                    facilities: vec!["facility-1".to_string(), "facility-2".to_string()],
                    default_facility: "facility-1".to_string(),
                })),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            },
            entity::user::ActiveModel {
                id: ActiveValue::Set(USER_TWO_ID),
                auth0_id: ActiveValue::Set("auth0|fixture_two".to_string()),
                metadata: ActiveValue::Set(Some(UserMetadata {
                    facilities: vec!["facility-3".to_string()],
                    default_facility: "facility-3".to_string(),
                })),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            },
        ]
    }

    /// Inserts the fixture records inside a single transaction.
    ///
    /// # Arguments
    /// - `db` - Database connection
    ///
    /// # Returns
    /// - `Ok(())` - All records inserted and committed
    /// - `Err(DbErr)` - Insert or commit failed; nothing is persisted
    pub async fn seed_records(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        let txn = db.begin().await?;

        for record in self.records() {
            record.insert(&txn).await?;
        }

        txn.commit().await
    }

    /// Deletes the fixture records by their stable ids.
    ///
    /// # Arguments
    /// - `db` - Database connection
    ///
    /// # Returns
    /// - `Ok(())` - Fixture records removed (missing rows are ignored)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn clear_records(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        entity::prelude::User::delete_many()
            .filter(entity::user::Column::Id.is_in([USER_ONE_ID, USER_TWO_ID]))
            .exec(db)
            .await?;

        Ok(())
    }
}

impl Default for UserFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use sea_orm::PaginatorTrait;

    #[tokio::test]
    async fn seeds_and_clears_records() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let fixture = UserFixture::new();

        fixture.seed_records(db).await?;
        assert_eq!(entity::prelude::User::find().count(db).await?, 2);

        fixture.clear_records(db).await?;
        assert_eq!(entity::prelude::User::find().count(db).await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn reseeding_rolls_back_as_one_transaction() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let fixture = UserFixture::new();
        fixture.seed_records(db).await?;

        // Duplicate ids make the second load fail; the transaction must
        // leave the table exactly as it was.
        let result = fixture.seed_records(db).await;
        assert!(result.is_err());
        assert_eq!(entity::prelude::User::find().count(db).await?, 2);

        Ok(())
    }
}
