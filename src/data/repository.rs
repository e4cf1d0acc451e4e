//! Generic single-table persistence.
//!
//! `Repository<E, A>` implements the create/read/update/delete operations
//! shared by every UUID-keyed table, parameterized by an entity and its
//! active model. Entities opt in by implementing `TableRecord` on the active
//! model, which gives the repository the hooks it needs for server-generated
//! columns without any inheritance hierarchy.

use std::marker::PhantomData;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, PrimaryKeyTrait,
};
use uuid::Uuid;

/// Capability interface an entity's active model implements so the generic
/// repository can manage its server-generated columns.
pub trait TableRecord {
    /// Sets the primary key column.
    fn set_key(&mut self, id: Uuid);

    /// Fills server-generated columns for a fresh insert. Columns already set
    /// by the caller (fixtures with stable ids, for example) are left alone.
    fn fill_insert_defaults(&mut self, id: Uuid, now: DateTime<Utc>);

    /// Refreshes the update timestamp. Called on every mutation.
    fn touch(&mut self, now: DateTime<Utc>);
}

/// Repository providing generic database operations for one table.
///
/// Holds a reference to the shared connection pool; each operation issues a
/// single atomic statement with no application-level locking or retry.
pub struct Repository<'a, E, A> {
    db: &'a DatabaseConnection,
    entity: PhantomData<(E, A)>,
}

impl<'a, E, A> Repository<'a, E, A>
where
    E: EntityTrait,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = Uuid>,
    E::Model: IntoActiveModel<A>,
    A: ActiveModelTrait<Entity = E> + TableRecord + Send,
{
    /// Creates a new repository for the entity's table.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `Repository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    /// Returns every row in storage order. No pagination.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - All rows (empty if the table is empty)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<E::Model>, DbErr> {
        E::find().all(self.db).await
    }

    /// Returns the row with the given id, or `None` when no row matches.
    ///
    /// # Arguments
    /// - `id` - Primary key to look up
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Matching row
    /// - `Ok(None)` - No row with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<E::Model>, DbErr> {
        E::find_by_id(id).one(self.db).await
    }

    /// Inserts one row and returns it including generated columns.
    ///
    /// The id and timestamps are generated server-side when the caller left
    /// them unset. A uniqueness violation surfaces as the raw `DbErr`.
    ///
    /// # Arguments
    /// - `active_model` - Columns to insert
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted row
    /// - `Err(DbErr)` - Constraint violation or other database error
    pub async fn create(&self, mut active_model: A) -> Result<E::Model, DbErr> {
        active_model.fill_insert_defaults(Uuid::new_v4(), Utc::now());

        E::insert(active_model).exec_with_returning(self.db).await
    }

    /// Merges the set columns into the row with the given id.
    ///
    /// The update timestamp is always overwritten, even when no other column
    /// changed. Returns `None` when no row matched.
    ///
    /// # Arguments
    /// - `id` - Primary key of the row to update
    /// - `active_model` - Columns to overwrite; unset columns keep their value
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated row
    /// - `Ok(None)` - No row with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: Uuid, mut active_model: A) -> Result<Option<E::Model>, DbErr> {
        active_model.set_key(id);
        active_model.touch(Utc::now());

        match E::update(active_model).exec(self.db).await {
            Ok(model) => Ok(Some(model)),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Removes the row with the given id.
    ///
    /// # Arguments
    /// - `id` - Primary key of the row to delete
    ///
    /// # Returns
    /// - `Ok(true)` - A row was removed
    /// - `Ok(false)` - No row with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = E::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
