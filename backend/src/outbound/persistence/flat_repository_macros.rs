//! Shared macro for entities stored in a single table.

/// Implement `EntityRepository<$entity>` for `DieselCatalogue` over one table.
///
/// The generated methods:
/// - order listings by primary key
/// - convert rows with `From<$row> for $entity`
/// - write column values built with `From<&$draft> for $values`
/// - report absent rows through `Option`/`bool` rather than errors
macro_rules! impl_flat_entity_repository {
    ($entity:ty, $draft:ty, $table:ident, $row:ty, $values:ident) => {
        #[async_trait::async_trait]
        impl EntityRepository<$entity> for DieselCatalogue {
            async fn list(&self) -> Result<Vec<$entity>, RepositoryError> {
                let mut conn = self.pool.get().await.map_err(map_pool_error)?;
                let rows: Vec<$row> = $table::table
                    .order_by($table::id)
                    .select(<$row>::as_select())
                    .load(&mut conn)
                    .await
                    .map_err(map_diesel_error)?;
                Ok(rows.into_iter().map(<$entity>::from).collect())
            }

            async fn find_by_id(&self, id: EntityId) -> Result<Option<$entity>, RepositoryError> {
                let mut conn = self.pool.get().await.map_err(map_pool_error)?;
                let row: Option<$row> = $table::table
                    .find(id.get())
                    .select(<$row>::as_select())
                    .first(&mut conn)
                    .await
                    .optional()
                    .map_err(map_diesel_error)?;
                Ok(row.map(<$entity>::from))
            }

            async fn insert(&self, draft: &$draft) -> Result<$entity, RepositoryError> {
                let mut conn = self.pool.get().await.map_err(map_pool_error)?;
                let row: $row = diesel::insert_into($table::table)
                    .values($values::from(draft))
                    .returning(<$row>::as_returning())
                    .get_result(&mut conn)
                    .await
                    .map_err(map_diesel_error)?;
                Ok(row.into())
            }

            async fn update(
                &self,
                id: EntityId,
                draft: &$draft,
            ) -> Result<Option<$entity>, RepositoryError> {
                let mut conn = self.pool.get().await.map_err(map_pool_error)?;
                let row: Option<$row> = diesel::update($table::table.find(id.get()))
                    .set($values::from(draft))
                    .returning(<$row>::as_returning())
                    .get_result(&mut conn)
                    .await
                    .optional()
                    .map_err(map_diesel_error)?;
                Ok(row.map(<$entity>::from))
            }

            async fn delete(&self, id: EntityId) -> Result<bool, RepositoryError> {
                let mut conn = self.pool.get().await.map_err(map_pool_error)?;
                let removed = diesel::delete($table::table.find(id.get()))
                    .execute(&mut conn)
                    .await
                    .map_err(map_diesel_error)?;
                Ok(removed > 0)
            }

            async fn existing_ids(
                &self,
                ids: Vec<EntityId>,
            ) -> Result<Vec<EntityId>, RepositoryError> {
                if ids.is_empty() {
                    return Ok(Vec::new());
                }
                let raw: Vec<i64> = ids.into_iter().map(EntityId::get).collect();
                let mut conn = self.pool.get().await.map_err(map_pool_error)?;
                let found: Vec<i64> = $table::table
                    .filter($table::id.eq_any(raw))
                    .order_by($table::id)
                    .select($table::id)
                    .load(&mut conn)
                    .await
                    .map_err(map_diesel_error)?;
                Ok(found.into_iter().map(EntityId::new).collect())
            }
        }
    };
}

pub(crate) use impl_flat_entity_repository;
