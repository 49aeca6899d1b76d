//! Generic catalogue resource service.
//!
//! One [`ResourceService`] per entity kind implements the [`ResourcePort`]
//! driving port by pairing that kind's store with its serializer.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::ports::{EntityRepository, RepositoryError, ResourcePort, WriteBody};
use crate::domain::serializers::{
    FieldErrors, Serializer, SerializerError, WireRecord, WriteMode, into_record, missing_pk,
};
use crate::domain::{Entity, EntityId, EntityKind, Error};

fn map_repository_error(kind: EntityKind, error: RepositoryError) -> Error {
    match error {
        RepositoryError::Connection { message } => {
            warn!(kind = %kind, %message, "entity store unavailable");
            Error::service_unavailable(format!("{kind} store unavailable: {message}"))
        }
        RepositoryError::Query { message } => {
            Error::internal(format!("{kind} store error: {message}"))
        }
        RepositoryError::Duplicate { field } => Error::validation(FieldErrors::single(
            field.as_str(),
            format!("{kind} with this {field} already exists."),
        )),
        RepositoryError::MissingReference { field, id } => {
            Error::validation(FieldErrors::single(field, missing_pk(id)))
        }
    }
}

fn map_serializer_error(kind: EntityKind, error: SerializerError) -> Error {
    match error {
        SerializerError::Invalid(fields) => Error::validation(fields),
        SerializerError::Store(error) => map_repository_error(kind, error),
    }
}

fn not_found(kind: EntityKind, id: EntityId) -> Error {
    Error::not_found(format!("{kind} {id} not found"))
}

/// CRUD over one entity kind.
pub struct ResourceService<E: Entity> {
    repository: Arc<dyn EntityRepository<E>>,
    serializer: Arc<dyn Serializer<E>>,
}

impl<E: Entity> Clone for ResourceService<E> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            serializer: Arc::clone(&self.serializer),
        }
    }
}

impl<E: Entity> ResourceService<E> {
    /// Create a service over `repository`, rendering with `serializer`.
    #[must_use]
    pub const fn new(
        repository: Arc<dyn EntityRepository<E>>,
        serializer: Arc<dyn Serializer<E>>,
    ) -> Self {
        Self {
            repository,
            serializer,
        }
    }

    async fn load(&self, id: EntityId) -> Result<E, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|err| map_repository_error(E::KIND, err))?
            .ok_or_else(|| not_found(E::KIND, id))
    }
}

#[async_trait]
impl<E: Entity> ResourcePort for ResourceService<E> {
    async fn list(&self) -> Result<Vec<WireRecord>, Error> {
        let rows = self
            .repository
            .list()
            .await
            .map_err(|err| map_repository_error(E::KIND, err))?;
        debug!(kind = %E::KIND, count = rows.len(), "listed entities");
        Ok(rows
            .iter()
            .map(|row| self.serializer.serialize(row))
            .collect())
    }

    async fn retrieve(&self, id: EntityId) -> Result<WireRecord, Error> {
        let row = self.load(id).await?;
        Ok(self.serializer.serialize(&row))
    }

    async fn create(&self, record: WireRecord) -> Result<WireRecord, Error> {
        let draft = self
            .serializer
            .deserialize(&record, None, WriteMode::Full)
            .await
            .map_err(|err| map_serializer_error(E::KIND, err))?;
        let created = self
            .repository
            .insert(&draft)
            .await
            .map_err(|err| map_repository_error(E::KIND, err))?;
        info!(kind = %E::KIND, id = %created.id(), "entity created");
        Ok(self.serializer.serialize(&created))
    }

    async fn update(
        &self,
        id: EntityId,
        body: WriteBody,
        mode: WriteMode,
    ) -> Result<WireRecord, Error> {
        let existing = self.load(id).await?;
        let record = into_record(body?).map_err(Error::validation)?;
        let draft = self
            .serializer
            .deserialize(&record, Some(&existing), mode)
            .await
            .map_err(|err| map_serializer_error(E::KIND, err))?;
        let updated = self
            .repository
            .update(id, &draft)
            .await
            .map_err(|err| map_repository_error(E::KIND, err))?
            .ok_or_else(|| not_found(E::KIND, id))?;
        info!(kind = %E::KIND, %id, ?mode, "entity updated");
        Ok(self.serializer.serialize(&updated))
    }

    async fn delete(&self, id: EntityId) -> Result<(), Error> {
        let removed = self
            .repository
            .delete(id)
            .await
            .map_err(|err| map_repository_error(E::KIND, err))?;
        if !removed {
            return Err(not_found(E::KIND, id));
        }
        info!(kind = %E::KIND, %id, "entity deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "resource_service_tests.rs"]
mod tests;
