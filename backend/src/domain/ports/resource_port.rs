//! Driving port consumed by the HTTP resource handlers.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::serializers::{WireRecord, WriteMode};
use crate::domain::{EntityId, Error};

/// An update body as the transport decoded it.
///
/// Decoding failures travel with the request so they surface only after the
/// target row is known to exist.
pub type WriteBody = Result<Value, Error>;

/// List/retrieve/create/update/delete over one entity kind, speaking wire
/// records on both sides.
///
/// Every method maps its failure to a transport-agnostic [`Error`]:
/// validation problems become `InvalidRequest` with a field map, absent
/// identifiers become `NotFound`, store failures become
/// `ServiceUnavailable`/`InternalError`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourcePort: Send + Sync {
    /// Render every row.
    async fn list(&self) -> Result<Vec<WireRecord>, Error>;

    /// Render one row.
    async fn retrieve(&self, id: EntityId) -> Result<WireRecord, Error>;

    /// Validate and insert a new row.
    async fn create(&self, record: WireRecord) -> Result<WireRecord, Error>;

    /// Validate and overwrite an existing row.
    ///
    /// An absent row is `NotFound` whatever `body` holds.
    async fn update(
        &self,
        id: EntityId,
        body: WriteBody,
        mode: WriteMode,
    ) -> Result<WireRecord, Error>;

    /// Remove a row.
    async fn delete(&self, id: EntityId) -> Result<(), Error>;
}
