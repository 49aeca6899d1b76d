//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod entity_repository;
mod resource_port;

#[cfg(test)]
pub use entity_repository::MockEntityRepository;
pub use entity_repository::{EntityRepository, RepositoryError};
#[cfg(test)]
pub use resource_port::MockResourcePort;
pub use resource_port::{ResourcePort, WriteBody};
