//! Translation of pool and Diesel failures into entity store errors.
//!
//! Constraint violations carry enough metadata to rebuild the domain error:
//! unique violations name the column through the constraint
//! (`<table>_<column>_key`), and foreign key violations name the link table
//! and report the offending key in the detail line
//! (`Key (genre_id)=(9) is not present in table "genres".`).

use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};
use tracing::{debug, warn};

use crate::domain::ports::RepositoryError;

use super::pool::PoolError;

/// Map pool errors to connection failures.
pub(crate) fn map_pool_error(error: PoolError) -> RepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            RepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to entity store errors.
pub(crate) fn map_diesel_error(error: DieselError) -> RepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            map_unique_violation(info.as_ref())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
            map_foreign_key_violation(info.as_ref())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            RepositoryError::connection("database connection error")
        }
        DieselError::NotFound => RepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => RepositoryError::query("database query error"),
        _ => RepositoryError::query("database error"),
    }
}

fn map_unique_violation(info: &(dyn DatabaseErrorInformation + Send + Sync)) -> RepositoryError {
    let column = info
        .constraint_name()
        .zip(info.table_name())
        .and_then(|(constraint, table)| unique_column(constraint, table));
    column.map_or_else(
        || {
            warn!(
                constraint = ?info.constraint_name(),
                "unrecognised unique violation"
            );
            RepositoryError::query("unique constraint violation")
        },
        RepositoryError::duplicate,
    )
}

fn map_foreign_key_violation(
    info: &(dyn DatabaseErrorInformation + Send + Sync),
) -> RepositoryError {
    let link = info.table_name().and_then(link_field);
    let key = info.details().and_then(referenced_key);
    match (link, key) {
        (Some(field), Some(id)) => RepositoryError::missing_reference(field, id),
        _ => {
            warn!(
                table = ?info.table_name(),
                constraint = ?info.constraint_name(),
                "unrecognised foreign key violation"
            );
            RepositoryError::query("foreign key violation")
        }
    }
}

/// Column guarded by a `<table>_<column>_key` unique constraint.
fn unique_column<'a>(constraint: &'a str, table: &str) -> Option<&'a str> {
    constraint
        .strip_prefix(table)?
        .strip_prefix('_')?
        .strip_suffix("_key")
        .filter(|column| !column.is_empty())
}

/// Wire field a link table feeds.
fn link_field(table: &str) -> Option<&'static str> {
    match table {
        "movies_genres" => Some("genres"),
        "movies_actors" => Some("actors"),
        _ => None,
    }
}

/// Key value from a `Key (column)=(value) ...` detail line.
fn referenced_key(details: &str) -> Option<i64> {
    let (_, rest) = details.split_once(")=(")?;
    let (value, _) = rest.split_once(')')?;
    value.trim().parse().ok()
}
