//! Cinema hall entity.

use super::entity::{Entity, EntityId, EntityKind};

/// Writable attributes of a cinema hall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CinemaHallDraft {
    /// Hall name.
    pub name: String,
    /// Number of seat rows, never negative.
    pub rows: i32,
    /// Seats per row, never negative.
    pub seats_in_row: i32,
}

/// A screening room.
///
/// ## Invariants
/// - `capacity` is derived from `rows * seats_in_row` and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CinemaHall {
    id: EntityId,
    name: String,
    rows: i32,
    seats_in_row: i32,
}

impl CinemaHall {
    /// Hall name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Number of seat rows.
    #[must_use]
    pub const fn rows(&self) -> i32 {
        self.rows
    }

    /// Seats per row.
    #[must_use]
    pub const fn seats_in_row(&self) -> i32 {
        self.seats_in_row
    }

    /// Total seats in the hall.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{CinemaHall, CinemaHallDraft, Entity, EntityId};
    ///
    /// let hall = CinemaHall::from_draft(
    ///     EntityId::new(1),
    ///     CinemaHallDraft { name: "Blue".to_owned(), rows: 10, seats_in_row: 12 },
    /// );
    /// assert_eq!(hall.capacity(), 120);
    /// ```
    #[must_use]
    pub fn capacity(&self) -> i64 {
        i64::from(self.rows) * i64::from(self.seats_in_row)
    }
}

impl Entity for CinemaHall {
    type Draft = CinemaHallDraft;

    const KIND: EntityKind = EntityKind::CinemaHall;

    fn id(&self) -> EntityId {
        self.id
    }

    fn draft(&self) -> CinemaHallDraft {
        CinemaHallDraft {
            name: self.name.clone(),
            rows: self.rows,
            seats_in_row: self.seats_in_row,
        }
    }

    fn from_draft(id: EntityId, draft: CinemaHallDraft) -> Self {
        let CinemaHallDraft {
            name,
            rows,
            seats_in_row,
        } = draft;
        Self {
            id,
            name,
            rows,
            seats_in_row,
        }
    }
}
