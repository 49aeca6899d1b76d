//! Integration tests for `DieselCatalogue` against a live PostgreSQL database.
//!
//! Set `CINEMA_TEST_DATABASE_URL` to a disposable database to run them; the
//! suite truncates every catalogue table. Without the variable each test
//! prints a skip marker and returns.

use std::sync::LazyLock;

use backend::domain::ports::{EntityRepository, RepositoryError};
use backend::domain::{
    Actor, ActorDraft, CinemaHall, CinemaHallDraft, Entity, EntityId, Genre, GenreDraft, Movie,
    MovieDraft,
};
use backend::outbound::persistence::{DbPool, DieselCatalogue, PoolConfig, run_pending_migrations};
use diesel::pg::PgConnection;
use diesel::{Connection, RunQueryDsl};
use tokio::sync::{Mutex, MutexGuard};

const DATABASE_URL_VAR: &str = "CINEMA_TEST_DATABASE_URL";

/// Tests share one database, so they run one at a time.
static DATABASE: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

struct Fixture {
    store: DieselCatalogue,
    _guard: MutexGuard<'static, ()>,
}

async fn fixture() -> Option<Fixture> {
    let Ok(database_url) = std::env::var(DATABASE_URL_VAR) else {
        eprintln!("SKIP-TEST-DATABASE: {DATABASE_URL_VAR} is not set");
        return None;
    };
    let guard = DATABASE.lock().await;

    let url = database_url.clone();
    tokio::task::spawn_blocking(move || {
        run_pending_migrations(&url).expect("migrations apply");
        let mut conn = PgConnection::establish(&url).expect("connect for truncation");
        diesel::sql_query(
            "TRUNCATE movies_genres, movies_actors, movies, genres, actors, cinema_halls \
             RESTART IDENTITY CASCADE",
        )
        .execute(&mut conn)
        .expect("truncate catalogue tables");
    })
    .await
    .expect("setup task completes");

    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(2))
        .await
        .expect("pool builds");
    Some(Fixture {
        store: DieselCatalogue::new(pool),
        _guard: guard,
    })
}

async fn insert<E: Entity>(store: &DieselCatalogue, draft: &E::Draft) -> E
where
    DieselCatalogue: EntityRepository<E>,
{
    EntityRepository::<E>::insert(store, draft)
        .await
        .expect("insert succeeds")
}

fn genre(name: &str) -> GenreDraft {
    GenreDraft {
        name: name.to_owned(),
    }
}

fn actor(first_name: &str, last_name: &str) -> ActorDraft {
    ActorDraft {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
    }
}

fn movie(genres: Vec<EntityId>, actors: Vec<EntityId>) -> MovieDraft {
    MovieDraft {
        title: "Vertigo".to_owned(),
        description: "A detective story.".to_owned(),
        duration: 128,
        genres,
        actors,
    }
}

#[tokio::test]
async fn genres_round_trip_and_enforce_unique_names() {
    let Some(Fixture { store, _guard }) = fixture().await else {
        return;
    };

    let drama = insert::<Genre>(&store, &genre("Drama")).await;
    let fetched = EntityRepository::<Genre>::find_by_id(&store, drama.id())
        .await
        .expect("find genre");
    assert_eq!(fetched, Some(drama));

    let duplicate = EntityRepository::<Genre>::insert(&store, &genre("Drama")).await;
    assert_eq!(duplicate.err(), Some(RepositoryError::duplicate("name")));
}

#[tokio::test]
async fn cinema_halls_update_and_delete() {
    let Some(Fixture { store, _guard }) = fixture().await else {
        return;
    };
    let draft = CinemaHallDraft {
        name: "Blue".to_owned(),
        rows: 10,
        seats_in_row: 20,
    };
    let hall = insert::<CinemaHall>(&store, &draft).await;

    let widened = CinemaHallDraft { rows: 12, ..draft };
    let updated = EntityRepository::<CinemaHall>::update(&store, hall.id(), &widened)
        .await
        .expect("update hall");
    assert_eq!(updated.map(|row| row.capacity()), Some(240));

    let first = EntityRepository::<CinemaHall>::delete(&store, hall.id()).await;
    let second = EntityRepository::<CinemaHall>::delete(&store, hall.id()).await;
    assert_eq!(first, Ok(true));
    assert_eq!(second, Ok(false));

    let absent = EntityRepository::<CinemaHall>::update(&store, EntityId::new(999), &widened)
        .await
        .expect("update absent hall");
    assert!(absent.is_none());
}

#[tokio::test]
async fn movies_keep_relations_and_lose_deleted_references() {
    let Some(Fixture { store, _guard }) = fixture().await else {
        return;
    };
    let noir = insert::<Genre>(&store, &genre("Noir")).await;
    let thriller = insert::<Genre>(&store, &genre("Thriller")).await;
    let stewart = insert::<Actor>(&store, &actor("James", "Stewart")).await;

    let created = insert::<Movie>(
        &store,
        &movie(vec![noir.id(), thriller.id()], vec![stewart.id()]),
    )
    .await;
    assert_eq!(created.genres(), [noir.id(), thriller.id()].as_slice());
    assert_eq!(created.actors(), [stewart.id()].as_slice());

    let removed = EntityRepository::<Genre>::delete(&store, noir.id()).await;
    assert_eq!(removed, Ok(true));

    let reloaded = EntityRepository::<Movie>::find_by_id(&store, created.id())
        .await
        .expect("find movie")
        .expect("movie survives genre deletion");
    assert_eq!(reloaded.genres(), [thriller.id()].as_slice());
    assert_eq!(reloaded.actors(), [stewart.id()].as_slice());
}

#[tokio::test]
async fn movie_with_missing_reference_is_rolled_back() {
    let Some(Fixture { store, _guard }) = fixture().await else {
        return;
    };

    let result =
        EntityRepository::<Movie>::insert(&store, &movie(vec![EntityId::new(42)], vec![])).await;

    assert_eq!(
        result.err(),
        Some(RepositoryError::missing_reference("genres", 42_i64))
    );
    let movies = EntityRepository::<Movie>::list(&store)
        .await
        .expect("list movies");
    assert!(movies.is_empty());
}

#[tokio::test]
async fn existing_ids_reports_only_stored_rows() {
    let Some(Fixture { store, _guard }) = fixture().await else {
        return;
    };
    let drama = insert::<Genre>(&store, &genre("Drama")).await;

    let found = EntityRepository::<Genre>::existing_ids(
        &store,
        vec![drama.id(), EntityId::new(drama.id().get() + 100)],
    )
    .await
    .expect("lookup ids");

    assert_eq!(found, vec![drama.id()]);
}
