//! Behaviour of the in-memory catalogue store.

use rstest::{fixture, rstest};

use super::*;
use crate::domain::{ActorDraft, CinemaHallDraft};

#[fixture]
fn catalogue() -> InMemoryCatalogue {
    InMemoryCatalogue::new()
}

fn genre_draft(name: &str) -> GenreDraft {
    GenreDraft {
        name: name.to_owned(),
    }
}

fn actor_draft(first: &str, last: &str) -> ActorDraft {
    ActorDraft {
        first_name: first.to_owned(),
        last_name: last.to_owned(),
    }
}

fn movie_draft(genres: Vec<EntityId>, actors: Vec<EntityId>) -> MovieDraft {
    MovieDraft {
        title: "Vertigo".to_owned(),
        description: "Acrophobia in San Francisco".to_owned(),
        duration: 128,
        genres,
        actors,
    }
}

async fn insert<E: StoredEntity>(catalogue: &InMemoryCatalogue, draft: &E::Draft) -> E {
    EntityRepository::<E>::insert(catalogue, draft)
        .await
        .expect("insert succeeds")
}

#[rstest]
#[tokio::test]
async fn identifiers_increase_and_are_never_reused(catalogue: InMemoryCatalogue) {
    let first: CinemaHall = insert(
        &catalogue,
        &CinemaHallDraft {
            name: "A".to_owned(),
            rows: 1,
            seats_in_row: 1,
        },
    )
    .await;
    assert!(
        EntityRepository::<CinemaHall>::delete(&catalogue, first.id())
            .await
            .expect("delete succeeds")
    );

    let second: CinemaHall = insert(
        &catalogue,
        &CinemaHallDraft {
            name: "A".to_owned(),
            rows: 1,
            seats_in_row: 1,
        },
    )
    .await;
    assert!(second.id() > first.id());
}

#[rstest]
#[tokio::test]
async fn genre_names_are_unique(catalogue: InMemoryCatalogue) {
    let drama: Genre = insert(&catalogue, &genre_draft("Drama")).await;
    let comedy: Genre = insert(&catalogue, &genre_draft("Comedy")).await;

    let err = EntityRepository::<Genre>::insert(&catalogue, &genre_draft("Drama"))
        .await
        .expect_err("duplicate insert");
    assert_eq!(err, RepositoryError::duplicate("name"));

    let err = EntityRepository::<Genre>::update(&catalogue, comedy.id(), &genre_draft("Drama"))
        .await
        .expect_err("duplicate rename");
    assert_eq!(err, RepositoryError::duplicate("name"));

    let renamed = EntityRepository::<Genre>::update(&catalogue, drama.id(), &genre_draft("Drama"))
        .await
        .expect("keeping own name is fine");
    assert!(renamed.is_some());
}

#[rstest]
#[tokio::test]
async fn movies_require_existing_references(catalogue: InMemoryCatalogue) {
    let genre: Genre = insert(&catalogue, &genre_draft("Thriller")).await;

    let err = EntityRepository::<Movie>::insert(
        &catalogue,
        &movie_draft(vec![genre.id()], vec![EntityId::new(40)]),
    )
    .await
    .expect_err("actor 40 missing");

    assert_eq!(err, RepositoryError::missing_reference("actors", 40_i64));
}

#[rstest]
#[tokio::test]
async fn deleting_a_genre_detaches_it_from_movies(catalogue: InMemoryCatalogue) {
    let keep: Genre = insert(&catalogue, &genre_draft("Mystery")).await;
    let drop: Genre = insert(&catalogue, &genre_draft("Romance")).await;
    let actor: Actor = insert(&catalogue, &actor_draft("James", "Stewart")).await;
    let movie: Movie = insert(
        &catalogue,
        &movie_draft(vec![drop.id(), keep.id()], vec![actor.id()]),
    )
    .await;

    assert!(
        EntityRepository::<Genre>::delete(&catalogue, drop.id())
            .await
            .expect("delete succeeds")
    );

    let reloaded = EntityRepository::<Movie>::find_by_id(&catalogue, movie.id())
        .await
        .expect("lookup succeeds")
        .expect("movie survives");
    assert_eq!(reloaded.genres(), &[keep.id()]);
    assert_eq!(reloaded.actors(), &[actor.id()]);
}

#[rstest]
#[tokio::test]
async fn absent_rows_are_reported_without_error(catalogue: InMemoryCatalogue) {
    let missing = EntityId::new(99);

    let updated = EntityRepository::<Actor>::update(&catalogue, missing, &actor_draft("A", "B"))
        .await
        .expect("update call succeeds");
    let deleted = EntityRepository::<Actor>::delete(&catalogue, missing)
        .await
        .expect("delete call succeeds");

    assert!(updated.is_none());
    assert!(!deleted);
}

#[rstest]
#[tokio::test]
async fn existing_ids_filters_and_sorts(catalogue: InMemoryCatalogue) {
    let a: Actor = insert(&catalogue, &actor_draft("Grace", "Kelly")).await;
    let b: Actor = insert(&catalogue, &actor_draft("Cary", "Grant")).await;

    let found = EntityRepository::<Actor>::existing_ids(
        &catalogue,
        vec![b.id(), EntityId::new(77), a.id(), b.id()],
    )
    .await
    .expect("lookup succeeds");

    assert_eq!(found, vec![a.id(), b.id()]);
}

#[rstest]
#[tokio::test]
async fn list_is_ordered_by_id(catalogue: InMemoryCatalogue) {
    for name in ["Western", "Anime", "Documentary"] {
        let _: Genre = insert(&catalogue, &genre_draft(name)).await;
    }

    let names: Vec<String> = EntityRepository::<Genre>::list(&catalogue)
        .await
        .expect("list succeeds")
        .iter()
        .map(|genre| genre.name().to_owned())
        .collect();

    assert_eq!(names, ["Western", "Anime", "Documentary"]);
}
