//! Route table for the catalogue collections.
//!
//! Each path is a single [`web::resource`] so methods without a registered
//! route answer `405 Method Not Allowed`. Extractor failures are folded into
//! the domain error envelope: bad JSON bodies become `400`, identifiers that
//! do not parse become `404`. Every path also matches with a trailing slash.

use actix_web::web;

use crate::domain::Error;
use crate::inbound::http::{actors, cinema_halls, genres, movies, resources};

/// Register every catalogue route on `cfg`.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use backend::inbound::http::routes::configure;
/// use backend::inbound::http::state::HttpState;
/// use backend::outbound::memory::InMemoryCatalogue;
///
/// let state = HttpState::from_store(InMemoryCatalogue::new());
/// let _app = App::new()
///     .app_data(web::Data::new(state))
///     .configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .service(
            web::resource(with_trailing_slash("/movies"))
                .route(web::get().to(movies::list_movies))
                .route(web::post().to(movies::create_movie)),
        )
        .service(
            web::resource(with_trailing_slash("/movies/{id}"))
                .route(web::get().to(movies::get_movie))
                .route(web::put().to(movies::replace_movie))
                .route(web::delete().to(movies::delete_movie)),
        )
        .service(
            web::resource(with_trailing_slash("/genres"))
                .route(web::get().to(genres::list_genres))
                .route(web::post().to(genres::create_genre)),
        )
        .service(
            web::resource(with_trailing_slash("/genres/{id}"))
                .route(web::get().to(genres::get_genre))
                .route(web::put().to(genres::replace_genre))
                .route(web::patch().to(genres::patch_genre))
                .route(web::delete().to(genres::delete_genre)),
        )
        .service(
            web::resource(with_trailing_slash("/actors"))
                .route(web::get().to(actors::list_actors))
                .route(web::post().to(actors::create_actor)),
        )
        .service(
            web::resource(with_trailing_slash("/actors/{id}"))
                .route(web::get().to(actors::get_actor))
                .route(web::put().to(actors::replace_actor))
                .route(web::delete().to(actors::delete_actor)),
        )
        .service(
            web::resource(with_trailing_slash("/cinema-halls"))
                .route(web::get().to(cinema_halls::list_cinema_halls))
                .route(web::post().to(cinema_halls::create_cinema_hall)),
        )
        .service(
            web::resource(with_trailing_slash("/cinema-halls/{id}"))
                .route(web::get().to(cinema_halls::get_cinema_hall))
                .route(web::put().to(cinema_halls::replace_cinema_hall))
                .route(web::patch().to(cinema_halls::patch_cinema_hall))
                .route(web::delete().to(cinema_halls::delete_cinema_hall)),
        );
}

fn with_trailing_slash(path: &str) -> [String; 2] {
    [path.to_owned(), format!("{path}/")]
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        resources::json_error(&err).into()
    })
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| {
        Error::not_found(format!("{} does not identify a resource: {err}", req.path())).into()
    })
}
