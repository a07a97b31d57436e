use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::db::DbError;
use crate::server::AppState;

use super::error::ApiError;
use super::pagination::MovieListQuery;
use super::types::{MovieListResponse, MovieResponse};

const NO_MOVIES_FOUND: &str = "No movies found.";
const MOVIE_NOT_FOUND: &str = "Movie with the given ID was not found.";

pub async fn list_movies(
    State(state): State<AppState>,
    Query(query): Query<MovieListQuery>,
) -> Result<Json<MovieListResponse>, ApiError> {
    query.validate()?;

    let total_items = state.db.count_movies().await?;
    if total_items == 0 {
        return Err(ApiError::NotFound(NO_MOVIES_FOUND));
    }

    let total_pages = query.total_pages(total_items);
    if query.page > total_pages {
        return Err(ApiError::NotFound(NO_MOVIES_FOUND));
    }

    let movies = state.db.list_movies(query.offset(), query.per_page).await?;

    Ok(Json(MovieListResponse {
        movies: movies.into_iter().map(MovieResponse::from).collect(),
        prev_page: query.prev_link(),
        next_page: query.next_link(total_pages),
        total_pages,
        total_items,
    }))
}

pub async fn get_movie_by_id(
    State(state): State<AppState>,
    Path(movie_id): Path<i64>,
) -> Result<Json<MovieResponse>, ApiError> {
    let movie = state.db.get_movie(movie_id).await.map_err(|e| match e {
        DbError::NotFound(_) => ApiError::NotFound(MOVIE_NOT_FOUND),
        e => ApiError::Database(e),
    })?;

    Ok(Json(MovieResponse::from(movie)))
}
