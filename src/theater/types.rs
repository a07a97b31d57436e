use serde::{Deserialize, Serialize};

use crate::db::Movie;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieResponse {
    pub id: i64,
    pub title: String,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub rating: Option<f32>,
    pub overview: Option<String>,
}

impl From<Movie> for MovieResponse {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            year: movie.year,
            genre: movie.genre,
            rating: movie.rating,
            overview: movie.overview,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieListResponse {
    pub movies: Vec<MovieResponse>,
    pub prev_page: Option<String>,
    pub next_page: Option<String>,
    pub total_pages: i64,
    pub total_items: i64,
}
