use async_trait::async_trait;

use super::model::*;

#[async_trait]
pub trait MovieRepo: Send + Sync {
    async fn count_movies(&self) -> DbResult<i64>;
    async fn list_movies(&self, offset: i64, limit: i64) -> DbResult<Vec<Movie>>;
    async fn get_movie(&self, id: i64) -> DbResult<Movie>;
}
