use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::places::{InsertPlaceEntity, PlaceEntity, UpdatePlaceEntity};

/// Single-statement access to the `places` table.
#[async_trait]
#[automock]
pub trait PlaceRepository {
    async fn insert(&self, insert_place_entity: InsertPlaceEntity) -> Result<i64>;
    async fn list(&self) -> Result<Vec<PlaceEntity>>;
    async fn find_by_id(&self, id: i64) -> Result<Option<PlaceEntity>>;
    /// Returns the number of rows matched by `id`.
    async fn update(&self, id: i64, update_place_entity: UpdatePlaceEntity) -> Result<usize>;
    /// Returns the number of rows removed.
    async fn delete(&self, id: i64) -> Result<usize>;
}
