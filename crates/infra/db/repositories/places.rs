use anyhow::{Result, anyhow};
use async_trait::async_trait;
use diesel::{RunQueryDsl, SqliteConnection, delete, insert_into, prelude::*, update};
use std::{sync::Arc, time::Duration};
use tokio::{task, time};

use crate::{
    domain::{
        entities::places::{InsertPlaceEntity, PlaceEntity, UpdatePlaceEntity},
        repositories::places::PlaceRepository,
    },
    infra::db::sqlite::{schema::places, sqlite_connection::SqlitePoolSquad},
};

pub struct PlaceSqlite {
    db_pool: Arc<SqlitePoolSquad>,
    query_timeout: Duration,
}

impl PlaceSqlite {
    pub fn new(db_pool: Arc<SqlitePoolSquad>, query_timeout: Duration) -> Self {
        Self {
            db_pool,
            query_timeout,
        }
    }

    /// Diesel is synchronous: each query runs on the blocking threadpool with a
    /// pooled connection, bounded by `query_timeout`.
    async fn run<T, F>(&self, operation: &'static str, query: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
    {
        let db_pool = Arc::clone(&self.db_pool);
        let handle = task::spawn_blocking(move || -> Result<T> {
            let mut conn = db_pool.get()?;
            query(&mut conn)
        });

        match time::timeout(self.query_timeout, handle).await {
            Ok(joined) => joined?,
            Err(_) => Err(anyhow!(
                "places {operation} timed out after {:?}",
                self.query_timeout
            )),
        }
    }
}

#[async_trait]
impl PlaceRepository for PlaceSqlite {
    async fn insert(&self, insert_place_entity: InsertPlaceEntity) -> Result<i64> {
        self.run("insert", move |conn| {
            let id = insert_into(places::table)
                .values(&insert_place_entity)
                .returning(places::id)
                .get_result::<i64>(conn)?;
            Ok(id)
        })
        .await
    }

    async fn list(&self) -> Result<Vec<PlaceEntity>> {
        self.run("list", |conn| {
            let results = places::table
                .select(PlaceEntity::as_select())
                .order(places::id.desc())
                .load::<PlaceEntity>(conn)?;
            Ok(results)
        })
        .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<PlaceEntity>> {
        self.run("find_by_id", move |conn| {
            let result = places::table
                .filter(places::id.eq(id))
                .select(PlaceEntity::as_select())
                .first::<PlaceEntity>(conn)
                .optional()?;
            Ok(result)
        })
        .await
    }

    async fn update(&self, id: i64, update_place_entity: UpdatePlaceEntity) -> Result<usize> {
        self.run("update", move |conn| {
            let matched = update(places::table.filter(places::id.eq(id)))
                .set(update_place_entity)
                .execute(conn)?;
            Ok(matched)
        })
        .await
    }

    async fn delete(&self, id: i64) -> Result<usize> {
        self.run("delete", move |conn| {
            let removed = delete(places::table.filter(places::id.eq(id))).execute(conn)?;
            Ok(removed)
        })
        .await
    }
}
