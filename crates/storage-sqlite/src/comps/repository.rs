use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;

use furnflip_core::comps::{CompListing, CompRepositoryTrait};
use furnflip_core::errors::{Error, Result};

use super::model::{CompDB, NewCompDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::comps;
use crate::schema::comps::dsl::*;

pub struct CompRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl CompRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        CompRepository { pool, writer }
    }
}

#[async_trait]
impl CompRepositoryTrait for CompRepository {
    async fn replace_comps(&self, for_item: i64, listings: Vec<CompListing>) -> Result<usize> {
        let rows = listings
            .iter()
            .map(|listing| NewCompDB::from_listing(for_item, listing))
            .collect::<std::result::Result<Vec<_>, StorageError>>()?;

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(comps.filter(item_id.eq(for_item)))
                    .execute(conn)
                    .into_core()?;
                if rows.is_empty() {
                    return Ok(0);
                }
                diesel::insert_into(comps::table)
                    .values(&rows)
                    .execute(conn)
                    .into_core()
            })
            .await
    }

    fn get_comps(&self, for_item: i64) -> Result<Vec<CompListing>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = comps
            .filter(item_id.eq(for_item))
            .order(id.asc())
            .select(CompDB::as_select())
            .load::<CompDB>(&mut conn)
            .into_core()?;
        rows.into_iter()
            .map(|row| CompListing::try_from(row).map_err(Error::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, init, run_migrations, spawn_writer};
    use crate::items::ItemRepository;
    use furnflip_core::items::{normalize_item, ItemRepositoryTrait};
    use serde_json::json;
    use tempfile::TempDir;

    struct Fixture {
        _dir: TempDir,
        items: ItemRepository,
        comps: CompRepository,
    }

    fn setup() -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("comps.db");
        let path = init(path.to_str().unwrap()).unwrap();
        let pool = create_pool(&path).unwrap();
        run_migrations(&pool).unwrap();
        let writer = spawn_writer((*pool).clone());
        Fixture {
            _dir: dir,
            items: ItemRepository::new(pool.clone(), writer.clone()),
            comps: CompRepository::new(pool, writer),
        }
    }

    #[tokio::test]
    async fn test_replace_keeps_only_latest_batch() {
        let fx = setup();
        let item = fx
            .items
            .insert_item(normalize_item(json!({ "category": "desk" }).as_object().unwrap()))
            .await
            .unwrap();

        let first = vec![CompListing::new("old", Some(10.0), "demo", "")];
        let second = vec![
            CompListing::new("a", Some(45.0), "demo", "https://example.com/a"),
            CompListing::new("b", None, "google", "https://example.com/b")
                .with_snippet("no price here"),
        ];

        assert_eq!(fx.comps.replace_comps(item.id, first).await.unwrap(), 1);
        assert_eq!(fx.comps.replace_comps(item.id, second.clone()).await.unwrap(), 2);
        assert_eq!(fx.comps.get_comps(item.id).unwrap(), second);
    }

    #[tokio::test]
    async fn test_replace_with_empty_clears_comps() {
        let fx = setup();
        let item = fx
            .items
            .insert_item(normalize_item(json!({}).as_object().unwrap()))
            .await
            .unwrap();

        let listings = vec![CompListing::new("a", Some(1.0), "demo", "")];
        fx.comps.replace_comps(item.id, listings).await.unwrap();
        assert_eq!(fx.comps.replace_comps(item.id, Vec::new()).await.unwrap(), 0);
        assert!(fx.comps.get_comps(item.id).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_comps_for_unknown_item_are_rejected() {
        let fx = setup();
        let listings = vec![CompListing::new("a", Some(1.0), "demo", "")];
        assert!(fx.comps.replace_comps(999, listings).await.is_err());
    }
}
