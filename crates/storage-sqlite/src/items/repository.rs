use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;

use furnflip_core::errors::{Error, Result};
use furnflip_core::items::{Item, ItemRepositoryTrait, StoredItem};

use super::model::{ItemDB, NewItemDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::items;
use crate::schema::items::dsl::*;

pub struct ItemRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl ItemRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        ItemRepository { pool, writer }
    }
}

#[async_trait]
impl ItemRepositoryTrait for ItemRepository {
    async fn insert_item(&self, item: Item) -> Result<StoredItem> {
        let new_item = NewItemDB::from_item(&item).map_err(Error::from)?;

        let item_id = self
            .writer
            .exec(move |conn: &mut SqliteConnection| -> Result<i64> {
                diesel::insert_into(items::table)
                    .values(&new_item)
                    .returning(id)
                    .get_result::<i64>(conn)
                    .into_core()
            })
            .await?;

        Ok(StoredItem { id: item_id, item })
    }

    fn get_item(&self, item_id: i64) -> Result<StoredItem> {
        let mut conn = get_connection(&self.pool)?;
        let row = items
            .find(item_id)
            .select(ItemDB::as_select())
            .first::<ItemDB>(&mut conn)
            .optional()
            .into_core()?
            .ok_or_else(|| Error::item_not_found(item_id))?;
        StoredItem::try_from(row).map_err(Error::from)
    }

    fn list_items(&self) -> Result<Vec<StoredItem>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = items
            .order(id.asc())
            .select(ItemDB::as_select())
            .load::<ItemDB>(&mut conn)
            .into_core()?;
        rows.into_iter()
            .map(|row| StoredItem::try_from(row).map_err(Error::from))
            .collect()
    }
}
