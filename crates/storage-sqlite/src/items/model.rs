//! Database models for items.

use diesel::prelude::*;
use furnflip_core::items::{Item, StoredItem};

use crate::errors::StorageError;

/// Database model for items. The item itself is an opaque JSON payload.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ItemDB {
    pub id: i64,
    pub payload: String,
}

/// Database model for inserting an item; the id is assigned by SQLite.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::items)]
pub struct NewItemDB {
    pub payload: String,
}

impl NewItemDB {
    pub fn from_item(item: &Item) -> Result<Self, StorageError> {
        Ok(Self {
            payload: serde_json::to_string(item)?,
        })
    }
}

impl TryFrom<ItemDB> for StoredItem {
    type Error = StorageError;

    fn try_from(db: ItemDB) -> Result<Self, Self::Error> {
        Ok(StoredItem {
            id: db.id,
            item: serde_json::from_str(&db.payload)?,
        })
    }
}
