use diesel::prelude::*;
use furnflip_core::comps::CompListing;

use crate::errors::StorageError;
use crate::items::ItemDB;

#[derive(Queryable, Identifiable, Selectable, Associations, PartialEq, Debug, Clone)]
#[diesel(belongs_to(ItemDB, foreign_key = item_id))]
#[diesel(table_name = crate::schema::comps)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CompDB {
    pub id: i64,
    pub item_id: i64,
    pub payload: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::comps)]
pub struct NewCompDB {
    pub item_id: i64,
    pub payload: String,
}

impl NewCompDB {
    pub fn from_listing(item_id: i64, listing: &CompListing) -> Result<Self, StorageError> {
        Ok(Self {
            item_id,
            payload: serde_json::to_string(listing)?,
        })
    }
}

impl TryFrom<CompDB> for CompListing {
    type Error = StorageError;

    fn try_from(db: CompDB) -> Result<Self, Self::Error> {
        Ok(serde_json::from_str(&db.payload)?)
    }
}
