use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::item::model::Item;
use business::domain::item::value_objects::ShelfLife;

/// Row of the `items` table.
#[derive(Debug, FromRow)]
pub struct ItemEntity {
    pub id: Uuid,
    pub name: String,
    pub purchase_date: NaiveDate,
    pub shelf_life: i64,
}

impl ItemEntity {
    /// `None` when the stored shelf life does not fit a [`ShelfLife`].
    pub fn into_domain(self) -> Option<Item> {
        match ShelfLife::try_from(self.shelf_life) {
            Ok(shelf_life) => Some(Item::from_repository(
                self.id,
                self.name,
                self.purchase_date,
                shelf_life,
            )),
            Err(_) => {
                tracing::warn!(
                    "Skipping stored item {} with invalid shelf life {}",
                    self.id,
                    self.shelf_life
                );
                None
            }
        }
    }
}

/// Entry of the items JSON file: `{id, name, purchaseDate, shelfLife}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub id: Uuid,
    pub name: String,
    pub purchase_date: NaiveDate,
    #[serde(deserialize_with = "whole_days")]
    pub shelf_life: u32,
}

/// Accepts `5` as well as `5.0`, rejects fractional and negative values.
fn whole_days<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let days = f64::deserialize(deserializer)?;
    ShelfLife::try_from(days)
        .map(|shelf_life| shelf_life.days())
        .map_err(|_| serde::de::Error::custom(format!("invalid shelf life: {}", days)))
}

impl ItemRecord {
    pub fn into_domain(self) -> Item {
        Item::from_repository(
            self.id,
            self.name,
            self.purchase_date,
            ShelfLife::new(self.shelf_life),
        )
    }
}

impl From<&Item> for ItemRecord {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            purchase_date: item.purchase_date,
            shelf_life: item.shelf_life.days(),
        }
    }
}
