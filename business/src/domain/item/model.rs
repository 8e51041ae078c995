use chrono::NaiveDate;
use uuid::Uuid;

use super::classifier::Classification;
use super::errors::ItemError;
use super::value_objects::ShelfLife;

/// A tracked perishable item. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub purchase_date: NaiveDate,
    pub shelf_life: ShelfLife,
}

impl Item {
    pub fn new(
        name: String,
        purchase_date: NaiveDate,
        shelf_life: ShelfLife,
    ) -> Result<Self, ItemError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(ItemError::NameEmpty);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            purchase_date,
            shelf_life,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        purchase_date: NaiveDate,
        shelf_life: ShelfLife,
    ) -> Self {
        Self {
            id,
            name,
            purchase_date,
            shelf_life,
        }
    }
}

/// An item together with its freshness as of a given day. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedItem {
    pub item: Item,
    pub classification: Classification,
}
