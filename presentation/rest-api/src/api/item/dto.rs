use chrono::NaiveDate;
use poem_openapi::{Enum, Object};

use business::domain::item::model::ClassifiedItem;
use business::domain::item::value_objects::FreshnessStatus;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CreateItemRequest {
    /// Item name (cannot be empty)
    pub name: String,
    /// Purchase date as `YYYY-MM-DD`
    pub purchase_date: String,
    /// Shelf life in whole days, zero or more
    pub shelf_life: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
#[oai(rename_all = "lowercase")]
pub enum FreshnessStatusDto {
    Fresh,
    Soon,
    Expired,
}

impl From<FreshnessStatus> for FreshnessStatusDto {
    fn from(status: FreshnessStatus) -> Self {
        match status {
            FreshnessStatus::Fresh => FreshnessStatusDto::Fresh,
            FreshnessStatus::Soon => FreshnessStatusDto::Soon,
            FreshnessStatus::Expired => FreshnessStatusDto::Expired,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ItemResponse {
    /// Item unique identifier
    pub id: String,
    /// Item name
    pub name: String,
    /// Purchase date
    pub purchase_date: NaiveDate,
    /// Shelf life in days
    pub shelf_life: u32,
    /// Purchase date plus shelf life
    pub expiry: NaiveDate,
    /// Days until expiry, negative once expired
    pub days_left: i64,
    /// Freshness bucket
    pub status: FreshnessStatusDto,
    /// Display label of the bucket
    pub status_label: String,
}

impl From<ClassifiedItem> for ItemResponse {
    fn from(classified: ClassifiedItem) -> Self {
        let ClassifiedItem {
            item,
            classification,
        } = classified;

        Self {
            id: item.id.to_string(),
            name: item.name,
            purchase_date: item.purchase_date,
            shelf_life: item.shelf_life.days(),
            expiry: classification.expiry_date,
            days_left: classification.days_left,
            status: classification.status.into(),
            status_label: classification.status.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ClearAllResponse {
    /// Number of items removed
    pub count: u64,
}
