use chrono::{Days, NaiveDate};

use super::errors::ItemError;
use super::model::{ClassifiedItem, Item};
use super::value_objects::{FreshnessStatus, ShelfLife, parse_date};

/// Items with this many days left or fewer (and not yet expired) should be
/// used soon.
pub const SOON_WINDOW_DAYS: i64 = 3;

/// Freshness of an item as of a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub expiry_date: NaiveDate,
    /// Whole days from `today` until expiry; negative once expired.
    pub days_left: i64,
    pub status: FreshnessStatus,
}

/// Maps the days left before expiry to a freshness bucket.
///
/// Business rules:
/// - Less than 0 days -> Expired
/// - 0 to 3 days (expiry day included) -> Soon
/// - More than 3 days -> Fresh
pub fn status_for(days_left: i64) -> FreshnessStatus {
    if days_left < 0 {
        FreshnessStatus::Expired
    } else if days_left <= SOON_WINDOW_DAYS {
        FreshnessStatus::Soon
    } else {
        FreshnessStatus::Fresh
    }
}

/// Computes expiry date, days left and status of an item bought on
/// `purchase_date` with the given shelf life, as seen on `today`.
///
/// Works on calendar dates only, so the result does not depend on the time
/// of day or on daylight saving transitions. Fails when the expiry date
/// falls outside the supported calendar range.
pub fn classify(
    purchase_date: NaiveDate,
    shelf_life: ShelfLife,
    today: NaiveDate,
) -> Result<Classification, ItemError> {
    let expiry_date = purchase_date
        .checked_add_days(Days::new(u64::from(shelf_life.days())))
        .ok_or(ItemError::InvalidShelfLife)?;
    let days_left = (expiry_date - today).num_days();

    Ok(Classification {
        expiry_date,
        days_left,
        status: status_for(days_left),
    })
}

/// Same as [`classify`] for unvalidated input: a `YYYY-MM-DD` purchase date
/// and a raw numeric shelf life.
pub fn classify_raw(
    purchase_date: &str,
    shelf_life_days: f64,
    today: NaiveDate,
) -> Result<Classification, ItemError> {
    let purchase_date = parse_date(purchase_date)?;
    let shelf_life = ShelfLife::try_from(shelf_life_days)?;
    classify(purchase_date, shelf_life, today)
}

pub fn classify_item(item: &Item, today: NaiveDate) -> Result<ClassifiedItem, ItemError> {
    let classification = classify(item.purchase_date, item.shelf_life, today)?;
    Ok(ClassifiedItem {
        item: item.clone(),
        classification,
    })
}
