use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::errors::ItemError;

/// Wire and storage format of purchase and expiry dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate, ItemError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| ItemError::InvalidPurchaseDate)
}

/// Number of days an item stays usable after purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShelfLife(u32);

impl ShelfLife {
    pub fn new(days: u32) -> Self {
        Self(days)
    }

    pub fn days(&self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for ShelfLife {
    type Error = ItemError;

    fn try_from(days: i64) -> Result<Self, Self::Error> {
        u32::try_from(days)
            .map(Self)
            .map_err(|_| ItemError::InvalidShelfLife)
    }
}

/// Accepts any JSON number as long as it is a whole, finite, non-negative
/// count of days.
impl TryFrom<f64> for ShelfLife {
    type Error = ItemError;

    fn try_from(days: f64) -> Result<Self, Self::Error> {
        if !days.is_finite() || days < 0.0 || days.fract() != 0.0 || days > u32::MAX as f64 {
            return Err(ItemError::InvalidShelfLife);
        }
        Ok(Self(days as u32))
    }
}

impl std::fmt::Display for ShelfLife {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Freshness bucket derived from the days left before expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FreshnessStatus {
    Fresh,
    Soon,
    Expired,
}

impl FreshnessStatus {
    /// Human readable label shown next to an item.
    pub fn label(&self) -> &'static str {
        match self {
            FreshnessStatus::Fresh => "Fresh",
            FreshnessStatus::Soon => "Use Soon",
            FreshnessStatus::Expired => "Expired",
        }
    }
}

impl std::fmt::Display for FreshnessStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FreshnessStatus::Fresh => write!(f, "fresh"),
            FreshnessStatus::Soon => write!(f, "soon"),
            FreshnessStatus::Expired => write!(f, "expired"),
        }
    }
}

impl std::str::FromStr for FreshnessStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fresh" => Ok(FreshnessStatus::Fresh),
            "soon" => Ok(FreshnessStatus::Soon),
            "expired" => Ok(FreshnessStatus::Expired),
            _ => Err(format!("Invalid freshness status: {}", s)),
        }
    }
}
