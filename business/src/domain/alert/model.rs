use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::item::model::ClassifiedItem;
use crate::domain::item::value_objects::DATE_FORMAT;

/// Suffix appended to an item id to mark its "expired" alert as delivered.
pub const EXPIRED_KEY_SUFFIX: &str = "_expired";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    /// Item entered the use-soon window.
    Soon,
    Expired,
}

impl std::fmt::Display for AlertKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertKind::Soon => write!(f, "soon"),
            AlertKind::Expired => write!(f, "expired"),
        }
    }
}

impl std::str::FromStr for AlertKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "soon" => Ok(AlertKind::Soon),
            "expired" => Ok(AlertKind::Expired),
            _ => Err(format!("Invalid alert kind: {}", s)),
        }
    }
}

/// De-duplication token marking one notification as already delivered.
///
/// The "soon" key of an item is its bare id, the "expired" key is the id
/// followed by [`EXPIRED_KEY_SUFFIX`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlertKey(String);

impl AlertKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn for_item(item_id: Uuid, kind: AlertKind) -> Self {
        match kind {
            AlertKind::Soon => Self(item_id.to_string()),
            AlertKind::Expired => Self(format!("{}{}", item_id, EXPIRED_KEY_SUFFIX)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AlertKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Set of alert keys already delivered. Serialized as a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlertedKeys(BTreeSet<AlertKey>);

impl AlertedKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &AlertKey) -> bool {
        self.0.contains(key)
    }

    /// Returns false when the key was already present.
    pub fn insert(&mut self, key: AlertKey) -> bool {
        self.0.insert(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AlertKey> {
        self.0.iter()
    }
}

impl FromIterator<AlertKey> for AlertedKeys {
    fn from_iter<I: IntoIterator<Item = AlertKey>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for AlertedKeys {
    type Item = AlertKey;
    type IntoIter = std::collections::btree_set::IntoIter<AlertKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// A notification the deduplicator decided to send.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingAlert {
    pub item: ClassifiedItem,
    pub kind: AlertKind,
}

impl PendingAlert {
    pub fn key(&self) -> AlertKey {
        AlertKey::for_item(self.item.item.id, self.kind)
    }

    pub fn title(&self) -> String {
        match self.kind {
            AlertKind::Soon => format!("Expiring soon: {}", self.item.item.name),
            AlertKind::Expired => format!("Expired: {}", self.item.item.name),
        }
    }

    pub fn body(&self) -> String {
        let expiry = self
            .item
            .classification
            .expiry_date
            .format(DATE_FORMAT)
            .to_string();
        match self.kind {
            AlertKind::Soon => format!(
                "Expires on {} ({} day(s) left)",
                expiry, self.item.classification.days_left
            ),
            AlertKind::Expired => format!("Expired on {}", expiry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::classifier::classify_item;
    use crate::domain::item::model::Item;
    use crate::domain::item::value_objects::ShelfLife;
    use chrono::NaiveDate;

    fn yogurt_on(today: NaiveDate) -> ClassifiedItem {
        let item = Item::new(
            "Yogurt".to_string(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            ShelfLife::new(5),
        )
        .unwrap();
        classify_item(&item, today).unwrap()
    }

    #[test]
    fn should_build_keys_from_item_id() {
        let id = Uuid::new_v4();

        assert_eq!(AlertKey::for_item(id, AlertKind::Soon).as_str(), id.to_string());
        assert_eq!(
            AlertKey::for_item(id, AlertKind::Expired).as_str(),
            format!("{}_expired", id)
        );
    }

    #[test]
    fn should_serialize_alerted_keys_as_plain_array() {
        let keys: AlertedKeys = ["b", "a"].into_iter().map(AlertKey::new).collect();

        let json = serde_json::to_string(&keys).unwrap();
        assert_eq!(json, r#"["a","b"]"#);

        let parsed: AlertedKeys = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, keys);
    }

    #[test]
    fn should_ignore_duplicate_inserts() {
        let mut keys = AlertedKeys::new();

        assert!(keys.insert(AlertKey::new("x")));
        assert!(!keys.insert(AlertKey::new("x")));
        assert_eq!(keys.len(), 1);
    }

    #[test]
    fn should_format_soon_notification() {
        let alert = PendingAlert {
            item: yogurt_on(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()),
            kind: AlertKind::Soon,
        };

        assert_eq!(alert.title(), "Expiring soon: Yogurt");
        assert_eq!(alert.body(), "Expires on 2024-01-06 (3 day(s) left)");
    }

    #[test]
    fn should_format_expired_notification() {
        let alert = PendingAlert {
            item: yogurt_on(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()),
            kind: AlertKind::Expired,
        };

        assert_eq!(alert.title(), "Expired: Yogurt");
        assert_eq!(alert.body(), "Expired on 2024-01-06");
    }
}
