use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::item::model::Item;
use business::domain::item::repository::ItemRepository;

use super::entity::ItemRecord;
use crate::json_file::JsonFile;

/// Item store kept in a single JSON array on disk.
///
/// Entries that do not match the record layout are skipped when reading.
/// Writes only touch the entry with the matching id, every other entry is
/// written back as it was found.
pub struct ItemRepositoryJsonFile {
    file: JsonFile,
}

impl ItemRepositoryJsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: JsonFile::new(path),
        }
    }
}

fn parse_records(entries: Vec<Value>) -> Vec<ItemRecord> {
    entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<ItemRecord>(entry) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("Skipping malformed stored item: {}", e);
                None
            }
        })
        .collect()
}

fn entry_id(entry: &Value) -> Option<Uuid> {
    entry
        .get("id")
        .and_then(Value::as_str)
        .and_then(|id| Uuid::parse_str(id).ok())
}

#[async_trait]
impl ItemRepository for ItemRepositoryJsonFile {
    async fn get_all(&self) -> Result<Vec<Item>, RepositoryError> {
        let entries: Vec<Value> = self.file.load().await;
        Ok(parse_records(entries)
            .into_iter()
            .map(|r| r.into_domain())
            .collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Item, RepositoryError> {
        let entries: Vec<Value> = self.file.load().await;
        parse_records(entries)
            .into_iter()
            .find(|r| r.id == id)
            .map(|r| r.into_domain())
            .ok_or(RepositoryError::NotFound)
    }

    async fn save(&self, item: &Item) -> Result<(), RepositoryError> {
        let entry = serde_json::to_value(ItemRecord::from(item)).map_err(|e| {
            tracing::error!("Could not serialize item {}: {}", item.id, e);
            RepositoryError::Persistence
        })?;

        self.file
            .update(|entries: &mut Vec<Value>| {
                match entries.iter_mut().find(|e| entry_id(e) == Some(item.id)) {
                    Some(existing) => *existing = entry,
                    None => entries.push(entry),
                }
            })
            .await
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.file
            .update(|entries: &mut Vec<Value>| {
                entries.retain(|e| entry_id(e) != Some(id));
            })
            .await
    }

    async fn delete_all(&self) -> Result<u64, RepositoryError> {
        self.file
            .update(|entries: &mut Vec<Value>| {
                let count = entries.len();
                entries.clear();
                count as u64
            })
            .await
    }
}
