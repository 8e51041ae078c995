use poem_openapi::{Enum, Object};

use business::domain::alert::model::{AlertKind, AlertedKeys, PendingAlert};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
#[oai(rename_all = "lowercase")]
pub enum AlertKindDto {
    Soon,
    Expired,
}

impl From<AlertKind> for AlertKindDto {
    fn from(kind: AlertKind) -> Self {
        match kind {
            AlertKind::Soon => AlertKindDto::Soon,
            AlertKind::Expired => AlertKindDto::Expired,
        }
    }
}

/// Notification dispatched by an alert check
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct AlertResponse {
    /// Item the alert is about
    pub item_id: String,
    pub kind: AlertKindDto,
    pub title: String,
    pub body: String,
}

impl From<PendingAlert> for AlertResponse {
    fn from(alert: PendingAlert) -> Self {
        Self {
            item_id: alert.item.item.id.to_string(),
            kind: alert.kind.into(),
            title: alert.title(),
            body: alert.body(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct AlertedKeysResponse {
    /// Keys of the alerts already delivered, sorted
    pub keys: Vec<String>,
}

impl From<AlertedKeys> for AlertedKeysResponse {
    fn from(keys: AlertedKeys) -> Self {
        Self {
            keys: keys.iter().map(|k| k.as_str().to_string()).collect(),
        }
    }
}
