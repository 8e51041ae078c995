use crate::domain::item::model::ClassifiedItem;
use crate::domain::item::value_objects::FreshnessStatus;

use super::model::{AlertKind, AlertKey, AlertedKeys, PendingAlert};

/// Outcome of one reconciliation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    pub to_notify: Vec<PendingAlert>,
    pub updated_keys: AlertedKeys,
}

/// Decides which items need a one-time notification.
///
/// An item in the soon window notifies once under its id, an expired item
/// notifies once under its expired key. Fresh items are ignored and keys are
/// never removed. Pure: dispatching the alerts and persisting
/// `updated_keys` is up to the caller.
pub fn reconcile(items: &[ClassifiedItem], alerted: &AlertedKeys) -> Reconciliation {
    let mut updated_keys = alerted.clone();
    let mut to_notify = Vec::new();

    for classified in items {
        let kind = match classified.classification.status {
            FreshnessStatus::Fresh => continue,
            FreshnessStatus::Soon => AlertKind::Soon,
            FreshnessStatus::Expired => AlertKind::Expired,
        };

        if updated_keys.insert(AlertKey::for_item(classified.item.id, kind)) {
            to_notify.push(PendingAlert {
                item: classified.clone(),
                kind,
            });
        }
    }

    Reconciliation {
        to_notify,
        updated_keys,
    }
}
