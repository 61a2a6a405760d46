//! Collaborator seams for the backing document store.
//!
//! The engine never persists anything; it reads equipment and maintenance
//! documents through these traits and computes from them. Store calls are
//! the only suspension points besides the advisory generator, so a dropped
//! request future leaves no state behind.

use async_trait::async_trait;
use fc_common::error::Result;
use fc_common::id::EquipmentId;
use fc_common::record::{EquipmentRecord, MaintenanceRecord, MaintenanceStatus};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Read access to stored equipment documents.
#[async_trait]
pub trait EquipmentStore: Send + Sync {
    /// Fetch one equipment document. `Ok(None)` means the id is unknown;
    /// transport trouble surfaces as [`fc_common::error::Error::StoreUnavailable`].
    async fn get_equipment(&self, id: &EquipmentId) -> Result<Option<EquipmentRecord>>;
}

/// Read access to the maintenance history.
#[async_trait]
pub trait MaintenanceStore: Send + Sync {
    /// Every completed maintenance record for the equipment, in no
    /// particular order. Scheduled and cancelled work is excluded.
    async fn completed_maintenance(&self, id: &EquipmentId) -> Result<Vec<MaintenanceRecord>>;
}

/// In-process store for tests and embedded use.
///
/// Records are cloned out under a short-lived read lock; the lock is never
/// held across an await.
#[derive(Default)]
pub struct MemoryStore {
    equipment: RwLock<HashMap<EquipmentId, EquipmentRecord>>,
    maintenance: RwLock<Vec<MaintenanceRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an equipment document.
    pub async fn put_equipment(&self, record: EquipmentRecord) {
        self.equipment.write().await.insert(record.id.clone(), record);
    }

    /// Append a maintenance record.
    pub async fn put_maintenance(&self, record: MaintenanceRecord) {
        self.maintenance.write().await.push(record);
    }
}

#[async_trait]
impl EquipmentStore for MemoryStore {
    async fn get_equipment(&self, id: &EquipmentId) -> Result<Option<EquipmentRecord>> {
        Ok(self.equipment.read().await.get(id).cloned())
    }
}

#[async_trait]
impl MaintenanceStore for MemoryStore {
    async fn completed_maintenance(&self, id: &EquipmentId) -> Result<Vec<MaintenanceRecord>> {
        let records = self.maintenance.read().await;
        Ok(records
            .iter()
            .filter(|m| m.equipment_id == *id && m.status == MaintenanceStatus::Completed)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fc_common::id::MaintenanceId;

    fn maintenance(
        id: &str,
        equipment: &str,
        status: MaintenanceStatus,
    ) -> MaintenanceRecord {
        MaintenanceRecord {
            id: MaintenanceId::from(id),
            equipment_id: EquipmentId::from(equipment),
            status,
            scheduled_date: None,
            completed_date: None,
            description: None,
            cost: None,
        }
    }

    #[tokio::test]
    async fn test_put_then_get_equipment() {
        let store = MemoryStore::new();
        let record = EquipmentRecord::new(EquipmentId::from("e1"), "pump");
        store.put_equipment(record.clone()).await;

        let fetched = store.get_equipment(&EquipmentId::from("e1")).await.unwrap();
        assert_eq!(fetched, Some(record));
    }

    #[tokio::test]
    async fn test_get_unknown_equipment_is_none() {
        let store = MemoryStore::new();
        let fetched = store.get_equipment(&EquipmentId::from("ghost")).await.unwrap();
        assert!(fetched.is_none());
    }

    #[tokio::test]
    async fn test_completed_maintenance_filters_status_and_equipment() {
        let store = MemoryStore::new();
        store.put_maintenance(maintenance("m1", "e1", MaintenanceStatus::Completed)).await;
        store.put_maintenance(maintenance("m2", "e1", MaintenanceStatus::Scheduled)).await;
        store.put_maintenance(maintenance("m3", "e1", MaintenanceStatus::Cancelled)).await;
        store.put_maintenance(maintenance("m4", "e2", MaintenanceStatus::Completed)).await;

        let history = store.completed_maintenance(&EquipmentId::from("e1")).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id, MaintenanceId::from("m1"));
    }
}
