use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::error::ApiError;

use super::record::RecordItem;

/// In-memory database backend for local development and testing.
/// Uses `Arc<RwLock<...>>` so it can be `Clone`d across axum handlers.
#[derive(Clone, Default)]
pub struct MemoryDb {
    records: Arc<RwLock<HashMap<Uuid, RecordItem>>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn insert_record(&self, record: &RecordItem) -> Result<(), ApiError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| ApiError::Internal(format!("Lock error: {e}")))?;

        if records.contains_key(&record.id) {
            return Err(ApiError::Internal("record id already exists".to_string()));
        }

        records.insert(record.id, record.clone());
        Ok(())
    }

    /// All stored records, sorted by id. Inspection helper for tests and
    /// local debugging.
    pub fn list_records(&self) -> Result<Vec<RecordItem>, ApiError> {
        let records = self
            .records
            .read()
            .map_err(|e| ApiError::Internal(format!("Lock error: {e}")))?;

        let mut records: Vec<RecordItem> = records.values().cloned().collect();
        records.sort_by(|left, right| left.id.cmp(&right.id));
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_list() {
        let db = MemoryDb::new();
        let record = RecordItem {
            id: Uuid::new_v4(),
            content: vec!["a".to_string(), String::new()],
        };

        db.insert_record(&record).await.unwrap();

        assert_eq!(db.list_records().unwrap(), vec![record]);
    }

    #[tokio::test]
    async fn test_insert_duplicate_id_fails() {
        let db = MemoryDb::new();
        let record = RecordItem {
            id: Uuid::new_v4(),
            content: vec!["a".to_string()],
        };

        db.insert_record(&record).await.unwrap();

        assert!(db.insert_record(&record).await.is_err());
        assert_eq!(db.list_records().unwrap().len(), 1);
    }
}
