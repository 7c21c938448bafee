use serde::{Deserialize, Serialize};
use serde_dynamo::aws_sdk_dynamodb_1::to_item;
use uuid::Uuid;

use crate::error::ApiError;

use super::DynamoDb;

/// One stored unit of ingested data: an id plus the ordered, trimmed lines.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordItem {
    pub id: Uuid,
    pub content: Vec<String>,
}

impl DynamoDb {
    pub async fn insert_record(&self, record: &RecordItem) -> Result<(), ApiError> {
        let item = to_item(record)
            .map_err(|e| ApiError::Internal(format!("Failed to serialize record: {e}")))?;

        // Condition guards against an id collision overwriting an existing item.
        self.client
            .put_item()
            .table_name(&self.records_table)
            .set_item(Some(item))
            .condition_expression("attribute_not_exists(id)")
            .send()
            .await
            .map_err(|e| ApiError::Internal(format!("Failed to insert record: {e}")))?;

        Ok(())
    }
}
