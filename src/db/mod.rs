pub mod memory;
pub mod record;

use std::env;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ApiError;

use self::record::RecordItem;

/// Database abstraction trait for storage backends.
#[async_trait]
pub trait Database: Send + Sync {
    async fn insert_record(&self, record: &RecordItem) -> Result<(), ApiError>;
}

/// DynamoDB-backed storage for production use.
#[derive(Clone)]
pub struct DynamoDb {
    pub(crate) client: aws_sdk_dynamodb::Client,
    pub records_table: String,
}

#[async_trait]
impl Database for DynamoDb {
    async fn insert_record(&self, record: &RecordItem) -> Result<(), ApiError> {
        DynamoDb::insert_record(self, record).await
    }
}

#[async_trait]
impl Database for memory::MemoryDb {
    async fn insert_record(&self, record: &RecordItem) -> Result<(), ApiError> {
        memory::MemoryDb::insert_record(self, record).await
    }
}

/// Create a DynamoDB-backed database, loading config from the environment.
pub async fn dynamo() -> Arc<dyn Database> {
    let config = aws_config::load_from_env().await;
    let client = aws_sdk_dynamodb::Client::new(&config);
    Arc::new(DynamoDb {
        client,
        records_table: env::var("TABLE_NAME")
            .unwrap_or_else(|_| "ProcessedDataTable".to_string()),
    })
}

/// Create an in-memory database for local development and testing.
pub fn memory() -> Arc<dyn Database> {
    Arc::new(memory::MemoryDb::new())
}
