use std::env;
use std::sync::Arc;

use crate::db::{self, Database};

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<dyn Database>,
}

impl AppState {
    pub async fn new() -> Self {
        let db = match env::var("DATABASE_BACKEND").as_deref() {
            Ok("memory") => {
                tracing::info!("Using in-memory database backend");
                db::memory()
            }
            _ => {
                tracing::info!("Using DynamoDB database backend");
                db::dynamo().await
            }
        };

        Self { db }
    }
}
