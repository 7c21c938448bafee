use uuid::Uuid;

use crate::{
    db::{record::RecordItem, Database},
    error::ApiError,
};

/// Split raw upload text into its stored line form.
///
/// Order-preserving: one element per newline-delimited segment, each with
/// leading and trailing whitespace removed. Empty segments are kept, so an
/// empty input yields a single empty line.
pub fn split_lines(data: &str) -> Vec<String> {
    data.split('\n').map(|line| line.trim().to_string()).collect()
}

/// Transform the upload text and persist it as a single new record.
pub async fn create_record(db: &dyn Database, data: &str) -> Result<RecordItem, ApiError> {
    let record = RecordItem {
        id: Uuid::new_v4(),
        content: split_lines(data),
    };

    db.insert_record(&record).await?;

    Ok(record)
}
