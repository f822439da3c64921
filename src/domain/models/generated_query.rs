use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The most recent generation result together with the inputs behind it.
///
/// `sql_query` holds whatever text came back, which may be an
/// `Error generating SQL: ...` message when the outbound call failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedQueryRecord {
    id: String,
    schema: String,
    condition: String,
    sql_query: String,
    cached: bool,
    generated_at: DateTime<Utc>,
}

impl GeneratedQueryRecord {
    pub fn new(
        schema: impl Into<String>,
        condition: impl Into<String>,
        sql_query: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            schema: schema.into(),
            condition: condition.into(),
            sql_query: sql_query.into(),
            cached: false,
            generated_at: Utc::now(),
        }
    }

    pub fn with_cached(mut self, cached: bool) -> Self {
        self.cached = cached;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    pub fn condition(&self) -> &str {
        &self.condition
    }

    pub fn sql_query(&self) -> &str {
        &self.sql_query
    }

    pub fn is_cached(&self) -> bool {
        self.cached
    }
}
