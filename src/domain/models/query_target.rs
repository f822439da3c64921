use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PROJECT_ID: &str = "dev-kapture";
pub const DEFAULT_DATASET_ID: &str = "devDataset";

/// Fully qualifies generated table references (`project.dataset.table`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryTarget {
    project_id: String,
    dataset_id: String,
}

impl QueryTarget {
    pub fn new(project_id: impl Into<String>, dataset_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset_id: dataset_id.into(),
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn dataset_id(&self) -> &str {
        &self.dataset_id
    }

    pub fn qualify(&self, table: &str) -> String {
        format!("{}.{}.{}", self.project_id, self.dataset_id, table)
    }
}

impl Default for QueryTarget {
    fn default() -> Self {
        Self::new(DEFAULT_PROJECT_ID, DEFAULT_DATASET_ID)
    }
}

/// SQL flavour the prompt asks the model for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlDialect {
    #[default]
    BigQuery,
    Generic,
}

impl SqlDialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            SqlDialect::BigQuery => "bigquery",
            SqlDialect::Generic => "generic",
        }
    }
}

impl fmt::Display for SqlDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SqlDialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bigquery" | "bq" => Ok(SqlDialect::BigQuery),
            "generic" | "sql" => Ok(SqlDialect::Generic),
            other => Err(format!("unknown SQL dialect: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualify_joins_project_dataset_and_table() {
        let target = QueryTarget::default();
        assert_eq!(target.qualify("orders"), "dev-kapture.devDataset.orders");
    }

    #[test]
    fn dialect_parses_aliases() {
        assert_eq!("BigQuery".parse::<SqlDialect>(), Ok(SqlDialect::BigQuery));
        assert_eq!("sql".parse::<SqlDialect>(), Ok(SqlDialect::Generic));
        assert!("oracle".parse::<SqlDialect>().is_err());
    }
}
