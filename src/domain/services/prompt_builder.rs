use crate::domain::{QueryTarget, SqlDialect};

const TIMESTAMP_RULES: &str = "\
Rules for TIMESTAMP and DATE columns:
- If the condition gives an exact date and time, compare with equality: column = TIMESTAMP('YYYY-MM-DD HH:MM:SS')
- If the condition gives only a day, match the whole day with a half-open range: \
column >= TIMESTAMP('YYYY-MM-DD') AND column < TIMESTAMP_ADD(TIMESTAMP('YYYY-MM-DD'), INTERVAL 1 DAY)
- Never wrap the column itself in DATE() or CAST() when filtering";

const EXAMPLE_DAY_CONDITION: &str = "Get ticket_id and agent_id for tickets created on 2025-01-22";
const EXAMPLE_EXACT_CONDITION: &str =
    "Get ticket_status for tickets assigned at 2025-01-22 10:30:00";

/// Builds the instruction prompt sent to the model.
///
/// Output depends only on the builder's dialect and target plus the two
/// arguments, so identical inputs always give byte-identical prompts.
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    dialect: SqlDialect,
    target: QueryTarget,
}

impl PromptBuilder {
    pub fn new(dialect: SqlDialect, target: QueryTarget) -> Self {
        Self { dialect, target }
    }

    pub fn target(&self) -> &QueryTarget {
        &self.target
    }

    pub fn build(&self, schema: &str, condition: &str) -> String {
        match self.dialect {
            SqlDialect::BigQuery => self.build_bigquery(schema, condition),
            SqlDialect::Generic => self.build_generic(schema, condition),
        }
    }

    fn build_bigquery(&self, schema: &str, condition: &str) -> String {
        let project = self.target.project_id();
        let dataset = self.target.dataset_id();
        let table = format!("`{project}.{dataset}.table_name`");

        format!(
            "You are an expert BigQuery query generator.
Your task is to generate a valid and optimized BigQuery SQL query based on the given table schema and condition.

Table Schema:
{schema}

Condition:
{condition}

projectid:
{project}

datasetid:
{dataset}

Ensure the query is:
- Syntactically correct
- Optimized for performance
- Uses proper BigQuery SQL syntax
- Includes the project ID and dataset ID in the table reference

{TIMESTAMP_RULES}

Provide only the BigQuery SQL query as output. Do not include any explanations.

{examples}",
            examples = examples(&table),
        )
    }

    fn build_generic(&self, schema: &str, condition: &str) -> String {
        format!(
            "You are an expert SQL query generator.
Your task is to generate a valid and optimized SQL query based on the given table schema and condition.

Table Schema:
{schema}

Condition:
{condition}

Ensure the query is:
- Syntactically correct
- Optimized for performance
- Uses proper SQL syntax

{TIMESTAMP_RULES}

Provide only the SQL query as output.

{examples}",
            examples = examples("table_name"),
        )
    }
}

fn examples(table: &str) -> String {
    format!(
        "Example 1:
Condition: {EXAMPLE_DAY_CONDITION}
SQL:
SELECT ticket_id, agent_id
FROM {table}
WHERE created_date >= TIMESTAMP('2025-01-22')
  AND created_date < TIMESTAMP_ADD(TIMESTAMP('2025-01-22'), INTERVAL 1 DAY);

Example 2:
Condition: {EXAMPLE_EXACT_CONDITION}
SQL:
SELECT ticket_status
FROM {table}
WHERE assigned_date = TIMESTAMP('2025-01-22 10:30:00');"
    )
}
