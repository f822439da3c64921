use anyhow::Result;

use crate::domain::GenerationRequest;

use super::super::Container;

pub struct GenerateController<'a> {
    container: &'a Container,
}

impl<'a> GenerateController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn generate(
        &self,
        condition: String,
        schema: Option<String>,
        api_key: Option<String>,
        json: bool,
    ) -> Result<String> {
        let request = GenerationRequest {
            api_key,
            schema,
            condition: Some(condition),
        };

        let use_case = self.container.generate_use_case();
        let record = use_case.execute(request).await?;

        if json {
            Ok(serde_json::to_string_pretty(&serde_json::json!({
                "sql_query": record.sql_query(),
            }))?)
        } else {
            Ok(record.sql_query().to_string())
        }
    }
}
