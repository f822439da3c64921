use anyhow::Result;

use crate::domain::GenerationRequest;

use super::super::Container;

pub struct PromptController<'a> {
    container: &'a Container,
}

impl<'a> PromptController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub fn prompt(&self, condition: String, schema: Option<String>) -> Result<String> {
        let mut request = GenerationRequest::new(condition);
        request.schema = schema;

        let use_case = self.container.generate_use_case();
        Ok(use_case.preview(request)?)
    }
}
