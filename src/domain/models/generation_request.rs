use serde::Deserialize;

use super::Credential;
use crate::domain::DomainError;

pub const MISSING_PARAMETERS: &str = "Missing required parameters";

/// Raw generation input as received from a caller; every field may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub schema: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
}

/// Schema and condition after validation and schema fallback.
#[derive(Debug, Clone)]
pub struct PromptInputs {
    pub schema: String,
    pub condition: String,
}

/// Inputs after validation and schema fallback, plus the caller's credential.
#[derive(Debug, Clone)]
pub struct ResolvedGeneration {
    pub credential: Credential,
    pub schema: String,
    pub condition: String,
}

impl GenerationRequest {
    pub fn new(condition: impl Into<String>) -> Self {
        Self {
            condition: Some(condition.into()),
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Validate every required field, substituting `default_schema` when the
    /// request carries none. Blank strings count as missing.
    pub fn resolve(self, default_schema: Option<&str>) -> Result<ResolvedGeneration, DomainError> {
        let api_key = present(self.api_key);
        let prompt = PromptFields::new(self.schema, self.condition, default_schema);

        let mut missing = Vec::new();
        if api_key.is_none() {
            missing.push("api_key");
        }
        missing.extend(prompt.missing());

        match (api_key, prompt.into_inputs()) {
            (Some(api_key), Some(inputs)) => Ok(ResolvedGeneration {
                credential: Credential::new(api_key),
                schema: inputs.schema,
                condition: inputs.condition,
            }),
            _ => Err(missing_parameters(&missing)),
        }
    }

    /// Validate only what the prompt needs; the credential is ignored.
    pub fn prompt_inputs(self, default_schema: Option<&str>) -> Result<PromptInputs, DomainError> {
        let prompt = PromptFields::new(self.schema, self.condition, default_schema);
        let missing = prompt.missing();
        prompt
            .into_inputs()
            .ok_or_else(|| missing_parameters(&missing))
    }
}

struct PromptFields {
    schema: Option<String>,
    condition: Option<String>,
}

impl PromptFields {
    fn new(schema: Option<String>, condition: Option<String>, default_schema: Option<&str>) -> Self {
        Self {
            schema: present(schema).or_else(|| default_schema.map(String::from)),
            condition: present(condition),
        }
    }

    fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.schema.is_none() {
            missing.push("schema");
        }
        if self.condition.is_none() {
            missing.push("condition");
        }
        missing
    }

    fn into_inputs(self) -> Option<PromptInputs> {
        Some(PromptInputs {
            schema: self.schema?,
            condition: self.condition?,
        })
    }
}

fn missing_parameters(missing: &[&str]) -> DomainError {
    DomainError::invalid_input(format!("{MISSING_PARAMETERS}: {}", missing.join(", ")))
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_accepts_complete_request() {
        let resolved = GenerationRequest::new("rows from today")
            .with_api_key("hf_x")
            .with_schema("TABLE t (id INT64)")
            .resolve(None)
            .unwrap();
        assert_eq!(resolved.schema, "TABLE t (id INT64)");
        assert_eq!(resolved.condition, "rows from today");
        assert_eq!(resolved.credential.expose(), "hf_x");
    }

    #[test]
    fn resolve_falls_back_to_default_schema() {
        let resolved = GenerationRequest::new("rows")
            .with_api_key("hf_x")
            .resolve(Some("TABLE fallback"))
            .unwrap();
        assert_eq!(resolved.schema, "TABLE fallback");
    }

    #[test]
    fn request_schema_wins_over_default() {
        let resolved = GenerationRequest::new("rows")
            .with_api_key("hf_x")
            .with_schema("TABLE mine")
            .resolve(Some("TABLE fallback"))
            .unwrap();
        assert_eq!(resolved.schema, "TABLE mine");
    }

    #[test]
    fn resolve_lists_every_missing_field() {
        let err = GenerationRequest::default().resolve(None).unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(
            err.to_string(),
            "Invalid input: Missing required parameters: api_key, schema, condition"
        );
    }

    #[test]
    fn prompt_inputs_ignore_missing_credential() {
        let inputs = GenerationRequest::new("rows")
            .prompt_inputs(Some("TABLE fallback"))
            .unwrap();
        assert_eq!(inputs.schema, "TABLE fallback");
        assert_eq!(inputs.condition, "rows");
    }

    #[test]
    fn prompt_inputs_still_require_schema_and_condition() {
        let err = GenerationRequest::default()
            .with_api_key("hf_x")
            .prompt_inputs(None)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input: Missing required parameters: schema, condition"
        );
    }

    #[test]
    fn blank_condition_is_missing() {
        let err = GenerationRequest::new("   ")
            .with_api_key("hf_x")
            .resolve(Some("TABLE t"))
            .unwrap_err();
        assert!(err.to_string().ends_with("condition"));
    }
}
