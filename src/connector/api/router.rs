use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::{GenerateController, PromptController};

pub struct Router<'a> {
    generate_controller: GenerateController<'a>,
    prompt_controller: PromptController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            generate_controller: GenerateController::new(container),
            prompt_controller: PromptController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Generate {
                condition,
                schema,
                api_key,
                json,
            } => {
                self.generate_controller
                    .generate(condition, schema, api_key, json)
                    .await
            }
            Commands::Prompt { condition, schema } => {
                self.prompt_controller.prompt(condition, schema)
            }
            Commands::Serve { .. } => unreachable!("serve command is handled separately in main"),
        }
    }
}
