pub mod generate_controller;
pub mod prompt_controller;

pub use generate_controller::GenerateController;
pub use prompt_controller::PromptController;
