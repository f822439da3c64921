mod default_schema;
mod prompt_builder;

pub use default_schema::*;
pub use prompt_builder::*;
