mod generate_query;
mod latest_query;

pub use generate_query::*;
pub use latest_query::*;
