mod completion;
mod credential;
mod generated_query;
mod generation_request;
mod query_target;

pub use completion::*;
pub use credential::*;
pub use generated_query::*;
pub use generation_request::*;
pub use query_target::*;
