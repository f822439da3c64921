mod chat_client;
mod completion_cache;
mod query_store;

pub use chat_client::*;
pub use completion_cache::*;
pub use query_store::*;
