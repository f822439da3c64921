mod huggingface_chat_client;
mod in_memory_query_store;
mod lru_completion_cache;
mod mock_chat_client;

pub use huggingface_chat_client::*;
pub use in_memory_query_store::*;
pub use lru_completion_cache::*;
pub use mock_chat_client::*;
