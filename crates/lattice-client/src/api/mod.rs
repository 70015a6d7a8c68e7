//! API endpoint implementations.

mod agents;
mod chat;
mod connections;
mod models;
mod prompts;
mod tools;

pub use agents::AgentsApi;
pub use chat::ChatApi;
pub use connections::ConnectionsApi;
pub use models::ModelsApi;
pub use prompts::PromptsApi;
pub use tools::ToolsApi;
