//! HTTP client SDK for the LatticeAI server.
//!
//! Every call is a single request/response exchange: the server's body is
//! handed back as raw bytes so callers can print it verbatim or parse the
//! parts they care about.
//!
//! # Example
//!
//! ```no_run
//! use lattice_client::{ChatRequest, Conversation, LatticeClient, Result, Role};
//!
//! # async fn example() -> Result<()> {
//! let client = LatticeClient::builder()
//!     .base_url("http://localhost:44444/")
//!     .api_key("secret")
//!     .build()?;
//!
//! // Raw resource listing
//! let agents = client.agents().list().await?;
//! println!("{}", String::from_utf8_lossy(&agents));
//!
//! // One chat turn
//! let mut conversation = Conversation::new();
//! conversation.append(Role::User, "Hello!", None);
//! let request = ChatRequest::new("support", "llama3", conversation.snapshot());
//! let body = client.chat().send(&request).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - **Agents**: list, get, create, delete
//! - **Connections**: list, get, create, delete
//! - **Prompts**: list, get, create, delete
//! - **Models**: list, get
//! - **Tools**: list, get, create, delete, tool functions
//! - **Chat**: send a full conversation, get the reply

pub mod api;
pub mod client;
pub mod conversation;
pub mod error;
pub mod transport;
pub mod types;

pub use client::{ClientBuilder, LatticeClient};
pub use conversation::Conversation;
pub use error::{Error, Result};
#[cfg(any(test, feature = "testing"))]
pub use transport::{MockRequest, MockTransport};
pub use transport::{HttpTransport, SharedTransport, Transport, JSON_CONTENT_TYPE};
pub use types::*;
