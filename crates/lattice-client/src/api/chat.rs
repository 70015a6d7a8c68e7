//! Chat API.

use bytes::Bytes;

use crate::client::LatticeClient;
use crate::error::Result;
use crate::types::ChatRequest;

/// Chat API client.
pub struct ChatApi {
    client: LatticeClient,
}

impl ChatApi {
    pub(crate) fn new(client: LatticeClient) -> Self {
        Self { client }
    }

    /// Send a chat request and return the raw response body.
    ///
    /// The body is left unparsed so callers can surface it verbatim when it
    /// doesn't have the expected shape.
    pub async fn send(&self, request: &ChatRequest) -> Result<Bytes> {
        tracing::debug!(
            tag = %request.tag,
            model = %request.model,
            messages = request.messages.len(),
            "sending chat request"
        );
        self.client.post_json("chat", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{MockTransport, JSON_CONTENT_TYPE};
    use crate::types::ChatMessage;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_send_posts_json_to_chat() {
        let mock = Arc::new(
            MockTransport::new().with_body(r#"{"message":{"content":"hi there"}}"#),
        );
        let client = LatticeClient::with_transport(mock.clone());

        let request = ChatRequest::new("support", "llama3", vec![ChatMessage::user("hello")]);
        let body = client.chat().send(&request).await.unwrap();
        assert_eq!(&body[..], br#"{"message":{"content":"hi there"}}"#);

        let sent = &mock.requests()[0];
        assert_eq!(sent.method, "POST");
        assert_eq!(sent.path, "chat");
        assert_eq!(sent.content_type.as_deref(), Some(JSON_CONTENT_TYPE));

        let decoded: ChatRequest = serde_json::from_slice(&sent.body).unwrap();
        assert_eq!(decoded.tag, "support");
        assert_eq!(decoded.messages, vec![ChatMessage::user("hello")]);
        assert!(!decoded.stream);
    }
}
