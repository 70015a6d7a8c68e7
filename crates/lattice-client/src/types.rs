//! Request and response types for the LatticeAI API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ─────────────────────────────────────────────────────────────────────────────
// Chat
// ─────────────────────────────────────────────────────────────────────────────

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Author of the message.
    pub role: Role,
    /// Message text. May be empty.
    pub content: String,
    /// Image references attached to the message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

impl ChatMessage {
    /// Create a message with the given role.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            images: None,
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Attach image references.
    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = Some(images);
        self
    }
}

/// Chat request sent to the `chat` endpoint.
///
/// Carries the whole conversation so far; the server keeps no history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Agent tag.
    pub tag: String,
    /// Model identifier.
    pub model: String,
    /// Full conversation history, oldest first.
    pub messages: Vec<ChatMessage>,
    /// Whether the server should stream the reply.
    #[serde(default)]
    pub stream: bool,
    /// Model options passed through to the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Map<String, Value>>,
    /// Prompt template override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    /// Response format (e.g. `json`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl ChatRequest {
    /// Create a non-streaming request.
    pub fn new(
        tag: impl Into<String>,
        model: impl Into<String>,
        messages: impl Into<Vec<ChatMessage>>,
    ) -> Self {
        Self {
            tag: tag.into(),
            model: model.into(),
            messages: messages.into(),
            stream: false,
            options: None,
            template: None,
            format: None,
        }
    }

    /// Set model options.
    pub fn with_options(mut self, options: Map<String, Value>) -> Self {
        self.options = Some(options);
        self
    }

    /// Set a prompt template.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Set the response format.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }
}

/// Extract the assistant reply from a chat response.
///
/// The response is otherwise opaque; only `message.content` is read.
pub fn reply_content(response: &Value) -> Option<&str> {
    response.pointer("/message/content").and_then(Value::as_str)
}

// ─────────────────────────────────────────────────────────────────────────────
// Resources
// ─────────────────────────────────────────────────────────────────────────────

/// Connection source used when none is given.
pub const DEFAULT_CONNECTION_SOURCE: &str = "ollama";

/// Create agent request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAgentRequest {
    pub id: String,
    /// System prompt id; may be empty.
    pub prompt: String,
    /// Recall tool definitions, passed through as-is.
    pub recalltools: Value,
}

/// Create connection request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateConnectionRequest {
    pub id: String,
    /// Backend kind, e.g. `ollama`.
    pub source: String,
    /// Backend URL.
    pub url: String,
    /// Backend API key; may be empty.
    pub api_key: String,
}

impl CreateConnectionRequest {
    /// Create a request, falling back to [`DEFAULT_CONNECTION_SOURCE`] when
    /// `source` is empty.
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        let source = source.into();
        Self {
            id: id.into(),
            source: if source.is_empty() {
                DEFAULT_CONNECTION_SOURCE.to_string()
            } else {
                source
            },
            url: url.into(),
            api_key: api_key.into(),
        }
    }
}

/// Create prompt request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePromptRequest {
    pub id: String,
    pub prompt: String,
}

/// Create tool request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateToolRequest {
    pub id: String,
    pub description: String,
    /// Tool list definitions, passed through as-is.
    pub toollist: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chat_request_wire_format() {
        let request = ChatRequest::new(
            "support",
            "llama3",
            vec![ChatMessage::user("hi"), ChatMessage::assistant("hello")],
        );

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "tag": "support",
                "model": "llama3",
                "messages": [
                    {"role": "user", "content": "hi"},
                    {"role": "assistant", "content": "hello"}
                ],
                "stream": false
            })
        );
    }

    #[test]
    fn test_chat_request_optional_fields() {
        let mut options = Map::new();
        options.insert("temperature".to_string(), json!(0.2));

        let request = ChatRequest::new("t", "m", Vec::<ChatMessage>::new())
            .with_options(options)
            .with_template("{{ .Prompt }}")
            .with_format("json");

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["options"]["temperature"], json!(0.2));
        assert_eq!(value["template"], "{{ .Prompt }}");
        assert_eq!(value["format"], "json");
    }

    #[test]
    fn test_message_images_serialized_when_present() {
        let message = ChatMessage::user("look").with_images(vec!["aGVsbG8=".to_string()]);
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["images"], json!(["aGVsbG8="]));
    }

    #[test]
    fn test_content_with_quotes_is_escaped() {
        let message = ChatMessage::user(r#"say "hi" \ bye"#);
        let text = serde_json::to_string(&message).unwrap();
        let back: ChatMessage = serde_json::from_str(&text).unwrap();
        assert_eq!(back, message);
    }

    #[test]
    fn test_reply_content() {
        let ok = json!({"message": {"role": "assistant", "content": "hi there"}});
        assert_eq!(reply_content(&ok), Some("hi there"));

        assert_eq!(reply_content(&json!({"message": {"content": 42}})), None);
        assert_eq!(reply_content(&json!({"message": "hi"})), None);
        assert_eq!(reply_content(&json!({"error": "model not found"})), None);
        assert_eq!(reply_content(&json!([1, 2])), None);
    }

    #[test]
    fn test_connection_source_default() {
        let request = CreateConnectionRequest::new("c1", "", "http://localhost:11434", "");
        assert_eq!(request.source, DEFAULT_CONNECTION_SOURCE);

        let request = CreateConnectionRequest::new("c1", "openai", "https://api.openai.com", "k");
        assert_eq!(request.source, "openai");
    }
}
