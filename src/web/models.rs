use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "system")]
    System,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

// Body sent to the inference backend
#[derive(Debug, Serialize)]
pub struct InferenceRequest<'a> {
    pub messages: &'a [Message],
    pub stream: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_chat_request_and_ignores_extra_fields() {
        let body = json!({
            "messages": [
                { "role": "system", "content": "be brief" },
                { "role": "user", "content": "hi" }
            ],
            "temperature": 0.2
        });
        let req: ChatRequest = serde_json::from_value(body).unwrap();
        assert_eq!(req.messages.len(), 2);
        assert_eq!(req.messages[0].role, Role::System);
        assert_eq!(req.messages[1], Message::new(Role::User, "hi"));
    }

    #[test]
    fn rejects_unknown_role_and_non_string_content() {
        let bad_role = json!({ "messages": [{ "role": "tool", "content": "x" }] });
        assert!(serde_json::from_value::<ChatRequest>(bad_role).is_err());

        let bad_content = json!({ "messages": [{ "role": "user", "content": 7 }] });
        assert!(serde_json::from_value::<ChatRequest>(bad_content).is_err());

        let missing = json!({ "msgs": [] });
        assert!(serde_json::from_value::<ChatRequest>(missing).is_err());
    }

    #[test]
    fn inference_request_sets_stream_flag() {
        let messages = vec![Message::new(Role::User, "hello")];
        let value = serde_json::to_value(InferenceRequest {
            messages: &messages,
            stream: true,
        })
        .unwrap();
        assert_eq!(
            value,
            json!({
                "messages": [{ "role": "user", "content": "hello" }],
                "stream": true
            })
        );
    }
}
