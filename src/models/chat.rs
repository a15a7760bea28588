// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Chat transcript data structures.
//!
//! The wire format mirrors the backend contract: `POST /ai/chat` with a
//! message plus the last ten turns of context, answered by a single
//! `response` string.

use serde::{Deserialize, Serialize};

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Request body for `POST /ai/chat`.
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub context: Vec<ChatMessage>,
}

/// Response body of `POST /ai/chat`.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub response: String,
}

/// Quick prompts shown on the empty-transcript welcome screen.
pub const QUICK_PROMPTS: [&str; 4] = [
    "Fenerbahçe'nin son performansını analiz et",
    "GS - BJK maçı için tahmin yap",
    "Icardi vs Dzeko karşılaştır",
    "Derbi için video scripti yaz",
];

/// Shown when the backend answers 2xx but without a usable response field.
pub const EMPTY_RESPONSE_REPLY: &str = "Bir hata oluştu, lütfen tekrar deneyin.";

/// Context window sent with a new message: the last ten existing turns,
/// oldest first. The message being sent is not part of its own context.
pub fn context_window(transcript: &[ChatMessage]) -> Vec<ChatMessage> {
    let start = transcript.len().saturating_sub(10);
    transcript[start..].to_vec()
}

/// Canned assistant reply used whenever the backend is unreachable or
/// returns an error, echoing the submitted question.
pub fn demo_reply(message: &str) -> String {
    format!(
        "**Demo Mod** - Backend henüz bağlı değil.\n\n\
         Sorunuz: \"{message}\"\n\n\
         Backend deploy edildikten sonra gerçek AI yanıtları alacaksınız. \
         Şimdilik uygulamanın arayüzünü test edebilirsiniz.\n\n\
         **Yapılacaklar:**\n1. Backend'i deploy et\n2. FUTBOL_API_URL'i güncelle"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(role: Role, content: &str) -> ChatMessage {
        ChatMessage {
            role,
            content: content.to_string(),
        }
    }

    #[test]
    fn test_context_window_caps_at_ten_most_recent() {
        let transcript: Vec<ChatMessage> = (0..14)
            .map(|i| message(Role::User, &format!("msg {i}")))
            .collect();

        let context = context_window(&transcript);
        assert_eq!(context.len(), 10);
        assert_eq!(context[0].content, "msg 4");
        assert_eq!(context[9].content, "msg 13");
    }

    #[test]
    fn test_context_window_short_transcript() {
        let transcript = vec![
            message(Role::User, "hello"),
            message(Role::Assistant, "hi"),
        ];
        assert_eq!(context_window(&transcript), transcript);
        assert!(context_window(&[]).is_empty());
    }

    #[test]
    fn test_demo_reply_echoes_question() {
        let reply = demo_reply("test");
        assert!(reply.contains("\"test\""));
        assert!(reply.starts_with("**Demo Mod**"));
    }

    #[test]
    fn test_request_serialization() {
        let request = ChatRequest {
            message: "tahmin yap".to_string(),
            context: vec![message(Role::Assistant, "merhaba")],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["message"], "tahmin yap");
        assert_eq!(json["context"][0]["role"], "assistant");
        assert_eq!(json["context"][0]["content"], "merhaba");
    }

    #[test]
    fn test_response_missing_field_defaults_empty() {
        let response: ChatResponse = serde_json::from_str("{}").unwrap();
        assert!(response.response.is_empty());
    }
}
