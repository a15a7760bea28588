// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Chat backend client.
//!
//! One outstanding request at a time; the caller holds the receiver
//! and polls it each frame. Any failure resolves to the demo-mode
//! reply instead of an error.

use std::sync::mpsc::{channel, Receiver};

use crate::models::chat::{demo_reply, ChatMessage, ChatRequest, ChatResponse, EMPTY_RESPONSE_REPLY};

/// Send a message to `POST {api_url}/ai/chat` on a background thread.
/// The returned channel always yields exactly one assistant reply.
pub fn send_message(api_url: String, message: String, context: Vec<ChatMessage>) -> Receiver<String> {
    let (sender, receiver) = channel();

    std::thread::spawn(move || {
        let reply = match request_reply(&api_url, &message, context) {
            Ok(reply) => reply,
            Err(e) => {
                log::warn!("Chat backend unavailable, using demo reply: {}", e);
                demo_reply(&message)
            }
        };
        let _ = sender.send(reply);
    });

    receiver
}

fn request_reply(
    api_url: &str,
    message: &str,
    context: Vec<ChatMessage>,
) -> Result<String, reqwest::Error> {
    let body = ChatRequest {
        message: message.to_string(),
        context,
    };

    let response = reqwest::blocking::Client::new()
        .post(format!("{api_url}/ai/chat"))
        .json(&body)
        .send()?
        .error_for_status()?;

    let parsed: ChatResponse = response.json()?;
    if parsed.response.is_empty() {
        Ok(EMPTY_RESPONSE_REPLY.to_string())
    } else {
        Ok(parsed.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_backend_yields_demo_reply() {
        // Port 9 (discard) is not listening; the request fails fast and
        // the channel must still deliver the fallback template.
        let receiver = send_message(
            "http://127.0.0.1:9".to_string(),
            "test".to_string(),
            Vec::new(),
        );
        let reply = receiver
            .recv_timeout(std::time::Duration::from_secs(30))
            .expect("fallback reply");
        assert!(reply.contains("Demo Mod"));
        assert!(reply.contains("\"test\""));
    }
}
