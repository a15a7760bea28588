// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Backend API access for the chat and standings collaborators.
//!
//! Requests run on spawned threads and deliver results over mpsc
//! channels polled from the UI update loop; network failures never
//! surface as errors, only as demo-mode fallbacks.

pub mod chat;
pub mod standings;

/// Backend base URL, overridable via `FUTBOL_API_URL`.
pub fn api_url() -> String {
    std::env::var("FUTBOL_API_URL").unwrap_or_else(|_| "http://localhost:8000".to_string())
}
