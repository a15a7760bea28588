// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model for the application.

pub mod chat;
pub mod scene;
pub mod standings;
pub mod team;
