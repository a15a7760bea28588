// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the Futbol Grafik application.

pub mod canvas;
pub mod chat;
pub mod home;
pub mod properties;
pub mod standings;
pub mod team_picker;
pub mod toolbar;
