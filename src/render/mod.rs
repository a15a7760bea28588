// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Scene rasterization and export.

pub mod export;
pub mod raster;
