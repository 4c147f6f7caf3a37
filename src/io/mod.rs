// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for images, the click log and exports.

pub mod click_log;
pub mod media;
pub mod serialization;
