// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model: points and the per-image session.

pub mod point;
pub mod session;
