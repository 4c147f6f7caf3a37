// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Session state management.
//!
//! A session starts when an image is opened and ends when the next one
//! replaces it. It owns the points recorded on that image.

use super::point::PointList;
use serde::{Deserialize, Serialize};

/// Image metadata plus the points recorded on it, also used for export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub image_file: String,
    pub image_width: u32,
    pub image_height: u32,
    pub points: PointList,
}

impl Session {
    /// Start a session for the given image with no points.
    pub fn new(image_file: String, image_width: u32, image_height: u32) -> Self {
        Self {
            image_file,
            image_width,
            image_height,
            points: PointList::new(),
        }
    }

    /// File name of the image, for display.
    pub fn image_name(&self) -> &str {
        std::path::Path::new(&self.image_file)
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.image_file)
    }
}
