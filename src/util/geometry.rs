// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides the layout of the image inside the canvas and the
//! transformations between screen coordinates and image pixel coordinates.

use crate::models::point::Point;
use egui::{Pos2, Rect};

/// Largest rect with the image's aspect ratio that fits `available`,
/// centered inside it.
pub fn fit_image_rect(available: Rect, image_width: u32, image_height: u32) -> Rect {
    if image_width == 0 || image_height == 0 || available.width() <= 0.0 || available.height() <= 0.0 {
        return Rect::from_center_size(available.center(), egui::Vec2::ZERO);
    }

    let img_aspect = image_width as f32 / image_height as f32;
    let available_aspect = available.width() / available.height();

    let size = if img_aspect > available_aspect {
        // Image is wider - fit to width
        egui::vec2(available.width(), available.width() / img_aspect)
    } else {
        // Image is taller - fit to height
        egui::vec2(available.height() * img_aspect, available.height())
    };

    Rect::from_center_size(available.center(), size)
}

/// Convert a screen position inside `image_rect` to image pixel coordinates.
pub fn screen_to_image(pos: Pos2, image_rect: Rect, image_width: u32, image_height: u32) -> Point {
    // Scale in f64 so f32 rounding does not leak into recorded values
    let dx = pos.x as f64 - image_rect.min.x as f64;
    let dy = pos.y as f64 - image_rect.min.y as f64;
    Point::new(
        dx * image_width as f64 / image_rect.width() as f64,
        dy * image_height as f64 / image_rect.height() as f64,
    )
}

/// Convert image pixel coordinates to a screen position.
pub fn image_to_screen(point: &Point, image_rect: Rect, image_width: u32, image_height: u32) -> Pos2 {
    egui::pos2(
        image_rect.min.x + (point.x / image_width as f64) as f32 * image_rect.width(),
        image_rect.min.y + (point.y / image_height as f64) as f32 * image_rect.height(),
    )
}

/// Screen pixels per image pixel for a fitted image.
pub fn display_scale(image_rect: Rect, image_width: u32) -> f32 {
    if image_width == 0 {
        return 1.0;
    }
    image_rect.width() / image_width as f32
}
