// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Point of interest data structures.
//!
//! Points live in image space: pixel coordinates with the origin at the
//! top-left corner of the loaded image.

use serde::{Deserialize, Serialize};

/// A recorded click location in image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Ordered, append-only list of points for one loaded image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointList {
    points: Vec<Point>,
}

impl PointList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point and return its 0-based index.
    pub fn push(&mut self, point: Point) -> usize {
        self.points.push(point);
        self.points.len() - 1
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }
}

impl<'a> IntoIterator for &'a PointList {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
