// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Viewer state: the open image, its points and the click log.
//!
//! The viewer is the single owner of the point list. Other components learn
//! about changes through [`PointEvent`]s delivered over channels obtained
//! from [`Viewer::subscribe`].

use crate::io::click_log::ClickLog;
use crate::io::media::{self, LoadedImage};
use crate::models::{point::Point, session::Session};
use anyhow::{Context, Result};
use egui::PointerButton;
use std::path::Path;
use std::sync::mpsc::{channel, Receiver, Sender};

/// Change notification for the point list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointEvent {
    /// A point was appended at `index`.
    Added { index: usize, point: Point },
    /// A new image was opened and the list was emptied.
    Cleared,
}

pub struct Viewer {
    /// Current image and its points; `None` until an image is opened
    session: Option<Session>,
    click_log: ClickLog,
    subscribers: Vec<Sender<PointEvent>>,
}

impl Viewer {
    /// Create a viewer with no image, logging to `click_log`.
    pub fn new(click_log: ClickLog) -> Self {
        Self {
            session: None,
            click_log,
            subscribers: Vec::new(),
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn points(&self) -> &[Point] {
        self.session
            .as_ref()
            .map(|s| s.points.as_slice())
            .unwrap_or_default()
    }

    pub fn has_image(&self) -> bool {
        self.session.is_some()
    }

    pub fn click_log(&self) -> &ClickLog {
        &self.click_log
    }

    /// Register a listener for point list changes.
    pub fn subscribe(&mut self) -> Receiver<PointEvent> {
        let (sender, receiver) = channel();
        self.subscribers.push(sender);
        receiver
    }

    /// Decode `path` and make it the current image.
    ///
    /// On a decode error nothing changes: the previous image and its points
    /// stay in place.
    pub fn open_image(&mut self, path: &Path) -> Result<LoadedImage> {
        let loaded = media::load_image(path)
            .with_context(|| format!("Could not open {}", path.display()))?;

        self.start_session(Session::new(
            path.to_string_lossy().to_string(),
            loaded.width,
            loaded.height,
        ));
        log::info!("Loaded image: {} ({}x{})", path.display(), loaded.width, loaded.height);

        Ok(loaded)
    }

    /// Replace the current session, discarding all recorded points.
    pub fn start_session(&mut self, session: Session) {
        let dropped = self.points().len();
        self.session = Some(session);
        if dropped > 0 {
            log::info!("Discarded {} points from the previous image", dropped);
        }
        self.notify(PointEvent::Cleared);
    }

    /// Record a click at `point` (image coordinates).
    ///
    /// Returns `Ok(None)` for ignored clicks: any button other than the
    /// primary one, or no image loaded. On a log write error the point is
    /// still recorded and subscribers are still notified.
    pub fn register_click(&mut self, button: PointerButton, point: Point) -> Result<Option<usize>> {
        if button != PointerButton::Primary {
            return Ok(None);
        }
        let Some(session) = self.session.as_mut() else {
            return Ok(None);
        };

        let index = session.points.push(point);
        log::info!("Added point {} at ({:.3}, {:.3})", index, point.x, point.y);

        self.notify(PointEvent::Added { index, point });

        self.click_log
            .append(index, &point)
            .with_context(|| format!("Point {} was not written to the click log", index))?;

        Ok(Some(index))
    }

    fn notify(&mut self, event: PointEvent) {
        // Receivers are dropped when their window closes
        self.subscribers.retain(|sender| sender.send(event).is_ok());
    }
}
