// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Coordinates table window.
//!
//! A secondary native window listing every recorded point as an (X, Y) row.
//! The panel never reads the viewer directly: it is seeded with a snapshot
//! when created and then follows the viewer's [`PointEvent`] stream.

use crate::io::click_log::format_coordinate;
use crate::models::point::Point;
use crate::viewer::PointEvent;
use egui_extras::{Column, TableBuilder};
use std::sync::mpsc::Receiver;

/// Gap between the main window's right edge and the panel.
const WINDOW_GAP: f32 = 10.0;

const ROW_HEIGHT: f32 = 18.0;

pub struct CoordinatesPanel {
    rows: Vec<[String; 2]>,
    events: Receiver<PointEvent>,
    /// Initial screen position, applied once when the window opens
    position: Option<egui::Pos2>,
    viewport_id: egui::ViewportId,
}

impl CoordinatesPanel {
    /// Create a panel showing `snapshot`, then following `events`.
    pub fn new(snapshot: &[Point], events: Receiver<PointEvent>, position: Option<egui::Pos2>) -> Self {
        let mut panel = Self {
            rows: Vec::with_capacity(snapshot.len()),
            events,
            position,
            viewport_id: egui::ViewportId::from_hash_of("coordinates_table"),
        };
        for point in snapshot {
            panel.append_row(point.x, point.y);
        }
        panel
    }

    /// Add one row at the end of the table.
    pub fn append_row(&mut self, x: f64, y: f64) {
        self.rows.push([format_coordinate(x), format_coordinate(y)]);
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[[String; 2]] {
        &self.rows
    }

    /// Apply all pending point events.
    pub fn sync(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                PointEvent::Added { index, point } => {
                    debug_assert_eq!(index, self.rows.len(), "table out of sync with points");
                    self.append_row(point.x, point.y);
                }
                PointEvent::Cleared => self.clear(),
            }
        }
    }

    /// Show the panel window. Returns `false` once the user closes it.
    pub fn show(&mut self, ctx: &egui::Context) -> bool {
        self.sync();

        let mut builder = egui::ViewportBuilder::default()
            .with_title(format!("Coordinates Table ({} points)", self.row_count()))
            .with_inner_size([260.0, 400.0]);
        if let Some(position) = self.position {
            builder = builder.with_position(position);
        }

        ctx.show_viewport_immediate(self.viewport_id, builder, |ctx, class| {
            if class == egui::ViewportClass::Embedded {
                // Backend without multiple native windows
                let mut open = true;
                egui::Window::new("Coordinates Table")
                    .open(&mut open)
                    .show(ctx, |ui| self.table(ui));
                open
            } else {
                egui::CentralPanel::default().show(ctx, |ui| self.table(ui));
                !ctx.input(|i| i.viewport().close_requested())
            }
        })
    }

    fn table(&self, ui: &mut egui::Ui) {
        TableBuilder::new(ui)
            .striped(true)
            .stick_to_bottom(true)
            .column(Column::auto().at_least(100.0))
            .column(Column::remainder())
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong("X");
                });
                header.col(|ui| {
                    ui.strong("Y");
                });
            })
            .body(|body| {
                let rows = self.rows();
                body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                    let [x, y] = &rows[row.index()];
                    row.col(|ui| {
                        ui.label(x);
                    });
                    row.col(|ui| {
                        ui.label(y);
                    });
                });
            });
    }
}

/// Screen position to the right of `main_window`, aligned with its top.
pub fn position_beside(main_window: egui::Rect) -> egui::Pos2 {
    egui::pos2(main_window.right() + WINDOW_GAP, main_window.top())
}
