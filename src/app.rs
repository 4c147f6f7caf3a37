// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module wires the viewer state to the UI: menus and toolbar, the
//! image canvas, the status bar and the coordinates table window.

use crate::config::Settings;
use crate::io::{media::IMAGE_EXTENSIONS, serialization};
use crate::ui::coordinates::{self, CoordinatesPanel};
use crate::ui::{canvas, toolbar};
use crate::viewer::Viewer;

/// Initial main window position, in screen points.
pub const WINDOW_POSITION: [f32; 2] = [100.0, 100.0];

/// Initial main window size, in screen points.
pub const WINDOW_SIZE: [f32; 2] = [800.0, 600.0];

/// Main application state.
pub struct ViewerApp {
    viewer: Viewer,

    settings: Settings,

    /// Texture of the current image
    image_texture: Option<egui::TextureHandle>,

    /// Coordinates table window, `None` while closed
    coordinates: Option<CoordinatesPanel>,

    /// The table opens on the first frame, once the main window exists
    coordinates_requested: bool,

    /// Last warning shown in the status bar
    status_warning: Option<String>,
}

impl ViewerApp {
    /// Create the application. The coordinates table opens on the first frame.
    pub fn new(viewer: Viewer, settings: Settings) -> Self {
        Self {
            viewer,
            settings,
            image_texture: None,
            coordinates: None,
            coordinates_requested: true,
            status_warning: None,
        }
    }

    fn warn(&mut self, err: anyhow::Error) {
        log::error!("{:#}", err);
        self.status_warning = Some(format!("{:#}", err));
    }

    /// Prompt for an image and load it. Cancelling the dialog changes nothing.
    fn open_image(&mut self, ctx: &egui::Context) {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Open Image")
            .add_filter("Images", IMAGE_EXTENSIONS)
            .add_filter("All Files", &["*"])
            .pick_file()
        else {
            return;
        };

        match self.viewer.open_image(&path) {
            Ok(loaded) => {
                let texture = ctx.load_texture(
                    "loaded_image",
                    loaded.to_color_image(),
                    egui::TextureOptions::LINEAR,
                );
                self.image_texture = Some(texture);
                self.status_warning = None;
            }
            Err(e) => self.warn(e),
        }
    }

    /// Create the coordinates table, seeded with the current points.
    fn show_coordinates(&mut self, ctx: &egui::Context) {
        let main_window = ctx.input(|i| i.viewport().outer_rect).unwrap_or_else(|| {
            egui::Rect::from_min_size(WINDOW_POSITION.into(), WINDOW_SIZE.into())
        });

        let events = self.viewer.subscribe();
        self.coordinates = Some(CoordinatesPanel::new(
            self.viewer.points(),
            events,
            Some(coordinates::position_beside(main_window)),
        ));
        log::info!("Opened coordinates table with {} rows", self.viewer.points().len());
    }

    /// Export the current session to a file chosen by the user.
    fn export_points(&mut self, extension: &str) {
        let Some(session) = self.viewer.session() else {
            return;
        };

        let default_name = format!("points.{}", extension);
        let Some(path) = rfd::FileDialog::new()
            .add_filter(extension.to_uppercase(), &[extension])
            .set_file_name(default_name)
            .save_file()
        else {
            return;
        };

        match serialization::export(session, &path) {
            Ok(()) => log::info!("Exported {} points to {}", session.points.len(), path.display()),
            Err(e) => self.warn(e.context("Failed to export points")),
        }
    }

    fn status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            match self.viewer.session() {
                Some(session) => {
                    ui.label(format!(
                        "{} ({}x{})",
                        session.image_name(),
                        session.image_width,
                        session.image_height
                    ));
                    ui.separator();
                    if session.points.is_empty() {
                        ui.label("No points yet");
                    } else {
                        ui.label(format!("Points: {}", session.points.len()));
                    }
                }
                None => {
                    ui.label("No image loaded");
                }
            }
            ui.separator();
            ui.label(format!("Log: {}", self.viewer.click_log().path().display()));

            if let Some(ref warning) = self.status_warning {
                ui.separator();
                ui.colored_label(egui::Color32::from_rgb(255, 170, 0), format!("⚠ {}", warning));
            }
        });
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.coordinates_requested {
            self.coordinates_requested = false;
            self.show_coordinates(ctx);
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Image...").clicked() {
                        ui.close_menu();
                        self.open_image(ctx);
                    }
                    ui.separator();
                    ui.add_enabled_ui(self.viewer.has_image(), |ui| {
                        ui.menu_button("Export Points", |ui| {
                            if ui.button("Export as YAML...").clicked() {
                                ui.close_menu();
                                self.export_points("yaml");
                            }
                            if ui.button("Export as JSON...").clicked() {
                                ui.close_menu();
                                self.export_points("json");
                            }
                        });
                    });
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    let closed = self.coordinates.is_none();
                    if ui
                        .add_enabled(closed, egui::Button::new("Coordinates Table"))
                        .clicked()
                    {
                        ui.close_menu();
                        self.show_coordinates(ctx);
                    }
                });
            });
        });

        // Toolbar
        let toolbar_action = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| {
                toolbar::show(ui, self.viewer.has_image(), self.coordinates.is_some())
            })
            .inner;

        match toolbar_action {
            toolbar::ToolbarAction::OpenImage => self.open_image(ctx),
            toolbar::ToolbarAction::ShowCoordinates => self.show_coordinates(ctx),
            toolbar::ToolbarAction::None => {}
        }

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| self.status_bar(ui));

        // Main canvas (center)
        let canvas_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                canvas::show(
                    ui,
                    self.viewer.session(),
                    self.image_texture.as_ref(),
                    self.settings.marker_radius,
                )
            })
            .inner;

        if let canvas::CanvasAction::Click { button, point } = canvas_action {
            if let Err(e) = self.viewer.register_click(button, point) {
                self.warn(e);
            }
            // Redraw with the new marker
            ctx.request_repaint();
        }

        // Coordinates table window
        if let Some(ref mut panel) = self.coordinates {
            if !panel.show(ctx) {
                self.coordinates = None;
                log::info!("Closed coordinates table");
            }
        }
    }
}
