// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Image canvas with point markers.
//!
//! This module draws the loaded image fitted to the available space, a
//! marker at every recorded point, and reports pointer clicks in image
//! coordinates.

use crate::models::{point::Point, session::Session};
use crate::util::geometry;
use egui::PointerButton;

const MARKER_COLOR: egui::Color32 = egui::Color32::RED;

/// Result of canvas interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasAction {
    None,
    /// A click inside the image, mapped to image coordinates.
    Click { button: PointerButton, point: Point },
}

/// Display the canvas area and handle mouse interactions.
pub fn show(
    ui: &mut egui::Ui,
    session: Option<&Session>,
    image_texture: Option<&egui::TextureHandle>,
    marker_radius: f32,
) -> CanvasAction {
    let mut action = CanvasAction::None;
    // Set background color
    ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(40);

    let available_size = ui.available_size();

    egui::Frame::canvas(ui.style()).show(ui, |ui| {
        ui.set_min_size(available_size);

        let (Some(session), Some(texture)) = (session, image_texture) else {
            show_welcome(ui);
            return;
        };

        let (img_width, img_height) = (session.image_width, session.image_height);
        let available = egui::Rect::from_min_size(ui.min_rect().min, ui.available_size());
        let image_rect = geometry::fit_image_rect(available, img_width, img_height);

        // Base image first, markers on top, every frame
        let painter = ui.painter_at(available);
        painter.image(
            texture.id(),
            image_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );

        let response = ui.allocate_rect(image_rect, egui::Sense::click());
        if let Some(button) = clicked_button(&response) {
            if let Some(pos) = response.interact_pointer_pos() {
                if image_rect.contains(pos) {
                    action = CanvasAction::Click {
                        button,
                        point: geometry::screen_to_image(pos, image_rect, img_width, img_height),
                    };
                }
            }
        }

        let radius = marker_radius * geometry::display_scale(image_rect, img_width);
        for point in &session.points {
            let center = geometry::image_to_screen(point, image_rect, img_width, img_height);
            painter.circle_stroke(center, radius, egui::Stroke::new(1.5, MARKER_COLOR));
        }

        if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Crosshair);
        }
    });

    action
}

fn clicked_button(response: &egui::Response) -> Option<PointerButton> {
    [
        PointerButton::Primary,
        PointerButton::Secondary,
        PointerButton::Middle,
        PointerButton::Extra1,
        PointerButton::Extra2,
    ]
    .into_iter()
    .find(|button| response.clicked_by(*button))
}

/// Placeholder shown while no image is loaded.
fn show_welcome(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.heading(
                egui::RichText::new("Image Viewer")
                    .size(32.0)
                    .color(egui::Color32::from_gray(200)),
            );
            ui.add_space(20.0);
            ui.label(
                egui::RichText::new("Open an image, then click to record points of interest")
                    .color(egui::Color32::from_gray(180)),
            );
            ui.add_space(10.0);
            ui.label(
                egui::RichText::new("File → Open Image...")
                    .weak()
                    .color(egui::Color32::from_gray(130)),
            );
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: [f32; 2] = [800.0, 600.0];

    /// Run move, press and release frames at `pos` and return the first
    /// action the canvas reported.
    fn click_canvas(session: &Session, pos: egui::Pos2, button: PointerButton) -> CanvasAction {
        let ctx = egui::Context::default();
        let texture = ctx.load_texture(
            "test_image",
            egui::ColorImage::new(
                [session.image_width as usize, session.image_height as usize],
                egui::Color32::WHITE,
            ),
            egui::TextureOptions::LINEAR,
        );

        let frames = [
            vec![egui::Event::PointerMoved(pos)],
            vec![egui::Event::PointerButton {
                pos,
                button,
                pressed: true,
                modifiers: egui::Modifiers::default(),
            }],
            vec![egui::Event::PointerButton {
                pos,
                button,
                pressed: false,
                modifiers: egui::Modifiers::default(),
            }],
            vec![],
        ];

        let mut reported = CanvasAction::None;
        for events in frames {
            let input = egui::RawInput {
                screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, SCREEN.into())),
                events,
                ..Default::default()
            };
            let _ = ctx.run(input, |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    let action = show(ui, Some(session), Some(&texture), 5.0);
                    if reported == CanvasAction::None {
                        reported = action;
                    }
                });
            });
        }
        reported
    }

    #[test]
    fn test_primary_click_maps_into_image() {
        let session = Session::new("photo.png".to_string(), 640, 480);

        let action = click_canvas(&session, egui::pos2(400.0, 300.0), PointerButton::Primary);

        let CanvasAction::Click { button, point } = action else {
            panic!("expected a click, got {:?}", action);
        };
        assert_eq!(button, PointerButton::Primary);
        // Screen center lands near the image center
        assert!((point.x - 320.0).abs() < 10.0, "x = {}", point.x);
        assert!((point.y - 240.0).abs() < 10.0, "y = {}", point.y);
    }

    #[test]
    fn test_secondary_click_reports_button() {
        let session = Session::new("photo.png".to_string(), 640, 480);

        let action = click_canvas(&session, egui::pos2(400.0, 300.0), PointerButton::Secondary);

        assert!(matches!(
            action,
            CanvasAction::Click { button: PointerButton::Secondary, .. }
        ));
    }

    #[test]
    fn test_letterbox_click_is_ignored() {
        // Tall image leaves empty bands left and right of it
        let session = Session::new("tall.png".to_string(), 100, 1000);

        let action = click_canvas(&session, egui::pos2(100.0, 300.0), PointerButton::Primary);

        assert_eq!(action, CanvasAction::None);
    }

    #[test]
    fn test_no_image_reports_nothing() {
        let ctx = egui::Context::default();
        let mut action = CanvasAction::None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                action = show(ui, None, None, 5.0);
            });
        });
        assert_eq!(action, CanvasAction::None);
    }
}
