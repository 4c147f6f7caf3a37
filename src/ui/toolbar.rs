// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar with the common viewer actions.

/// Action requested from the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    None,
    OpenImage,
    ShowCoordinates,
}

/// Display the toolbar.
pub fn show(ui: &mut egui::Ui, has_image: bool, panel_open: bool) -> ToolbarAction {
    let mut action = ToolbarAction::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        if ui.button("Open Image").clicked() {
            action = ToolbarAction::OpenImage;
        }

        if ui
            .add_enabled(!panel_open, egui::Button::new("Coordinates Table"))
            .clicked()
        {
            action = ToolbarAction::ShowCoordinates;
        }

        ui.separator();

        let hint = if has_image {
            "Left-click on the image to record a point"
        } else {
            "Open an image to start recording points"
        };
        ui.label(egui::RichText::new(hint).italics().weak());
    });

    action
}
