// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Editor canvas area.
//!
//! Displays the rendered scene raster as a texture, scaled by the view
//! zoom, and maps clicks back into canvas pixel coordinates for
//! hit-testing.

/// Result of canvas interaction.
pub enum CanvasAction {
    None,
    /// Clicked at this point, in canvas pixel coordinates.
    SelectAt(f32, f32),
}

/// Display the canvas area and handle mouse interactions.
pub fn show(
    ui: &mut egui::Ui,
    texture: &Option<egui::TextureHandle>,
    canvas_size: (u32, u32),
    zoom: f32,
) -> CanvasAction {
    let mut action = CanvasAction::None;
    ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(40);

    egui::Frame::canvas(ui.style()).show(ui, |ui| {
        ui.set_min_size(ui.available_size());

        let Some(texture) = texture else {
            // Raster not ready yet; lifecycle guard, not an error.
            ui.centered_and_justified(|ui| {
                ui.label(
                    egui::RichText::new("Canvas hazırlanıyor...")
                        .color(egui::Color32::from_gray(150)),
                );
            });
            return;
        };

        let display_size = egui::vec2(
            canvas_size.0 as f32 * zoom,
            canvas_size.1 as f32 * zoom,
        );

        egui::ScrollArea::both().show(ui, |ui| {
            // Center the canvas when it is smaller than the viewport.
            let pad = ((ui.available_size() - display_size) / 2.0).max(egui::Vec2::ZERO);
            ui.horizontal(|ui| {
                ui.add_space(pad.x);
                ui.vertical(|ui| {
                    ui.add_space(pad.y);
                    let (rect, response) =
                        ui.allocate_exact_size(display_size, egui::Sense::click());
                    ui.painter().image(
                        texture.id(),
                        rect,
                        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                        egui::Color32::WHITE,
                    );

                    if response.clicked() {
                        if let Some(pos) = response.interact_pointer_pos() {
                            let x = (pos.x - rect.min.x) / zoom;
                            let y = (pos.y - rect.min.y) / zoom;
                            action = CanvasAction::SelectAt(x, y);
                        }
                    }
                });
            });
        });
    });

    action
}
