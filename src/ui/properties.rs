// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Properties panel (right side).
//!
//! Edits the canvas background and, when an object is selected, its
//! geometry, fill, rotation and text fields. All edits come back as
//! actions; the panel never mutates the scene directly.

use crate::models::scene::{ObjectKind, ObjectPatch, SceneObject};
use crate::models::team::SUPER_LIG_TEAMS;
use crate::util::color::Color;

/// Background swatches offered below the color picker.
const BACKGROUND_PRESETS: [&str; 5] = ["#0F172A", "#1E293B", "#000000", "#1a1a2e", "#16213e"];

/// Result of properties panel interaction.
pub enum PropertiesAction {
    None,
    SetBackground(Color),
    UpdateSelected(ObjectPatch),
}

/// Display the properties panel.
pub fn show(
    ui: &mut egui::Ui,
    background: Color,
    selected: Option<&SceneObject>,
) -> PropertiesAction {
    let mut action = PropertiesAction::None;

    ui.heading("Özellikler");
    ui.separator();

    // Background color
    ui.label("Arka Plan Rengi");
    let mut bg_rgb = background.0;
    if ui.color_edit_button_srgb(&mut bg_rgb).changed() {
        action = PropertiesAction::SetBackground(Color(bg_rgb));
    }
    ui.horizontal(|ui| {
        for hex in BACKGROUND_PRESETS {
            if let Some(color) = Color::from_hex(hex) {
                if color_swatch(ui, color, hex).clicked() {
                    action = PropertiesAction::SetBackground(color);
                }
            }
        }
    });

    if let Some(object) = selected {
        ui.separator();
        ui.label(egui::RichText::new(format!("Seçili: {}", object.kind.label())).strong());

        let mut patch = ObjectPatch::default();

        // Position
        ui.horizontal(|ui| {
            ui.label("X");
            let mut x = object.x;
            if ui.add(egui::DragValue::new(&mut x).speed(1.0)).changed() {
                patch.x = Some(x);
            }
            ui.label("Y");
            let mut y = object.y;
            if ui.add(egui::DragValue::new(&mut y).speed(1.0)).changed() {
                patch.y = Some(y);
            }
        });

        // Size
        ui.horizontal(|ui| {
            ui.label("Genişlik");
            let mut width = object.width;
            if ui
                .add(egui::DragValue::new(&mut width).speed(1.0).range(1.0..=4000.0))
                .changed()
            {
                patch.width = Some(width);
            }
            ui.label("Yükseklik");
            let mut height = object.height;
            if ui
                .add(egui::DragValue::new(&mut height).speed(1.0).range(1.0..=4000.0))
                .changed()
            {
                patch.height = Some(height);
            }
        });

        // Fill color
        ui.horizontal(|ui| {
            ui.label("Renk");
            let mut fill = object.fill.0;
            if ui.color_edit_button_srgb(&mut fill).changed() {
                patch.fill = Some(Color(fill));
            }
        });

        // Text specific
        if let ObjectKind::Text {
            content, font_size, ..
        } = &object.kind
        {
            ui.label("Metin");
            let mut text = content.clone();
            if ui.text_edit_singleline(&mut text).changed() {
                patch.content = Some(text);
            }
            ui.horizontal(|ui| {
                ui.label("Font Boyutu");
                let mut size = *font_size;
                if ui
                    .add(egui::DragValue::new(&mut size).speed(1.0).range(1.0..=400.0))
                    .changed()
                {
                    patch.font_size = Some(size);
                }
            });
        }

        // Rotation
        let mut rotation = object.rotation;
        if ui
            .add(egui::Slider::new(&mut rotation, 0.0..=360.0).text("Rotasyon"))
            .changed()
        {
            patch.rotation = Some(rotation);
        }

        if patch_has_changes(&patch) {
            action = PropertiesAction::UpdateSelected(patch);
        }
    }

    // Team colors quick access
    ui.separator();
    ui.label(egui::RichText::new("Takım Renkleri").strong());
    for team in &SUPER_LIG_TEAMS[..4] {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(team.short_name).weak());
            if selected.is_some() {
                if color_swatch(ui, team.colors.primary, &format!("{} Ana", team.name)).clicked() {
                    action = PropertiesAction::UpdateSelected(ObjectPatch {
                        fill: Some(team.colors.primary),
                        ..Default::default()
                    });
                }
                if color_swatch(ui, team.colors.secondary, &format!("{} İkincil", team.name))
                    .clicked()
                {
                    action = PropertiesAction::UpdateSelected(ObjectPatch {
                        fill: Some(team.colors.secondary),
                        ..Default::default()
                    });
                }
            } else {
                let _ = color_swatch(ui, team.colors.primary, &format!("{} Ana", team.name));
                let _ = color_swatch(ui, team.colors.secondary, &format!("{} İkincil", team.name));
            }
        });
    }

    action
}

fn color_swatch(ui: &mut egui::Ui, color: Color, hover: &str) -> egui::Response {
    ui.add(
        egui::Button::new("")
            .fill(color.to_color32())
            .min_size(egui::vec2(22.0, 22.0)),
    )
    .on_hover_text(hover)
}

fn patch_has_changes(patch: &ObjectPatch) -> bool {
    patch.x.is_some()
        || patch.y.is_some()
        || patch.width.is_some()
        || patch.height.is_some()
        || patch.rotation.is_some()
        || patch.fill.is_some()
        || patch.content.is_some()
        || patch.font_size.is_some()
}
