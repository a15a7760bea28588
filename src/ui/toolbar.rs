// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Editor toolbars.
//!
//! The top bar carries the canvas preset toggle, zoom controls and the
//! export menu; the left strip carries the object insertion tools and
//! the delete button.

use crate::models::scene::CanvasPreset;
use crate::render::export::{ExportSize, EXPORT_SIZES};

/// Result of top-bar interaction.
pub enum TopBarAction {
    None,
    Back,
    SetPreset(CanvasPreset),
    ZoomOut,
    ZoomIn,
    Export(&'static ExportSize),
}

/// Result of tool-strip interaction.
pub enum ToolAction {
    None,
    AddText,
    AddRect,
    AddCircle,
    OpenTeamPicker,
    DeleteSelected,
}

/// Display the editor top bar.
pub fn show_top_bar(ui: &mut egui::Ui, preset: CanvasPreset, zoom: f32) -> TopBarAction {
    let mut action = TopBarAction::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        if ui.button("⬅").on_hover_text("Ana sayfa").clicked() {
            action = TopBarAction::Back;
        }
        ui.label(egui::RichText::new("Editör").strong());

        ui.separator();

        // Canvas ratio
        for candidate in [CanvasPreset::Square, CanvasPreset::Widescreen] {
            if ui
                .selectable_label(preset == candidate, candidate.label())
                .clicked()
            {
                action = TopBarAction::SetPreset(candidate);
            }
        }

        ui.separator();

        // Zoom
        if ui.button("−").on_hover_text("Uzaklaştır").clicked() {
            action = TopBarAction::ZoomOut;
        }
        ui.label(format!("{}%", (zoom * 100.0).round() as i32));
        if ui.button("+").on_hover_text("Yakınlaştır").clicked() {
            action = TopBarAction::ZoomIn;
        }

        ui.separator();

        // Undo/Redo are rendered but inert; there is no history stack.
        ui.add_enabled(false, egui::Button::new("↩ Geri Al"));
        ui.add_enabled(false, egui::Button::new("↪ İleri Al"));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.menu_button("⬇ Export", |ui| {
                for size in &EXPORT_SIZES {
                    if ui.button(size.label).clicked() {
                        action = TopBarAction::Export(size);
                        ui.close_menu();
                    }
                }
            });
        });
    });

    action
}

/// Display the left tool strip.
pub fn show_tool_strip(ui: &mut egui::Ui, has_selection: bool) -> ToolAction {
    let mut action = ToolAction::None;

    ui.vertical_centered(|ui| {
        ui.spacing_mut().item_spacing.y = 6.0;
        ui.add_space(4.0);

        if ui.button("T").on_hover_text("Metin Ekle").clicked() {
            action = ToolAction::AddText;
        }
        if ui.button("▭").on_hover_text("Dikdörtgen").clicked() {
            action = ToolAction::AddRect;
        }
        if ui.button("◯").on_hover_text("Daire").clicked() {
            action = ToolAction::AddCircle;
        }

        ui.separator();

        if ui.button("⚽").on_hover_text("Takım Logosu").clicked() {
            action = ToolAction::OpenTeamPicker;
        }

        ui.separator();

        if ui
            .add_enabled(has_selection, egui::Button::new("🗑"))
            .on_hover_text("Sil")
            .clicked()
        {
            action = ToolAction::DeleteSelected;
        }
    });

    action
}
