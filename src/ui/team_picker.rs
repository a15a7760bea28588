// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Team picker modal for inserting team badges.

use crate::models::team::{Team, SUPER_LIG_TEAMS};

/// Show the picker window while `open` is true. Returns the chosen
/// team, if any; choosing closes the window.
pub fn show(ctx: &egui::Context, open: &mut bool) -> Option<&'static Team> {
    if !*open {
        return None;
    }
    let mut chosen = None;
    let mut keep_open = true;

    egui::Window::new("Takım Seç")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .open(&mut keep_open)
        .show(ctx, |ui| {
            egui::Grid::new("team_grid").num_columns(3).show(ui, |ui| {
                for (i, team) in SUPER_LIG_TEAMS.iter().enumerate() {
                    ui.vertical_centered(|ui| {
                        let button = egui::Button::new(
                            egui::RichText::new(team.short_name).strong(),
                        )
                        .fill(team.colors.primary.to_color32())
                        .min_size(egui::vec2(64.0, 40.0));
                        if ui.add(button).on_hover_text(team.name).clicked() {
                            chosen = Some(team);
                        }
                    });
                    if i % 3 == 2 {
                        ui.end_row();
                    }
                }
            });
        });

    if chosen.is_some() || !keep_open {
        *open = false;
    }
    chosen
}
