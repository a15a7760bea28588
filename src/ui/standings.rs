// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! League standings screen.

use crate::models::standings::{FormResult, TeamStanding, LEAGUES};
use crate::models::team;

/// Result of standings screen interaction.
pub enum StandingsAction {
    None,
    Back,
    SelectLeague(&'static str),
    Refresh,
}

/// Display the standings screen.
pub fn show(
    ui: &mut egui::Ui,
    selected_league: &str,
    standings: &[TeamStanding],
    busy: bool,
) -> StandingsAction {
    let mut action = StandingsAction::None;

    ui.horizontal(|ui| {
        if ui.button("⬅").on_hover_text("Ana sayfa").clicked() {
            action = StandingsAction::Back;
        }
        ui.label(egui::RichText::new("🏆 Puan Durumu").strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.add_enabled(!busy, egui::Button::new("🔄 Güncelle")).clicked() {
                action = StandingsAction::Refresh;
            }
        });
    });
    ui.separator();

    // League selector
    ui.horizontal_wrapped(|ui| {
        for league in &LEAGUES {
            let label = format!("{} {}", league.flag, league.name);
            if ui
                .selectable_label(selected_league == league.id, label)
                .clicked()
            {
                action = StandingsAction::SelectLeague(league.id);
            }
        }
    });
    ui.add_space(8.0);

    if busy {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.spinner();
        });
        return action;
    }

    egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        egui::Grid::new("standings_table")
            .striped(true)
            .min_col_width(36.0)
            .show(ui, |ui| {
                for header in ["#", "Takım", "O", "G", "B", "M", "A", "Y", "AV", "P", "Form"] {
                    ui.label(egui::RichText::new(header).weak().small());
                }
                ui.end_row();

                let total = standings.len();
                for (index, row) in standings.iter().enumerate() {
                    show_row(ui, row, index, total);
                    ui.end_row();
                }
            });

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("🟢 Şampiyonlar Ligi").weak().small());
            ui.label(egui::RichText::new("🔴 Küme Düşme").weak().small());
        });
    });

    action
}

fn show_row(ui: &mut egui::Ui, row: &TeamStanding, index: usize, total: usize) {
    // Top four qualify, bottom three go down.
    let position_color = if index < 4 {
        egui::Color32::from_rgb(0x4A, 0xDE, 0x80)
    } else if total >= 3 && index >= total - 3 {
        egui::Color32::from_rgb(0xF8, 0x71, 0x71)
    } else {
        egui::Color32::from_gray(150)
    };

    ui.label(egui::RichText::new(row.position.to_string()).color(position_color).strong());

    let colors = team::colors_for_name(&row.team);
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
        ui.painter().circle_filled(rect.center(), 6.0, colors.primary.to_color32());
        ui.label(&row.team);
    });

    ui.label(row.played.to_string());
    ui.label(
        egui::RichText::new(row.won.to_string()).color(egui::Color32::from_rgb(0x4A, 0xDE, 0x80)),
    );
    ui.label(
        egui::RichText::new(row.drawn.to_string())
            .color(egui::Color32::from_rgb(0xFA, 0xCC, 0x15)),
    );
    ui.label(
        egui::RichText::new(row.lost.to_string()).color(egui::Color32::from_rgb(0xF8, 0x71, 0x71)),
    );
    ui.label(row.goals_for.to_string());
    ui.label(row.goals_against.to_string());

    let diff_color = match row.goal_difference.cmp(&0) {
        std::cmp::Ordering::Greater => egui::Color32::from_rgb(0x4A, 0xDE, 0x80),
        std::cmp::Ordering::Less => egui::Color32::from_rgb(0xF8, 0x71, 0x71),
        std::cmp::Ordering::Equal => egui::Color32::from_gray(150),
    };
    let diff_sign = if row.goal_difference > 0 { "+" } else { "" };
    ui.label(
        egui::RichText::new(format!("{diff_sign}{}", row.goal_difference)).color(diff_color),
    );

    ui.label(egui::RichText::new(row.points.to_string()).strong());

    ui.horizontal(|ui| {
        for result in &row.form {
            let (letter, color) = match result {
                FormResult::Win => ("G", egui::Color32::from_rgb(0x22, 0xC5, 0x5E)),
                FormResult::Draw => ("B", egui::Color32::from_rgb(0xEA, 0xB3, 0x08)),
                FormResult::Loss => ("M", egui::Color32::from_rgb(0xEF, 0x44, 0x44)),
            };
            ui.label(egui::RichText::new(letter).color(color).small().strong());
        }
    });
}
