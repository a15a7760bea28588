// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Landing screen.

/// Result of home screen interaction.
pub enum HomeAction {
    None,
    OpenEditor,
    OpenChat,
    OpenStandings,
}

/// Display the landing screen with navigation cards.
pub fn show(ui: &mut egui::Ui) -> HomeAction {
    let mut action = HomeAction::None;

    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.heading(
            egui::RichText::new("⚽ Futbol AI Asistan")
                .size(32.0)
                .color(egui::Color32::from_gray(220)),
        );
        ui.label(
            egui::RichText::new("YouTube içerik üreticileri için analiz, grafik ve canlı veriler")
                .size(14.0)
                .color(egui::Color32::from_gray(150)),
        );
        ui.add_space(40.0);

        let card = |text: &str| {
            egui::Button::new(egui::RichText::new(text).size(16.0)).min_size(egui::vec2(280.0, 48.0))
        };

        if ui.add(card("🎨 Grafik Editörü")).clicked() {
            action = HomeAction::OpenEditor;
        }
        ui.add_space(8.0);
        if ui.add(card("⚡ AI Asistan")).clicked() {
            action = HomeAction::OpenChat;
        }
        ui.add_space(8.0);
        if ui.add(card("🏆 Puan Durumu")).clicked() {
            action = HomeAction::OpenStandings;
        }

        ui.add_space(40.0);
        ui.label(
            egui::RichText::new("Süper Lig, Şampiyonlar Ligi ve Avrupa Ligi verileri destekleniyor")
                .weak()
                .color(egui::Color32::from_gray(120)),
        );
    });

    action
}
