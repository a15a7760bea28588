// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! AI chat screen.
//!
//! Transcript plus input row; while a request is outstanding the send
//! control is disabled and a thinking indicator is shown.

use crate::models::chat::{ChatMessage, Role, QUICK_PROMPTS};

/// Result of chat screen interaction.
pub enum ChatAction {
    None,
    Back,
    Clear,
    Send(String),
}

/// Display the chat header. Separate from the body so it can live in
/// its own top panel.
pub fn show_header(ui: &mut egui::Ui) -> ChatAction {
    let mut action = ChatAction::None;
    ui.horizontal(|ui| {
        if ui.button("⬅").on_hover_text("Ana sayfa").clicked() {
            action = ChatAction::Back;
        }
        ui.label(egui::RichText::new("⚡ AI Asistan").strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🔄 Yeni Sohbet").clicked() {
                action = ChatAction::Clear;
            }
        });
    });
    action
}

/// Display the transcript (or the welcome screen when it is empty).
pub fn show_transcript(ui: &mut egui::Ui, messages: &[ChatMessage], busy: bool) -> ChatAction {
    let mut action = ChatAction::None;

    if messages.is_empty() && !busy {
        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            ui.heading("Futbol AI Asistan");
            ui.label(
                egui::RichText::new(
                    "Maç analizleri, oyuncu karşılaştırmaları, tahminler ve video scriptleri için bana sor!",
                )
                .color(egui::Color32::from_gray(150)),
            );
            ui.add_space(20.0);
            for prompt in QUICK_PROMPTS {
                if ui
                    .add(egui::Button::new(prompt).min_size(egui::vec2(360.0, 36.0)))
                    .clicked()
                {
                    action = ChatAction::Send(prompt.to_string());
                }
                ui.add_space(6.0);
            }
        });
        return action;
    }

    egui::ScrollArea::vertical()
        .stick_to_bottom(true)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for message in messages {
                show_message(ui, message);
            }
            if busy {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(egui::RichText::new("Düşünüyor...").weak());
                });
            }
        });

    action
}

fn show_message(ui: &mut egui::Ui, message: &ChatMessage) {
    let (layout, fill, prefix) = match message.role {
        Role::User => (
            egui::Layout::right_to_left(egui::Align::TOP),
            egui::Color32::from_rgb(0x63, 0x66, 0xF1),
            "🧍",
        ),
        Role::Assistant => (
            egui::Layout::left_to_right(egui::Align::TOP),
            egui::Color32::from_gray(45),
            "🤖",
        ),
    };

    ui.with_layout(layout, |ui| {
        ui.set_max_width(ui.available_width() * 0.8);
        egui::Frame::none()
            .fill(fill)
            .rounding(8.0)
            .inner_margin(egui::Margin::symmetric(10.0, 8.0))
            .show(ui, |ui| {
                ui.label(format!("{prefix} {}", message.content));
            });
    });
    ui.add_space(8.0);
}

/// Display the input row. `busy` disables sending while a request is
/// outstanding.
pub fn show_input(ui: &mut egui::Ui, input: &mut String, busy: bool) -> ChatAction {
    let mut action = ChatAction::None;

    ui.horizontal(|ui| {
        let editor = ui.add_enabled(
            !busy,
            egui::TextEdit::singleline(input)
                .hint_text("Futbol hakkında bir şey sor...")
                .desired_width(ui.available_width() - 80.0),
        );
        let submitted = editor.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let can_send = !busy && !input.trim().is_empty();
        if (ui.add_enabled(can_send, egui::Button::new("Gönder")).clicked() || submitted)
            && can_send
        {
            action = ChatAction::Send(input.trim().to_string());
            input.clear();
        }
    });
    ui.label(
        egui::RichText::new("Süper Lig, Şampiyonlar Ligi ve Avrupa Ligi verileri destekleniyor")
            .weak()
            .small(),
    );

    action
}
