// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module owns the screen routing and the per-screen state, wires
//! the UI panels together, and applies the actions they return to the
//! scene model and the backend clients.

use std::sync::mpsc::Receiver;

use ab_glyph::FontVec;
use image::RgbaImage;

use crate::models::chat::{context_window, ChatMessage, Role};
use crate::models::scene::{EditorState, ObjectVariant};
use crate::models::standings::{demo_standings, TeamStanding};
use crate::net;
use crate::render::{export, raster};
use crate::ui::{canvas, chat, home, properties, standings, team_picker, toolbar};

/// Currently displayed screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Home,
    Editor,
    Chat,
    Standings,
}

const ZOOM_MIN: f32 = 0.2;
const ZOOM_MAX: f32 = 1.0;
const ZOOM_STEP: f32 = 0.1;

/// Main application state.
pub struct FutbolApp {
    screen: Screen,

    // Editor
    editor: EditorState,
    zoom: f32,
    font: Option<FontVec>,
    raster: Option<RgbaImage>,
    canvas_texture: Option<egui::TextureHandle>,
    rendered_revision: Option<u64>,
    team_picker_open: bool,

    // Chat
    chat_messages: Vec<ChatMessage>,
    chat_input: String,
    chat_pending: Option<Receiver<String>>,

    // Standings
    standings_league: &'static str,
    standings_rows: Vec<TeamStanding>,
    standings_pending: Option<Receiver<Vec<TeamStanding>>>,
    standings_loaded: bool,
}

impl Default for FutbolApp {
    fn default() -> Self {
        Self::new()
    }
}

impl FutbolApp {
    /// Create a new application instance.
    pub fn new() -> Self {
        let font = match raster::load_font() {
            Ok(font) => Some(font),
            Err(e) => {
                log::error!("Failed to load font, text rendering disabled: {}", e);
                None
            }
        };

        Self {
            screen: Screen::Home,
            editor: EditorState::new(),
            zoom: 0.5,
            font,
            raster: None,
            canvas_texture: None,
            rendered_revision: None,
            team_picker_open: false,
            chat_messages: Vec::new(),
            chat_input: String::new(),
            chat_pending: None,
            standings_league: "super_lig",
            standings_rows: demo_standings(),
            standings_pending: None,
            standings_loaded: false,
        }
    }

    /// Re-rasterize the scene if the model changed since the last
    /// frame, and push the raster into the canvas texture.
    fn refresh_raster(&mut self, ctx: &egui::Context) {
        // Without a font the drawing surface is unavailable; skip
        // silently, this is a lifecycle guard rather than an error.
        let Some(font) = &self.font else { return };

        if self.rendered_revision == Some(self.editor.revision()) {
            return;
        }

        let raster = raster::render_scene(&self.editor, font);
        let size = [raster.width() as usize, raster.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, raster.as_raw());

        match &mut self.canvas_texture {
            Some(texture) => texture.set(color_image, egui::TextureOptions::LINEAR),
            None => {
                self.canvas_texture =
                    Some(ctx.load_texture("scene_raster", color_image, egui::TextureOptions::LINEAR));
            }
        }
        self.raster = Some(raster);
        self.rendered_revision = Some(self.editor.revision());
    }

    /// Export the current raster at the given target size via a native
    /// save dialog. Reads the raster only; the scene is untouched.
    fn export_raster(&self, size: &'static export::ExportSize) {
        let Some(raster) = &self.raster else { return };

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .set_file_name(export::export_file_name(size))
            .save_file()
        {
            match export::export_png(raster, size, &path) {
                Ok(_) => log::info!("Exported {} to {}", size.key, path.display()),
                Err(e) => log::error!("Failed to export {}: {}", size.key, e),
            }
        }
    }

    /// Queue a chat message: append the user turn and fire the backend
    /// request with the preceding turns as context.
    fn send_chat_message(&mut self, text: String) {
        if self.chat_pending.is_some() || text.trim().is_empty() {
            return;
        }
        let context = context_window(&self.chat_messages);
        self.chat_messages.push(ChatMessage {
            role: Role::User,
            content: text.clone(),
        });
        self.chat_pending = Some(net::chat::send_message(net::api_url(), text, context));
    }

    fn fetch_standings(&mut self) {
        self.standings_pending = Some(net::standings::fetch_standings(
            net::api_url(),
            self.standings_league.to_string(),
        ));
        self.standings_loaded = true;
    }

    fn poll_backends(&mut self, ctx: &egui::Context) {
        if let Some(receiver) = &self.chat_pending {
            if let Ok(reply) = receiver.try_recv() {
                self.chat_messages.push(ChatMessage {
                    role: Role::Assistant,
                    content: reply,
                });
                self.chat_pending = None;
            }
        }
        if let Some(receiver) = &self.standings_pending {
            if let Ok(rows) = receiver.try_recv() {
                self.standings_rows = rows;
                self.standings_pending = None;
            }
        }
        // Keep polling while requests are outstanding.
        if self.chat_pending.is_some() || self.standings_pending.is_some() {
            ctx.request_repaint();
        }
    }

    fn show_editor(&mut self, ctx: &egui::Context) {
        self.refresh_raster(ctx);

        // Top bar
        let top_action = egui::TopBottomPanel::top("editor_top")
            .show(ctx, |ui| toolbar::show_top_bar(ui, self.editor.preset(), self.zoom))
            .inner;
        match top_action {
            toolbar::TopBarAction::Back => self.screen = Screen::Home,
            toolbar::TopBarAction::SetPreset(preset) => self.editor.set_preset(preset),
            toolbar::TopBarAction::ZoomOut => {
                self.zoom = (self.zoom - ZOOM_STEP).max(ZOOM_MIN);
            }
            toolbar::TopBarAction::ZoomIn => {
                self.zoom = (self.zoom + ZOOM_STEP).min(ZOOM_MAX);
            }
            toolbar::TopBarAction::Export(size) => self.export_raster(size),
            toolbar::TopBarAction::None => {}
        }

        // Tool strip (left side)
        let tool_action = egui::SidePanel::left("tools")
            .resizable(false)
            .default_width(48.0)
            .show(ctx, |ui| {
                toolbar::show_tool_strip(ui, self.editor.selected_id().is_some())
            })
            .inner;
        match tool_action {
            toolbar::ToolAction::AddText => {
                self.editor.add_object(ObjectVariant::Text);
            }
            toolbar::ToolAction::AddRect => {
                self.editor.add_object(ObjectVariant::Rect);
            }
            toolbar::ToolAction::AddCircle => {
                self.editor.add_object(ObjectVariant::Circle);
            }
            toolbar::ToolAction::OpenTeamPicker => self.team_picker_open = true,
            toolbar::ToolAction::DeleteSelected => self.editor.delete_selected(),
            toolbar::ToolAction::None => {}
        }

        // Properties panel (right side)
        let properties_action = egui::SidePanel::right("properties")
            .default_width(260.0)
            .show(ctx, |ui| {
                properties::show(ui, self.editor.background(), self.editor.selected())
            })
            .inner;
        match properties_action {
            properties::PropertiesAction::SetBackground(color) => {
                self.editor.set_background(color);
            }
            properties::PropertiesAction::UpdateSelected(patch) => {
                self.editor.update_selected(patch);
            }
            properties::PropertiesAction::None => {}
        }

        // Keyboard: Delete removes the selection, Escape deselects.
        // Only when no text field is focused.
        if !ctx.wants_keyboard_input() {
            if ctx.input(|i| i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace))
            {
                self.editor.delete_selected();
            }
            if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
                self.editor.select(None);
            }
        }

        // Main canvas (center)
        let canvas_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                canvas::show(
                    ui,
                    &self.canvas_texture,
                    (self.editor.preset().width(), self.editor.preset().height()),
                    self.zoom,
                )
            })
            .inner;
        if let canvas::CanvasAction::SelectAt(x, y) = canvas_action {
            self.editor.select_at(x, y);
        }

        // Team picker modal
        if let Some(team) = team_picker::show(ctx, &mut self.team_picker_open) {
            self.editor.add_object(ObjectVariant::TeamBadge(team));
        }
    }

    fn show_chat(&mut self, ctx: &egui::Context) {
        let busy = self.chat_pending.is_some();

        let header_action = egui::TopBottomPanel::top("chat_header")
            .show(ctx, |ui| chat::show_header(ui))
            .inner;

        let input_action = egui::TopBottomPanel::bottom("chat_input")
            .show(ctx, |ui| chat::show_input(ui, &mut self.chat_input, busy))
            .inner;

        let transcript_action = egui::CentralPanel::default()
            .show(ctx, |ui| chat::show_transcript(ui, &self.chat_messages, busy))
            .inner;

        for action in [header_action, input_action, transcript_action] {
            match action {
                chat::ChatAction::Back => self.screen = Screen::Home,
                chat::ChatAction::Clear => {
                    self.chat_messages.clear();
                    self.chat_input.clear();
                }
                chat::ChatAction::Send(text) => self.send_chat_message(text),
                chat::ChatAction::None => {}
            }
        }
    }

    fn show_standings(&mut self, ctx: &egui::Context) {
        if !self.standings_loaded {
            self.fetch_standings();
        }
        let busy = self.standings_pending.is_some();

        let action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                standings::show(ui, self.standings_league, &self.standings_rows, busy)
            })
            .inner;
        match action {
            standings::StandingsAction::Back => self.screen = Screen::Home,
            standings::StandingsAction::SelectLeague(league_id) => {
                if self.standings_league != league_id {
                    self.standings_league = league_id;
                    self.fetch_standings();
                }
            }
            standings::StandingsAction::Refresh => self.fetch_standings(),
            standings::StandingsAction::None => {}
        }
    }
}

impl eframe::App for FutbolApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_backends(ctx);

        match self.screen {
            Screen::Home => {
                let action = egui::CentralPanel::default()
                    .show(ctx, |ui| home::show(ui))
                    .inner;
                match action {
                    home::HomeAction::OpenEditor => self.screen = Screen::Editor,
                    home::HomeAction::OpenChat => self.screen = Screen::Chat,
                    home::HomeAction::OpenStandings => self.screen = Screen::Standings,
                    home::HomeAction::None => {}
                }
            }
            Screen::Editor => self.show_editor(ctx),
            Screen::Chat => self.show_chat(ctx),
            Screen::Standings => self.show_standings(ctx),
        }
    }
}
