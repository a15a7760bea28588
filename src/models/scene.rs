// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Scene model for the graphic editor.
//!
//! This module owns the ordered list of drawable objects, the current
//! selection, the canvas preset and the background color, and exposes
//! the mutation operations the editor panels dispatch into.

use crate::models::team::Team;
use crate::util::color::Color;

/// Canvas dimension presets for the live canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasPreset {
    /// 1:1, 1080x1080
    Square,
    /// 16:9, 1920x1080
    Widescreen,
}

impl CanvasPreset {
    pub fn width(self) -> u32 {
        match self {
            CanvasPreset::Square => 1080,
            CanvasPreset::Widescreen => 1920,
        }
    }

    pub fn height(self) -> u32 {
        1080
    }

    pub fn label(self) -> &'static str {
        match self {
            CanvasPreset::Square => "1:1",
            CanvasPreset::Widescreen => "16:9",
        }
    }
}

/// Unique identity of a scene object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(u64);

/// Text weight for text objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

/// Variant-specific data of a scene object.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectKind {
    Text {
        content: String,
        font_size: f32,
        font_weight: FontWeight,
    },
    Rect,
    Circle,
    /// Colored shape seeded from a team's brand colors.
    TeamBadge { team_id: &'static str },
}

impl ObjectKind {
    /// Human-readable label for the properties panel header.
    pub fn label(&self) -> &'static str {
        match self {
            ObjectKind::Text { .. } => "Metin",
            ObjectKind::Rect => "Dikdörtgen",
            ObjectKind::Circle => "Daire",
            ObjectKind::TeamBadge { .. } => "Takım Logosu",
        }
    }
}

/// A drawable object. Position is the top-left corner of the
/// axis-aligned bounding box, in canvas pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    id: ObjectId,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Rotation about the bounding-box center, degrees in [0, 360).
    pub rotation: f32,
    pub fill: Color,
    pub kind: ObjectKind,
}

impl SceneObject {
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Center of the bounding box.
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Axis-aligned bounding-box containment test (rotation ignored).
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Variant to insert via `EditorState::add_object`.
#[derive(Debug, Clone, Copy)]
pub enum ObjectVariant {
    Text,
    Rect,
    Circle,
    TeamBadge(&'static Team),
}

/// Partial update applied to the selected object. `None` fields are
/// left untouched; identity and variant can never change through a
/// patch. Text fields are ignored for non-text objects.
#[derive(Debug, Clone, Default)]
pub struct ObjectPatch {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub rotation: Option<f32>,
    pub fill: Option<Color>,
    pub content: Option<String>,
    pub font_size: Option<f32>,
}

/// Authoritative editor state: canvas preset, background color, the
/// ordered object list (index order is paint and hit-test order) and
/// the current selection.
#[derive(Debug, Clone)]
pub struct EditorState {
    preset: CanvasPreset,
    background: Color,
    objects: Vec<SceneObject>,
    selected: Option<ObjectId>,
    next_id: u64,
    revision: u64,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            preset: CanvasPreset::Widescreen,
            background: Color([0x0F, 0x17, 0x2A]),
            objects: Vec::new(),
            selected: None,
            next_id: 1,
            revision: 0,
        }
    }

    pub fn preset(&self) -> CanvasPreset {
        self.preset
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn selected_id(&self) -> Option<ObjectId> {
        self.selected
    }

    pub fn selected(&self) -> Option<&SceneObject> {
        let id = self.selected?;
        self.objects.iter().find(|o| o.id == id)
    }

    /// Bumped on every mutation; the view re-rasterizes when it changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Switch canvas dimensions. Existing objects keep their absolute
    /// pixel coordinates and may end up clipped by a smaller canvas.
    pub fn set_preset(&mut self, preset: CanvasPreset) {
        if self.preset != preset {
            self.preset = preset;
            self.revision += 1;
        }
    }

    pub fn set_background(&mut self, background: Color) {
        if self.background != background {
            self.background = background;
            self.revision += 1;
        }
    }

    /// Create a new object centered on the canvas, append it on top of
    /// the paint order and select it.
    pub fn add_object(&mut self, variant: ObjectVariant) -> ObjectId {
        let (width, height, fill, kind) = match variant {
            ObjectVariant::Text => (
                400.0,
                60.0,
                Color::WHITE,
                ObjectKind::Text {
                    content: "Metin Ekle".to_string(),
                    font_size: 48.0,
                    font_weight: FontWeight::Bold,
                },
            ),
            ObjectVariant::Rect => (200.0, 200.0, Color::INDIGO, ObjectKind::Rect),
            ObjectVariant::Circle => (
                200.0,
                200.0,
                Color([0x22, 0xC5, 0x5E]),
                ObjectKind::Circle,
            ),
            ObjectVariant::TeamBadge(team) => (
                150.0,
                150.0,
                team.colors.primary,
                ObjectKind::TeamBadge { team_id: team.id },
            ),
        };

        let id = ObjectId(self.next_id);
        self.next_id += 1;

        let object = SceneObject {
            id,
            x: self.preset.width() as f32 / 2.0 - width / 2.0,
            y: self.preset.height() as f32 / 2.0 - height / 2.0,
            width,
            height,
            rotation: 0.0,
            fill,
            kind,
        };

        log::info!("Added {} object, total: {}", object.kind.label(), self.objects.len() + 1);
        self.objects.push(object);
        self.selected = Some(id);
        self.revision += 1;
        id
    }

    /// Merge a partial update into the selected object. No-op without
    /// a selection. Rotation values are normalized into [0, 360).
    pub fn update_selected(&mut self, patch: ObjectPatch) {
        let Some(id) = self.selected else { return };
        let Some(object) = self.objects.iter_mut().find(|o| o.id == id) else {
            return;
        };

        if let Some(x) = patch.x {
            object.x = x;
        }
        if let Some(y) = patch.y {
            object.y = y;
        }
        if let Some(width) = patch.width {
            object.width = width;
        }
        if let Some(height) = patch.height {
            object.height = height;
        }
        if let Some(rotation) = patch.rotation {
            object.rotation = rotation.rem_euclid(360.0);
        }
        if let Some(fill) = patch.fill {
            object.fill = fill;
        }
        if let ObjectKind::Text {
            content, font_size, ..
        } = &mut object.kind
        {
            if let Some(new_content) = patch.content {
                *content = new_content;
            }
            if let Some(new_size) = patch.font_size {
                *font_size = new_size;
            }
        }
        self.revision += 1;
    }

    /// Remove the selected object and clear the selection. No-op
    /// without a selection.
    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected else { return };
        self.objects.retain(|o| o.id != id);
        self.selected = None;
        self.revision += 1;
        log::info!("Deleted object, total: {}", self.objects.len());
    }

    /// Hit-test a canvas point against the object bounding boxes, from
    /// topmost (last painted) to bottommost, and select the first
    /// match. Clears the selection when nothing is hit.
    pub fn select_at(&mut self, x: f32, y: f32) {
        let hit = self
            .objects
            .iter()
            .rev()
            .find(|o| o.contains(x, y))
            .map(|o| o.id);
        if self.selected != hit {
            self.selected = hit;
            self.revision += 1;
        }
    }

    pub fn select(&mut self, id: Option<ObjectId>) {
        if self.selected != id {
            self.selected = id;
            self.revision += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::team;

    #[test]
    fn test_add_objects_have_distinct_ids_and_defaults() {
        let mut state = EditorState::new();
        let a = state.add_object(ObjectVariant::Rect);
        let b = state.add_object(ObjectVariant::Circle);
        let c = state.add_object(ObjectVariant::Text);

        assert_eq!(state.objects().len(), 3);
        assert!(a != b && b != c && a != c);

        let rect = &state.objects()[0];
        assert_eq!(rect.width, 200.0);
        assert_eq!(rect.height, 200.0);
        assert_eq!(rect.fill, Color::from_hex("#6366F1").unwrap());
        assert_eq!(rect.rotation, 0.0);

        let text = &state.objects()[2];
        assert_eq!(text.width, 400.0);
        assert_eq!(text.fill, Color::WHITE);
        match &text.kind {
            ObjectKind::Text {
                content, font_size, ..
            } => {
                assert_eq!(content, "Metin Ekle");
                assert_eq!(*font_size, 48.0);
            }
            other => panic!("expected text object, got {:?}", other),
        }
    }

    #[test]
    fn test_new_object_is_centered_and_selected() {
        let mut state = EditorState::new();
        let id = state.add_object(ObjectVariant::Rect);
        assert_eq!(state.selected_id(), Some(id));

        // 1920x1080 canvas, 200x200 rect
        let rect = state.selected().unwrap();
        assert_eq!(rect.x, 860.0);
        assert_eq!(rect.y, 440.0);
    }

    #[test]
    fn test_team_badge_seeds_primary_color() {
        let mut state = EditorState::new();
        let team = team::team_by_id("galatasaray").unwrap();
        state.add_object(ObjectVariant::TeamBadge(team));

        let badge = state.selected().unwrap();
        assert_eq!(badge.width, 150.0);
        assert_eq!(badge.fill, team.colors.primary);
        assert_eq!(
            badge.kind,
            ObjectKind::TeamBadge {
                team_id: "galatasaray"
            }
        );
    }

    #[test]
    fn test_select_at_picks_topmost_of_overlapping() {
        let mut state = EditorState::new();
        let bottom = state.add_object(ObjectVariant::Rect);
        let top = state.add_object(ObjectVariant::Rect);

        // Both rects are centered at the same spot.
        state.select_at(960.0, 540.0);
        assert_eq!(state.selected_id(), Some(top));
        assert!(state.selected_id() != Some(bottom));
    }

    #[test]
    fn test_select_at_miss_clears_selection() {
        let mut state = EditorState::new();
        state.add_object(ObjectVariant::Rect);
        state.select_at(5.0, 5.0);
        assert_eq!(state.selected_id(), None);
    }

    #[test]
    fn test_delete_without_selection_is_noop() {
        let mut state = EditorState::new();
        state.add_object(ObjectVariant::Rect);
        state.select(None);

        state.delete_selected();
        assert_eq!(state.objects().len(), 1);
        assert_eq!(state.selected_id(), None);
    }

    #[test]
    fn test_delete_clears_selection_and_later_updates_are_noops() {
        let mut state = EditorState::new();
        state.add_object(ObjectVariant::Rect);
        state.delete_selected();

        assert!(state.objects().is_empty());
        assert_eq!(state.selected_id(), None);

        state.update_selected(ObjectPatch {
            x: Some(10.0),
            ..Default::default()
        });
        assert!(state.objects().is_empty());
    }

    #[test]
    fn test_delete_keeps_order_of_remaining_objects() {
        let mut state = EditorState::new();
        let a = state.add_object(ObjectVariant::Rect);
        let b = state.add_object(ObjectVariant::Circle);
        let c = state.add_object(ObjectVariant::Text);

        state.select(Some(b));
        state.delete_selected();

        let ids: Vec<ObjectId> = state.objects().iter().map(|o| o.id()).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn test_update_rotation_is_normalized() {
        let mut state = EditorState::new();
        state.add_object(ObjectVariant::Rect);

        state.update_selected(ObjectPatch {
            rotation: Some(400.0),
            ..Default::default()
        });
        assert_eq!(state.selected().unwrap().rotation, 40.0);

        state.update_selected(ObjectPatch {
            rotation: Some(-90.0),
            ..Default::default()
        });
        assert_eq!(state.selected().unwrap().rotation, 270.0);
    }

    #[test]
    fn test_text_fields_ignored_for_shapes() {
        let mut state = EditorState::new();
        state.add_object(ObjectVariant::Circle);

        state.update_selected(ObjectPatch {
            content: Some("smuggled".to_string()),
            font_size: Some(12.0),
            ..Default::default()
        });
        assert_eq!(state.selected().unwrap().kind, ObjectKind::Circle);
    }

    #[test]
    fn test_set_preset_keeps_objects() {
        let mut state = EditorState::new();
        state.add_object(ObjectVariant::Rect);
        let x_before = state.objects()[0].x;

        state.set_preset(CanvasPreset::Square);
        assert_eq!(state.preset().width(), 1080);
        assert_eq!(state.objects().len(), 1);
        // Coordinates are absolute canvas pixels and are not rescaled.
        assert_eq!(state.objects()[0].x, x_before);
    }
}
