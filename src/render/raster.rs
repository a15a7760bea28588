// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Scene rasterizer.
//!
//! Produces the canvas raster as a pure function of the editor state:
//! background fill, then every object in list order (bottom to top).
//! Each object is drawn unrotated into a local sprite and blitted onto
//! the canvas rotated about its bounding-box center, so objects never
//! inherit each other's rotation. The selected object gets a dashed
//! outline drawn in the same rotated frame as its shape.

use ab_glyph::{FontVec, PxScale};
use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_rect_mut, draw_line_segment_mut, draw_text_mut, text_size,
};
use imageproc::rect::Rect;

use crate::models::scene::{EditorState, FontWeight, ObjectKind, SceneObject};
use crate::util::color::Color;

/// Placeholder drawn for text objects with empty content.
const TEXT_PLACEHOLDER: &str = "Metin";
const DEFAULT_FONT_SIZE: f32 = 48.0;

/// Selection indicator: dashed stroke expanded 5 px outward of the box.
const SELECTION_MARGIN: f32 = 5.0;
const SELECTION_DASH_ON: f32 = 10.0;
const SELECTION_DASH_OFF: f32 = 5.0;

/// Extra sprite border so the selection outline survives the blit.
const SPRITE_MARGIN: u32 = 8;

/// Load the font used for text objects from egui's bundled font set,
/// so screen text and exported text come from the same face.
pub fn load_font() -> Result<FontVec> {
    let definitions = egui::FontDefinitions::default();
    let data = definitions
        .font_data
        .get("Ubuntu-Light")
        .or_else(|| definitions.font_data.values().next())
        .context("no bundled fonts available")?;
    let font = FontVec::try_from_vec(data.font.to_vec()).context("invalid bundled font data")?;
    Ok(font)
}

/// Render the full scene to an RGBA raster of the canvas preset size.
pub fn render_scene(state: &EditorState, font: &FontVec) -> RgbaImage {
    let width = state.preset().width();
    let height = state.preset().height();
    let mut raster = RgbaImage::from_pixel(width, height, state.background().to_rgba());

    for object in state.objects() {
        if object.width < 1.0 || object.height < 1.0 {
            continue;
        }
        let selected = state.selected_id() == Some(object.id());
        let sprite = render_sprite(object, selected, font);

        let (cx, cy) = object.center();
        let origin_x = cx - sprite.width() as f32 / 2.0;
        let origin_y = cy - sprite.height() as f32 / 2.0;
        blit_rotated(&mut raster, &sprite, origin_x, origin_y, object.rotation);
    }

    raster
}

/// Draw one object, unrotated, into a transparent sprite. The bounding
/// box sits centered in the sprite so the sprite center coincides with
/// the rotation pivot.
fn render_sprite(object: &SceneObject, selected: bool, font: &FontVec) -> RgbaImage {
    let box_w = object.width.round().max(1.0) as u32;
    let box_h = object.height.round().max(1.0) as u32;

    let mut sprite_w = box_w + 2 * SPRITE_MARGIN;
    let mut sprite_h = box_h + 2 * SPRITE_MARGIN;

    // Text is centered on the box but not clipped by it, so the sprite
    // grows to hold the measured string when it overflows the box.
    let mut text_layout = None;
    if let ObjectKind::Text {
        content,
        font_size,
        font_weight,
    } = &object.kind
    {
        let size = if *font_size > 0.0 {
            *font_size
        } else {
            DEFAULT_FONT_SIZE
        };
        let text = if content.is_empty() {
            TEXT_PLACEHOLDER
        } else {
            content.as_str()
        };
        let scale = PxScale::from(size);
        let (text_w, text_h) = text_size(scale, font, text);
        let (text_w, text_h) = (text_w as u32, text_h as u32);
        sprite_w = sprite_w.max(text_w + 2 * SPRITE_MARGIN);
        sprite_h = sprite_h.max(text_h + 2 * SPRITE_MARGIN);
        text_layout = Some((text.to_string(), scale, text_w, text_h, *font_weight));
    }

    let mut sprite = RgbaImage::new(sprite_w, sprite_h);
    let box_x = ((sprite_w - box_w) / 2) as i32;
    let box_y = ((sprite_h - box_h) / 2) as i32;
    let fill = object.fill.to_rgba();

    match &object.kind {
        ObjectKind::Rect | ObjectKind::TeamBadge { .. } => {
            draw_filled_rect_mut(
                &mut sprite,
                Rect::at(box_x, box_y).of_size(box_w, box_h),
                fill,
            );
        }
        ObjectKind::Circle => {
            // Radius comes from the width even when height differs.
            draw_filled_circle_mut(
                &mut sprite,
                (sprite_w as i32 / 2, sprite_h as i32 / 2),
                (box_w / 2) as i32,
                fill,
            );
        }
        ObjectKind::Text { .. } => {
            if let Some((text, scale, text_w, text_h, weight)) = text_layout {
                let x = (sprite_w as i32 - text_w as i32) / 2;
                let y = (sprite_h as i32 - text_h as i32) / 2;
                draw_text_mut(&mut sprite, fill, x, y, scale, font, &text);
                if weight == FontWeight::Bold {
                    // Faux bold: second pass shifted right.
                    let shift = (scale.y / 24.0).round().max(1.0) as i32;
                    draw_text_mut(&mut sprite, fill, x + shift, y, scale, font, &text);
                }
            }
        }
    }

    if selected {
        draw_dashed_rect(
            &mut sprite,
            box_x as f32 - SELECTION_MARGIN,
            box_y as f32 - SELECTION_MARGIN,
            box_w as f32 + 2.0 * SELECTION_MARGIN,
            box_h as f32 + 2.0 * SELECTION_MARGIN,
            Color::INDIGO.to_rgba(),
        );
    }

    sprite
}

/// Dashed rectangle outline, 3 px stroke, walked edge by edge.
fn draw_dashed_rect(img: &mut RgbaImage, x: f32, y: f32, w: f32, h: f32, color: Rgba<u8>) {
    let corners = [
        ((x, y), (x + w, y)),
        ((x + w, y), (x + w, y + h)),
        ((x + w, y + h), (x, y + h)),
        ((x, y + h), (x, y)),
    ];
    for (start, end) in corners {
        draw_dashed_segment(img, start, end, color);
    }
}

fn draw_dashed_segment(
    img: &mut RgbaImage,
    (x0, y0): (f32, f32),
    (x1, y1): (f32, f32),
    color: Rgba<u8>,
) {
    let len = ((x1 - x0).hypot(y1 - y0)).max(1.0);
    let (ux, uy) = ((x1 - x0) / len, (y1 - y0) / len);
    // Perpendicular offsets give the 3 px stroke width.
    let (px, py) = (-uy, ux);

    let mut pos = 0.0;
    while pos < len {
        let dash_end = (pos + SELECTION_DASH_ON).min(len);
        for offset in [-1.0, 0.0, 1.0] {
            draw_line_segment_mut(
                img,
                (x0 + ux * pos + px * offset, y0 + uy * pos + py * offset),
                (x0 + ux * dash_end + px * offset, y0 + uy * dash_end + py * offset),
                color,
            );
        }
        pos = dash_end + SELECTION_DASH_OFF;
    }
}

/// Blit a sprite onto the canvas, rotated about the sprite center by
/// `angle` degrees, with src-over blending. Inverse mapping with
/// nearest sampling; axis-aligned fast path for zero rotation.
fn blit_rotated(dst: &mut RgbaImage, sprite: &RgbaImage, origin_x: f32, origin_y: f32, angle: f32) {
    let (dst_w, dst_h) = (dst.width() as i32, dst.height() as i32);
    let (src_w, src_h) = (sprite.width() as i32, sprite.height() as i32);

    if angle == 0.0 {
        let ox = origin_x.round() as i32;
        let oy = origin_y.round() as i32;
        for sy in 0..src_h {
            let dy = oy + sy;
            if dy < 0 || dy >= dst_h {
                continue;
            }
            for sx in 0..src_w {
                let dx = ox + sx;
                if dx < 0 || dx >= dst_w {
                    continue;
                }
                let src = *sprite.get_pixel(sx as u32, sy as u32);
                blend_pixel(dst, dx as u32, dy as u32, src);
            }
        }
        return;
    }

    let radians = angle.to_radians();
    let (sin, cos) = radians.sin_cos();
    let pivot_x = origin_x + src_w as f32 / 2.0;
    let pivot_y = origin_y + src_h as f32 / 2.0;

    // Destination bounds: rotated sprite corners, clipped to the canvas.
    let mut min_x = f32::MAX;
    let mut min_y = f32::MAX;
    let mut max_x = f32::MIN;
    let mut max_y = f32::MIN;
    for (cx, cy) in [
        (origin_x, origin_y),
        (origin_x + src_w as f32, origin_y),
        (origin_x, origin_y + src_h as f32),
        (origin_x + src_w as f32, origin_y + src_h as f32),
    ] {
        let dx = cx - pivot_x;
        let dy = cy - pivot_y;
        let rx = pivot_x + dx * cos - dy * sin;
        let ry = pivot_y + dx * sin + dy * cos;
        min_x = min_x.min(rx);
        min_y = min_y.min(ry);
        max_x = max_x.max(rx);
        max_y = max_y.max(ry);
    }

    let x_start = (min_x.floor() as i32).max(0);
    let y_start = (min_y.floor() as i32).max(0);
    let x_end = (max_x.ceil() as i32).min(dst_w);
    let y_end = (max_y.ceil() as i32).min(dst_h);

    for dy in y_start..y_end {
        for dx in x_start..x_end {
            // Map the destination pixel center back into sprite space.
            let vx = dx as f32 + 0.5 - pivot_x;
            let vy = dy as f32 + 0.5 - pivot_y;
            let sx = pivot_x + vx * cos + vy * sin - origin_x;
            let sy = pivot_y - vx * sin + vy * cos - origin_y;
            if sx < 0.0 || sy < 0.0 {
                continue;
            }
            let (sx, sy) = (sx as i32, sy as i32);
            if sx >= src_w || sy >= src_h {
                continue;
            }
            let src = *sprite.get_pixel(sx as u32, sy as u32);
            blend_pixel(dst, dx as u32, dy as u32, src);
        }
    }
}

fn blend_pixel(dst: &mut RgbaImage, x: u32, y: u32, src: Rgba<u8>) {
    let alpha = src.0[3] as u32;
    if alpha == 0 {
        return;
    }
    let pixel = dst.get_pixel_mut(x, y);
    if alpha == 255 {
        *pixel = Rgba([src.0[0], src.0[1], src.0[2], 0xFF]);
        return;
    }
    for channel in 0..3 {
        let blended = (src.0[channel] as u32 * alpha + pixel.0[channel] as u32 * (255 - alpha)) / 255;
        pixel.0[channel] = blended as u8;
    }
    pixel.0[3] = 0xFF;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::scene::{ObjectPatch, ObjectVariant};

    fn test_font() -> FontVec {
        load_font().expect("bundled font")
    }

    #[test]
    fn test_empty_scene_is_background_fill() {
        let state = EditorState::new();
        let raster = render_scene(&state, &test_font());

        assert_eq!(raster.width(), 1920);
        assert_eq!(raster.height(), 1080);
        let bg = state.background().to_rgba();
        assert_eq!(*raster.get_pixel(0, 0), bg);
        assert_eq!(*raster.get_pixel(960, 540), bg);
        assert_eq!(*raster.get_pixel(1919, 1079), bg);
    }

    #[test]
    fn test_rect_fills_its_bounding_box() {
        let mut state = EditorState::new();
        state.add_object(ObjectVariant::Rect);
        state.select(None);

        let raster = render_scene(&state, &test_font());
        let indigo = Color::INDIGO.to_rgba();
        // 200x200 rect centered on 1920x1080.
        assert_eq!(*raster.get_pixel(960, 540), indigo);
        assert_eq!(*raster.get_pixel(870, 450), indigo);
        assert_eq!(*raster.get_pixel(850, 540), state.background().to_rgba());
    }

    #[test]
    fn test_later_objects_paint_on_top() {
        let mut state = EditorState::new();
        state.add_object(ObjectVariant::Rect);
        state.add_object(ObjectVariant::Circle);
        state.select(None);

        let raster = render_scene(&state, &test_font());
        let green = Color::from_hex("#22C55E").unwrap().to_rgba();
        assert_eq!(*raster.get_pixel(960, 540), green);
    }

    #[test]
    fn test_circle_radius_uses_width() {
        let mut state = EditorState::new();
        state.add_object(ObjectVariant::Circle);
        state.update_selected(ObjectPatch {
            height: Some(400.0),
            ..Default::default()
        });
        // Box grew downward from (860, 440): center is now (960, 640).
        let (cx, cy) = state.selected().unwrap().center();
        let (cx, cy) = (cx as u32, cy as u32);
        state.select(None);

        let raster = render_scene(&state, &test_font());
        let green = Color::from_hex("#22C55E").unwrap().to_rgba();
        let bg = state.background().to_rgba();
        // Inside the 100 px radius.
        assert_eq!(*raster.get_pixel(cx + 90, cy), green);
        // Within the tall box but beyond the width-derived radius.
        assert_eq!(*raster.get_pixel(cx, cy + 150), bg);
    }

    #[test]
    fn test_rotation_pivots_on_box_center() {
        let mut state = EditorState::new();
        state.add_object(ObjectVariant::Rect);
        state.update_selected(ObjectPatch {
            width: Some(300.0),
            height: Some(100.0),
            rotation: Some(90.0),
            ..Default::default()
        });
        // Resizing keeps the top-left corner, so read the center back.
        let (cx, cy) = state.selected().unwrap().center();
        let (cx, cy) = (cx as u32, cy as u32);
        state.select(None);

        let raster = render_scene(&state, &test_font());
        let indigo = Color::INDIGO.to_rgba();
        let bg = state.background().to_rgba();
        // A 300x100 box rotated 90 degrees occupies 100x300 around the
        // same center.
        assert_eq!(*raster.get_pixel(cx, cy), indigo);
        assert_eq!(*raster.get_pixel(cx, cy + 120), indigo);
        assert_eq!(*raster.get_pixel(cx + 120, cy), bg);
    }

    #[test]
    fn test_selection_draws_dashed_outline() {
        let mut state = EditorState::new();
        state.add_object(ObjectVariant::Circle);

        let raster = render_scene(&state, &test_font());
        let indigo = Color::INDIGO.to_rgba();
        // Box from (860, 440); first dash starts at the top-left corner
        // of the expanded outline.
        assert_eq!(*raster.get_pixel(855, 435), indigo);

        // Without selection the same pixel is background.
        state.select(None);
        let raster = render_scene(&state, &test_font());
        assert_eq!(*raster.get_pixel(855, 435), state.background().to_rgba());
    }

    #[test]
    fn test_square_preset_dimensions() {
        let mut state = EditorState::new();
        state.set_preset(crate::models::scene::CanvasPreset::Square);
        let raster = render_scene(&state, &test_font());
        assert_eq!((raster.width(), raster.height()), (1080, 1080));
    }

    #[test]
    fn test_text_object_marks_pixels() {
        let mut state = EditorState::new();
        state.add_object(ObjectVariant::Text);
        state.select(None);

        let raster = render_scene(&state, &test_font());
        let bg = state.background().to_rgba();
        // Some pixel near the box center must differ from the background.
        let touched = (900..1020).any(|x| (505..575).any(|y| *raster.get_pixel(x, y) != bg));
        assert!(touched, "text rendering left no visible pixels");
    }
}
