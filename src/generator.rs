//! Placeholder sheet rendering and saving.

use std::path::Path;

use image::{ImageFormat, RgbaImage};
use log::{debug, info};

use crate::action::frames;
use crate::color::Color;
use crate::error::{Result, SheetError};
use crate::layout::Variant;
use crate::renderer::Canvas;
use crate::renderer::text::Font;

/// Head fill, shared by every fighter.
pub const HEAD_COLOR: Color = Color::PEACHPUFF;
/// Debug label color.
pub const LABEL_COLOR: Color = Color::WHITE;

/// Text stamped on a frame: name, action and 1-based frame number.
pub fn frame_label(name: &str, action: &str, number: u32) -> String {
    format!("{name}\n{action}\n{number}")
}

/// Draw the full sheet for one fighter in memory.
///
/// Each frame gets a torso (the action's override color or `color`), a
/// peachpuff head and a three-line white label. The background stays
/// transparent.
pub fn render_sheet(name: &str, color: Color, variant: Variant) -> Result<RgbaImage> {
    if name.trim().is_empty() {
        return Err(SheetError::EmptyName);
    }

    let layout = variant.layout()?;
    let geometry = variant.geometry();
    let (width, height) = layout.sheet_size();
    debug!(
        "rendering {variant} sheet for '{name}': {width}x{height}, {} frames in {}x{}",
        layout.total_frames,
        layout.columns(),
        layout.rows()
    );

    let font = Font::builtin();
    let mut canvas = Canvas::new(width, height);

    for frame in frames(variant.actions()) {
        let (ox, oy) = layout.frame_origin(frame.index);
        let (ox, oy) = (ox as i32, oy as i32);

        canvas.fill_rect(&geometry.torso.offset(ox, oy), frame.action.body_color(color));
        canvas.fill_ellipse(&geometry.head.offset(ox, oy), HEAD_COLOR);

        let (lx, ly) = geometry.label_origin;
        canvas.draw_text(
            &font,
            &frame_label(name, frame.action.name, frame.number),
            (ox + lx, oy + ly),
            geometry.label_scale,
            LABEL_COLOR,
        );
    }

    Ok(canvas.into_image())
}

/// Render a sheet and write it to `destination` as PNG.
///
/// Missing parent directories are created; an existing file is overwritten.
pub fn generate(name: &str, color: Color, destination: &Path, variant: Variant) -> Result<()> {
    let sheet = render_sheet(name, color, variant)?;

    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| SheetError::io(parent, e))?;
    }

    sheet.save_with_format(destination, ImageFormat::Png)?;
    info!("Created {}", destination.display());
    Ok(())
}
