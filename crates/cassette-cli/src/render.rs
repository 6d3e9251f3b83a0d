//! Terminal rendering of pixel maps.
//!
//! Each cell becomes two characters so cassettes keep roughly their aspect
//! ratio. Transparent cells print as `··`. Rows are printed top first
//! (`y = height - 1`).

use cassette_backend::{
    BottomHoles, CassetteLayout, DecalSize, PixelMap, Rgba8, StripeOrientation,
};
use colored::Colorize;

const RAMP: &[u8] = b".:-=+*#%@";

/// Character standing in for an opaque color when color output is off.
fn ramp_char(color: Rgba8) -> char {
    let luminance =
        0.299 * color.r as f64 + 0.587 * color.g as f64 + 0.114 * color.b as f64;
    let index = (luminance / 256.0 * RAMP.len() as f64) as usize;
    RAMP[index.min(RAMP.len() - 1)] as char
}

fn render_cell(color: Rgba8, use_color: bool) -> String {
    if color.is_transparent() {
        return "··".to_string();
    }
    if use_color {
        "██".truecolor(color.r, color.g, color.b).to_string()
    } else {
        let c = ramp_char(color);
        format!("{c}{c}")
    }
}

/// Render a pixel map as terminal lines, top row first.
pub fn render_pixel_map(map: &PixelMap, use_color: bool) -> Vec<String> {
    (0..map.height() as i32)
        .rev()
        .map(|y| {
            (0..map.width() as i32)
                .filter_map(|x| map.get(x, y))
                .map(|color| render_cell(color, use_color))
                .collect()
        })
        .collect()
}

/// Place rendered blocks side by side, `columns` per row of blocks.
pub fn arrange(blocks: &[Vec<String>], columns: usize, gap: &str) -> Vec<String> {
    let mut out = Vec::new();
    for row in blocks.chunks(columns.max(1)) {
        let height = row.iter().map(Vec::len).max().unwrap_or(0);
        for line in 0..height {
            let parts: Vec<&str> = row
                .iter()
                .map(|block| block.get(line).map(String::as_str).unwrap_or(""))
                .collect();
            out.push(parts.join(gap));
        }
        out.push(String::new());
    }
    out
}

/// One-line description of a layout's random choices.
pub fn summarize(layout: &CassetteLayout) -> String {
    let decal = match layout.decal_size {
        DecalSize::Small => "small decal",
        DecalSize::Large => "large decal",
    };

    let holes = match layout.bottom_holes {
        BottomHoles::None => "no holes".to_string(),
        holes => format!("{} holes", holes.count()),
    };

    let stripes = match &layout.stripes {
        Some(plan) => {
            let direction = match plan.orientation {
                StripeOrientation::Horizontal => "horizontal",
                StripeOrientation::Vertical => "vertical",
            };
            format!("{} {} stripe lines", plan.lines.len(), direction)
        }
        None => "no stripes".to_string(),
    };

    let overlays = match &layout.overlays {
        Some(plan) => format!("{} overlay squares", plan.positions.len()),
        None => "no overlays".to_string(),
    };

    format!("{decal}, {holes}, {stripes}, {overlays}")
}
