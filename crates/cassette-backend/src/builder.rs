//! Texture builder: resolves every cell of a layout into a pixel map.

use crate::descriptor::{CassetteDescriptor, CassetteLayout, GridPos};
use crate::error::CassetteError;
use crate::pixel_map::{PixelMap, PixelMapBuilder};
use crate::zones::color_at;

/// Resolve every cell of the grid, column by column.
pub fn build_pixel_map(layout: &CassetteLayout) -> Result<PixelMap, CassetteError> {
    let width = layout.width();
    let height = layout.height();
    let mut builder = PixelMapBuilder::new(width, height);

    for x in 0..width as i32 {
        for y in 0..height as i32 {
            builder.insert(GridPos::new(x, y), color_at(x, y, layout)?)?;
        }
    }

    builder.finish()
}

/// Resolve a layout into a finished descriptor.
pub fn build_descriptor(layout: CassetteLayout) -> Result<CassetteDescriptor, CassetteError> {
    let pixel_map = build_pixel_map(&layout)?;
    Ok(CassetteDescriptor::new(layout, pixel_map))
}
