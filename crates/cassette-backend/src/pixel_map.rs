//! Dense pixel map storage.
//!
//! A [`PixelMap`] can only be obtained from a [`PixelMapBuilder`] that saw
//! every cell exactly once, so a finished map is a total function from grid
//! coordinate to color.

use crate::color::Rgba8;
use crate::descriptor::GridPos;
use crate::error::CassetteError;

/// Accumulates cell colors and checks coverage.
#[derive(Debug, Clone)]
pub struct PixelMapBuilder {
    width: u32,
    height: u32,
    cells: Vec<Option<Rgba8>>,
}

impl PixelMapBuilder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![None; (width * height) as usize],
        }
    }

    fn index(&self, pos: GridPos) -> Option<usize> {
        let in_grid = pos.x >= 0
            && pos.y >= 0
            && (pos.x as u32) < self.width
            && (pos.y as u32) < self.height;
        in_grid.then(|| pos.y as usize * self.width as usize + pos.x as usize)
    }

    /// Record the color of one cell.
    pub fn insert(&mut self, pos: GridPos, color: Rgba8) -> Result<(), CassetteError> {
        let index = self.index(pos).ok_or(CassetteError::OutOfGrid {
            x: pos.x,
            y: pos.y,
            width: self.width,
            height: self.height,
        })?;

        let cell = &mut self.cells[index];
        if cell.is_some() {
            return Err(CassetteError::DuplicatePixel { x: pos.x, y: pos.y });
        }
        *cell = Some(color);
        Ok(())
    }

    /// Finish the map, failing on the first unfilled cell in row order.
    pub fn finish(self) -> Result<PixelMap, CassetteError> {
        let width = self.width;
        let pixels = self
            .cells
            .into_iter()
            .enumerate()
            .map(|(i, cell)| {
                cell.ok_or(CassetteError::MissingPixel {
                    x: (i as u32 % width) as i32,
                    y: (i as u32 / width) as i32,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PixelMap {
            width,
            height: self.height,
            pixels,
        })
    }
}

/// Color of every cell, stored row by row starting at `y = 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelMap {
    width: u32,
    height: u32,
    pixels: Vec<Rgba8>,
}

impl PixelMap {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells, always `width * height`.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Color at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: i32, y: i32) -> Option<Rgba8> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Every cell with its coordinate, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (GridPos, Rgba8)> + '_ {
        let width = self.width as usize;
        self.pixels.iter().enumerate().map(move |(i, color)| {
            (GridPos::new((i % width) as i32, (i / width) as i32), *color)
        })
    }

    /// Tightly packed RGBA bytes, row 0 first. Transparent cells keep alpha 0.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_array()).collect()
    }
}
