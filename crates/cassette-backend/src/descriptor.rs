//! Cassette layout and descriptor types.
//!
//! A generation run first composes an immutable [`CassetteLayout`] from the
//! values each planner returns, then resolves every cell against it. The
//! finished [`CassetteDescriptor`] pairs the layout with its pixel map and is
//! never mutated again.

use crate::color::Rgba8;
use crate::palette::CassetteColors;
use crate::pixel_map::PixelMap;
use crate::rng::RandomSource;

/// Grid width in cells.
pub const WIDTH: u32 = 28;
/// Grid height in cells.
pub const HEIGHT: u32 = 19;

/// Rectangle inside which decorations are placed.
pub const DECAL_BOUNDS: DecalBounds = DecalBounds {
    min_x: 3,
    max_x: 24,
    min_y: 5,
    max_y: 15,
};

/// A grid coordinate. `y = 0` is the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for GridPos {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Inclusive rectangle of grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecalBounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl DecalBounds {
    /// True when `pos` lies inside the rectangle, edges included.
    pub fn contains(&self, pos: GridPos) -> bool {
        (self.min_x..=self.max_x).contains(&pos.x) && (self.min_y..=self.max_y).contains(&pos.y)
    }
}

/// Size of the shell-colored fill around the reels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecalSize {
    Small,
    Large,
}

impl DecalSize {
    /// Uniform choice between the two sizes.
    pub fn sample<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        match rng.range(0, 2) {
            0 => DecalSize::Small,
            _ => DecalSize::Large,
        }
    }
}

/// Number of holes punched along the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BottomHoles {
    None,
    Two,
    Four,
}

impl BottomHoles {
    /// Uniform choice among 0, 2, and 4 holes.
    pub fn sample<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        match rng.range(0, 3) {
            0 => BottomHoles::None,
            1 => BottomHoles::Two,
            _ => BottomHoles::Four,
        }
    }

    pub fn count(&self) -> u32 {
        match self {
            BottomHoles::None => 0,
            BottomHoles::Two => 2,
            BottomHoles::Four => 4,
        }
    }
}

/// Direction stripes run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StripeOrientation {
    /// Full rows; lines are `y` values.
    Horizontal,
    /// Full columns; lines are `x` values.
    Vertical,
}

/// One row or column of a stripe, with its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripeLine {
    pub position: i32,
    pub color: Rgba8,
}

/// Stripes chosen for a cassette.
///
/// Lines keep declaration order. When several lines share a position the
/// earliest one decides the color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripePlan {
    pub orientation: StripeOrientation,
    pub lines: Vec<StripeLine>,
}

impl StripePlan {
    /// Row or column indices, in declaration order.
    pub fn positions(&self) -> impl Iterator<Item = i32> + '_ {
        self.lines.iter().map(|line| line.position)
    }

    /// One color per line, in declaration order.
    pub fn colors(&self) -> impl Iterator<Item = Rgba8> + '_ {
        self.lines.iter().map(|line| line.color)
    }

    /// Color of the first line crossing `pos`, if any.
    pub fn color_at(&self, pos: GridPos) -> Option<Rgba8> {
        let coordinate = match self.orientation {
            StripeOrientation::Horizontal => pos.y,
            StripeOrientation::Vertical => pos.x,
        };
        self.lines
            .iter()
            .find(|line| line.position == coordinate)
            .map(|line| line.color)
    }
}

/// Overlay squares chosen for a cassette. Duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayPlan {
    pub positions: Vec<GridPos>,
}

impl OverlayPlan {
    pub fn contains(&self, pos: GridPos) -> bool {
        self.positions.contains(&pos)
    }
}

/// Every decision of one generation run, before any cell is colored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CassetteLayout {
    pub decal_size: DecalSize,
    pub bottom_holes: BottomHoles,
    pub stripes: Option<StripePlan>,
    pub overlays: Option<OverlayPlan>,
    pub colors: CassetteColors,
}

impl CassetteLayout {
    pub fn width(&self) -> u32 {
        WIDTH
    }

    pub fn height(&self) -> u32 {
        HEIGHT
    }

    pub fn decal_bounds(&self) -> DecalBounds {
        DECAL_BOUNDS
    }

    pub fn stripes_enabled(&self) -> bool {
        self.stripes.is_some()
    }

    pub fn overlay_squares_enabled(&self) -> bool {
        self.overlays.is_some()
    }

    /// Color of the first stripe line crossing `pos`.
    pub fn stripe_color_at(&self, pos: GridPos) -> Option<Rgba8> {
        self.stripes.as_ref().and_then(|plan| plan.color_at(pos))
    }

    /// True when an overlay square sits on `pos`.
    pub fn has_overlay_at(&self, pos: GridPos) -> bool {
        self.overlays.as_ref().is_some_and(|plan| plan.contains(pos))
    }
}

/// A finished cassette: its layout and the resolved color of every cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CassetteDescriptor {
    layout: CassetteLayout,
    pixel_map: PixelMap,
}

impl CassetteDescriptor {
    pub(crate) fn new(layout: CassetteLayout, pixel_map: PixelMap) -> Self {
        Self { layout, pixel_map }
    }

    pub fn width(&self) -> u32 {
        self.pixel_map.width()
    }

    pub fn height(&self) -> u32 {
        self.pixel_map.height()
    }

    pub fn layout(&self) -> &CassetteLayout {
        &self.layout
    }

    pub fn pixel_map(&self) -> &PixelMap {
        &self.pixel_map
    }

    /// Split into layout and pixel map. Renderers only need the map.
    pub fn into_parts(self) -> (CassetteLayout, PixelMap) {
        (self.layout, self.pixel_map)
    }
}
