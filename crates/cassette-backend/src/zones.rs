//! Zone classification.
//!
//! Every cell belongs to the center area (the decal rectangle) or the edge
//! area around it. Each area has an ordered rule table; the first rule whose
//! predicate matches names the [`Zone`] of the cell, and the zone decides the
//! color. Both tables end in a catch-all rule, so [`CassetteError::Uncovered`]
//! only surfaces if a table is broken.

use crate::color::Rgba8;
use crate::descriptor::{BottomHoles, CassetteLayout, DecalSize, GridPos, DECAL_BOUNDS};
use crate::error::CassetteError;

/// The two top-level regions of the face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Area {
    Center,
    Edge,
}

impl Area {
    pub fn of(pos: GridPos) -> Self {
        if DECAL_BOUNDS.contains(pos) {
            Area::Center
        } else {
            Area::Edge
        }
    }

    /// Rule table of this area, in evaluation order.
    pub fn rules(&self) -> &'static [ZoneRule] {
        match self {
            Area::Center => &CENTER_RULES,
            Area::Edge => &EDGE_RULES,
        }
    }
}

/// The named feature a cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    WindingHole,
    InteriorHole,
    Tape,
    DecalFill,
    OverlaySquare,
    Stripe,
    DecalMain,
    PunchCorner,
    CornerAccent,
    BottomLine,
    BottomHole,
    EdgeMain,
}

impl Zone {
    /// Color of a cell in this zone. `None` only for a stripe zone on a cell
    /// no stripe crosses.
    pub fn paint(&self, pos: GridPos, layout: &CassetteLayout) -> Option<Rgba8> {
        let colors = &layout.colors;
        match self {
            Zone::WindingHole | Zone::InteriorHole | Zone::PunchCorner | Zone::BottomHole => {
                Some(Rgba8::TRANSPARENT)
            }
            Zone::Tape => Some(colors.tape),
            Zone::DecalFill | Zone::EdgeMain => Some(colors.edge_main),
            Zone::OverlaySquare => Some(colors.overlay_square),
            Zone::Stripe => layout.stripe_color_at(pos),
            Zone::DecalMain => Some(colors.decal_main),
            Zone::CornerAccent => Some(colors.edge_accent),
            Zone::BottomLine => Some(colors.bottom_line),
        }
    }
}

/// A zone paired with the predicate that selects it.
#[derive(Clone, Copy)]
pub struct ZoneRule {
    pub zone: Zone,
    pub matches: fn(GridPos, &CassetteLayout) -> bool,
}

impl std::fmt::Debug for ZoneRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZoneRule").field("zone", &self.zone).finish()
    }
}

/// Center-area rules, in evaluation order.
pub static CENTER_RULES: [ZoneRule; 7] = [
    ZoneRule {
        zone: Zone::WindingHole,
        matches: is_winding_hole,
    },
    ZoneRule {
        zone: Zone::InteriorHole,
        matches: is_interior_hole,
    },
    ZoneRule {
        zone: Zone::Tape,
        matches: is_tape,
    },
    ZoneRule {
        zone: Zone::DecalFill,
        matches: is_decal_fill,
    },
    ZoneRule {
        zone: Zone::OverlaySquare,
        matches: is_overlay_square,
    },
    ZoneRule {
        zone: Zone::Stripe,
        matches: is_stripe,
    },
    ZoneRule {
        zone: Zone::DecalMain,
        matches: always,
    },
];

/// Edge-area rules, in evaluation order.
pub static EDGE_RULES: [ZoneRule; 5] = [
    ZoneRule {
        zone: Zone::PunchCorner,
        matches: is_punch_corner,
    },
    ZoneRule {
        zone: Zone::CornerAccent,
        matches: is_corner_accent,
    },
    ZoneRule {
        zone: Zone::BottomLine,
        matches: is_bottom_line,
    },
    ZoneRule {
        zone: Zone::BottomHole,
        matches: is_bottom_hole,
    },
    ZoneRule {
        zone: Zone::EdgeMain,
        matches: always,
    },
];

/// First zone in `rules` matching `pos`.
pub fn first_match(
    rules: &[ZoneRule],
    pos: GridPos,
    layout: &CassetteLayout,
) -> Result<Zone, CassetteError> {
    rules
        .iter()
        .find(|rule| (rule.matches)(pos, layout))
        .map(|rule| rule.zone)
        .ok_or(CassetteError::Uncovered { x: pos.x, y: pos.y })
}

/// Zone of the cell at `pos`.
pub fn classify(pos: GridPos, layout: &CassetteLayout) -> Result<Zone, CassetteError> {
    first_match(Area::of(pos).rules(), pos, layout)
}

/// Final color of the cell at `(x, y)`.
pub fn color_at(x: i32, y: i32, layout: &CassetteLayout) -> Result<Rgba8, CassetteError> {
    let pos = GridPos::new(x, y);
    classify(pos, layout)?
        .paint(pos, layout)
        .ok_or(CassetteError::Uncovered { x, y })
}

fn always(_: GridPos, _: &CassetteLayout) -> bool {
    true
}

// Reel hubs: a plus shape around (8, 10) and around (19, 10).
fn is_winding_hole(GridPos { x, y }: GridPos, _: &CassetteLayout) -> bool {
    match y {
        9 | 11 => x == 8 || x == 19,
        10 => (7..=9).contains(&x) || (18..=20).contains(&x),
        _ => false,
    }
}

fn is_interior_hole(GridPos { x, y }: GridPos, _: &CassetteLayout) -> bool {
    (14..=15).contains(&x) && (9..=11).contains(&y)
}

fn is_tape(GridPos { x, y }: GridPos, _: &CassetteLayout) -> bool {
    (9..=11).contains(&y) && ((11..=13).contains(&x) || x == 16)
}

fn is_decal_fill(GridPos { x, y }: GridPos, layout: &CassetteLayout) -> bool {
    match layout.decal_size {
        DecalSize::Small => {
            let body = (7..=20).contains(&x) && (8..=12).contains(&y);
            // Single-column lip on each side, kept apart from the body
            let lip = (x == 6 || x == 21) && (9..=11).contains(&y);
            body || lip
        }
        DecalSize::Large => (6..=21).contains(&x) && (8..=12).contains(&y),
    }
}

fn is_overlay_square(pos: GridPos, layout: &CassetteLayout) -> bool {
    layout.has_overlay_at(pos)
}

fn is_stripe(pos: GridPos, layout: &CassetteLayout) -> bool {
    layout.stripe_color_at(pos).is_some()
}

fn is_punch_corner(GridPos { x, y }: GridPos, layout: &CassetteLayout) -> bool {
    let right = layout.width() as i32 - 1;
    let top = layout.height() as i32 - 1;
    (x == 0 || x == right) && (y == 0 || y == top)
}

fn is_corner_accent(GridPos { x, y }: GridPos, layout: &CassetteLayout) -> bool {
    let right = layout.width() as i32 - 2;
    let top = layout.height() as i32 - 2;
    (x == 1 || x == right) && (y == 1 || y == top)
}

// A shallow trough under the decal: posts at x = 5/22, steps at x = 6/21,
// and a floor along y = 4.
fn is_bottom_line(GridPos { x, y }: GridPos, _: &CassetteLayout) -> bool {
    ((x == 5 || x == 22) && y < 2)
        || ((x == 6 || x == 21) && (2..=3).contains(&y))
        || ((7..=20).contains(&x) && y == 4)
}

fn is_bottom_hole(GridPos { x, y }: GridPos, layout: &CassetteLayout) -> bool {
    let outer = y == 1 && (x == 8 || x == 19);
    let inner = y == 2 && (x == 10 || x == 17);
    match layout.bottom_holes {
        BottomHoles::None => false,
        BottomHoles::Two => outer,
        BottomHoles::Four => outer || inner,
    }
}
