//! Overlay square planner.
//!
//! Overlay squares are single cells placed along the four bands just inside
//! the decal edge. Later squares may instead cluster next to an earlier one.
//! Positions are not de-duplicated and may land on any other decoration.

use cassette_spec::{GeneratorConfig, OVERLAY_CHANCE, OVERLAY_COUNT_MAX, OVERLAY_COUNT_MIN};

use crate::descriptor::{GridPos, OverlayPlan};
use crate::rng::RandomSource;

/// A rectangle of candidate positions, bounds half-open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quadrant {
    pub x: (i32, i32),
    pub y: (i32, i32),
}

impl Quadrant {
    /// Uniform position inside the quadrant, `x` drawn first.
    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> GridPos {
        let x = rng.range(self.x.0, self.x.1);
        let y = rng.range(self.y.0, self.y.1);
        GridPos::new(x, y)
    }
}

/// Bottom, top, left, and right bands around the reels.
pub const QUADRANTS: [Quadrant; 4] = [
    Quadrant {
        x: (4, 24),
        y: (13, 15),
    },
    Quadrant {
        x: (4, 24),
        y: (6, 8),
    },
    Quadrant {
        x: (4, 6),
        y: (8, 13),
    },
    Quadrant {
        x: (22, 24),
        y: (8, 13),
    },
];

/// Plan the overlay squares of one cassette, or `None` when it has none.
pub fn plan_overlays<R: RandomSource + ?Sized>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Option<OverlayPlan> {
    if rng.value() >= OVERLAY_CHANCE {
        return None;
    }

    let count = rng.range(OVERLAY_COUNT_MIN, OVERLAY_COUNT_MAX);
    let mut positions: Vec<GridPos> = Vec::with_capacity(count as usize);

    for _ in 0..count {
        // The neighbor draw is taken even when nothing has been placed yet
        let cluster = rng.value() < config.overlay_neighbor_chance;

        let pos = if cluster && !positions.is_empty() {
            let anchor = positions[rng.range(0, positions.len() as i32) as usize];
            neighbor_of(anchor, rng)
        } else {
            let quadrant = QUADRANTS[rng.range(0, QUADRANTS.len() as i32) as usize];
            quadrant.sample(rng)
        };

        tracing::trace!(x = pos.x, y = pos.y, cluster, "overlay square");
        positions.push(pos);
    }

    Some(OverlayPlan { positions })
}

/// Step one cell along a randomly chosen axis in a random direction.
pub fn neighbor_of<R: RandomSource + ?Sized>(pos: GridPos, rng: &mut R) -> GridPos {
    let vary_x = rng.coin();
    let step = if rng.coin() { 1 } else { -1 };

    if vary_x {
        GridPos::new(pos.x + step, pos.y)
    } else {
        GridPos::new(pos.x, pos.y + step)
    }
}
