//! Stripe planner.
//!
//! Decides whether a cassette gets stripes and, if so, their orientation,
//! count, thickness, rows or columns, and colors. A thick stripe is two
//! adjacent lines sharing one color.

use cassette_spec::{GeneratorConfig, MAX_STRIPES, MIN_STRIPES};

use crate::color::random_opaque;
use crate::descriptor::{DecalBounds, StripeLine, StripeOrientation, StripePlan};
use crate::rng::RandomSource;

/// Plan the stripes of one cassette, or `None` when it has none.
pub fn plan_stripes<R: RandomSource + ?Sized>(
    config: &GeneratorConfig,
    bounds: &DecalBounds,
    rng: &mut R,
) -> Option<StripePlan> {
    if rng.value() < 1.0 - config.stripe_chance {
        return None;
    }

    let orientation = if rng.value() < config.horizontal_stripe_chance {
        StripeOrientation::Horizontal
    } else {
        StripeOrientation::Vertical
    };
    let (low, high) = match orientation {
        StripeOrientation::Horizontal => (bounds.min_y, bounds.max_y),
        StripeOrientation::Vertical => (bounds.min_x, bounds.max_x),
    };

    // Validated configs already lie in [MIN_STRIPES, MAX_STRIPES], where both
    // casts are lossless
    let max_stripes = config.max_stripes.clamp(MIN_STRIPES, MAX_STRIPES);
    let count = rng.range_inclusive(MIN_STRIPES as i32, max_stripes as i32);
    let mut lines = Vec::with_capacity(count as usize * 2);

    for _ in 0..count {
        let thin = rng.value() < config.thin_stripe_chance;
        let position = rng.range_inclusive(low, high);
        let color = random_opaque(rng);
        lines.push(StripeLine { position, color });

        if thin {
            tracing::trace!(position, "thin stripe");
            continue;
        }

        let neighbor = if rng.coin() { position + 1 } else { position - 1 };
        lines.push(StripeLine {
            position: neighbor,
            color,
        });
        tracing::trace!(position, neighbor, "thick stripe");
    }

    Some(StripePlan { orientation, lines })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba8;
    use crate::descriptor::DECAL_BOUNDS;
    use crate::rng::testing::ScriptedRng;
    use crate::rng::DeterministicRng;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_disabled_below_threshold() {
        let config = GeneratorConfig::default();
        // 1 - 0.7 = 0.3
        let mut rng = ScriptedRng::new(&[0.29], &[]);
        assert_eq!(plan_stripes(&config, &DECAL_BOUNDS, &mut rng), None);
        assert!(rng.is_exhausted());
    }

    #[test]
    fn test_thin_horizontal_stripe() {
        let config = GeneratorConfig::default();
        // enable, horizontal, thin
        let mut rng = ScriptedRng::new(&[0.5, 0.1, 0.2], &[1, 9, 10, 20, 30]);

        let plan = plan_stripes(&config, &DECAL_BOUNDS, &mut rng).unwrap();
        assert!(rng.is_exhausted());
        assert_eq!(plan.orientation, StripeOrientation::Horizontal);
        assert_eq!(
            plan.lines,
            vec![StripeLine {
                position: 9,
                color: Rgba8::opaque(10, 20, 30)
            }]
        );
    }

    #[test]
    fn test_thick_vertical_stripe_reuses_color() {
        let config = GeneratorConfig::default();
        // enable, vertical, thick, coin down
        let mut rng = ScriptedRng::new(&[0.9, 0.7, 0.8, 0.2], &[1, 12, 1, 2, 3]);

        let plan = plan_stripes(&config, &DECAL_BOUNDS, &mut rng).unwrap();
        assert!(rng.is_exhausted());
        assert_eq!(plan.orientation, StripeOrientation::Vertical);

        let color = Rgba8::opaque(1, 2, 3);
        assert_eq!(
            plan.lines,
            vec![
                StripeLine { position: 12, color },
                StripeLine { position: 11, color },
            ]
        );
    }

    #[test]
    fn test_thick_stripe_coin_up() {
        let config = GeneratorConfig::default();
        let mut rng = ScriptedRng::new(&[0.9, 0.1, 0.99, 0.51], &[1, 15, 0, 0, 0]);

        let plan = plan_stripes(&config, &DECAL_BOUNDS, &mut rng).unwrap();
        let positions: Vec<_> = plan.positions().collect();
        assert_eq!(positions, vec![15, 16]);
    }

    #[test]
    fn test_stripe_count_respects_config() {
        let config = GeneratorConfig::default()
            .with_stripe_chance(1.0)
            .with_thin_stripe_chance(1.0)
            .with_max_stripes(2);

        let mut rng = DeterministicRng::new(3);
        for _ in 0..200 {
            let plan = plan_stripes(&config, &DECAL_BOUNDS, &mut rng).unwrap();
            assert!((1..=2).contains(&plan.lines.len()));
        }
    }

    #[test]
    fn test_largest_max_stripes() {
        let config = GeneratorConfig::default()
            .with_stripe_chance(1.0)
            .with_thin_stripe_chance(1.0)
            .with_max_stripes(MAX_STRIPES);
        assert!(config.validate().is_ok());

        let mut rng = DeterministicRng::new(5);
        let counts: Vec<usize> = (0..300)
            .map(|_| plan_stripes(&config, &DECAL_BOUNDS, &mut rng).unwrap().lines.len())
            .collect();
        assert!(counts.iter().all(|n| (1..=MAX_STRIPES as usize).contains(n)));
        // Counts spread over the whole range instead of collapsing to one
        assert!(counts.iter().any(|&n| n > MAX_STRIPES as usize / 2));
    }

    #[test]
    fn test_out_of_range_max_stripes_is_clamped() {
        let config = GeneratorConfig::default()
            .with_stripe_chance(1.0)
            .with_thin_stripe_chance(1.0)
            .with_max_stripes(3_000_000_000);

        let mut rng = DeterministicRng::new(5);
        let mut seen_many = false;
        for _ in 0..200 {
            let n = plan_stripes(&config, &DECAL_BOUNDS, &mut rng).unwrap().lines.len();
            assert!((1..=MAX_STRIPES as usize).contains(&n));
            seen_many |= n > 1;
        }
        assert!(seen_many);
    }

    #[test]
    fn test_lines_stay_near_decal() {
        let config = GeneratorConfig::default().with_stripe_chance(1.0);
        let mut rng = DeterministicRng::new(17);

        for _ in 0..500 {
            let plan = plan_stripes(&config, &DECAL_BOUNDS, &mut rng).unwrap();
            let (low, high) = match plan.orientation {
                StripeOrientation::Horizontal => (DECAL_BOUNDS.min_y, DECAL_BOUNDS.max_y),
                StripeOrientation::Vertical => (DECAL_BOUNDS.min_x, DECAL_BOUNDS.max_x),
            };
            // The second line of a thick stripe may step one past the bounds
            for position in plan.positions() {
                assert!((low - 1..=high + 1).contains(&position));
            }
            assert_eq!(plan.positions().count(), plan.colors().count());
        }
    }

    #[test]
    fn test_zero_chance_never_stripes() {
        let config = GeneratorConfig::default().with_stripe_chance(0.0);
        let mut rng = DeterministicRng::new(8);
        for _ in 0..100 {
            assert!(plan_stripes(&config, &DECAL_BOUNDS, &mut rng).is_none());
        }
    }
}
