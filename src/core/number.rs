/// Numeric range formatter for `{number,min,max,precision}` placeholders.

use crate::core::random::RandomSource;

/// Draw a uniform value in `[min, max)` and render it with exactly
/// `precision` fractional digits.
///
/// Rounding is to nearest with ties to even, then clamped: a draw that
/// would render as the exclusive `max` is rendered one step below it, and
/// one that would render below `min` is rendered at the smallest step at
/// or above it. When `min == max` the value is `min`. A range narrower
/// than one step has no in-range rendering; the nearest one is used.
/// Callers validate `min <= max`.
pub fn format_range<S>(source: &mut S, min: f64, max: f64, precision: usize) -> String
where
    S: RandomSource + ?Sized,
{
    let value = source.range(min, max);
    let rendered = format!("{value:.precision$}");
    if max <= min {
        return rendered;
    }

    let shown = rendered.parse::<f64>().unwrap_or(value);
    if shown >= max {
        let below = step_below(max, precision).max(min);
        return format!("{below:.precision$}");
    }
    if shown < min {
        let scale = 10f64.powi(exponent(precision));
        let above = (min * scale).ceil() / scale;
        if above < max {
            return format!("{above:.precision$}");
        }
    }

    rendered
}

fn exponent(precision: usize) -> i32 {
    precision.min(i32::MAX as usize) as i32
}

/// The largest value below `max` on the `precision` grid, or the float
/// just below `max` when the grid is finer than `f64` can represent there.
fn step_below(max: f64, precision: usize) -> f64 {
    let below = max - 10f64.powi(-exponent(precision));
    if below < max {
        below
    } else if max > 0.0 {
        f64::from_bits(max.to_bits() - 1)
    } else if max < 0.0 {
        f64::from_bits(max.to_bits() + 1)
    } else {
        -f64::from_bits(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::FixedSource;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn midpoint_with_two_digits() {
        let mut source = FixedSource::first();
        assert_eq!(format_range(&mut source, 100.0, 200.0, 2), "150.00");
    }

    #[test]
    fn zero_precision_is_integer() {
        let mut source = FixedSource::first().with_unit(0.1);
        assert_eq!(format_range(&mut source, 1000.0, 99999.0, 0), "10900");
    }

    #[test]
    fn never_renders_exclusive_max() {
        let mut source = FixedSource::first().with_unit(0.99999);
        assert_eq!(format_range(&mut source, 100.0, 200.0, 2), "199.99");
        assert_eq!(format_range(&mut source, 0.0, 10.0, 0), "9");
    }

    #[test]
    fn tie_below_min_rounds_up_into_range() {
        let mut source = FixedSource::first().with_unit(0.0);
        assert_eq!(format_range(&mut source, 0.5, 55.0, 0), "1");
        assert_eq!(format_range(&mut source, 2.5, 3.5, 0), "3");
    }

    #[test]
    fn step_below_survives_fine_precision() {
        assert_eq!(format!("{:.2}", step_below(200.0, 2)), "199.99");

        let below = step_below(200.0, 20);
        assert!(below < 200.0);
        let rendered: f64 = format!("{below:.20}").parse().unwrap();
        assert!(rendered < 200.0);

        assert!(step_below(-3.0, 20) < -3.0);
        assert!(step_below(0.0, 20) < 0.0);
    }

    #[test]
    fn equal_bounds_render_min() {
        let mut source = FixedSource::first();
        assert_eq!(format_range(&mut source, 5.0, 5.0, 1), "5.0");
    }

    proptest! {
        #[test]
        fn stays_within_bounds(
            seed in any::<u64>(),
            min in -10_000i32..10_000,
            span in 1i32..100_000,
            precision in 0usize..4,
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let (min, max) = (min as f64, (min + span) as f64);
            let rendered = format_range(&mut rng, min, max, precision);

            let fraction = rendered.split('.').nth(1).map_or(0, str::len);
            prop_assert_eq!(fraction, precision);

            let value: f64 = rendered.parse().unwrap();
            prop_assert!(value >= min && value < max, "{} not in [{}, {})", rendered, min, max);
        }
    }

    #[test]
    fn hundred_to_two_hundred_has_two_digits() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            let rendered = format_range(&mut rng, 100.0, 200.0, 2);
            let (int, frac) = rendered.split_once('.').unwrap();
            assert_eq!(frac.len(), 2);
            assert_eq!(int.len(), 3);
            let value: f64 = rendered.parse().unwrap();
            assert!((100.0..200.0).contains(&value));
        }
    }
}
