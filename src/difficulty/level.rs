//! Performance level bounds and clamping

/// Lowest performance level (half difficulty)
pub const MIN_LEVEL: f64 = 50.0;

/// Highest performance level (double difficulty)
pub const MAX_LEVEL: f64 = 200.0;

/// Baseline level; every effect is neutral here
pub const NEUTRAL_LEVEL: f64 = 100.0;

/// A value after range coercion, remembering whether coercion happened
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clamped<T> {
    pub value: T,
    pub clamped: bool,
}

impl<T> Clamped<T> {
    pub fn exact(value: T) -> Self {
        Self {
            value,
            clamped: false,
        }
    }

    pub fn coerced(value: T) -> Self {
        Self {
            value,
            clamped: true,
        }
    }
}

/// Clamp a level into `[MIN_LEVEL, MAX_LEVEL]`
///
/// NaN has no meaningful position in the range and becomes `NEUTRAL_LEVEL`.
pub fn clamp_level(level: f64) -> Clamped<f64> {
    if level.is_nan() {
        return Clamped::coerced(NEUTRAL_LEVEL);
    }
    let value = level.clamp(MIN_LEVEL, MAX_LEVEL);
    if value == level {
        Clamped::exact(value)
    } else {
        Clamped::coerced(value)
    }
}

/// Level divided by the neutral level (1.0 at baseline)
pub fn level_ratio(level: f64) -> f64 {
    level / NEUTRAL_LEVEL
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clamps_low_and_high() {
        assert_eq!(clamp_level(30.0), Clamped::coerced(50.0));
        assert_eq!(clamp_level(250.0), Clamped::coerced(200.0));
    }

    #[test]
    fn test_in_range_is_exact() {
        assert_eq!(clamp_level(50.0), Clamped::exact(50.0));
        assert_eq!(clamp_level(133.5), Clamped::exact(133.5));
        assert_eq!(clamp_level(200.0), Clamped::exact(200.0));
    }

    #[test]
    fn test_non_finite_inputs() {
        assert_eq!(clamp_level(f64::NAN), Clamped::coerced(NEUTRAL_LEVEL));
        assert_eq!(clamp_level(f64::INFINITY).value, MAX_LEVEL);
        assert_eq!(clamp_level(f64::NEG_INFINITY).value, MIN_LEVEL);
    }

    proptest! {
        #[test]
        fn prop_clamped_level_in_range(level in -1.0e9f64..1.0e9) {
            let result = clamp_level(level);
            prop_assert!(result.value >= MIN_LEVEL && result.value <= MAX_LEVEL);
            prop_assert_eq!(result.clamped, !(MIN_LEVEL..=MAX_LEVEL).contains(&level));
        }
    }
}
