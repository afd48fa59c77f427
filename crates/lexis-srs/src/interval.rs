use crate::error::SrsError;
use crate::rating::Rating;

/// Ease factor given to a card that has never been rated.
pub const DEFAULT_EASE: f64 = 2.5;

/// Lowest ease factor the calculator will multiply by. Anything below this
/// would shrink a card's interval after a successful recall.
pub const MIN_EASE: f64 = 1.0;

/// Growth factor applied on a `hard` rating, independent of ease.
pub const HARD_MULTIPLIER: f64 = 1.2;

/// Extra growth on top of the ease factor for an `easy` rating.
pub const EASY_BONUS: f64 = 1.3;

/// Next review interval in days.
///
/// | rating | next interval            |
/// |--------|--------------------------|
/// | again  | `1`                      |
/// | hard   | `round(I × 1.2)`         |
/// | good   | `round(I × E)`           |
/// | easy   | `round(I × E × 1.3)`     |
///
/// `interval` below 1 is treated as 1, a non-finite `ease` as
/// [`DEFAULT_EASE`], and `ease` below [`MIN_EASE`] as `MIN_EASE`. The result
/// is always at least 1 day.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn next_interval(interval: u32, ease: f64, rating: Rating) -> u32 {
    let previous = f64::from(interval.max(1));
    let ease = if ease.is_finite() {
        ease.max(MIN_EASE)
    } else {
        DEFAULT_EASE
    };

    let next = match rating {
        Rating::Again => return 1,
        Rating::Hard => previous * HARD_MULTIPLIER,
        Rating::Good => previous * ease,
        Rating::Easy => previous * ease * EASY_BONUS,
    };

    next.round().clamp(1.0, f64::from(u32::MAX)) as u32
}

/// Accept an ease factor supplied by a caller, rejecting values the
/// calculator would otherwise silently replace.
///
/// # Errors
///
/// Returns `SrsError::InvalidEase` if `ease` is not finite or is below
/// [`MIN_EASE`].
pub fn checked_ease(ease: f64) -> Result<f64, SrsError> {
    if !ease.is_finite() || ease < MIN_EASE {
        return Err(SrsError::InvalidEase(ease));
    }
    Ok(ease)
}

/// Short "next review" label for an interval: `1d`, `12d`, `3w`, `4mo`, `1.5y`.
#[must_use]
pub fn interval_label(days: u32) -> String {
    let days_f = f64::from(days);
    match days {
        0..=13 => format!("{}d", days.max(1)),
        14..=59 => format!("{}w", (days_f / 7.0).round()),
        60..=364 => format!("{}mo", (days_f / 30.0).round()),
        _ => {
            let years = format!("{:.1}", days_f / 365.0);
            let years = years.strip_suffix(".0").unwrap_or(&years);
            format!("{years}y")
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn formula_at_default_ease() {
        assert_eq!(next_interval(10, DEFAULT_EASE, Rating::Again), 1);
        assert_eq!(next_interval(10, DEFAULT_EASE, Rating::Hard), 12);
        assert_eq!(next_interval(10, DEFAULT_EASE, Rating::Good), 25);
        assert_eq!(next_interval(10, DEFAULT_EASE, Rating::Easy), 33);
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        // 3 × 2.5 = 7.5 → 8
        assert_eq!(next_interval(3, 2.5, Rating::Good), 8);
        // 2 × 1.2 = 2.4 → 2
        assert_eq!(next_interval(2, 2.5, Rating::Hard), 2);
    }

    #[test]
    fn zero_interval_is_treated_as_one_day() {
        assert_eq!(next_interval(0, 2.5, Rating::Good), 3);
        assert_eq!(next_interval(0, 2.5, Rating::Hard), 1);
    }

    #[test]
    fn low_and_non_finite_ease_are_sanitized() {
        assert_eq!(next_interval(10, 0.5, Rating::Good), 10);
        assert_eq!(next_interval(10, f64::NAN, Rating::Good), 25);
        assert_eq!(next_interval(10, f64::INFINITY, Rating::Good), 25);
    }

    #[test]
    fn huge_intervals_saturate() {
        assert_eq!(next_interval(u32::MAX, 2.5, Rating::Easy), u32::MAX);
    }

    #[test]
    fn labels() {
        assert_eq!(interval_label(0), "1d");
        assert_eq!(interval_label(1), "1d");
        assert_eq!(interval_label(13), "13d");
        assert_eq!(interval_label(21), "3w");
        assert_eq!(interval_label(120), "4mo");
        assert_eq!(interval_label(365), "1y");
        assert_eq!(interval_label(548), "1.5y");
    }
}
