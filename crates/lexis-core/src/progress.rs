//! Clamped progress helpers shared by challenges and achievements.

/// Fraction of `target` reached by `current`, clamped to `[0.0, 1.0]`.
///
/// A non-positive `target` has no meaningful progress and yields `0.0`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn fraction(current: i64, target: i64) -> f64 {
    if target <= 0 {
        return 0.0;
    }
    (current as f64 / target as f64).clamp(0.0, 1.0)
}

/// [`fraction`] as a whole percentage in `0..=100`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn percent(current: i64, target: i64) -> u8 {
    (fraction(current, target) * 100.0).round() as u8
}
