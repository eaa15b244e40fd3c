//! Fitting a zoom window into the base column range.

/// Amount both ends of the base range moved by, when they moved together.
///
/// A sliding series drops its oldest samples and gains new ones, shifting
/// both bounds by the same amount. A change that also alters the span is not
/// a roll and yields `None`.
#[must_use]
pub fn detect_roll(previous: (i64, i64), next: (i64, i64)) -> Option<i64> {
    let min_delta = next.0 - previous.0;
    let max_delta = next.1 - previous.1;
    (min_delta != 0 && min_delta == max_delta).then_some(min_delta)
}

/// Fits the candidate window `[min, max]` into `[base_min, base_max]`.
///
/// A rolled base shifts the candidate first so the window keeps pointing at
/// the same samples. The result always has `min < max` unless the base itself
/// holds a single position.
#[must_use]
pub fn normalize(
    base_min: i64,
    base_max: i64,
    candidate_min: i64,
    candidate_max: i64,
    roll: Option<i64>,
) -> (i64, i64) {
    let shift = roll.unwrap_or(0);
    let mut min = candidate_min.saturating_add(shift).clamp(base_min, base_max);
    let mut max = candidate_max.saturating_add(shift).clamp(base_min, base_max);
    if min > max {
        std::mem::swap(&mut min, &mut max);
    }
    if min != max {
        return (min, max);
    }

    if max < base_max {
        (min, max + 1)
    } else if min > base_min {
        (min - 1, max)
    } else {
        (base_min, base_max)
    }
}
