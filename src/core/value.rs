use std::fmt;
use std::sync::Arc;

/// Number of non-zero fractional digits kept when rounding axis values.
pub const DEFAULT_NON_ZERO_DECIMALS: usize = 2;

/// Plain decimal labels longer than this switch to scientific notation.
const MAX_PLAIN_TEXT_LEN: usize = 10;

/// Shared caller-supplied formatter for axis values.
///
/// Two formatters are equal only when they are the same closure.
#[derive(Clone)]
pub struct ValueFormatter(Arc<dyn Fn(f64) -> String + Send + Sync>);

impl ValueFormatter {
    pub fn new(format: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(format))
    }

    #[must_use]
    pub fn format(&self, value: f64) -> String {
        (self.0)(value)
    }
}

impl fmt::Debug for ValueFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ValueFormatter(..)")
    }
}

impl PartialEq for ValueFormatter {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// A single quantity shown on an axis.
///
/// Either numeric (`raw` plus its rounded display value) or a literal text
/// override, in which case `raw` and `rounded` are NaN.
#[derive(Debug, Clone)]
pub struct Value {
    raw: f64,
    rounded: f64,
    zero_decimals: usize,
    non_zero_decimals: usize,
    formatter: Option<ValueFormatter>,
    text: Option<String>,
}

impl Value {
    #[must_use]
    pub fn new(raw: f64, non_zero_decimals: usize) -> Self {
        Self::with_formatter(raw, non_zero_decimals, None)
    }

    #[must_use]
    pub fn with_formatter(
        raw: f64,
        non_zero_decimals: usize,
        formatter: Option<ValueFormatter>,
    ) -> Self {
        let (rounded, zero_decimals) = round_to_non_zero_places(raw, non_zero_decimals);
        Self {
            raw,
            rounded,
            zero_decimals,
            non_zero_decimals,
            formatter,
            text: None,
        }
    }

    /// Wraps a literal label.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            raw: f64::NAN,
            rounded: f64::NAN,
            zero_decimals: 0,
            non_zero_decimals: 0,
            formatter: None,
            text: Some(text.into()),
        }
    }

    #[must_use]
    pub fn raw(&self) -> f64 {
        self.raw
    }

    #[must_use]
    pub fn rounded(&self) -> f64 {
        self.rounded
    }

    #[must_use]
    pub fn zero_decimals(&self) -> usize {
        self.zero_decimals
    }

    #[must_use]
    pub fn non_zero_decimals(&self) -> usize {
        self.non_zero_decimals
    }

    #[must_use]
    pub fn formatter(&self) -> Option<&ValueFormatter> {
        self.formatter.as_ref()
    }

    #[must_use]
    pub fn is_text(&self) -> bool {
        self.text.is_some()
    }

    /// Display text: the literal override, else the formatter output, else the
    /// default decimal rendering of the rounded value.
    #[must_use]
    pub fn text(&self) -> String {
        if let Some(text) = &self.text {
            return text.clone();
        }
        if let Some(formatter) = &self.formatter {
            return formatter.format(self.raw);
        }
        default_text(self.rounded, self.non_zero_decimals + self.zero_decimals)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.raw.total_cmp(&other.raw).is_eq()
            && self.rounded.total_cmp(&other.rounded).is_eq()
            && self.zero_decimals == other.zero_decimals
            && self.non_zero_decimals == other.non_zero_decimals
            && self.formatter == other.formatter
            && self.text == other.text
    }
}

fn default_text(rounded: f64, decimals: usize) -> String {
    // Collapse negative zero so it never renders as "-0".
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let text = if rounded.ceil() == rounded {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.decimals$}")
    };
    if text.len() > MAX_PLAIN_TEXT_LEN && rounded.is_finite() {
        return format!("{rounded:.2e}");
    }
    text
}

/// Rounds `value` up (towards positive infinity) so that `places` non-zero
/// digits follow the leading zeros of its fractional part.
///
/// Returns the rounded value and the count of leading zero fractional digits,
/// e.g. `0.00012345` with two places yields `(0.00013, 3)`.
#[must_use]
pub fn round_to_non_zero_places(value: f64, places: usize) -> (f64, usize) {
    if value == 0.0 || !value.is_finite() {
        return (value, 0);
    }
    let fraction = value.fract().abs();
    if fraction == 0.0 {
        return (value, 0);
    }

    let mut shifted = fraction;
    let mut zero_decimals = 0usize;
    while shifted < 0.1 {
        shifted *= 10.0;
        zero_decimals += 1;
    }

    let exponent = i32::try_from(zero_decimals + places).unwrap_or(i32::MAX);
    let multiplier = 10f64.powi(exponent);
    let scaled = value * multiplier;
    // Absorb binary representation noise (0.3 * 100 == 30.000000000000004).
    let nearest = scaled.round();
    let scaled = if (scaled - nearest).abs() <= 1e-9 * nearest.abs().max(1.0) {
        nearest
    } else {
        scaled.ceil()
    };
    (scaled / multiplier, zero_decimals)
}
