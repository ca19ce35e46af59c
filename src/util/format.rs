//! Number formatting for display lines.
//!
//! All report values are rendered with exactly two digits after the decimal
//! point; ties round away from zero (35.625 becomes "35.63"), not to even as
//! `{:.2}` would. Non-finite values format as the literals `NaN`, `Infinity`,
//! and `-Infinity` instead of erroring, so invalid input stays visible in the
//! output.

/// Display formatting options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Apply absolute value before formatting.
    pub abs: bool,
    /// Append a `%` suffix after formatting.
    pub percent: bool,
}

impl FormatOptions {
    /// No transformation, no suffix.
    pub const PLAIN: Self = Self {
        abs: false,
        percent: false,
    };
    /// Absolute value only.
    pub const ABS: Self = Self {
        abs: true,
        percent: false,
    };
    /// Absolute value with a `%` suffix.
    pub const ABS_PERCENT: Self = Self {
        abs: true,
        percent: true,
    };
}

/// Format an amount with two decimal places per the given options.
#[must_use]
pub fn format_amount(value: f64, options: FormatOptions) -> String {
    let value = if options.abs { value.abs() } else { value };
    let mut text = to_fixed(value);
    if options.percent {
        text.push('%');
    }
    text
}

/// Render with exactly two digits after the decimal point, rounding ties
/// away from zero.
fn to_fixed(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    // f64::round is half-away-from-zero; the scale overflows only beyond
    // ~1.8e306, where two-decimal rounding is the identity anyway.
    let scaled = (value * 100.0).round();
    let rounded = if scaled.is_finite() {
        scaled / 100.0
    } else {
        value
    };
    // `+ 0.0` normalizes the sign of zero so "-0.00" never appears.
    format!("{:.2}", rounded + 0.0)
}

/// Format to the given number of significant digits.
///
/// Used for the differential inside formula strings, which carries a coarser
/// precision than the two-decimal display values. Values whose magnitude
/// exceeds the precision round to a power of ten ("123" with two digits
/// becomes "120").
#[must_use]
pub fn format_sig(value: f64, digits: u32) -> String {
    debug_assert!(digits > 0);
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return format!("{:.*}", digits as usize - 1, 0.0);
    }

    let exponent = value.abs().log10().floor() as i32;
    let decimals = digits as i32 - 1 - exponent;
    if decimals >= 0 {
        format!("{:.*}", decimals as usize, value)
    } else {
        let scale = 10f64.powi(-decimals);
        format!("{:.0}", (value / scale).round() * scale)
    }
}

/// Render a raw operand for substitution into a formula string.
///
/// Integer-valued amounts render without a decimal point ("200", not
/// "200.00"); everything else uses the shortest round-trip form.
#[must_use]
pub fn format_operand(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if value.fract() == 0.0 {
        format!("{:.0}", value + 0.0)
    } else {
        value.to_string()
    }
}
