//! Number formatting helpers for display contexts.

/// Abbreviate a non-negative count with a magnitude suffix.
///
/// Tiers are tested from largest to smallest: `T` (10^12), `B` (10^9),
/// `M` (10^6), `K` (10^3). The value is divided by the first satisfied
/// threshold and rounded to one decimal place; a result that rounds to a
/// whole number prints without the decimal. Values below 1000 print as the
/// bare integer.
///
/// # Examples
///
/// ```
/// use quill_helpers::numeric::abbreviate_number;
///
/// assert_eq!(abbreviate_number(999), "999");
/// assert_eq!(abbreviate_number(1100), "1.1K");
/// assert_eq!(abbreviate_number(2000), "2K");
/// assert_eq!(abbreviate_number(1_500_000), "1.5M");
/// ```
#[must_use]
pub fn abbreviate_number(value: u64) -> String {
    const TIERS: [(u64, &str); 5] = [
        (1_000_000_000_000, "T"),
        (1_000_000_000, "B"),
        (1_000_000, "M"),
        (1_000, "K"),
        (1, ""),
    ];

    for (threshold, suffix) in TIERS {
        if value >= threshold {
            #[allow(clippy::cast_precision_loss)] // display only
            let scaled = value as f64 / threshold as f64;
            let rounded = (scaled * 10.0).round() / 10.0;

            return if rounded.fract().abs() < f64::EPSILON {
                format!("{rounded:.0}{suffix}")
            } else {
                format!("{rounded:.1}{suffix}")
            };
        }
    }

    // Only zero falls through every tier.
    value.to_string()
}
