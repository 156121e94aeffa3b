//! Display formatting for scores, TVL and APY

/// Score with one decimal: `83.3`
pub fn format_score(score: f64) -> String {
    format!("{:.1}", score)
}

/// Scale, suffix and decimals for compact USD amounts, smallest first
const TVL_UNITS: [(f64, &str, usize); 4] = [
    (1.0, "", 0),
    (1e3, "K", 2),
    (1e6, "M", 2),
    (1e9, "B", 2),
];

/// Compact USD amount: `$1.23B`, `$45.60M`, `$12.30K`, `$999`
///
/// The unit is picked after rounding, so `999_999` prints as `$1.00M`.
pub fn format_tvl(tvl_usd: f64) -> String {
    if !tvl_usd.is_finite() || tvl_usd <= 0.0 {
        return "$0".to_string();
    }

    let mut idx = TVL_UNITS
        .iter()
        .rposition(|(scale, _, _)| tvl_usd >= *scale)
        .unwrap_or(0);
    loop {
        let (scale, suffix, decimals) = TVL_UNITS[idx];
        let mantissa = format!("{:.*}", decimals, tvl_usd / scale);
        let rolled_over = mantissa.parse::<f64>().map_or(false, |m| m >= 1000.0);
        if rolled_over && idx + 1 < TVL_UNITS.len() {
            idx += 1;
            continue;
        }
        return format!("${}{}", mantissa, suffix);
    }
}

/// APY in percent with two decimals, `-` when unknown
pub fn format_apy(apy: Option<f64>) -> String {
    match apy {
        Some(apy) if apy.is_finite() => format!("{:.2}%", apy),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(100.0), "100.0");
        assert_eq!(format_score(50.0 / 120.0 * 100.0), "41.7");
    }

    #[test]
    fn test_format_tvl() {
        assert_eq!(format_tvl(1_234_000_000.0), "$1.23B");
        assert_eq!(format_tvl(45_600_000.0), "$45.60M");
        assert_eq!(format_tvl(12_300.0), "$12.30K");
        assert_eq!(format_tvl(999.0), "$999");
        assert_eq!(format_tvl(0.0), "$0");
        assert_eq!(format_tvl(-10.0), "$0");
        assert_eq!(format_tvl(f64::NAN), "$0");
    }

    #[test]
    fn test_format_tvl_rounds_up_into_next_unit() {
        assert_eq!(format_tvl(999.4), "$999");
        assert_eq!(format_tvl(999.6), "$1.00K");
        assert_eq!(format_tvl(999_994.0), "$999.99K");
        assert_eq!(format_tvl(999_999.0), "$1.00M");
        assert_eq!(format_tvl(999_999_999.0), "$1.00B");
        assert_eq!(format_tvl(999_996_000.0), "$1.00B");
        assert_eq!(format_tvl(1_000.0), "$1.00K");
    }

    #[test]
    fn test_format_tvl_largest_unit_does_not_roll_over() {
        assert_eq!(format_tvl(1_500_000_000_000.0), "$1500.00B");
    }

    #[test]
    fn test_format_apy() {
        assert_eq!(format_apy(Some(4.126)), "4.13%");
        assert_eq!(format_apy(Some(0.0)), "0.00%");
        assert_eq!(format_apy(None), "-");
        assert_eq!(format_apy(Some(f64::INFINITY)), "-");
    }
}
