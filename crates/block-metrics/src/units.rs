//! Wei to gwei conversion for fee metrics.

use alloy_primitives::U256;

/// Number of wei in one gwei.
const WEI_PER_GWEI: u64 = 1_000_000_000;

/// Converts a non-negative wei amount to a float gwei amount.
///
/// The division is performed on integers first and the quotient and
/// remainder are combined afterwards. Casting the full wei value to `f64`
/// before dividing would silently drop low-order wei for anything past the
/// float's exact-integer range (~2^53), which mainnet base fees exceed.
/// The gwei quotient of any realistic fee fits a `u64` comfortably; it is
/// saturated rather than wrapped if it ever does not.
pub fn wei_to_gwei(wei: U256) -> f64 {
    let (quo, rem) = wei.div_rem(U256::from(WEI_PER_GWEI));
    quo.saturating_to::<u64>() as f64 + rem.to::<u64>() as f64 / WEI_PER_GWEI as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_wei_is_exactly_zero() {
        assert_eq!(wei_to_gwei(U256::ZERO), 0.0);
    }

    #[test]
    fn whole_gwei_values_are_exact() {
        assert_eq!(wei_to_gwei(U256::from(1_000_000_000u64)), 1.0);
        assert_eq!(wei_to_gwei(U256::from(1_500_000_000u64)), 1.5);
        // 2 ETH worth of wei.
        assert_eq!(wei_to_gwei(U256::from(2_000_000_000_000_000_000u64)), 2_000_000_000.0);
    }

    #[test]
    fn sub_gwei_remainder_is_kept() {
        assert_eq!(wei_to_gwei(U256::from(1u64)), 1e-9);
        assert_eq!(wei_to_gwei(U256::from(250_000_000u64)), 0.25);
    }

    #[test]
    fn round_trips_within_float_tolerance() {
        // Values past 2^53 wei, where a naive full-value float cast loses
        // the low-order digits.
        for wei in [
            123_456_789_123_456_789u128,
            987_654_321_987_654_321_987u128,
            u128::from(u64::MAX) * 1_000 + 7,
        ] {
            let gwei = wei_to_gwei(U256::from(wei));
            let back = gwei * 1e9;
            let expected = wei as f64;
            assert!(
                (back - expected).abs() / expected < 1e-12,
                "wei {wei}: got {back}, expected {expected}"
            );
        }
    }

    #[test]
    fn fractional_part_survives_large_quotients() {
        // 123456789.123456789 gwei; the fraction must not be truncated away.
        let wei = U256::from(123_456_789_123_456_789u64);
        let gwei = wei_to_gwei(wei);
        assert!((gwei - 123_456_789.123456789).abs() < 1e-6);
    }
}
