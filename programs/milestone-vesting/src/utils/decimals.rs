//! Conversion between native token amounts and the canonical 18-decimal
//! fixed-point accounting unit.
//!
//! All amounts are fixed-point integers; `denormalize` floors, never rounds up,
//! so a conversion round-trip can only shrink an amount. The ledger must always
//! record the re-normalized (post-floor) value of whatever was transferred.

use crate::constants::NORMALIZED_DECIMALS;
use crate::error::VestingError;

fn scaling_factor(decimals: u8) -> Result<u128, VestingError> {
    let gap = NORMALIZED_DECIMALS
        .checked_sub(decimals)
        .ok_or(VestingError::UnsupportedAssetDecimals)?;
    10u128
        .checked_pow(gap as u32)
        .ok_or(VestingError::MathOverflow)
}

/// Native amount of an asset with `decimals` precision -> normalized units.
pub fn normalize(native: u64, decimals: u8) -> Result<u128, VestingError> {
    let factor = scaling_factor(decimals)?;
    (native as u128)
        .checked_mul(factor)
        .ok_or(VestingError::MathOverflow)
}

/// Normalized units -> native amount, flooring any sub-precision remainder.
pub fn denormalize(normalized: u128, decimals: u8) -> Result<u64, VestingError> {
    let factor = scaling_factor(decimals)?;
    u64::try_from(normalized / factor).map_err(|_| VestingError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eighteen_decimal_asset_is_identity() {
        let amount = 1_234_567_890_123_456_789u64;
        assert_eq!(normalize(amount, 18).unwrap(), amount as u128);
        assert_eq!(denormalize(amount as u128, 18).unwrap(), amount);
    }

    #[test]
    fn six_decimal_fidelity() {
        // 123.456789 in normalized units maps to exactly 123456789 native units
        // of a 6-decimal asset, and back without drift.
        let normalized = 123_456_789_000_000_000_000u128;
        let native = denormalize(normalized, 6).unwrap();
        assert_eq!(native, 123_456_789);
        assert_eq!(normalize(native, 6).unwrap(), normalized);
    }

    #[test]
    fn denormalize_floors_sub_precision_dust() {
        // Anything below 10^12 is invisible to a 6-decimal asset.
        let normalized = 123_456_789_999_999_999_999u128;
        assert_eq!(denormalize(normalized, 6).unwrap(), 123_456_789);
        assert_eq!(denormalize(999_999_999_999u128, 6).unwrap(), 0);
    }

    #[test]
    fn decimals_above_scale_are_rejected() {
        assert!(matches!(
            normalize(1, 19),
            Err(VestingError::UnsupportedAssetDecimals)
        ));
    }

    #[test]
    fn denormalize_rejects_amounts_above_native_range() {
        let too_big = (u64::MAX as u128 + 1) * 1_000_000_000_000u128;
        assert!(matches!(
            denormalize(too_big, 6),
            Err(VestingError::MathOverflow)
        ));
    }
}
