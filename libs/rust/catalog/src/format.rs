/// Renders a counter the way the DAO cards display it: `12.4K`, `1.2M`, `950`.
///
/// Matches `(n / unit).toFixed(1)`: the quotient is an `f64` and the first
/// decimal is rounded half-up on its exact binary value, so `12_450` renders
/// as `12.4K` while `1_250` renders as `1.3K`.
pub fn compact_count(value: u64) -> String {
    const MILLION: u64 = 1_000_000;
    const THOUSAND: u64 = 1_000;

    let (unit, suffix) = if value >= MILLION {
        (MILLION, "M")
    } else if value >= THOUSAND {
        (THOUSAND, "K")
    } else {
        return value.to_string();
    };

    let quotient = value as f64 / unit as f64;
    let mut tenths = u128::from(value) * 10 / u128::from(unit);
    if reaches_half(quotient, 2 * tenths + 1) {
        tenths += 1;
    }
    format!("{}.{}{}", tenths / 10, tenths % 10, suffix)
}

/// Whether `x >= tie / 20`, compared exactly on the bits of `x`. `x` must be
/// finite and at least 1.
fn reaches_half(x: f64, tie: u128) -> bool {
    let bits = x.to_bits();
    let mantissa = u128::from((bits & ((1 << 52) - 1)) | (1 << 52));
    let exponent = ((bits >> 52) & 0x7ff) as i32 - 1075;

    // x = mantissa * 2^exponent
    if exponent >= 0 {
        (mantissa * 20) << exponent >= tie
    } else {
        mantissa * 20 >= tie << exponent.unsigned_abs()
    }
}
