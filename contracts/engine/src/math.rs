use crate::errors::Error;
use soroban_sdk::{Env, U256};

/// Compute `10^exp` with overflow checking.
pub fn pow10(exp: u32) -> Result<i128, Error> {
    10i128.checked_pow(exp).ok_or(Error::Overflow)
}

/// Compute `a * b / denom` in 256-bit arithmetic.
///
/// The intermediate product of two i128 magnitudes can exceed i128, so the
/// multiplication is widened to `U256` and only the final quotient is
/// narrowed back. Inputs must be non-negative and `denom` strictly positive.
///
/// # Errors
/// - `Overflow` - A negative input, a non-positive denominator, or a
///   quotient that does not fit in `i128`
pub fn mul_div(env: &Env, a: i128, b: i128, denom: i128) -> Result<i128, Error> {
    let quotient = mul_div_wide(env, a, b, denom)?;
    quotient
        .to_u128()
        .and_then(|q| i128::try_from(q).ok())
        .ok_or(Error::Overflow)
}

/// Like [`mul_div`], but a quotient above `i128::MAX` saturates to
/// `i128::MAX` instead of failing.
pub fn mul_div_capped(env: &Env, a: i128, b: i128, denom: i128) -> Result<i128, Error> {
    let quotient = mul_div_wide(env, a, b, denom)?;
    Ok(quotient
        .to_u128()
        .and_then(|q| i128::try_from(q).ok())
        .unwrap_or(i128::MAX))
}

fn mul_div_wide(env: &Env, a: i128, b: i128, denom: i128) -> Result<U256, Error> {
    if a < 0 || b < 0 || denom <= 0 {
        return Err(Error::Overflow);
    }
    let wide_a = U256::from_u128(env, a as u128);
    let wide_b = U256::from_u128(env, b as u128);
    let wide_denom = U256::from_u128(env, denom as u128);
    Ok(wide_a.mul(&wide_b).div(&wide_denom))
}
