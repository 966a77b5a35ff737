use crate::debt;
use crate::errors::Error;
use crate::math;
use crate::oracle;
use crate::registry;
use crate::vault;
use soroban_sdk::{contracttype, Address, Env};

/// Fixed-point scale for health factors: 1.0 == 10^18.
pub const PRECISION: i128 = 1_000_000_000_000_000_000;
/// Fraction of collateral value that counts toward solvency (50% => 200%
/// overcollateralization).
pub const LIQUIDATION_THRESHOLD: i128 = 50;
pub const LIQUIDATION_PRECISION: i128 = 100;
/// Positions below this health factor are liquidatable.
pub const MIN_HEALTH_FACTOR: i128 = PRECISION;

/// Snapshot of a user's position for off-chain consumers.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct AccountSummary {
    pub collateral_value_usd: i128,
    pub debt: i128,
    pub health_factor: i128,
}

/// Total USD value of a user's deposited collateral across every registered
/// asset, at current feed prices. Zero balances are skipped so a missing
/// feed for an untouched asset cannot fail the valuation.
pub fn collateral_value_usd(env: &Env, user: &Address) -> Result<i128, Error> {
    let mut total: i128 = 0;
    for asset in registry::supported_assets(env).iter() {
        let balance = vault::balance_of(env, user, &asset);
        if balance == 0 {
            continue;
        }
        let value = oracle::usd_value(env, &asset, balance)?;
        total = total.checked_add(value).ok_or(Error::Overflow)?;
    }
    Ok(total)
}

/// A user's current health factor.
///
/// ```text
/// adjusted = collateral_value_usd * LIQUIDATION_THRESHOLD / LIQUIDATION_PRECISION
/// health   = adjusted * PRECISION / debt
/// ```
///
/// Zero debt returns `i128::MAX` (maximally healthy); a factor whose exact
/// value would exceed `i128::MAX` clamps to the same sentinel. Both are
/// unliquidatable by construction.
pub fn health_factor(env: &Env, user: &Address) -> Result<i128, Error> {
    let debt = debt::minted_of(env, user);
    if debt == 0 {
        // Debt-free positions are maximally healthy without consulting any
        // feed, so a missing price cannot block a plain redemption.
        return Ok(i128::MAX);
    }
    let collateral_value = collateral_value_usd(env, user)?;
    health_factor_from(env, collateral_value, debt)
}

/// Health factor from an already-computed valuation and debt figure.
pub fn health_factor_from(
    env: &Env,
    collateral_value: i128,
    debt_minted: i128,
) -> Result<i128, Error> {
    if debt_minted == 0 {
        return Ok(i128::MAX);
    }
    let adjusted = collateral_value
        .checked_mul(LIQUIDATION_THRESHOLD)
        .ok_or(Error::Overflow)?
        .checked_div(LIQUIDATION_PRECISION)
        .ok_or(Error::Overflow)?;
    math::mul_div_capped(env, adjusted, PRECISION, debt_minted)
}

/// Fail with `HealthFactorTooLow` if the user's position is below the
/// minimum health factor.
pub fn require_healthy(env: &Env, user: &Address) -> Result<(), Error> {
    if health_factor(env, user)? < MIN_HEALTH_FACTOR {
        return Err(Error::HealthFactorTooLow);
    }
    Ok(())
}

/// Assemble the position snapshot exposed through the view surface.
pub fn account_summary(env: &Env, user: &Address) -> Result<AccountSummary, Error> {
    let collateral_value = collateral_value_usd(env, user)?;
    let debt = debt::minted_of(env, user);
    let factor = health_factor_from(env, collateral_value, debt)?;
    Ok(AccountSummary {
        collateral_value_usd: collateral_value,
        debt,
        health_factor: factor,
    })
}
