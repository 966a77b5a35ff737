use crate::debt;
use crate::errors::Error;
use crate::events::{self, LiquidationEvent};
use crate::health;
use crate::oracle;
use crate::registry;
use crate::vault;
use soroban_sdk::{Address, Env};

/// Liquidator bonus as a percentage of the debt-equivalent collateral.
pub const LIQUIDATION_BONUS: i128 = 10;

/// Liquidate an undercollateralized position
///
/// Seizes the debt-equivalent collateral plus a 10% bonus from the target
/// and hands it to the liquidator, who funds the burn of `debt_to_cover`
/// debt tokens from their own wallet. The whole sequence commits or none of
/// it does.
///
/// # Arguments
/// * `env` - The contract environment
/// * `liquidator` - The liquidator's address
/// * `user` - The position being liquidated
/// * `collateral_asset` - The collateral asset to seize
/// * `debt_to_cover` - USD-denominated debt amount the liquidator repays
///
/// # Returns
/// Returns `(collateral_seized, debt_covered)` on success
///
/// # Errors
/// - `InvalidAmount` - `debt_to_cover` is zero or negative
/// - `AssetNotRegistered` - Collateral asset is not registered
/// - `HealthFactorOk` - Target is at or above the minimum health factor
/// - `InsufficientBalance` - Target's vault holds less than the seizure
/// - `InsufficientDebt` - Target owes less than `debt_to_cover`
/// - `HealthFactorNotImproved` - Seizure left the target worse off
/// - `HealthFactorTooLow` - The liquidator's own position ends unhealthy
pub fn liquidate(
    env: &Env,
    liquidator: &Address,
    user: &Address,
    collateral_asset: &Address,
    debt_to_cover: i128,
) -> Result<(i128, i128), Error> {
    if debt_to_cover <= 0 {
        return Err(Error::InvalidAmount);
    }
    registry::require_registered(env, collateral_asset)?;

    let starting_health_factor = health::health_factor(env, user)?;
    if starting_health_factor >= health::MIN_HEALTH_FACTOR {
        return Err(Error::HealthFactorOk);
    }

    let token_amount = oracle::token_amount_from_usd(env, collateral_asset, debt_to_cover)?;
    let bonus = token_amount
        .checked_mul(LIQUIDATION_BONUS)
        .ok_or(Error::Overflow)?
        .checked_div(health::LIQUIDATION_PRECISION)
        .ok_or(Error::Overflow)?;
    let total_seized = token_amount.checked_add(bonus).ok_or(Error::Overflow)?;

    vault::redeem(env, collateral_asset, total_seized, user, liquidator)?;
    debt::burn_debt(env, liquidator, user, debt_to_cover)?;

    let ending_health_factor = health::health_factor(env, user)?;
    if ending_health_factor < starting_health_factor {
        return Err(Error::HealthFactorNotImproved);
    }

    health::require_healthy(env, liquidator)?;

    events::emit_liquidation(
        env,
        LiquidationEvent {
            liquidator: liquidator.clone(),
            user: user.clone(),
            collateral_asset: collateral_asset.clone(),
            debt_covered: debt_to_cover,
            collateral_seized: total_seized,
            bonus_amount: bonus,
            timestamp: env.ledger().timestamp(),
        },
    );

    Ok((total_seized, debt_to_cover))
}
