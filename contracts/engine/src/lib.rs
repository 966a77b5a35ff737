//! # StellarSynth Engine
//!
//! A collateralized debt engine that accepts registered collateral tokens,
//! mints a pegged synthetic debt token against their oracle-priced USD
//! value, and enforces a minimum health factor of 1.0 at a 50% liquidation
//! threshold (200% overcollateralization). Positions that fall below the
//! minimum can be liquidated by third parties for a 10% collateral bonus.
//!
//! The engine must be the debt token's admin so that every supply change
//! routes through the debt ledger.

#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

mod debt;
mod errors;
mod events;
mod health;
mod liquidate;
mod math;
mod oracle;
mod pause;
mod reentrancy;
mod registry;
mod vault;

pub use errors::Error;
pub use health::AccountSummary;
pub use oracle::PriceFeedData;
pub use pause::PauseType;

use reentrancy::ReentrancyGuard;

#[cfg(test)]
mod initialize_test;


#[cfg(test)]
mod oracle_test;


#[cfg(test)]
mod health_test;




#[contract]
pub struct SynthEngine;

#[contractimpl]
impl SynthEngine {
    /// Initialize the engine
    ///
    /// Records the admin, binds each collateral asset to its authorized
    /// oracle address, and stores the debt token the engine administers.
    /// Can only be called once.
    ///
    /// # Arguments
    /// * `admin` - The admin address for pause switches
    /// * `collateral_assets` - Collateral token addresses, ordered
    /// * `price_oracles` - Oracle addresses, parallel to `collateral_assets`
    /// * `debt_token` - The debt token contract (engine must be its admin)
    ///
    /// # Errors
    /// - `AlreadyInitialized` - The engine was already initialized
    /// - `ConfigMismatch` - Empty lists, or list lengths differ
    pub fn initialize(
        env: Env,
        admin: Address,
        collateral_assets: Vec<Address>,
        price_oracles: Vec<Address>,
        debt_token: Address,
    ) -> Result<(), Error> {
        registry::initialize(&env, admin, collateral_assets, price_oracles, debt_token)
    }

    /// Deposit collateral into the vault
    ///
    /// Pulls `amount` of `asset` from the user into engine custody (the
    /// user must have approved the engine) and credits their vault balance.
    /// Depositing can only improve solvency, so no health check runs.
    ///
    /// # Arguments
    /// * `user` - The depositor's address (must authorize)
    /// * `asset` - The collateral asset address
    /// * `amount` - The amount to deposit
    ///
    /// # Returns
    /// Returns the user's updated vault balance
    ///
    /// # Errors
    /// - `InvalidAmount` - Amount is zero or negative
    /// - `AssetNotRegistered` - Asset is not in the collateral set
    /// - `OperationPaused` - Deposits are paused
    /// - `ReentrantCall` - Re-entered through a token callback
    pub fn deposit_collateral(
        env: Env,
        user: Address,
        asset: Address,
        amount: i128,
    ) -> Result<i128, Error> {
        user.require_auth();
        let _guard = ReentrancyGuard::new(&env)?;
        pause::require_not_paused(&env, PauseType::Deposit)?;

        vault::deposit(&env, &user, &asset, amount)
    }

    /// Deposit collateral and mint debt in one atomic operation
    ///
    /// Runs the deposit, records and mints the requested debt, then checks
    /// the resulting position once at the end. Any failure discards every
    /// step.
    ///
    /// # Arguments
    /// * `user` - The position owner (must authorize)
    /// * `asset` - The collateral asset to deposit
    /// * `collateral_amount` - The amount of collateral to deposit
    /// * `debt_amount` - The amount of debt to mint
    ///
    /// # Errors
    /// - `HealthFactorTooLow` - The combined position is undercollateralized
    pub fn deposit_collateral_and_mint_debt(
        env: Env,
        user: Address,
        asset: Address,
        collateral_amount: i128,
        debt_amount: i128,
    ) -> Result<(), Error> {
        user.require_auth();
        let _guard = ReentrancyGuard::new(&env)?;
        pause::require_not_paused(&env, PauseType::Deposit)?;
        pause::require_not_paused(&env, PauseType::Mint)?;

        vault::deposit(&env, &user, &asset, collateral_amount)?;
        debt::mint_debt(&env, &user, debt_amount)?;
        health::require_healthy(&env, &user)
    }

    /// Redeem collateral from the vault
    ///
    /// Debits the user's vault balance, transfers the tokens back to them,
    /// and checks the remaining position.
    ///
    /// # Arguments
    /// * `user` - The position owner (must authorize)
    /// * `asset` - The collateral asset address
    /// * `amount` - The amount to redeem
    ///
    /// # Returns
    /// Returns the user's updated vault balance
    ///
    /// # Errors
    /// - `InsufficientBalance` - Vault balance is smaller than `amount`
    /// - `HealthFactorTooLow` - The remaining position is undercollateralized
    pub fn redeem_collateral(
        env: Env,
        user: Address,
        asset: Address,
        amount: i128,
    ) -> Result<i128, Error> {
        user.require_auth();
        let _guard = ReentrancyGuard::new(&env)?;
        pause::require_not_paused(&env, PauseType::Redeem)?;

        let new_balance = vault::redeem(&env, &asset, amount, &user, &user)?;
        health::require_healthy(&env, &user)?;
        Ok(new_balance)
    }

    /// Burn debt and redeem collateral in one atomic operation
    ///
    /// Burns the debt first so the freed collateral is measured against the
    /// reduced position; the health check runs after the redemption.
    ///
    /// # Arguments
    /// * `user` - The position owner (must authorize)
    /// * `asset` - The collateral asset to redeem
    /// * `collateral_amount` - The amount of collateral to redeem
    /// * `debt_amount` - The amount of debt to burn
    pub fn redeem_collateral_for_debt(
        env: Env,
        user: Address,
        asset: Address,
        collateral_amount: i128,
        debt_amount: i128,
    ) -> Result<(), Error> {
        user.require_auth();
        let _guard = ReentrancyGuard::new(&env)?;
        pause::require_not_paused(&env, PauseType::Burn)?;
        pause::require_not_paused(&env, PauseType::Redeem)?;

        debt::burn_debt(&env, &user, &user, debt_amount)?;
        vault::redeem(&env, &asset, collateral_amount, &user, &user)?;
        health::require_healthy(&env, &user)
    }

    /// Mint debt tokens against deposited collateral
    ///
    /// Records the debt, mints the tokens to the user, and checks the
    /// resulting position.
    ///
    /// # Arguments
    /// * `user` - The position owner (must authorize)
    /// * `amount` - The amount of debt to mint
    ///
    /// # Returns
    /// Returns the user's updated recorded debt
    ///
    /// # Errors
    /// - `InvalidAmount` - Amount is zero or negative
    /// - `HealthFactorTooLow` - The position cannot support the new debt
    pub fn mint_debt(env: Env, user: Address, amount: i128) -> Result<i128, Error> {
        user.require_auth();
        let _guard = ReentrancyGuard::new(&env)?;
        pause::require_not_paused(&env, PauseType::Mint)?;

        let new_debt = debt::mint_debt(&env, &user, amount)?;
        health::require_healthy(&env, &user)?;
        Ok(new_debt)
    }

    /// Burn debt tokens and reduce the user's recorded debt
    ///
    /// Pulls the tokens from the user's wallet (pre-approval required) and
    /// destroys them.
    ///
    /// # Arguments
    /// * `user` - The position owner (must authorize)
    /// * `amount` - The amount of debt to burn
    ///
    /// # Returns
    /// Returns the user's updated recorded debt
    ///
    /// # Errors
    /// - `InsufficientDebt` - Recorded debt is smaller than `amount`
    pub fn burn_debt(env: Env, user: Address, amount: i128) -> Result<i128, Error> {
        user.require_auth();
        let _guard = ReentrancyGuard::new(&env)?;
        pause::require_not_paused(&env, PauseType::Burn)?;

        let new_debt = debt::burn_debt(&env, &user, &user, amount)?;
        health::require_healthy(&env, &user)?;
        Ok(new_debt)
    }

    /// Liquidate an undercollateralized position
    ///
    /// The liquidator repays `debt_to_cover` of the target's debt from
    /// their own wallet and receives the debt-equivalent collateral plus a
    /// 10% bonus from the target's vault.
    ///
    /// # Arguments
    /// * `liquidator` - The liquidator's address (must authorize)
    /// * `user` - The position being liquidated
    /// * `collateral_asset` - The collateral asset to seize
    /// * `debt_to_cover` - USD-denominated debt amount to repay
    ///
    /// # Returns
    /// Returns `(collateral_seized, debt_covered)`
    ///
    /// # Errors
    /// - `HealthFactorOk` - Target is not liquidatable
    /// - `HealthFactorNotImproved` - Seizure left the target worse off
    /// - `HealthFactorTooLow` - The liquidator's own position ends unhealthy
    pub fn liquidate(
        env: Env,
        liquidator: Address,
        user: Address,
        collateral_asset: Address,
        debt_to_cover: i128,
    ) -> Result<(i128, i128), Error> {
        liquidator.require_auth();
        let _guard = ReentrancyGuard::new(&env)?;
        pause::require_not_paused(&env, PauseType::Liquidation)?;

        liquidate::liquidate(&env, &liquidator, &user, &collateral_asset, debt_to_cover)
    }

    /// Push a new price for a registered asset
    ///
    /// # Arguments
    /// * `caller` - The pusher (must authorize and match the asset's
    ///   registered oracle address)
    /// * `asset` - The asset whose price is updated
    /// * `price` - The new USD price, strictly positive
    /// * `decimals` - Number of decimal places the price carries
    ///
    /// # Returns
    /// Returns the stored price
    pub fn update_price(
        env: Env,
        caller: Address,
        asset: Address,
        price: i128,
        decimals: u32,
    ) -> Result<i128, Error> {
        oracle::update_price(&env, caller, asset, price, decimals)
    }

    /// Set the pause state of an operation class (admin only)
    pub fn set_paused(
        env: Env,
        caller: Address,
        operation: PauseType,
        paused: bool,
    ) -> Result<(), Error> {
        pause::set_pause(&env, caller, operation, paused)
    }

    /// A user's current health factor, scaled by 10^18. Zero debt reads as
    /// `i128::MAX`.
    pub fn get_health_factor(env: Env, user: Address) -> Result<i128, Error> {
        health::health_factor(&env, &user)
    }

    /// Collateral value, debt, and health factor for a user in one call.
    pub fn get_account_summary(env: Env, user: Address) -> Result<AccountSummary, Error> {
        health::account_summary(&env, &user)
    }

    /// Total USD value of a user's deposited collateral at current prices.
    pub fn get_collateral_value(env: Env, user: Address) -> Result<i128, Error> {
        health::collateral_value_usd(&env, &user)
    }

    /// A user's deposited balance for an asset.
    pub fn get_collateral_balance(env: Env, user: Address, asset: Address) -> i128 {
        vault::balance_of(&env, &user, &asset)
    }

    /// Total deposited across all users for an asset.
    pub fn get_total_deposited(env: Env, asset: Address) -> i128 {
        vault::total_deposited(&env, &asset)
    }

    /// A user's recorded debt.
    pub fn get_debt(env: Env, user: Address) -> i128 {
        debt::minted_of(&env, &user)
    }

    /// Total debt across all users.
    pub fn get_total_debt(env: Env) -> i128 {
        debt::total_debt(&env)
    }

    /// The current price feed record for an asset.
    pub fn get_price(env: Env, asset: Address) -> Result<PriceFeedData, Error> {
        oracle::get_price(&env, &asset)
    }

    /// USD value of `amount` base units of `asset` under the current feed.
    pub fn get_usd_value(env: Env, asset: Address, amount: i128) -> Result<i128, Error> {
        oracle::usd_value(&env, &asset, amount)
    }

    /// Token amount of `asset` worth `usd_value` under the current feed.
    pub fn get_token_amount_from_usd(
        env: Env,
        asset: Address,
        usd_value: i128,
    ) -> Result<i128, Error> {
        oracle::token_amount_from_usd(&env, &asset, usd_value)
    }

    /// The registered collateral assets, in registration order.
    pub fn get_supported_assets(env: Env) -> Vec<Address> {
        registry::supported_assets(&env)
    }

    /// The debt token the engine administers.
    pub fn get_debt_token(env: Env) -> Result<Address, Error> {
        registry::debt_token(&env)
    }
}
