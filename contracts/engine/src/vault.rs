use crate::errors::Error;
use crate::events::{self, CollateralDepositedEvent, CollateralRedeemedEvent};
use crate::registry;
use soroban_sdk::{contracttype, token, Address, Env};

/// Storage keys for vault balances
#[contracttype]
#[derive(Clone)]
pub enum VaultDataKey {
    /// Deposited balance for a (user, asset) pair
    Balance(Address, Address),
    /// Total deposited across all users for an asset
    TotalDeposited(Address),
}

/// Deposit collateral into the vault
///
/// Credits the user's balance, then pulls the tokens into engine custody via
/// `transfer_from` (the user must have approved the engine beforehand). A
/// failed pull traps and rolls back the credit with it.
///
/// # Arguments
/// * `env` - The contract environment
/// * `user` - The depositor's address
/// * `asset` - The collateral asset address
/// * `amount` - The amount to deposit
///
/// # Returns
/// Returns the user's updated vault balance
///
/// # Errors
/// - `InvalidAmount` - Amount is zero or negative
/// - `AssetNotRegistered` - Asset is not in the collateral set
/// - `Overflow` - Balance or total would overflow
pub fn deposit(env: &Env, user: &Address, asset: &Address, amount: i128) -> Result<i128, Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    registry::require_registered(env, asset)?;

    let new_balance = balance_of(env, user, asset)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    let new_total = total_deposited(env, asset)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;

    set_balance(env, user, asset, new_balance);
    set_total_deposited(env, asset, new_total);

    let engine = env.current_contract_address();
    token::Client::new(env, asset).transfer_from(&engine, user, &engine, &amount);

    events::emit_collateral_deposited(
        env,
        CollateralDepositedEvent {
            user: user.clone(),
            asset: asset.clone(),
            amount,
            new_balance,
            timestamp: env.ledger().timestamp(),
        },
    );

    Ok(new_balance)
}

/// Redeem collateral out of the vault
///
/// Debits `from`'s balance and transfers the tokens from engine custody to
/// `to`. `to` is the position owner for a plain redemption and the
/// liquidator for a seizure. Solvency of the remaining position is the
/// caller's responsibility.
///
/// # Returns
/// Returns `from`'s updated vault balance
///
/// # Errors
/// - `InvalidAmount` - Amount is zero or negative
/// - `AssetNotRegistered` - Asset is not in the collateral set
/// - `InsufficientBalance` - `from` has less than `amount` deposited
pub fn redeem(
    env: &Env,
    asset: &Address,
    amount: i128,
    from: &Address,
    to: &Address,
) -> Result<i128, Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    registry::require_registered(env, asset)?;

    let balance = balance_of(env, from, asset);
    if balance < amount {
        return Err(Error::InsufficientBalance);
    }
    let new_balance = balance.checked_sub(amount).ok_or(Error::Overflow)?;
    let new_total = total_deposited(env, asset)
        .checked_sub(amount)
        .ok_or(Error::Overflow)?;

    set_balance(env, from, asset, new_balance);
    set_total_deposited(env, asset, new_total);

    let engine = env.current_contract_address();
    token::Client::new(env, asset).transfer(&engine, to, &amount);

    events::emit_collateral_redeemed(
        env,
        CollateralRedeemedEvent {
            from: from.clone(),
            to: to.clone(),
            asset: asset.clone(),
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );

    Ok(new_balance)
}

/// A user's deposited balance for an asset.
pub fn balance_of(env: &Env, user: &Address, asset: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&VaultDataKey::Balance(user.clone(), asset.clone()))
        .unwrap_or(0)
}

/// Total deposited across all users for an asset.
pub fn total_deposited(env: &Env, asset: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&VaultDataKey::TotalDeposited(asset.clone()))
        .unwrap_or(0)
}

fn set_balance(env: &Env, user: &Address, asset: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&VaultDataKey::Balance(user.clone(), asset.clone()), &amount);
}

fn set_total_deposited(env: &Env, asset: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&VaultDataKey::TotalDeposited(asset.clone()), &amount);
}
