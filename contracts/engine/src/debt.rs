use crate::errors::Error;
use crate::events::{self, DebtBurnedEvent, DebtMintedEvent};
use crate::registry;
use soroban_sdk::{contracttype, token, Address, Env};

/// Storage keys for the debt ledger
#[contracttype]
#[derive(Clone)]
pub enum DebtDataKey {
    /// Minted debt recorded against a user
    Minted(Address),
    /// Total debt across all users
    TotalDebt,
}

/// Record newly minted debt against a user
///
/// Ledger-only; callers pair this with [`mint_external`] and a solvency
/// check. The increment happens before the check so the check sees the
/// post-mint state.
///
/// # Returns
/// Returns the user's updated recorded debt
pub fn increase_debt(env: &Env, user: &Address, amount: i128) -> Result<i128, Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    let new_debt = minted_of(env, user)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    let new_total = total_debt(env).checked_add(amount).ok_or(Error::Overflow)?;

    set_minted(env, user, new_debt);
    set_total_debt(env, new_total);
    Ok(new_debt)
}

/// Reduce a user's recorded debt
///
/// # Errors
/// - `InvalidAmount` - Amount is zero or negative
/// - `InsufficientDebt` - The user's recorded debt is smaller than `amount`
pub fn decrease_debt(env: &Env, user: &Address, amount: i128) -> Result<i128, Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    let minted = minted_of(env, user);
    if minted < amount {
        return Err(Error::InsufficientDebt);
    }
    let new_debt = minted.checked_sub(amount).ok_or(Error::Overflow)?;
    let new_total = total_debt(env).checked_sub(amount).ok_or(Error::Overflow)?;

    set_minted(env, user, new_debt);
    set_total_debt(env, new_total);
    Ok(new_debt)
}

/// Mint debt tokens to `to` through the token's admin interface. The engine
/// must be the debt token's admin; a rejected mint traps and discards the
/// enclosing operation, ledger increment included.
pub fn mint_external(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
    let debt_token = registry::debt_token(env)?;
    token::StellarAssetClient::new(env, &debt_token).mint(to, &amount);
    Ok(())
}

/// Pull `amount` debt tokens from `payer` into engine custody and destroy
/// them. The payer must have approved the engine beforehand; a failed pull
/// traps and discards the enclosing operation.
pub fn burn_external(env: &Env, payer: &Address, amount: i128) -> Result<(), Error> {
    let debt_token = registry::debt_token(env)?;
    let engine = env.current_contract_address();
    let client = token::Client::new(env, &debt_token);
    client.transfer_from(&engine, payer, &engine, &amount);
    client.burn(&engine, &amount);
    Ok(())
}

/// Mint debt against a user: ledger increment plus token mint, one event.
///
/// The solvency check is the caller's responsibility and must run after
/// this returns.
///
/// # Returns
/// Returns the user's updated recorded debt
pub fn mint_debt(env: &Env, user: &Address, amount: i128) -> Result<i128, Error> {
    let new_debt = increase_debt(env, user, amount)?;
    mint_external(env, user, amount)?;

    events::emit_debt_minted(
        env,
        DebtMintedEvent {
            user: user.clone(),
            amount,
            new_debt,
            timestamp: env.ledger().timestamp(),
        },
    );

    Ok(new_debt)
}

/// Burn debt against a user, funded by `payer`: token burn plus ledger
/// decrement, one event. `payer` and `user` differ during liquidation.
///
/// # Returns
/// Returns the user's updated recorded debt
pub fn burn_debt(env: &Env, payer: &Address, user: &Address, amount: i128) -> Result<i128, Error> {
    let new_debt = decrease_debt(env, user, amount)?;
    burn_external(env, payer, amount)?;

    events::emit_debt_burned(
        env,
        DebtBurnedEvent {
            payer: payer.clone(),
            user: user.clone(),
            amount,
            new_debt,
            timestamp: env.ledger().timestamp(),
        },
    );

    Ok(new_debt)
}

/// A user's recorded debt.
pub fn minted_of(env: &Env, user: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DebtDataKey::Minted(user.clone()))
        .unwrap_or(0)
}

/// Total debt across all users. Matches the debt token's supply as long as
/// every supply change routes through this module.
pub fn total_debt(env: &Env) -> i128 {
    env.storage()
        .persistent()
        .get(&DebtDataKey::TotalDebt)
        .unwrap_or(0)
}

fn set_minted(env: &Env, user: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DebtDataKey::Minted(user.clone()), &amount);
}

fn set_total_debt(env: &Env, amount: i128) {
    env.storage()
        .persistent()
        .set(&DebtDataKey::TotalDebt, &amount);
}
