use crate::errors::Error;
use crate::events::{self, PauseStateChangedEvent};
use crate::registry;
use soroban_sdk::{contracttype, Address, Env, Symbol};

/// Types of operations that can be paused.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum PauseType {
    /// Pause all engine operations
    All = 0,
    /// Pause collateral deposits
    Deposit = 1,
    /// Pause collateral redemptions
    Redeem = 2,
    /// Pause debt minting
    Mint = 3,
    /// Pause debt burning
    Burn = 4,
    /// Pause liquidations
    Liquidation = 5,
}

/// Storage keys for pause states.
#[contracttype]
#[derive(Clone)]
pub enum PauseDataKey {
    /// Pause state for a specific operation type
    State(PauseType),
}

/// Set pause state for a specific operation type (admin only)
///
/// # Arguments
/// * `env` - The contract environment
/// * `caller` - The caller's address (must authorize and match the admin)
/// * `pause_type` - The operation type to pause/unpause
/// * `paused` - True to pause, false to unpause
pub fn set_pause(
    env: &Env,
    caller: Address,
    pause_type: PauseType,
    paused: bool,
) -> Result<(), Error> {
    caller.require_auth();

    let admin = registry::admin(env)?;
    if caller != admin {
        return Err(Error::Unauthorized);
    }

    env.storage()
        .persistent()
        .set(&PauseDataKey::State(pause_type), &paused);

    events::emit_pause_state_changed(
        env,
        PauseStateChangedEvent {
            actor: caller,
            operation: operation_symbol(env, pause_type),
            paused,
            timestamp: env.ledger().timestamp(),
        },
    );

    Ok(())
}

/// Check if a specific operation is paused
///
/// An operation is considered paused if either its specific pause flag
/// is set or the global `All` pause flag is set.
pub fn is_paused(env: &Env, pause_type: PauseType) -> bool {
    if env
        .storage()
        .persistent()
        .get(&PauseDataKey::State(PauseType::All))
        .unwrap_or(false)
    {
        return true;
    }

    if pause_type != PauseType::All {
        return env
            .storage()
            .persistent()
            .get(&PauseDataKey::State(pause_type))
            .unwrap_or(false);
    }

    false
}

/// Fail with `OperationPaused` if the operation class is paused.
pub fn require_not_paused(env: &Env, pause_type: PauseType) -> Result<(), Error> {
    if is_paused(env, pause_type) {
        return Err(Error::OperationPaused);
    }
    Ok(())
}

fn operation_symbol(env: &Env, pause_type: PauseType) -> Symbol {
    match pause_type {
        PauseType::All => Symbol::new(env, "pause_all"),
        PauseType::Deposit => Symbol::new(env, "pause_deposit"),
        PauseType::Redeem => Symbol::new(env, "pause_redeem"),
        PauseType::Mint => Symbol::new(env, "pause_mint"),
        PauseType::Burn => Symbol::new(env, "pause_burn"),
        PauseType::Liquidation => Symbol::new(env, "pause_liquidation"),
    }
}
