//! # StellarSynth Engine – Event Logging
//!
//! Defines a consistent, structured event schema for every state-changing
//! action in the engine.
//!
//! ## Design principles
//! - Each event is its own `#[contractevent]` struct. The macro derives the
//!   lowercase snake_case struct name as the leading topic, generates XDR
//!   metadata entries, and exposes a `.publish(&env)` method.
//! - `emit_*` helper functions wrap struct construction and call `.publish`,
//!   providing a single call-site per action.
//! - No sensitive data: all fields are publicly observable state only.
//!
//! Events are published only when the enclosing invocation succeeds; a
//! failed operation leaves no event behind.

use soroban_sdk::{contractevent, Address, Env, Symbol};

/// Emitted once when the engine is constructed.
#[contractevent]
#[derive(Clone, Debug)]
pub struct InitializedEvent {
    pub admin: Address,
    pub debt_token: Address,
    pub asset_count: u32,
    pub timestamp: u64,
}

/// Emitted when a user deposits collateral into the vault.
///
/// # Fields
/// * `user` – The depositor's address.
/// * `asset` – The deposited collateral asset.
/// * `amount` – The deposit amount in the asset's smallest unit.
/// * `new_balance` – The user's vault balance for the asset after the deposit.
/// * `timestamp` – Ledger timestamp at deposit time.
#[contractevent]
#[derive(Clone, Debug)]
pub struct CollateralDepositedEvent {
    pub user: Address,
    pub asset: Address,
    pub amount: i128,
    pub new_balance: i128,
    pub timestamp: u64,
}

/// Emitted when collateral leaves the vault.
///
/// # Fields
/// * `from` – The position the collateral was debited from.
/// * `to` – The recipient of the tokens (the position owner, or the
///   liquidator during a seizure).
/// * `asset` – The redeemed collateral asset.
/// * `amount` – The redeemed amount.
/// * `timestamp` – Ledger timestamp at redemption time.
#[contractevent]
#[derive(Clone, Debug)]
pub struct CollateralRedeemedEvent {
    pub from: Address,
    pub to: Address,
    pub asset: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Emitted when debt tokens are minted against a position.
#[contractevent]
#[derive(Clone, Debug)]
pub struct DebtMintedEvent {
    pub user: Address,
    pub amount: i128,
    pub new_debt: i128,
    pub timestamp: u64,
}

/// Emitted when debt tokens are burned and a position's debt reduced.
///
/// `payer` funds the burn; `user` is the position whose debt shrinks. The
/// two differ during liquidation.
#[contractevent]
#[derive(Clone, Debug)]
pub struct DebtBurnedEvent {
    pub payer: Address,
    pub user: Address,
    pub amount: i128,
    pub new_debt: i128,
    pub timestamp: u64,
}

/// Emitted when an undercollateralized position is liquidated.
///
/// # Fields
/// * `liquidator` – The liquidator's address.
/// * `user` – The address of the position being liquidated.
/// * `collateral_asset` – The collateral seized.
/// * `debt_covered` – The debt amount repaid by the liquidator.
/// * `collateral_seized` – Total collateral transferred to the liquidator,
///   bonus included.
/// * `bonus_amount` – The liquidation bonus portion of the seizure.
/// * `timestamp` – Ledger timestamp at liquidation time.
#[contractevent]
#[derive(Clone, Debug)]
pub struct LiquidationEvent {
    pub liquidator: Address,
    pub user: Address,
    pub collateral_asset: Address,
    pub debt_covered: i128,
    pub collateral_seized: i128,
    pub bonus_amount: i128,
    pub timestamp: u64,
}

/// Emitted when an oracle pushes a new price.
#[contractevent]
#[derive(Clone, Debug)]
pub struct PriceUpdatedEvent {
    pub asset: Address,
    pub price: i128,
    pub decimals: u32,
    pub oracle: Address,
    pub timestamp: u64,
}

/// Emitted when the pause state of any operation class changes.
#[contractevent]
#[derive(Clone, Debug)]
pub struct PauseStateChangedEvent {
    pub actor: Address,
    pub operation: Symbol,
    pub paused: bool,
    pub timestamp: u64,
}

/// Emit an initialized event.
/// Call this after the configuration has been written to storage.
pub fn emit_initialized(e: &Env, event: InitializedEvent) {
    event.publish(e);
}

/// Emit a collateral-deposited event.
/// Call this after the vault balance and token custody are updated.
pub fn emit_collateral_deposited(e: &Env, event: CollateralDepositedEvent) {
    event.publish(e);
}

/// Emit a collateral-redeemed event.
/// Call this after the vault balance is debited and tokens transferred out.
pub fn emit_collateral_redeemed(e: &Env, event: CollateralRedeemedEvent) {
    event.publish(e);
}

/// Emit a debt-minted event.
/// Call this after the ledger increment and the token mint.
pub fn emit_debt_minted(e: &Env, event: DebtMintedEvent) {
    event.publish(e);
}

/// Emit a debt-burned event.
/// Call this after the token burn and the ledger decrement.
pub fn emit_debt_burned(e: &Env, event: DebtBurnedEvent) {
    event.publish(e);
}

/// Emit a liquidation event.
/// Call this after the seizure and debt reduction are both committed.
pub fn emit_liquidation(e: &Env, event: LiquidationEvent) {
    event.publish(e);
}

/// Emit a price-updated event.
/// Call this after committing the new feed record to storage.
pub fn emit_price_updated(e: &Env, event: PriceUpdatedEvent) {
    event.publish(e);
}

/// Emit a pause-state-changed event.
/// Call this after any pause switch is toggled.
pub fn emit_pause_state_changed(e: &Env, event: PauseStateChangedEvent) {
    event.publish(e);
}
