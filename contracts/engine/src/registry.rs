use crate::errors::Error;
use crate::events::{self, InitializedEvent};
use crate::oracle;
use soroban_sdk::{contracttype, Address, Env, Vec};

/// Storage keys for the engine's construction-time configuration
#[contracttype]
#[derive(Clone)]
pub enum RegistryDataKey {
    /// Admin address recorded at initialization
    Admin,
    /// The synthetic debt token the engine administers
    DebtToken,
    /// Ordered list of registered collateral assets
    SupportedAssets,
}

/// Initialize the engine's collateral registry
///
/// Records the admin, the debt token, and the ordered collateral set, and
/// binds each collateral asset to its authorized oracle address. The
/// registry is immutable afterwards.
///
/// # Arguments
/// * `env` - The contract environment
/// * `admin` - The admin address for pause switches
/// * `collateral_assets` - Collateral token addresses, ordered
/// * `price_oracles` - Oracle addresses, parallel to `collateral_assets`
/// * `debt_token` - The debt token contract the engine must administer
///
/// # Errors
/// - `AlreadyInitialized` - A configuration is already stored
/// - `ConfigMismatch` - Empty lists, or list lengths differ
pub fn initialize(
    env: &Env,
    admin: Address,
    collateral_assets: Vec<Address>,
    price_oracles: Vec<Address>,
    debt_token: Address,
) -> Result<(), Error> {
    if env.storage().persistent().has(&RegistryDataKey::Admin) {
        return Err(Error::AlreadyInitialized);
    }

    if collateral_assets.is_empty() {
        return Err(Error::ConfigMismatch);
    }
    if collateral_assets.len() != price_oracles.len() {
        return Err(Error::ConfigMismatch);
    }

    env.storage()
        .persistent()
        .set(&RegistryDataKey::Admin, &admin);
    env.storage()
        .persistent()
        .set(&RegistryDataKey::DebtToken, &debt_token);
    env.storage()
        .persistent()
        .set(&RegistryDataKey::SupportedAssets, &collateral_assets);

    for i in 0..collateral_assets.len() {
        let asset = collateral_assets.get_unchecked(i);
        let oracle_addr = price_oracles.get_unchecked(i);
        oracle::set_authorized_oracle(env, &asset, &oracle_addr);
    }

    events::emit_initialized(
        env,
        InitializedEvent {
            admin,
            debt_token,
            asset_count: collateral_assets.len(),
            timestamp: env.ledger().timestamp(),
        },
    );

    Ok(())
}

/// Check whether an asset belongs to the registered collateral set.
pub fn is_registered(env: &Env, asset: &Address) -> bool {
    supported_assets(env).contains(asset)
}

/// Fail with `AssetNotRegistered` unless the asset is registered.
pub fn require_registered(env: &Env, asset: &Address) -> Result<(), Error> {
    if !is_registered(env, asset) {
        return Err(Error::AssetNotRegistered);
    }
    Ok(())
}

/// The registered collateral assets, in registration order.
pub fn supported_assets(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&RegistryDataKey::SupportedAssets)
        .unwrap_or_else(|| Vec::new(env))
}

/// The debt token the engine administers.
pub fn debt_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .persistent()
        .get(&RegistryDataKey::DebtToken)
        .ok_or(Error::NotInitialized)
}

/// The admin recorded at initialization.
pub fn admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .persistent()
        .get(&RegistryDataKey::Admin)
        .ok_or(Error::NotInitialized)
}
