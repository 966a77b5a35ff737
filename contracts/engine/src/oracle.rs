use crate::errors::Error;
use crate::events::{self, PriceUpdatedEvent};
use crate::math;
use crate::registry;
use soroban_sdk::{contracttype, Address, Env};

/// Maximum feed age before reads reject it.
const MAX_PRICE_AGE_SECONDS: u64 = 3600;

/// Storage keys for oracle-related data
#[contracttype]
#[derive(Clone)]
pub enum OracleDataKey {
    /// Latest price feed record for an asset
    Feed(Address),
    /// The address authorized to push prices for an asset
    AuthorizedOracle(Address),
}

/// Price feed data structure
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct PriceFeedData {
    /// Current USD price in the feed's smallest unit
    pub price: i128,
    /// Number of decimal places the price carries
    pub decimals: u32,
    /// Oracle address that provided this price
    pub oracle: Address,
    /// Timestamp when the price was last updated
    pub last_updated: u64,
}

/// Bind an asset to its authorized oracle address. Registry construction
/// only; the binding is immutable afterwards.
pub(crate) fn set_authorized_oracle(env: &Env, asset: &Address, oracle: &Address) {
    env.storage()
        .persistent()
        .set(&OracleDataKey::AuthorizedOracle(asset.clone()), oracle);
}

/// Push a new price for an asset
///
/// # Arguments
/// * `env` - The contract environment
/// * `caller` - The address pushing the price (must authorize and match the
///   asset's authorized oracle)
/// * `asset` - The asset whose price is updated
/// * `price` - The new USD price
/// * `decimals` - Number of decimal places the price carries
///
/// # Returns
/// Returns the stored price on success
///
/// # Errors
/// - `AssetNotRegistered` - Asset is not in the collateral set
/// - `Unauthorized` - Caller is not the asset's authorized oracle
/// - `InvalidPrice` - Price is zero or negative
pub fn update_price(
    env: &Env,
    caller: Address,
    asset: Address,
    price: i128,
    decimals: u32,
) -> Result<i128, Error> {
    caller.require_auth();

    registry::require_registered(env, &asset)?;

    let authorized = authorized_oracle(env, &asset)?;
    if caller != authorized {
        return Err(Error::Unauthorized);
    }

    if price <= 0 {
        return Err(Error::InvalidPrice);
    }

    let timestamp = env.ledger().timestamp();
    let feed = PriceFeedData {
        price,
        decimals,
        oracle: caller,
        last_updated: timestamp,
    };
    env.storage()
        .persistent()
        .set(&OracleDataKey::Feed(asset.clone()), &feed);

    events::emit_price_updated(
        env,
        PriceUpdatedEvent {
            asset,
            price,
            decimals,
            oracle: feed.oracle.clone(),
            timestamp,
        },
    );

    Ok(price)
}

/// Read the current price feed for an asset
///
/// # Errors
/// - `AssetNotRegistered` - Asset is not in the collateral set
/// - `StalePrice` - No price was ever pushed, or the feed is older than
///   the staleness bound
pub fn get_price(env: &Env, asset: &Address) -> Result<PriceFeedData, Error> {
    registry::require_registered(env, asset)?;

    let feed: PriceFeedData = env
        .storage()
        .persistent()
        .get(&OracleDataKey::Feed(asset.clone()))
        .ok_or(Error::StalePrice)?;

    if is_stale(env, feed.last_updated) {
        return Err(Error::StalePrice);
    }

    Ok(feed)
}

/// USD value of `amount` base units of `asset` under the current feed.
///
/// `value = price * amount / 10^decimals`, widened through 256-bit
/// arithmetic so large positions cannot overflow the intermediate product.
pub fn usd_value(env: &Env, asset: &Address, amount: i128) -> Result<i128, Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }
    let feed = get_price(env, asset)?;
    math::mul_div(env, amount, feed.price, math::pow10(feed.decimals)?)
}

/// Token amount of `asset` worth `usd` under the current feed.
///
/// `amount = usd * 10^decimals / price`, the inverse of [`usd_value`]
/// up to integer truncation.
pub fn token_amount_from_usd(env: &Env, asset: &Address, usd: i128) -> Result<i128, Error> {
    if usd < 0 {
        return Err(Error::InvalidAmount);
    }
    let feed = get_price(env, asset)?;
    math::mul_div(env, usd, math::pow10(feed.decimals)?, feed.price)
}

fn authorized_oracle(env: &Env, asset: &Address) -> Result<Address, Error> {
    env.storage()
        .persistent()
        .get(&OracleDataKey::AuthorizedOracle(asset.clone()))
        .ok_or(Error::AssetNotRegistered)
}

fn is_stale(env: &Env, last_updated: u64) -> bool {
    let current_time = env.ledger().timestamp();
    if current_time < last_updated {
        return true;
    }
    current_time - last_updated > MAX_PRICE_AGE_SECONDS
}
