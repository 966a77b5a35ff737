use super::*;
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    vec, Address, Env,
};

const PRICE_2000: i128 = 200_000_000_000; // $2000 at 8 feed decimals
const FEED_DECIMALS: u32 = 8;
const UNIT: i128 = 1_000_000_000_000_000_000;

struct Setup<'a> {
    client: SynthEngineClient<'a>,
    oracle: Address,
    collateral: Address,
}

fn setup(env: &Env) -> Setup<'_> {
    env.mock_all_auths();

    let admin = Address::generate(env);
    let oracle = Address::generate(env);
    let collateral = Address::generate(env);
    let debt_token = Address::generate(env);

    let engine = env.register(SynthEngine, ());
    let client = SynthEngineClient::new(env, &engine);
    client.initialize(
        &admin,
        &vec![env, collateral.clone()],
        &vec![env, oracle.clone()],
        &debt_token,
    );

    Setup {
        client,
        oracle,
        collateral,
    }
}

#[test]
fn test_update_price_success() {
    let env = Env::default();
    env.ledger().with_mut(|li| {
        li.timestamp = 1000;
    });
    let s = setup(&env);

    let stored = s
        .client
        .update_price(&s.oracle, &s.collateral, &PRICE_2000, &FEED_DECIMALS);
    assert_eq!(stored, PRICE_2000);

    let feed = s.client.get_price(&s.collateral);
    assert_eq!(feed.price, PRICE_2000);
    assert_eq!(feed.decimals, FEED_DECIMALS);
    assert_eq!(feed.oracle, s.oracle);
    assert_eq!(feed.last_updated, 1000);
}

#[test]
fn test_update_price_overwrites() {
    let env = Env::default();
    let s = setup(&env);

    s.client
        .update_price(&s.oracle, &s.collateral, &PRICE_2000, &FEED_DECIMALS);
    s.client
        .update_price(&s.oracle, &s.collateral, &150_000_000_000, &FEED_DECIMALS);

    assert_eq!(s.client.get_price(&s.collateral).price, 150_000_000_000);
}

#[test]
fn test_update_price_unauthorized_caller() {
    let env = Env::default();
    let s = setup(&env);

    let impostor = Address::generate(&env);
    let result = s
        .client
        .try_update_price(&impostor, &s.collateral, &PRICE_2000, &FEED_DECIMALS);
    assert_eq!(result, Err(Ok(Error::Unauthorized)));
}

#[test]
fn test_update_price_invalid_price() {
    let env = Env::default();
    let s = setup(&env);

    let result = s
        .client
        .try_update_price(&s.oracle, &s.collateral, &0, &FEED_DECIMALS);
    assert_eq!(result, Err(Ok(Error::InvalidPrice)));

    let result = s
        .client
        .try_update_price(&s.oracle, &s.collateral, &-1, &FEED_DECIMALS);
    assert_eq!(result, Err(Ok(Error::InvalidPrice)));
}

#[test]
fn test_update_price_unregistered_asset() {
    let env = Env::default();
    let s = setup(&env);

    let unregistered = Address::generate(&env);
    let result = s
        .client
        .try_update_price(&s.oracle, &unregistered, &PRICE_2000, &FEED_DECIMALS);
    assert_eq!(result, Err(Ok(Error::AssetNotRegistered)));
}

#[test]
fn test_get_price_missing_feed() {
    let env = Env::default();
    let s = setup(&env);

    let result = s.client.try_get_price(&s.collateral);
    assert_eq!(result, Err(Ok(Error::StalePrice)));
}

#[test]
fn test_get_price_staleness_bound() {
    let env = Env::default();
    env.ledger().with_mut(|li| {
        li.timestamp = 1000;
    });
    let s = setup(&env);
    s.client
        .update_price(&s.oracle, &s.collateral, &PRICE_2000, &FEED_DECIMALS);

    // Exactly at the bound the feed is still usable.
    env.ledger().with_mut(|li| {
        li.timestamp = 1000 + 3600;
    });
    assert_eq!(s.client.get_price(&s.collateral).price, PRICE_2000);

    // One second past it the feed is rejected.
    env.ledger().with_mut(|li| {
        li.timestamp = 1000 + 3601;
    });
    let result = s.client.try_get_price(&s.collateral);
    assert_eq!(result, Err(Ok(Error::StalePrice)));
}

#[test]
fn test_usd_value_literal_scenario() {
    let env = Env::default();
    let s = setup(&env);
    s.client
        .update_price(&s.oracle, &s.collateral, &PRICE_2000, &FEED_DECIMALS);

    // 15 whole units at $2000 value at 30000 USD, both in 10^18 base units.
    let value = s.client.get_usd_value(&s.collateral, &(15 * UNIT));
    assert_eq!(value, 30_000 * UNIT);
}

#[test]
fn test_token_amount_round_trip() {
    let env = Env::default();
    let s = setup(&env);
    s.client
        .update_price(&s.oracle, &s.collateral, &PRICE_2000, &FEED_DECIMALS);

    let usd = 30_000 * UNIT;
    let tokens = s.client.get_token_amount_from_usd(&s.collateral, &usd);
    assert_eq!(tokens, 15 * UNIT);
    assert_eq!(s.client.get_usd_value(&s.collateral, &tokens), usd);
}

#[test]
fn test_usd_value_negative_amount() {
    let env = Env::default();
    let s = setup(&env);
    s.client
        .update_price(&s.oracle, &s.collateral, &PRICE_2000, &FEED_DECIMALS);

    let result = s.client.try_get_usd_value(&s.collateral, &-1);
    assert_eq!(result, Err(Ok(Error::InvalidAmount)));
}