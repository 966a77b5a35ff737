use super::*;
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, vec, Address, Env,
};

const PRICE_2000: i128 = 200_000_000_000; // $2000 at 8 feed decimals
const PRICE_500: i128 = 50_000_000_000;
const FEED_DECIMALS: u32 = 8;
const UNIT: i128 = 1_000_000_000_000_000_000;

struct Setup<'a> {
    client: SynthEngineClient<'a>,
    engine: Address,
    oracle: Address,
    collateral: Address,
}

fn setup(env: &Env) -> Setup<'_> {
    env.mock_all_auths();

    let admin = Address::generate(env);
    let oracle = Address::generate(env);
    let token_admin = Address::generate(env);
    let collateral = env
        .register_stellar_asset_contract_v2(token_admin.clone())
        .address();
    let debt_token = env
        .register_stellar_asset_contract_v2(token_admin)
        .address();

    let engine = env.register(SynthEngine, ());
    token::StellarAssetClient::new(env, &debt_token).set_admin(&engine);

    let client = SynthEngineClient::new(env, &engine);
    client.initialize(
        &admin,
        &vec![env, collateral.clone()],
        &vec![env, oracle.clone()],
        &debt_token,
    );
    client.update_price(&oracle, &collateral, &PRICE_2000, &FEED_DECIMALS);

    Setup {
        client,
        engine,
        oracle,
        collateral,
    }
}

fn deposit_collateral(env: &Env, s: &Setup, user: &Address, amount: i128) {
    token::StellarAssetClient::new(env, &s.collateral).mint(user, &amount);
    token::Client::new(env, &s.collateral).approve(user, &s.engine, &amount, &1000);
    s.client.deposit_collateral(user, &s.collateral, &amount);
}

#[test]
fn test_zero_debt_is_maximally_healthy() {
    let env = Env::default();
    let s = setup(&env);

    let user = Address::generate(&env);
    assert_eq!(s.client.get_health_factor(&user), i128::MAX);

    deposit_collateral(&env, &s, &user, 10 * UNIT);
    assert_eq!(s.client.get_health_factor(&user), i128::MAX);
}

#[test]
fn test_collateral_valuation_literal_scenario() {
    let env = Env::default();
    let s = setup(&env);

    let user = Address::generate(&env);
    deposit_collateral(&env, &s, &user, 15 * UNIT);

    assert_eq!(s.client.get_collateral_value(&user), 30_000 * UNIT);
}

#[test]
fn test_health_factor_formula() {
    let env = Env::default();
    let s = setup(&env);

    let user = Address::generate(&env);
    deposit_collateral(&env, &s, &user, 10 * UNIT);
    s.client.mint_debt(&user, &(4_000 * UNIT));

    // 20000 USD of collateral at the 50% threshold against 4000 USD of
    // debt: factor 2.5.
    assert_eq!(s.client.get_health_factor(&user), 2_500_000_000_000_000_000);
}

#[test]
fn test_health_factor_tracks_price() {
    let env = Env::default();
    let s = setup(&env);

    let user = Address::generate(&env);
    deposit_collateral(&env, &s, &user, 10 * UNIT);
    s.client.mint_debt(&user, &(4_000 * UNIT));

    s.client
        .update_price(&s.oracle, &s.collateral, &PRICE_500, &FEED_DECIMALS);

    // 5000 USD of collateral at the 50% threshold against 4000 USD of
    // debt: factor 0.625.
    assert_eq!(s.client.get_health_factor(&user), 625_000_000_000_000_000);
}

#[test]
fn test_account_summary() {
    let env = Env::default();
    let s = setup(&env);

    let user = Address::generate(&env);
    deposit_collateral(&env, &s, &user, 10 * UNIT);
    s.client.mint_debt(&user, &(5_000 * UNIT));

    let summary = s.client.get_account_summary(&user);
    assert_eq!(summary.collateral_value_usd, 20_000 * UNIT);
    assert_eq!(summary.debt, 5_000 * UNIT);
    assert_eq!(summary.health_factor, 2 * UNIT);
}

#[test]
fn test_stale_price_blocks_valuation() {
    let env = Env::default();
    env.ledger().with_mut(|li| {
        li.timestamp = 1000;
    });
    let s = setup(&env);

    let user = Address::generate(&env);
    deposit_collateral(&env, &s, &user, 10 * UNIT);
    s.client.mint_debt(&user, &(4_000 * UNIT));

    env.ledger().with_mut(|li| {
        li.timestamp = 1000 + 7200;
    });
    assert_eq!(
        s.client.try_get_health_factor(&user),
        Err(Ok(Error::StalePrice))
    );
}

#[test]
fn test_multi_asset_valuation() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let oracle = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let asset_a = env
        .register_stellar_asset_contract_v2(token_admin.clone())
        .address();
    let asset_b = env
        .register_stellar_asset_contract_v2(token_admin.clone())
        .address();
    let debt_token = env
        .register_stellar_asset_contract_v2(token_admin)
        .address();

    let engine = env.register(SynthEngine, ());
    token::StellarAssetClient::new(&env, &debt_token).set_admin(&engine);

    let client = SynthEngineClient::new(&env, &engine);
    client.initialize(
        &admin,
        &vec![&env, asset_a.clone(), asset_b.clone()],
        &vec![&env, oracle.clone(), oracle.clone()],
        &debt_token,
    );
    client.update_price(&oracle, &asset_a, &PRICE_2000, &FEED_DECIMALS);
    client.update_price(&oracle, &asset_b, &PRICE_500, &FEED_DECIMALS);

    let user = Address::generate(&env);
    for asset in [&asset_a, &asset_b] {
        token::StellarAssetClient::new(&env, asset).mint(&user, &(4 * UNIT));
        token::Client::new(&env, asset).approve(&user, &engine, &(4 * UNIT), &1000);
        client.deposit_collateral(&user, asset, &(4 * UNIT));
    }

    // 4 units at $2000 plus 4 units at $500.
    assert_eq!(client.get_collateral_value(&user), 10_000 * UNIT);
}