use super::*;
use soroban_sdk::{testutils::Address as _, vec, Address, Env};

#[test]
fn test_initialize_success() {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(SynthEngine, ());
    let client = SynthEngineClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let asset_a = Address::generate(&env);
    let asset_b = Address::generate(&env);
    let oracle_a = Address::generate(&env);
    let oracle_b = Address::generate(&env);
    let debt_token = Address::generate(&env);

    client.initialize(
        &admin,
        &vec![&env, asset_a.clone(), asset_b.clone()],
        &vec![&env, oracle_a, oracle_b],
        &debt_token,
    );

    let assets = client.get_supported_assets();
    assert_eq!(assets.len(), 2);
    assert_eq!(assets.get_unchecked(0), asset_a);
    assert_eq!(assets.get_unchecked(1), asset_b);
    assert_eq!(client.get_debt_token(), debt_token);
}

#[test]
fn test_initialize_twice_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(SynthEngine, ());
    let client = SynthEngineClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let asset = Address::generate(&env);
    let oracle = Address::generate(&env);
    let debt_token = Address::generate(&env);

    client.initialize(
        &admin,
        &vec![&env, asset.clone()],
        &vec![&env, oracle.clone()],
        &debt_token,
    );

    let result = client.try_initialize(
        &admin,
        &vec![&env, asset],
        &vec![&env, oracle],
        &debt_token,
    );
    assert_eq!(result, Err(Ok(Error::AlreadyInitialized)));
}

#[test]
fn test_initialize_empty_lists() {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(SynthEngine, ());
    let client = SynthEngineClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let debt_token = Address::generate(&env);

    let result = client.try_initialize(&admin, &vec![&env], &vec![&env], &debt_token);
    assert_eq!(result, Err(Ok(Error::ConfigMismatch)));
}

#[test]
fn test_initialize_mismatched_lengths() {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(SynthEngine, ());
    let client = SynthEngineClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let asset_a = Address::generate(&env);
    let asset_b = Address::generate(&env);
    let oracle = Address::generate(&env);
    let debt_token = Address::generate(&env);

    let result = client.try_initialize(
        &admin,
        &vec![&env, asset_a, asset_b],
        &vec![&env, oracle],
        &debt_token,
    );
    assert_eq!(result, Err(Ok(Error::ConfigMismatch)));
}

#[test]
fn test_uninitialized_queries() {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(SynthEngine, ());
    let client = SynthEngineClient::new(&env, &contract_id);

    assert_eq!(client.try_get_debt_token(), Err(Ok(Error::NotInitialized)));
    assert_eq!(client.get_supported_assets().len(), 0);
}

#[test]
fn test_operations_before_initialize_fail() {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(SynthEngine, ());
    let client = SynthEngineClient::new(&env, &contract_id);

    let user = Address::generate(&env);
    let asset = Address::generate(&env);

    let result = client.try_deposit_collateral(&user, &asset, &1_000);
    assert_eq!(result, Err(Ok(Error::AssetNotRegistered)));

    let result = client.try_mint_debt(&user, &1_000);
    assert_eq!(result, Err(Ok(Error::NotInitialized)));
}