use crate::constants::DEFAULT_FEE_RATE;
use soroban_sdk::{contracttype, panic_with_error, Address, Env};
use utils::bump::bump_persistent;
use utils::{
    generate_instance_storage_getter_and_setter,
    generate_instance_storage_getter_and_setter_with_default,
};

#[derive(Clone)]
#[contracttype]
enum DataKey {
    BaseAsset,
    FeeRate, // parts-per-1000
    TotalSupply,

    Balance(Address),
    // pools are keyed by the ordered pair, (a, b) and (b, a) are different pools
    Pool(Address, Address),
    UserShares(Address, Address, Address),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolInfo {
    pub reserve_a: u128,
    pub reserve_b: u128,
    pub total_shares: u128,
}

impl PoolInfo {
    // record left after every share has been burned
    pub fn is_drained(&self) -> bool {
        self.total_shares == 0
    }
}

generate_instance_storage_getter_and_setter!(base_asset, DataKey::BaseAsset, Address);
generate_instance_storage_getter_and_setter_with_default!(
    fee_rate,
    DataKey::FeeRate,
    u32,
    DEFAULT_FEE_RATE
);
generate_instance_storage_getter_and_setter_with_default!(
    total_supply,
    DataKey::TotalSupply,
    u128,
    0
);

pub fn get_balance(e: &Env, user: &Address) -> u128 {
    let key = DataKey::Balance(user.clone());
    match e.storage().persistent().get(&key) {
        Some(balance) => {
            bump_persistent(e, &key);
            balance
        }
        None => 0,
    }
}

pub fn put_balance(e: &Env, user: &Address, amount: u128) {
    let key = DataKey::Balance(user.clone());
    e.storage().persistent().set(&key, &amount);
    bump_persistent(e, &key);
}

pub fn get_pool(e: &Env, token_a: &Address, token_b: &Address) -> Option<PoolInfo> {
    let key = DataKey::Pool(token_a.clone(), token_b.clone());
    let pool = e.storage().persistent().get(&key);
    if pool.is_some() {
        bump_persistent(e, &key);
    }
    pool
}

pub fn put_pool(e: &Env, token_a: &Address, token_b: &Address, pool: &PoolInfo) {
    let key = DataKey::Pool(token_a.clone(), token_b.clone());
    e.storage().persistent().set(&key, pool);
    bump_persistent(e, &key);
}

pub fn get_user_shares(e: &Env, user: &Address, token_a: &Address, token_b: &Address) -> u128 {
    let key = DataKey::UserShares(user.clone(), token_a.clone(), token_b.clone());
    match e.storage().persistent().get(&key) {
        Some(shares) => {
            bump_persistent(e, &key);
            shares
        }
        None => 0,
    }
}

pub fn put_user_shares(
    e: &Env,
    user: &Address,
    token_a: &Address,
    token_b: &Address,
    shares: u128,
) {
    let key = DataKey::UserShares(user.clone(), token_a.clone(), token_b.clone());
    e.storage().persistent().set(&key, &shares);
    bump_persistent(e, &key);
}
