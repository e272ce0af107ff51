#![cfg(test)]
extern crate std;
use crate::{CustodyAmm, CustodyAmmArgs, CustodyAmmClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{
    StellarAssetClient as SorobanTokenAdminClient, TokenClient as SorobanTokenClient,
};
use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env};
use std::vec;

// Token that accepts transfers until frozen. Used to fail a call midway.
#[contract]
pub struct FreezableToken;

#[contractimpl]
impl FreezableToken {
    pub fn freeze(e: Env) {
        e.storage().instance().set(&symbol_short!("frozen"), &true);
    }

    pub fn transfer(e: Env, _from: Address, _to: Address, _amount: i128) {
        let frozen: bool = e
            .storage()
            .instance()
            .get(&symbol_short!("frozen"))
            .unwrap_or(false);
        if frozen {
            panic!("token is frozen");
        }
    }
}

pub(crate) struct TestConfig {
    pub(crate) users_count: u32,
    pub(crate) mint_to_user: i128,
}

impl Default for TestConfig {
    fn default() -> Self {
        TestConfig {
            users_count: 2,
            mint_to_user: 1_000_000_000_0000000,
        }
    }
}

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,
    pub(crate) admin: Address,
    pub(crate) users: vec::Vec<Address>,
    pub(crate) base_asset: SorobanTokenClient<'a>,
    pub(crate) token_a: SorobanTokenClient<'a>,
    pub(crate) token_b: SorobanTokenClient<'a>,
    pub(crate) contract: CustodyAmmClient<'a>,
}

impl Default for Setup<'_> {
    // Create setup from default config and mint all tokens for all users
    fn default() -> Self {
        let default_config = TestConfig::default();
        Self::new_with_config(&default_config)
    }
}

impl Setup<'_> {
    pub(crate) fn new_with_config(config: &TestConfig) -> Self {
        let setup = Self::setup(config);
        setup.mint_tokens_for_users(config.mint_to_user);
        setup
    }

    pub(crate) fn setup(config: &TestConfig) -> Self {
        let e: Env = Env::default();
        e.mock_all_auths();
        e.cost_estimate().budget().reset_unlimited();

        let admin = Address::generate(&e);
        let users = Self::generate_random_users(&e, config.users_count);

        let base_asset = create_token_contract(&e, &admin);
        let token_a = create_token_contract(&e, &admin);
        let token_b = create_token_contract(&e, &admin);

        let contract = create_contract(&e, &admin, &base_asset.address);

        Self {
            env: e,
            admin,
            users,
            base_asset,
            token_a,
            token_b,
            contract,
        }
    }

    pub(crate) fn generate_random_users(e: &Env, users_count: u32) -> vec::Vec<Address> {
        let mut users = vec![];
        for _c in 0..users_count {
            users.push(Address::generate(e));
        }
        users
    }

    pub(crate) fn mint_tokens_for_users(&self, amount: i128) {
        for user in self.users.iter() {
            for token in [&self.base_asset, &self.token_a, &self.token_b] {
                get_token_admin_client(&self.env, &token.address).mint(user, &amount);
                assert_eq!(token.balance(user), amount);
            }
        }
    }

    // Deposit first liquidity into (token_a, token_b) from the first user
    pub(crate) fn init_pool(&self, amount_a: u128, amount_b: u128) -> u128 {
        self.contract.add_liquidity(
            &self.users[0],
            &self.token_a.address,
            &self.token_b.address,
            &amount_a,
            &amount_b,
        )
    }
}

pub(crate) fn create_token_contract<'a>(e: &Env, admin: &Address) -> SorobanTokenClient<'a> {
    SorobanTokenClient::new(
        e,
        &e.register_stellar_asset_contract_v2(admin.clone())
            .address(),
    )
}

pub(crate) fn get_token_admin_client<'a>(
    e: &Env,
    address: &Address,
) -> SorobanTokenAdminClient<'a> {
    SorobanTokenAdminClient::new(e, address)
}

pub(crate) fn create_freezable_token_contract<'a>(e: &Env) -> FreezableTokenClient<'a> {
    FreezableTokenClient::new(e, &e.register(FreezableToken, ()))
}

pub(crate) fn create_contract<'a>(
    e: &Env,
    admin: &Address,
    base_asset: &Address,
) -> CustodyAmmClient<'a> {
    CustodyAmmClient::new(
        e,
        &e.register(CustodyAmm {}, CustodyAmmArgs::__constructor(admin, base_asset)),
    )
}
