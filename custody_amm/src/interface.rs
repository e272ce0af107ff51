use crate::storage::PoolInfo;
use soroban_sdk::{Address, Env};

pub trait CustodyLedgerTrait {
    // Move `amount` of base asset from user into custody and credit user balance.
    fn deposit(e: Env, user: Address, amount: u128) -> bool;

    // Debit user balance and send `amount` of base asset back to user.
    fn withdraw(e: Env, user: Address, amount: u128) -> bool;

    // Custodial base asset balance of the user.
    fn get_balance(e: Env, user: Address) -> u128;

    // Sum of all custodial balances.
    fn get_total_supply(e: Env) -> u128;

    fn get_base_asset(e: Env) -> Address;
}

pub trait LiquidityPoolTrait {
    // Deposits token_a and token_b into the (token_a, token_b) pool, creating it on first use.
    // For a live pool amounts should match pool price exactly.
    // Returns amount of shares issued to user.
    fn add_liquidity(
        e: Env,
        user: Address,
        token_a: Address,
        token_b: Address,
        amount_a: u128,
        amount_b: u128,
    ) -> u128;

    // Burns `share_amount` of user shares and sends the corresponding part of reserves.
    // Returns amounts of token_a and token_b withdrawn.
    fn remove_liquidity(
        e: Env,
        user: Address,
        token_a: Address,
        token_b: Address,
        share_amount: u128,
    ) -> (u128, u128);

    // Perform an exchange through the (token_in, token_out) pool.
    // There is no minimum output, use estimate_swap to preview.
    // Returns amount of token_out received.
    fn swap(e: Env, user: Address, token_in: Address, token_out: Address, in_amount: u128)
        -> u128;

    // Exact output of swap with current reserves and fee.
    fn estimate_swap(e: Env, token_in: Address, token_out: Address, in_amount: u128) -> u128;

    // Approximate price: amount * reserve_b / (reserve_a * 1000). Fee is not applied.
    fn get_exchange_rate(e: Env, token_a: Address, token_b: Address, amount: u128) -> u128;

    fn get_pool_info(e: Env, token_a: Address, token_b: Address) -> PoolInfo;

    fn has_pool(e: Env, token_a: Address, token_b: Address) -> bool;

    fn get_user_pool_shares(e: Env, user: Address, token_a: Address, token_b: Address) -> u128;

    // Fee rate getter. 1 = 0.1%
    fn get_protocol_fee(e: Env) -> u32;
}

pub trait AdminInterfaceTrait {
    // Owner only. Rate in parts-per-1000, up to 100 (10%).
    fn set_protocol_fee(e: Env, admin: Address, new_rate: u32) -> bool;

    fn get_admin(e: Env) -> Address;
}

pub trait TransferableContract {
    fn commit_transfer_ownership(e: Env, admin: Address, new_admin: Address);
    fn apply_transfer_ownership(e: Env, admin: Address);
    fn revert_transfer_ownership(e: Env, admin: Address);
    fn get_future_admin(e: Env) -> Option<Address>;
}
