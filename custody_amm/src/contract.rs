use crate::constants::{DEFAULT_FEE_RATE, MAX_FEE_RATE};
use crate::errors::CustodyAmmError;
use crate::events::{Events, LedgerEvents};
use crate::interface::{
    AdminInterfaceTrait, CustodyLedgerTrait, LiquidityPoolTrait, TransferableContract,
};
use crate::pool::{
    checked_add, get_amount_out, get_exchange_rate, get_new_shares, get_withdraw_amounts,
    is_proportional,
};
use crate::storage::{
    get_balance, get_base_asset, get_fee_rate, get_pool, get_total_supply, get_user_shares,
    put_balance, put_pool, put_user_shares, set_base_asset, set_fee_rate, set_total_supply,
    PoolInfo,
};
use crate::token::{transfer_in, transfer_out};
use access_control::access::{AccessControl, AccessControlTrait};
use access_control::events::Events as AccessControlEvents;
use access_control::transfer::TransferOwnershipTrait;
use liquidity_pool_events::Events as PoolEvents;
use liquidity_pool_events::LiquidityPoolEvents;
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, Address, Env,
};

// Metadata that is added on to the WASM custom section
contractmeta!(
    key = "Description",
    val = "Custodial ledger with pair keyed constant product pools"
);

fn require_admin(e: &Env, admin: &Address) {
    admin.require_auth();
    if !AccessControl::new(e).address_is_admin(admin) {
        panic_with_error!(e, CustodyAmmError::Unauthorized);
    }
}

// Pool able to price trades. Drained record is treated the same way as a missing one.
fn get_live_pool(e: &Env, token_a: &Address, token_b: &Address) -> PoolInfo {
    match get_pool(e, token_a, token_b) {
        Some(pool) if !pool.is_drained() => pool,
        _ => panic_with_error!(e, CustodyAmmError::InvalidPair),
    }
}

#[contract]
pub struct CustodyAmm;

#[contractimpl]
impl CustodyAmm {
    // Initializes the contract.
    //
    // # Arguments
    //
    // * `admin` - Owner address, the only one allowed to change protocol fee.
    // * `base_asset` - Token contract of the asset kept in the custodial ledger.
    pub fn __constructor(e: Env, admin: Address, base_asset: Address) {
        AccessControl::new(&e).set_admin(&admin);
        set_base_asset(&e, &base_asset);
        set_fee_rate(&e, &DEFAULT_FEE_RATE);
        set_total_supply(&e, &0);
    }
}

#[contractimpl]
impl CustodyLedgerTrait for CustodyAmm {
    // Deposits base asset into custody.
    //
    // # Arguments
    //
    // * `user` - The address of the depositor.
    // * `amount` - The amount of base asset to deposit.
    //
    // # Returns
    //
    // true on success.
    fn deposit(e: Env, user: Address, amount: u128) -> bool {
        user.require_auth();

        if amount == 0 {
            panic_with_error!(&e, CustodyAmmError::InvalidAmount);
        }

        let balance = checked_add(&e, get_balance(&e, &user), amount);
        let total_supply = checked_add(&e, get_total_supply(&e), amount);

        transfer_in(&e, &get_base_asset(&e), &user, amount);

        put_balance(&e, &user, balance);
        set_total_supply(&e, &total_supply);

        Events::new(&e).deposit(user, amount, balance);
        true
    }

    // Withdraws base asset from custody.
    //
    // # Arguments
    //
    // * `user` - The address of the balance owner.
    // * `amount` - The amount of base asset to withdraw.
    //
    // # Returns
    //
    // true on success.
    fn withdraw(e: Env, user: Address, amount: u128) -> bool {
        user.require_auth();

        if amount == 0 {
            panic_with_error!(&e, CustodyAmmError::InvalidAmount);
        }

        let balance = get_balance(&e, &user);
        if amount > balance {
            panic_with_error!(&e, CustodyAmmError::InsufficientBalance);
        }

        let balance = balance - amount;
        put_balance(&e, &user, balance);
        set_total_supply(&e, &(get_total_supply(&e) - amount));

        // debit above is discarded together with the whole call if the payout fails
        transfer_out(&e, &get_base_asset(&e), &user, amount);

        Events::new(&e).withdraw(user, amount, balance);
        true
    }

    fn get_balance(e: Env, user: Address) -> u128 {
        get_balance(&e, &user)
    }

    fn get_total_supply(e: Env) -> u128 {
        get_total_supply(&e)
    }

    fn get_base_asset(e: Env) -> Address {
        get_base_asset(&e)
    }
}

#[contractimpl]
impl LiquidityPoolTrait for CustodyAmm {
    // Deposits tokens into the (token_a, token_b) pool.
    //
    // # Arguments
    //
    // * `user` - The address of the liquidity provider.
    // * `token_a` - First asset of the pool key.
    // * `token_b` - Second asset of the pool key.
    // * `amount_a` - Amount of token_a to deposit.
    // * `amount_b` - Amount of token_b to deposit.
    //
    // # Returns
    //
    // Amount of pool shares issued to the user.
    fn add_liquidity(
        e: Env,
        user: Address,
        token_a: Address,
        token_b: Address,
        amount_a: u128,
        amount_b: u128,
    ) -> u128 {
        user.require_auth();

        if amount_a == 0 || amount_b == 0 {
            panic_with_error!(&e, CustodyAmmError::InvalidAmount);
        }

        if token_a == token_b {
            panic_with_error!(&e, CustodyAmmError::InvalidPair);
        }

        let (pool, shares_to_mint) = match get_pool(&e, &token_a, &token_b) {
            Some(pool) if !pool.is_drained() => {
                if !is_proportional(&e, amount_a, amount_b, pool.reserve_a, pool.reserve_b) {
                    panic_with_error!(&e, CustodyAmmError::InvalidAmount);
                }
                let new_shares = get_new_shares(&e, amount_a, pool.reserve_a, pool.total_shares);
                (
                    PoolInfo {
                        reserve_a: checked_add(&e, pool.reserve_a, amount_a),
                        reserve_b: checked_add(&e, pool.reserve_b, amount_b),
                        total_shares: checked_add(&e, pool.total_shares, new_shares),
                    },
                    new_shares,
                )
            }
            // first contribution for the pair, or pool emptied by full withdrawal:
            // deposited amounts set the price, shares are counted in token_a units
            _ => {
                log!(&e, "initializing pool", token_a, token_b, amount_a, amount_b);
                (
                    PoolInfo {
                        reserve_a: amount_a,
                        reserve_b: amount_b,
                        total_shares: amount_a,
                    },
                    amount_a,
                )
            }
        };

        if shares_to_mint == 0 {
            panic_with_error!(&e, CustodyAmmError::InvalidAmount);
        }

        let user_shares = checked_add(
            &e,
            get_user_shares(&e, &user, &token_a, &token_b),
            shares_to_mint,
        );

        transfer_in(&e, &token_a, &user, amount_a);
        transfer_in(&e, &token_b, &user, amount_b);

        put_pool(&e, &token_a, &token_b, &pool);
        put_user_shares(&e, &user, &token_a, &token_b, user_shares);

        let events = PoolEvents::new(&e);
        events.deposit_liquidity(
            user,
            token_a.clone(),
            token_b.clone(),
            amount_a,
            amount_b,
            shares_to_mint,
        );
        events.update_reserves(token_a, token_b, pool.reserve_a, pool.reserve_b);

        shares_to_mint
    }

    // Withdraws liquidity from the (token_a, token_b) pool.
    //
    // # Arguments
    //
    // * `user` - The address of the liquidity provider.
    // * `token_a` - First asset of the pool key.
    // * `token_b` - Second asset of the pool key.
    // * `share_amount` - Amount of shares to burn.
    //
    // # Returns
    //
    // Amounts of token_a and token_b sent to the user.
    fn remove_liquidity(
        e: Env,
        user: Address,
        token_a: Address,
        token_b: Address,
        share_amount: u128,
    ) -> (u128, u128) {
        user.require_auth();

        if share_amount == 0 {
            panic_with_error!(&e, CustodyAmmError::InvalidAmount);
        }

        let pool = match get_pool(&e, &token_a, &token_b) {
            Some(pool) => pool,
            None => panic_with_error!(&e, CustodyAmmError::InvalidPair),
        };

        let user_shares = get_user_shares(&e, &user, &token_a, &token_b);
        if share_amount > user_shares {
            panic_with_error!(&e, CustodyAmmError::InsufficientBalance);
        }

        // share_amount <= user_shares <= total_shares, so total_shares is never zero here
        let (amount_a, amount_b) = get_withdraw_amounts(
            &e,
            share_amount,
            pool.reserve_a,
            pool.reserve_b,
            pool.total_shares,
        );

        let pool = PoolInfo {
            reserve_a: pool.reserve_a - amount_a,
            reserve_b: pool.reserve_b - amount_b,
            total_shares: pool.total_shares - share_amount,
        };
        put_user_shares(&e, &user, &token_a, &token_b, user_shares - share_amount);
        put_pool(&e, &token_a, &token_b, &pool);

        transfer_out(&e, &token_a, &user, amount_a);
        transfer_out(&e, &token_b, &user, amount_b);

        let events = PoolEvents::new(&e);
        events.withdraw_liquidity(
            user,
            token_a.clone(),
            token_b.clone(),
            amount_a,
            amount_b,
            share_amount,
        );
        events.update_reserves(token_a, token_b, pool.reserve_a, pool.reserve_b);

        (amount_a, amount_b)
    }

    // Swaps tokens through the (token_in, token_out) pool.
    //
    // # Arguments
    //
    // * `user` - The address of the trader.
    // * `token_in` - Asset sold, first asset of the pool key.
    // * `token_out` - Asset bought, second asset of the pool key.
    // * `in_amount` - Amount of token_in to sell.
    //
    // # Returns
    //
    // The amount of token_out received.
    fn swap(
        e: Env,
        user: Address,
        token_in: Address,
        token_out: Address,
        in_amount: u128,
    ) -> u128 {
        user.require_auth();

        if in_amount == 0 {
            panic_with_error!(&e, CustodyAmmError::InvalidAmount);
        }

        let pool = get_live_pool(&e, &token_in, &token_out);

        let (out, fee) = get_amount_out(
            &e,
            in_amount,
            pool.reserve_a,
            pool.reserve_b,
            get_fee_rate(&e),
        );
        if out == 0 || out > pool.reserve_b {
            panic_with_error!(&e, CustodyAmmError::InvalidAmount);
        }

        let pool = PoolInfo {
            reserve_a: checked_add(&e, pool.reserve_a, in_amount),
            reserve_b: pool.reserve_b - out,
            total_shares: pool.total_shares,
        };

        transfer_in(&e, &token_in, &user, in_amount);
        transfer_out(&e, &token_out, &user, out);

        put_pool(&e, &token_in, &token_out, &pool);

        let events = PoolEvents::new(&e);
        events.trade(
            user,
            token_in.clone(),
            token_out.clone(),
            in_amount,
            out,
            fee,
        );
        events.update_reserves(token_in, token_out, pool.reserve_a, pool.reserve_b);

        out
    }

    // Estimates the result of a swap operation.
    //
    // # Arguments
    //
    // * `token_in` - Asset sold, first asset of the pool key.
    // * `token_out` - Asset bought, second asset of the pool key.
    // * `in_amount` - Amount of token_in to sell.
    //
    // # Returns
    //
    // The amount of token_out swap would return right now.
    fn estimate_swap(e: Env, token_in: Address, token_out: Address, in_amount: u128) -> u128 {
        if in_amount == 0 {
            panic_with_error!(&e, CustodyAmmError::InvalidAmount);
        }

        let pool = get_live_pool(&e, &token_in, &token_out);
        get_amount_out(
            &e,
            in_amount,
            pool.reserve_a,
            pool.reserve_b,
            get_fee_rate(&e),
        )
        .0
    }

    fn get_exchange_rate(e: Env, token_a: Address, token_b: Address, amount: u128) -> u128 {
        let pool = get_live_pool(&e, &token_a, &token_b);
        get_exchange_rate(&e, amount, pool.reserve_a, pool.reserve_b)
    }

    fn get_pool_info(e: Env, token_a: Address, token_b: Address) -> PoolInfo {
        match get_pool(&e, &token_a, &token_b) {
            Some(pool) => pool,
            None => panic_with_error!(&e, CustodyAmmError::InvalidPair),
        }
    }

    fn has_pool(e: Env, token_a: Address, token_b: Address) -> bool {
        get_pool(&e, &token_a, &token_b).is_some()
    }

    fn get_user_pool_shares(e: Env, user: Address, token_a: Address, token_b: Address) -> u128 {
        get_user_shares(&e, &user, &token_a, &token_b)
    }

    fn get_protocol_fee(e: Env) -> u32 {
        get_fee_rate(&e)
    }
}

#[contractimpl]
impl AdminInterfaceTrait for CustodyAmm {
    // Sets fee rate used by every following swap.
    //
    // # Arguments
    //
    // * `admin` - The address of the contract owner.
    // * `new_rate` - Fee in parts-per-1000, 100 at most.
    //
    // # Returns
    //
    // true on success.
    fn set_protocol_fee(e: Env, admin: Address, new_rate: u32) -> bool {
        require_admin(&e, &admin);

        if new_rate > MAX_FEE_RATE {
            panic_with_error!(&e, CustodyAmmError::InvalidAmount);
        }

        set_fee_rate(&e, &new_rate);
        PoolEvents::new(&e).set_protocol_fee(new_rate);
        true
    }

    fn get_admin(e: Env) -> Address {
        AccessControl::new(&e).get_admin()
    }
}

#[contractimpl]
impl TransferableContract for CustodyAmm {
    // Commits an ownership transfer. It can be applied after the delay passes.
    //
    // # Arguments
    //
    // * `admin` - The address of the current owner.
    // * `new_admin` - The address of the future owner.
    fn commit_transfer_ownership(e: Env, admin: Address, new_admin: Address) {
        require_admin(&e, &admin);

        AccessControl::new(&e).commit_transfer_ownership(&new_admin);
        AccessControlEvents::new(&e).commit_transfer_ownership(new_admin);
    }

    // Applies the committed ownership transfer.
    //
    // # Arguments
    //
    // * `admin` - The address of the current owner.
    fn apply_transfer_ownership(e: Env, admin: Address) {
        require_admin(&e, &admin);

        let new_admin = AccessControl::new(&e).apply_transfer_ownership();
        AccessControlEvents::new(&e).apply_transfer_ownership(new_admin);
    }

    // Cancels the committed ownership transfer.
    //
    // # Arguments
    //
    // * `admin` - The address of the current owner.
    fn revert_transfer_ownership(e: Env, admin: Address) {
        require_admin(&e, &admin);

        AccessControl::new(&e).revert_transfer_ownership();
        AccessControlEvents::new(&e).revert_transfer_ownership();
    }

    fn get_future_admin(e: Env) -> Option<Address> {
        AccessControl::new(&e).get_future_admin()
    }
}
