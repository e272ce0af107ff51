#![no_std]

use soroban_sdk::{Address, Env, Symbol};

#[derive(Clone)]
pub struct Events(Env);

impl Events {
    #[inline(always)]
    pub fn env(&self) -> &Env {
        &self.0
    }

    #[inline(always)]
    pub fn new(env: &Env) -> Events {
        Events(env.clone())
    }
}

// Events emitted by pair-keyed constant product pools.
// Pool is identified by the ordered (token_a, token_b) pair in every topic list,
// so (A, B) and (B, A) pools are never mixed up by indexers.
pub trait LiquidityPoolEvents {
    fn deposit_liquidity(
        &self,
        user: Address,
        token_a: Address,
        token_b: Address,
        amount_a: u128,
        amount_b: u128,
        share_amount: u128,
    );

    fn withdraw_liquidity(
        &self,
        user: Address,
        token_a: Address,
        token_b: Address,
        amount_a: u128,
        amount_b: u128,
        share_amount: u128,
    );

    fn trade(
        &self,
        user: Address,
        token_in: Address,
        token_out: Address,
        in_amount: u128,
        out_amount: u128,
        fee_amount: u128,
    );

    fn update_reserves(&self, token_a: Address, token_b: Address, reserve_a: u128, reserve_b: u128);

    fn set_protocol_fee(&self, fee_rate: u32);
}

impl LiquidityPoolEvents for Events {
    fn deposit_liquidity(
        &self,
        user: Address,
        token_a: Address,
        token_b: Address,
        amount_a: u128,
        amount_b: u128,
        share_amount: u128,
    ) {
        // topics
        // [
        //   "deposit_liquidity": Symbol, // event identifier
        //   token_a: Address,            // first asset of the pool key
        //   token_b: Address,            // second asset of the pool key
        //   user: Address                // liquidity provider
        // ]
        //
        // body
        // [
        //   share_amount: u128, // amount of pool shares issued
        //   amount_a: u128,     // amount of token_a deposited
        //   amount_b: u128      // amount of token_b deposited
        // ]
        let e = self.env();
        e.events().publish(
            (Symbol::new(e, "deposit_liquidity"), token_a, token_b, user),
            (share_amount, amount_a, amount_b),
        );
    }

    fn withdraw_liquidity(
        &self,
        user: Address,
        token_a: Address,
        token_b: Address,
        amount_a: u128,
        amount_b: u128,
        share_amount: u128,
    ) {
        // topics
        // [
        //   "withdraw_liquidity": Symbol, // event identifier
        //   token_a: Address,             // first asset of the pool key
        //   token_b: Address,             // second asset of the pool key
        //   user: Address                 // liquidity provider
        // ]
        //
        // body
        // [
        //   share_amount: u128, // amount of pool shares burned
        //   amount_a: u128,     // amount of token_a withdrawn
        //   amount_b: u128      // amount of token_b withdrawn
        // ]
        let e = self.env();
        e.events().publish(
            (Symbol::new(e, "withdraw_liquidity"), token_a, token_b, user),
            (share_amount, amount_a, amount_b),
        );
    }

    fn trade(
        &self,
        user: Address,
        token_in: Address,
        token_out: Address,
        in_amount: u128,
        out_amount: u128,
        fee_amount: u128,
    ) {
        // topics
        // [
        //   "trade": Symbol,       // event identifier
        //   sold_asset: Address,   // asset sent to the pool
        //   bought_asset: Address, // asset received from the pool
        //   trader: Address        // address of account/contract that initiated the trade
        // ]
        // body
        // [
        //   sold_amount: u128,   // amount of tokens sent to the pool
        //   bought_amount: u128, // amount of tokens received from the pool
        //   fee: u128            // part of sold amount retained as fee
        // ]
        let e = self.env();
        e.events().publish(
            (Symbol::new(e, "trade"), token_in, token_out, user),
            (in_amount, out_amount, fee_amount),
        );
    }

    fn update_reserves(&self, token_a: Address, token_b: Address, reserve_a: u128, reserve_b: u128) {
        let e = self.env();
        e.events().publish(
            (Symbol::new(e, "update_reserves"), token_a, token_b),
            (reserve_a, reserve_b),
        );
    }

    fn set_protocol_fee(&self, fee_rate: u32) {
        // fee_rate is in parts-per-1000
        let e = self.env();
        e.events()
            .publish((Symbol::new(e, "set_protocol_fee"),), (fee_rate,));
    }
}
