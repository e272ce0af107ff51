use crate::constants::FEE_MULTIPLIER;
use crate::errors::CustodyAmmError;
use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{panic_with_error, Env, U256};

pub fn checked_add(e: &Env, a: u128, b: u128) -> u128 {
    match a.checked_add(b) {
        Some(v) => v,
        None => panic_with_error!(e, CustodyAmmError::InvalidAmount),
    }
}

fn checked_mul(e: &Env, a: u128, b: u128) -> u128 {
    match a.checked_mul(b) {
        Some(v) => v,
        None => panic_with_error!(e, CustodyAmmError::InvalidAmount),
    }
}

// Contribution must match pool price exactly: amount_a * reserve_b == amount_b * reserve_a.
// Products are compared in 256 bits so large reserves can't overflow the check.
pub fn is_proportional(
    e: &Env,
    amount_a: u128,
    amount_b: u128,
    reserve_a: u128,
    reserve_b: u128,
) -> bool {
    let lhs = U256::from_u128(e, amount_a).mul(&U256::from_u128(e, reserve_b));
    let rhs = U256::from_u128(e, amount_b).mul(&U256::from_u128(e, reserve_a));
    lhs == rhs
}

// Shares minted for a proportional contribution into a live pool.
pub fn get_new_shares(e: &Env, amount_a: u128, reserve_a: u128, total_shares: u128) -> u128 {
    amount_a.fixed_mul_floor(e, &total_shares, &reserve_a)
}

// Amounts released for burning `shares` out of `total_shares`.
pub fn get_withdraw_amounts(
    e: &Env,
    shares: u128,
    reserve_a: u128,
    reserve_b: u128,
    total_shares: u128,
) -> (u128, u128) {
    (
        shares.fixed_mul_floor(e, &reserve_a, &total_shares),
        shares.fixed_mul_floor(e, &reserve_b, &total_shares),
    )
}

// out = floor(in * (1000 - fee) * reserve_out / (1000 * (reserve_in + in)))
//
// Raw input (not the fee adjusted one) is added to reserve_in in the denominator.
// Returns (out, fee), fee being the share of input the pool keeps on top of the curve.
pub fn get_amount_out(
    e: &Env,
    in_amount: u128,
    reserve_in: u128,
    reserve_out: u128,
    fee_rate: u32,
) -> (u128, u128) {
    if in_amount == 0 {
        return (0, 0);
    }

    let fee_adjusted_in = checked_mul(e, in_amount, FEE_MULTIPLIER - fee_rate as u128);
    let denominator = checked_mul(e, checked_add(e, reserve_in, in_amount), FEE_MULTIPLIER);
    let out = fee_adjusted_in.fixed_mul_floor(e, &reserve_out, &denominator);
    (out, in_amount - fee_adjusted_in / FEE_MULTIPLIER)
}

// Reference price ignoring the fee: amount * reserve_b / (reserve_a * 1000)
pub fn get_exchange_rate(e: &Env, amount: u128, reserve_a: u128, reserve_b: u128) -> u128 {
    let denominator = checked_mul(e, reserve_a, FEE_MULTIPLIER);
    amount.fixed_mul_floor(e, &reserve_b, &denominator)
}
