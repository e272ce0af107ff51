use crate::errors::CustodyAmmError;
use soroban_sdk::token::TokenClient as Client;
use soroban_sdk::{panic_with_error, Address, Env};

// SEP-41 amounts are signed, anything above i128::MAX can't be moved.
fn to_token_amount(e: &Env, amount: u128) -> i128 {
    match i128::try_from(amount) {
        Ok(v) => v,
        Err(_) => panic_with_error!(e, CustodyAmmError::InvalidAmount),
    }
}

// Pull `amount` of `token` from `from` into the contract's custody.
pub fn transfer_in(e: &Env, token: &Address, from: &Address, amount: u128) {
    Client::new(e, token).transfer(
        from,
        &e.current_contract_address(),
        &to_token_amount(e, amount),
    );
}

// Send `amount` of `token` from custody to `to`.
pub fn transfer_out(e: &Env, token: &Address, to: &Address, amount: u128) {
    if amount == 0 {
        return;
    }
    Client::new(e, token).transfer(
        &e.current_contract_address(),
        to,
        &to_token_amount(e, amount),
    );
}
