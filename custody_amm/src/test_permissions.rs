#![cfg(test)]
extern crate std;

use crate::testutils::Setup;
use access_control::constants::ADMIN_ACTIONS_DELAY;
use soroban_sdk::testutils::{Address as _, AuthorizedFunction, AuthorizedInvocation};
use soroban_sdk::{Address, Error, IntoVal, Symbol};
use utils::test_utils::jump;

#[test]
fn test_deposit_requires_user_auth() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = setup.users[0].clone();

    setup.contract.deposit(&user, &1000);
    assert_eq!(
        e.auths()[0],
        (
            user.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    setup.contract.address.clone(),
                    Symbol::new(e, "deposit"),
                    (&user, 1000_u128).into_val(e),
                )),
                sub_invocations: std::vec![AuthorizedInvocation {
                    function: AuthorizedFunction::Contract((
                        setup.base_asset.address.clone(),
                        Symbol::new(e, "transfer"),
                        (&user, &setup.contract.address, 1000_i128).into_val(e),
                    )),
                    sub_invocations: std::vec![],
                }],
            }
        )
    );
}

#[test]
fn test_withdraw_requires_user_auth() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = setup.users[0].clone();

    setup.contract.deposit(&user, &1000);
    setup.contract.withdraw(&user, &300);
    assert_eq!(
        e.auths(),
        std::vec![(
            user.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    setup.contract.address.clone(),
                    Symbol::new(e, "withdraw"),
                    (&user, 300_u128).into_val(e),
                )),
                sub_invocations: std::vec![],
            }
        )]
    );
}

#[test]
fn test_swap_requires_user_auth() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = setup.users[1].clone();
    let (token_a, token_b) = (setup.token_a.address.clone(), setup.token_b.address.clone());

    setup.init_pool(1_000_000, 1_000_000);
    setup.contract.swap(&user, &token_a, &token_b, &1000);
    assert_eq!(
        e.auths()[0],
        (
            user.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    setup.contract.address.clone(),
                    Symbol::new(e, "swap"),
                    (&user, &token_a, &token_b, 1000_u128).into_val(e),
                )),
                sub_invocations: std::vec![AuthorizedInvocation {
                    function: AuthorizedFunction::Contract((
                        token_a.clone(),
                        Symbol::new(e, "transfer"),
                        (&user, &setup.contract.address, 1000_i128).into_val(e),
                    )),
                    sub_invocations: std::vec![],
                }],
            }
        )
    );
}

#[test]
fn test_add_liquidity_requires_user_auth() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = setup.users[0].clone();
    let (token_a, token_b) = (setup.token_a.address.clone(), setup.token_b.address.clone());

    setup
        .contract
        .add_liquidity(&user, &token_a, &token_b, &1000, &2000);
    assert_eq!(
        e.auths()[0],
        (
            user.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    setup.contract.address.clone(),
                    Symbol::new(e, "add_liquidity"),
                    (&user, &token_a, &token_b, 1000_u128, 2000_u128).into_val(e),
                )),
                sub_invocations: std::vec![
                    AuthorizedInvocation {
                        function: AuthorizedFunction::Contract((
                            token_a.clone(),
                            Symbol::new(e, "transfer"),
                            (&user, &setup.contract.address, 1000_i128).into_val(e),
                        )),
                        sub_invocations: std::vec![],
                    },
                    AuthorizedInvocation {
                        function: AuthorizedFunction::Contract((
                            token_b.clone(),
                            Symbol::new(e, "transfer"),
                            (&user, &setup.contract.address, 2000_i128).into_val(e),
                        )),
                        sub_invocations: std::vec![],
                    },
                ],
            }
        )
    );
}

#[test]
fn test_remove_liquidity_requires_user_auth() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = setup.users[0].clone();
    let (token_a, token_b) = (setup.token_a.address.clone(), setup.token_b.address.clone());

    setup.init_pool(1000, 2000);
    setup
        .contract
        .remove_liquidity(&user, &token_a, &token_b, &400);
    assert_eq!(
        e.auths(),
        std::vec![(
            user.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    setup.contract.address.clone(),
                    Symbol::new(e, "remove_liquidity"),
                    (&user, &token_a, &token_b, 400_u128).into_val(e),
                )),
                sub_invocations: std::vec![],
            }
        )]
    );
}

#[test]
fn test_set_protocol_fee() {
    let setup = Setup::default();
    let e = &setup.env;

    assert_eq!(setup.contract.get_admin(), setup.admin);
    assert_eq!(setup.contract.set_protocol_fee(&setup.admin, &100), true);
    assert_eq!(
        e.auths()[0],
        (
            setup.admin.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    setup.contract.address.clone(),
                    Symbol::new(e, "set_protocol_fee"),
                    (&setup.admin, 100_u32).into_val(e),
                )),
                sub_invocations: std::vec![],
            }
        )
    );
    assert_eq!(setup.contract.get_protocol_fee(), 100);
}

#[test]
#[should_panic(expected = "Error(Contract, #1001)")]
fn test_set_protocol_fee_not_owner() {
    let setup = Setup::default();
    setup.contract.set_protocol_fee(&setup.users[0], &10);
}

#[test]
fn test_set_protocol_fee_too_high() {
    let setup = Setup::default();

    assert_eq!(
        setup
            .contract
            .try_set_protocol_fee(&setup.admin, &101)
            .unwrap_err(),
        Ok(Error::from_contract_error(1003))
    );
    assert_eq!(
        setup
            .contract
            .try_set_protocol_fee(&setup.users[0], &101)
            .unwrap_err(),
        Ok(Error::from_contract_error(1001))
    );
    assert_eq!(setup.contract.get_protocol_fee(), 5);
}

// test transfer ownership
#[test]
#[should_panic(expected = "Error(Contract, #1001)")]
fn test_transfer_ownership_not_owner() {
    let setup = Setup::default();
    let stranger = setup.users[0].clone();

    setup.contract.commit_transfer_ownership(&stranger, &stranger);
}

#[test]
#[should_panic(expected = "Error(Contract, #2908)")]
fn test_transfer_ownership_too_early() {
    let setup = Setup::default();
    let contract = setup.contract;
    let admin_original = setup.admin.clone();
    let admin_new = Address::generate(&setup.env);

    contract.commit_transfer_ownership(&admin_original, &admin_new);
    assert_eq!(contract.get_future_admin(), Some(admin_new.clone()));
    // check admin not changed yet by calling protected method
    assert!(contract.try_revert_transfer_ownership(&admin_new).is_err());
    jump(&setup.env, ADMIN_ACTIONS_DELAY - 1);
    contract.apply_transfer_ownership(&admin_original);
}

#[test]
#[should_panic(expected = "Error(Contract, #2906)")]
fn test_transfer_ownership_twice() {
    let setup = Setup::default();
    let contract = setup.contract;
    let admin_original = setup.admin.clone();
    let admin_new = Address::generate(&setup.env);

    contract.commit_transfer_ownership(&admin_original, &admin_new);
    contract.commit_transfer_ownership(&admin_original, &admin_new);
}

#[test]
#[should_panic(expected = "Error(Contract, #2907)")]
fn test_transfer_ownership_not_committed() {
    let setup = Setup::default();
    let contract = setup.contract;
    let admin_original = setup.admin.clone();

    jump(&setup.env, ADMIN_ACTIONS_DELAY + 1);
    contract.apply_transfer_ownership(&admin_original);
}

#[test]
#[should_panic(expected = "Error(Contract, #2907)")]
fn test_transfer_ownership_reverted() {
    let setup = Setup::default();
    let contract = setup.contract;
    let admin_original = setup.admin.clone();
    let admin_new = Address::generate(&setup.env);

    contract.commit_transfer_ownership(&admin_original, &admin_new);
    jump(&setup.env, ADMIN_ACTIONS_DELAY + 1);
    contract.revert_transfer_ownership(&admin_original);
    assert_eq!(contract.get_future_admin(), None);
    contract.apply_transfer_ownership(&admin_original);
}

#[test]
fn test_transfer_ownership() {
    let setup = Setup::default();
    let contract = setup.contract;
    let admin_original = setup.admin.clone();
    let admin_new = Address::generate(&setup.env);

    contract.commit_transfer_ownership(&admin_original, &admin_new);
    // check admin not changed yet by calling protected method
    assert_eq!(
        contract
            .try_set_protocol_fee(&admin_new, &10)
            .unwrap_err(),
        Ok(Error::from_contract_error(1001))
    );
    jump(&setup.env, ADMIN_ACTIONS_DELAY + 1);
    contract.apply_transfer_ownership(&admin_original);

    assert_eq!(contract.get_admin(), admin_new);
    assert_eq!(contract.get_future_admin(), None);
    assert_eq!(
        contract
            .try_set_protocol_fee(&admin_original, &10)
            .unwrap_err(),
        Ok(Error::from_contract_error(1001))
    );
    contract.set_protocol_fee(&admin_new, &10);
    assert_eq!(contract.get_protocol_fee(), 10);

    // new owner can hand it over again
    contract.commit_transfer_ownership(&admin_new, &admin_original);
}
