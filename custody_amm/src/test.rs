#![cfg(test)]
extern crate std;

use crate::testutils::{
    create_contract, create_freezable_token_contract, get_token_admin_client, Setup, TestConfig,
};
use crate::PoolInfo;
use soroban_sdk::testutils::{Address as _, Events};
use soroban_sdk::{vec, Address, Error, IntoVal, Symbol};

#[test]
fn test_deposit_withdraw() {
    let setup = Setup::default();
    let user = setup.users[0].clone();
    let minted = TestConfig::default().mint_to_user;

    assert_eq!(setup.contract.deposit(&user, &1000), true);
    assert_eq!(setup.contract.get_balance(&user), 1000);
    assert_eq!(setup.contract.get_total_supply(), 1000);
    assert_eq!(setup.base_asset.balance(&user), minted - 1000);
    assert_eq!(setup.base_asset.balance(&setup.contract.address), 1000);

    setup.contract.deposit(&setup.users[1], &250);
    assert_eq!(setup.contract.get_balance(&setup.users[1]), 250);
    assert_eq!(setup.contract.get_total_supply(), 1250);

    assert_eq!(setup.contract.withdraw(&user, &400), true);
    assert_eq!(setup.contract.get_balance(&user), 600);
    assert_eq!(setup.contract.get_total_supply(), 850);
    assert_eq!(setup.base_asset.balance(&user), minted - 600);

    // round trip restores everything
    setup.contract.withdraw(&user, &600);
    setup.contract.withdraw(&setup.users[1], &250);
    assert_eq!(setup.contract.get_balance(&user), 0);
    assert_eq!(setup.contract.get_total_supply(), 0);
    assert_eq!(setup.base_asset.balance(&user), minted);
    assert_eq!(setup.base_asset.balance(&setup.contract.address), 0);
    assert_eq!(setup.contract.get_base_asset(), setup.base_asset.address);

    // custodial account is the contract itself, not the owner
    assert_ne!(setup.contract.address, setup.admin);
}

#[test]
fn test_deposit_event() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = setup.users[0].clone();

    setup.contract.deposit(&user, &1000);
    let deposit_event = e.events().all().last().unwrap();
    assert_eq!(
        vec![e, deposit_event],
        vec![
            e,
            (
                setup.contract.address.clone(),
                (Symbol::new(e, "deposit"), user.clone()).into_val(e),
                (1000_u128, 1000_u128).into_val(e),
            ),
        ]
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #1003)")]
fn test_deposit_zero() {
    let setup = Setup::default();
    setup.contract.deposit(&setup.users[0], &0);
}

#[test]
fn test_deposit_over_token_limit() {
    let setup = Setup::default();
    let user = setup.users[0].clone();

    assert_eq!(
        setup
            .contract
            .try_deposit(&user, &(i128::MAX as u128 + 1))
            .unwrap_err(),
        Ok(Error::from_contract_error(1003))
    );
    assert_eq!(setup.contract.get_balance(&user), 0);
    assert_eq!(setup.contract.get_total_supply(), 0);
}

#[test]
fn test_deposit_without_funds() {
    let setup = Setup::default();
    let user = Address::generate(&setup.env);

    // token refuses the transfer, nothing gets credited
    assert!(setup.contract.try_deposit(&user, &100).is_err());
    assert_eq!(setup.contract.get_balance(&user), 0);
    assert_eq!(setup.contract.get_total_supply(), 0);
}

#[test]
fn test_withdraw_insufficient_balance() {
    let setup = Setup::default();
    let user = setup.users[0].clone();

    setup.contract.deposit(&user, &1000);
    assert_eq!(
        setup.contract.try_withdraw(&user, &1001).unwrap_err(),
        Ok(Error::from_contract_error(1002))
    );
    assert_eq!(
        setup.contract.try_withdraw(&setup.users[1], &1).unwrap_err(),
        Ok(Error::from_contract_error(1002))
    );
    assert_eq!(
        setup.contract.try_withdraw(&user, &0).unwrap_err(),
        Ok(Error::from_contract_error(1003))
    );
    assert_eq!(setup.contract.get_balance(&user), 1000);
    assert_eq!(setup.contract.get_total_supply(), 1000);
}

#[test]
fn test_withdraw_failed_payout_rolls_back() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = setup.users[0].clone();
    let base_asset = create_freezable_token_contract(e);
    let contract = create_contract(e, &setup.admin, &base_asset.address);

    contract.deposit(&user, &500);
    base_asset.freeze();

    assert!(contract.try_withdraw(&user, &200).is_err());
    assert_eq!(contract.get_balance(&user), 500);
    assert_eq!(contract.get_total_supply(), 500);
}

#[test]
fn test_first_deposit_creates_pool() {
    let setup = Setup::default();
    let user = setup.users[0].clone();
    let minted = TestConfig::default().mint_to_user;

    assert!(!setup
        .contract
        .has_pool(&setup.token_a.address, &setup.token_b.address));
    assert_eq!(setup.init_pool(1_000_000, 1_000_000), 1_000_000);

    assert_eq!(
        setup
            .contract
            .get_pool_info(&setup.token_a.address, &setup.token_b.address),
        PoolInfo {
            reserve_a: 1_000_000,
            reserve_b: 1_000_000,
            total_shares: 1_000_000,
        }
    );
    assert_eq!(
        setup.contract.get_user_pool_shares(
            &user,
            &setup.token_a.address,
            &setup.token_b.address
        ),
        1_000_000
    );
    assert_eq!(setup.token_a.balance(&user), minted - 1_000_000);
    assert_eq!(setup.token_b.balance(&user), minted - 1_000_000);
    assert_eq!(setup.token_a.balance(&setup.contract.address), 1_000_000);
    assert_eq!(setup.token_b.balance(&setup.contract.address), 1_000_000);
}

#[test]
fn test_first_deposit_shares_follow_token_a() {
    let setup = Setup::default();

    // initial shares equal amount of the first asset, not a geometric mean
    assert_eq!(setup.init_pool(1_000, 4_000_000), 1_000);
    assert_eq!(
        setup
            .contract
            .get_pool_info(&setup.token_a.address, &setup.token_b.address)
            .total_shares,
        1_000
    );
}

#[test]
fn test_proportional_deposit() {
    let setup = Setup::default();
    let user1 = setup.users[0].clone();
    let user2 = setup.users[1].clone();
    let (token_a, token_b) = (setup.token_a.address.clone(), setup.token_b.address.clone());

    setup.init_pool(1_000_000, 2_000_000);
    assert_eq!(
        setup
            .contract
            .add_liquidity(&user2, &token_a, &token_b, &500_000, &1_000_000),
        500_000
    );
    assert_eq!(
        setup
            .contract
            .add_liquidity(&user1, &token_a, &token_b, &10, &20),
        10
    );

    let pool = setup.contract.get_pool_info(&token_a, &token_b);
    assert_eq!(
        pool,
        PoolInfo {
            reserve_a: 1_500_010,
            reserve_b: 3_000_020,
            total_shares: 1_500_010,
        }
    );
    assert_eq!(
        setup
            .contract
            .get_user_pool_shares(&user1, &token_a, &token_b)
            + setup
                .contract
                .get_user_pool_shares(&user2, &token_a, &token_b),
        pool.total_shares
    );
}

#[test]
fn test_disproportional_deposit() {
    let setup = Setup::default();
    let user2 = setup.users[1].clone();
    let (token_a, token_b) = (setup.token_a.address.clone(), setup.token_b.address.clone());
    let minted = TestConfig::default().mint_to_user;

    setup.init_pool(1_000_000, 1_000_000);
    assert_eq!(
        setup
            .contract
            .try_add_liquidity(&user2, &token_a, &token_b, &1000, &1001)
            .unwrap_err(),
        Ok(Error::from_contract_error(1003))
    );
    assert_eq!(
        setup.contract.get_pool_info(&token_a, &token_b),
        PoolInfo {
            reserve_a: 1_000_000,
            reserve_b: 1_000_000,
            total_shares: 1_000_000,
        }
    );
    assert_eq!(
        setup
            .contract
            .get_user_pool_shares(&user2, &token_a, &token_b),
        0
    );
    assert_eq!(setup.token_a.balance(&user2), minted);
    assert_eq!(setup.token_b.balance(&user2), minted);
}

#[test]
fn test_add_liquidity_bad_input() {
    let setup = Setup::default();
    let user = setup.users[0].clone();
    let (token_a, token_b) = (setup.token_a.address.clone(), setup.token_b.address.clone());

    assert_eq!(
        setup
            .contract
            .try_add_liquidity(&user, &token_a, &token_b, &0, &100)
            .unwrap_err(),
        Ok(Error::from_contract_error(1003))
    );
    assert_eq!(
        setup
            .contract
            .try_add_liquidity(&user, &token_a, &token_b, &100, &0)
            .unwrap_err(),
        Ok(Error::from_contract_error(1003))
    );
    assert_eq!(
        setup
            .contract
            .try_add_liquidity(&user, &token_a, &token_a, &100, &100)
            .unwrap_err(),
        Ok(Error::from_contract_error(1004))
    );
    assert!(!setup.contract.has_pool(&token_a, &token_b));
}

#[test]
fn test_deposit_too_small_for_a_share() {
    let setup = Setup::default();
    let user1 = setup.users[0].clone();
    let user2 = setup.users[1].clone();
    let (token_a, token_b) = (setup.token_a.address.clone(), setup.token_b.address.clone());
    let minted = TestConfig::default().mint_to_user;

    // single share backed by almost a million token_a
    setup.init_pool(1, 1_000_000);
    assert_eq!(
        setup.contract.swap(&user1, &token_a, &token_b, &999_998),
        994_999
    );
    let pool = PoolInfo {
        reserve_a: 999_999,
        reserve_b: 5_001,
        total_shares: 1,
    };
    assert_eq!(setup.contract.get_pool_info(&token_a, &token_b), pool);

    // 333_333 * 5_001 == 1_667 * 999_999, yet it is worth a third of a share
    assert_eq!(
        setup
            .contract
            .try_add_liquidity(&user2, &token_a, &token_b, &333_333, &1_667)
            .unwrap_err(),
        Ok(Error::from_contract_error(1003))
    );
    assert_eq!(setup.contract.get_pool_info(&token_a, &token_b), pool);
    assert_eq!(
        setup
            .contract
            .get_user_pool_shares(&user2, &token_a, &token_b),
        0
    );
    assert_eq!(setup.token_a.balance(&user2), minted);
    assert_eq!(setup.token_b.balance(&user2), minted);
}

#[test]
fn test_deposit_after_fees_accrued() {
    let setup = Setup::default();
    let user1 = setup.users[0].clone();
    let user2 = setup.users[1].clone();
    let (token_a, token_b) = (setup.token_a.address.clone(), setup.token_b.address.clone());

    setup.init_pool(1_000_000, 1_000_000);
    assert_eq!(
        setup.contract.swap(&user1, &token_a, &token_b, &1_000_000),
        497_500
    );
    // pool price is now 2_000_000 / 502_500 = 800 / 201
    assert_eq!(
        setup
            .contract
            .try_add_liquidity(&user2, &token_a, &token_b, &800, &200)
            .unwrap_err(),
        Ok(Error::from_contract_error(1003))
    );
    assert_eq!(
        setup
            .contract
            .add_liquidity(&user2, &token_a, &token_b, &800, &201),
        400
    );

    let pool = setup.contract.get_pool_info(&token_a, &token_b);
    assert_eq!(
        pool,
        PoolInfo {
            reserve_a: 2_000_800,
            reserve_b: 502_701,
            total_shares: 1_000_400,
        }
    );
    assert_eq!(
        setup
            .contract
            .get_user_pool_shares(&user1, &token_a, &token_b)
            + setup
                .contract
                .get_user_pool_shares(&user2, &token_a, &token_b),
        pool.total_shares
    );
}

#[test]
fn test_add_liquidity_failed_transfer_rolls_back() {
    let setup = Setup::default();
    let (token_a, token_b) = (setup.token_a.address.clone(), setup.token_b.address.clone());
    let user = Address::generate(&setup.env);
    get_token_admin_client(&setup.env, &token_a).mint(&user, &1000);

    // user has token_a only, pulling token_b fails after token_a was taken
    assert!(setup
        .contract
        .try_add_liquidity(&user, &token_a, &token_b, &1000, &1000)
        .is_err());
    assert!(!setup.contract.has_pool(&token_a, &token_b));
    assert_eq!(setup.token_a.balance(&user), 1000);
    assert_eq!(setup.token_a.balance(&setup.contract.address), 0);
}

#[test]
fn test_swap() {
    let setup = Setup::default();
    let e = &setup.env;
    let user2 = setup.users[1].clone();
    let (token_a, token_b) = (setup.token_a.address.clone(), setup.token_b.address.clone());
    let minted = TestConfig::default().mint_to_user;

    setup.init_pool(1_000_000, 1_000_000);
    assert_eq!(setup.contract.get_protocol_fee(), 5);

    // 1000 * 995 * 1_000_000 / (1000 * 1_001_000) = 994.005
    assert_eq!(setup.contract.estimate_swap(&token_a, &token_b, &1000), 994);
    assert_eq!(setup.contract.swap(&user2, &token_a, &token_b, &1000), 994);
    let trade_events = e.events().all();
    let events_count = trade_events.len();
    assert_eq!(
        vec![
            e,
            trade_events.get(events_count - 2).unwrap(),
            trade_events.get(events_count - 1).unwrap()
        ],
        vec![
            e,
            (
                setup.contract.address.clone(),
                (
                    Symbol::new(e, "trade"),
                    token_a.clone(),
                    token_b.clone(),
                    user2.clone()
                )
                    .into_val(e),
                (1000_u128, 994_u128, 5_u128).into_val(e),
            ),
            (
                setup.contract.address.clone(),
                (Symbol::new(e, "update_reserves"), token_a.clone(), token_b.clone()).into_val(e),
                (1_001_000_u128, 999_006_u128).into_val(e),
            ),
        ]
    );

    assert_eq!(
        setup.contract.get_pool_info(&token_a, &token_b),
        PoolInfo {
            reserve_a: 1_001_000,
            reserve_b: 999_006,
            total_shares: 1_000_000,
        }
    );
    assert_eq!(setup.token_a.balance(&user2), minted - 1000);
    assert_eq!(setup.token_b.balance(&user2), minted + 994);
    assert_eq!(setup.token_a.balance(&setup.contract.address), 1_001_000);
    assert_eq!(setup.token_b.balance(&setup.contract.address), 999_006);
}

#[test]
fn test_swap_keeps_product() {
    let setup = Setup::default();
    let user2 = setup.users[1].clone();
    let (token_a, token_b) = (setup.token_a.address.clone(), setup.token_b.address.clone());

    setup.init_pool(1_000_000, 1_000_000);
    let expected_outs = [(1_000, 994), (77_777, 71_665), (250_000, 173_600), (5_000_000, 592_509)];
    for (in_amount, expected_out) in expected_outs {
        let before = setup.contract.get_pool_info(&token_a, &token_b);
        let estimated = setup.contract.estimate_swap(&token_a, &token_b, &in_amount);
        let out = setup.contract.swap(&user2, &token_a, &token_b, &in_amount);
        assert_eq!(out, expected_out);
        assert_eq!(out, estimated);

        let after = setup.contract.get_pool_info(&token_a, &token_b);
        assert!(after.reserve_a * after.reserve_b >= before.reserve_a * before.reserve_b);
        assert_eq!(after.total_shares, before.total_shares);
    }
    assert_eq!(
        setup.contract.get_pool_info(&token_a, &token_b),
        PoolInfo {
            reserve_a: 6_328_777,
            reserve_b: 161_232,
            total_shares: 1_000_000,
        }
    );
}

#[test]
fn test_swap_zero_output() {
    let setup = Setup::default();
    let user2 = setup.users[1].clone();
    let (token_a, token_b) = (setup.token_a.address.clone(), setup.token_b.address.clone());
    let minted = TestConfig::default().mint_to_user;

    setup.init_pool(1_000_000, 1_000_000);
    assert_eq!(
        setup
            .contract
            .try_swap(&user2, &token_a, &token_b, &1)
            .unwrap_err(),
        Ok(Error::from_contract_error(1003))
    );
    assert_eq!(
        setup
            .contract
            .try_swap(&user2, &token_a, &token_b, &0)
            .unwrap_err(),
        Ok(Error::from_contract_error(1003))
    );
    // preview fails the same way as the swap itself
    assert_eq!(
        setup
            .contract
            .try_estimate_swap(&token_a, &token_b, &0)
            .unwrap_err(),
        Ok(Error::from_contract_error(1003))
    );
    assert_eq!(setup.contract.estimate_swap(&token_a, &token_b, &1), 0);
    assert_eq!(setup.token_a.balance(&user2), minted);
    assert_eq!(
        setup
            .contract
            .get_pool_info(&token_a, &token_b)
            .reserve_a,
        1_000_000
    );
}

#[test]
fn test_swap_missing_pool() {
    let setup = Setup::default();
    let user2 = setup.users[1].clone();
    let (token_a, token_b) = (setup.token_a.address.clone(), setup.token_b.address.clone());

    assert_eq!(
        setup
            .contract
            .try_swap(&user2, &token_a, &token_b, &1000)
            .unwrap_err(),
        Ok(Error::from_contract_error(1004))
    );
    assert_eq!(
        setup
            .contract
            .try_estimate_swap(&token_a, &token_b, &1000)
            .unwrap_err(),
        Ok(Error::from_contract_error(1004))
    );
}

#[test]
fn test_pool_key_is_ordered() {
    let setup = Setup::default();
    let user1 = setup.users[0].clone();
    let user2 = setup.users[1].clone();
    let (token_a, token_b) = (setup.token_a.address.clone(), setup.token_b.address.clone());

    setup.init_pool(1_000_000, 1_000_000);

    // reverse direction doesn't find the (a, b) pool
    assert!(!setup.contract.has_pool(&token_b, &token_a));
    assert_eq!(
        setup
            .contract
            .try_swap(&user2, &token_b, &token_a, &1000)
            .unwrap_err(),
        Ok(Error::from_contract_error(1004))
    );

    // mirror pool is a separate record with its own reserves and shares
    assert_eq!(
        setup
            .contract
            .add_liquidity(&user1, &token_b, &token_a, &500_000, &1_000_000),
        500_000
    );
    assert_eq!(setup.contract.swap(&user2, &token_b, &token_a, &1000), 1986);
    assert_eq!(
        setup.contract.get_pool_info(&token_b, &token_a),
        PoolInfo {
            reserve_a: 501_000,
            reserve_b: 998_014,
            total_shares: 500_000,
        }
    );
    assert_eq!(
        setup.contract.get_pool_info(&token_a, &token_b),
        PoolInfo {
            reserve_a: 1_000_000,
            reserve_b: 1_000_000,
            total_shares: 1_000_000,
        }
    );
    assert_eq!(
        setup
            .contract
            .get_user_pool_shares(&user1, &token_a, &token_b),
        1_000_000
    );
    assert_eq!(
        setup
            .contract
            .get_user_pool_shares(&user1, &token_b, &token_a),
        500_000
    );
}

#[test]
fn test_exchange_rate() {
    let setup = Setup::default();
    let (token_a, token_b) = (setup.token_a.address.clone(), setup.token_b.address.clone());

    assert_eq!(
        setup
            .contract
            .try_get_exchange_rate(&token_a, &token_b, &1000)
            .unwrap_err(),
        Ok(Error::from_contract_error(1004))
    );

    setup.init_pool(1_000_000, 2_000_000);
    // 1_000_000 * 2_000_000 / (1_000_000 * 1000), fee is not applied
    assert_eq!(
        setup
            .contract
            .get_exchange_rate(&token_a, &token_b, &1_000_000),
        2000
    );
    assert_eq!(
        setup.contract.get_exchange_rate(&token_a, &token_b, &499),
        0
    );
    assert_eq!(
        setup
            .contract
            .try_get_exchange_rate(&token_b, &token_a, &1000)
            .unwrap_err(),
        Ok(Error::from_contract_error(1004))
    );
}

#[test]
fn test_remove_liquidity() {
    let setup = Setup::default();
    let user1 = setup.users[0].clone();
    let user2 = setup.users[1].clone();
    let (token_a, token_b) = (setup.token_a.address.clone(), setup.token_b.address.clone());
    let minted = TestConfig::default().mint_to_user;

    setup.init_pool(1_000_000, 1_000_000);
    setup.contract.swap(&user2, &token_a, &token_b, &1000);

    assert_eq!(
        setup
            .contract
            .remove_liquidity(&user1, &token_a, &token_b, &333_333),
        (333_666, 333_001)
    );
    assert_eq!(
        setup.contract.get_pool_info(&token_a, &token_b),
        PoolInfo {
            reserve_a: 667_334,
            reserve_b: 666_005,
            total_shares: 666_667,
        }
    );
    assert_eq!(
        setup
            .contract
            .get_user_pool_shares(&user1, &token_a, &token_b),
        666_667
    );

    // burning the rest empties the pool, fees stay with the provider
    assert_eq!(
        setup
            .contract
            .remove_liquidity(&user1, &token_a, &token_b, &666_667),
        (667_334, 666_005)
    );
    assert_eq!(setup.token_a.balance(&user1), minted + 1000);
    assert_eq!(setup.token_b.balance(&user1), minted - 994);
    assert_eq!(setup.token_a.balance(&setup.contract.address), 0);
    assert_eq!(setup.token_b.balance(&setup.contract.address), 0);
}

#[test]
fn test_remove_all_liquidity_keeps_pool() {
    let setup = Setup::default();
    let user1 = setup.users[0].clone();
    let user2 = setup.users[1].clone();
    let (token_a, token_b) = (setup.token_a.address.clone(), setup.token_b.address.clone());
    let minted = TestConfig::default().mint_to_user;

    setup.init_pool(1_000_000, 1_000_000);
    assert_eq!(
        setup
            .contract
            .remove_liquidity(&user1, &token_a, &token_b, &1_000_000),
        (1_000_000, 1_000_000)
    );
    assert_eq!(setup.token_a.balance(&user1), minted);
    assert_eq!(setup.token_b.balance(&user1), minted);

    assert!(setup.contract.has_pool(&token_a, &token_b));
    assert_eq!(
        setup.contract.get_pool_info(&token_a, &token_b),
        PoolInfo {
            reserve_a: 0,
            reserve_b: 0,
            total_shares: 0,
        }
    );

    // drained pool can't price anything
    assert_eq!(
        setup
            .contract
            .try_swap(&user2, &token_a, &token_b, &1000)
            .unwrap_err(),
        Ok(Error::from_contract_error(1004))
    );
    assert_eq!(
        setup
            .contract
            .try_get_exchange_rate(&token_a, &token_b, &1000)
            .unwrap_err(),
        Ok(Error::from_contract_error(1004))
    );
    assert_eq!(
        setup
            .contract
            .try_remove_liquidity(&user1, &token_a, &token_b, &1)
            .unwrap_err(),
        Ok(Error::from_contract_error(1002))
    );

    // next contribution initializes it again with a fresh price
    assert_eq!(
        setup
            .contract
            .add_liquidity(&user2, &token_a, &token_b, &2_000, &3_000),
        2_000
    );
    assert_eq!(
        setup.contract.get_pool_info(&token_a, &token_b),
        PoolInfo {
            reserve_a: 2_000,
            reserve_b: 3_000,
            total_shares: 2_000,
        }
    );
}

#[test]
fn test_remove_liquidity_bad_input() {
    let setup = Setup::default();
    let user1 = setup.users[0].clone();
    let user2 = setup.users[1].clone();
    let (token_a, token_b) = (setup.token_a.address.clone(), setup.token_b.address.clone());

    assert_eq!(
        setup
            .contract
            .try_remove_liquidity(&user1, &token_a, &token_b, &1)
            .unwrap_err(),
        Ok(Error::from_contract_error(1004))
    );

    setup.init_pool(1_000_000, 1_000_000);
    assert_eq!(
        setup
            .contract
            .try_remove_liquidity(&user1, &token_a, &token_b, &0)
            .unwrap_err(),
        Ok(Error::from_contract_error(1003))
    );
    assert_eq!(
        setup
            .contract
            .try_remove_liquidity(&user1, &token_a, &token_b, &1_000_001)
            .unwrap_err(),
        Ok(Error::from_contract_error(1002))
    );
    assert_eq!(
        setup
            .contract
            .try_remove_liquidity(&user2, &token_a, &token_b, &1)
            .unwrap_err(),
        Ok(Error::from_contract_error(1002))
    );
    assert_eq!(
        setup
            .contract
            .get_pool_info(&token_a, &token_b)
            .total_shares,
        1_000_000
    );
}

#[test]
fn test_remove_liquidity_failed_payout_rolls_back() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = setup.users[0].clone();
    let token_a = setup.token_a.address.clone();
    let frozen_token = create_freezable_token_contract(e);
    let minted = TestConfig::default().mint_to_user;

    setup
        .contract
        .add_liquidity(&user, &token_a, &frozen_token.address, &1000, &1000);
    frozen_token.freeze();

    // token_a is paid out first, then token_b transfer fails
    assert!(setup
        .contract
        .try_remove_liquidity(&user, &token_a, &frozen_token.address, &1000)
        .is_err());
    assert_eq!(setup.token_a.balance(&user), minted - 1000);
    assert_eq!(setup.token_a.balance(&setup.contract.address), 1000);
    assert_eq!(
        setup
            .contract
            .get_user_pool_shares(&user, &token_a, &frozen_token.address),
        1000
    );
    assert_eq!(
        setup
            .contract
            .get_pool_info(&token_a, &frozen_token.address),
        PoolInfo {
            reserve_a: 1000,
            reserve_b: 1000,
            total_shares: 1000,
        }
    );
}

#[test]
fn test_fee_change_applies_to_next_swap() {
    let setup = Setup::default();
    let user2 = setup.users[1].clone();
    let (token_a, token_b) = (setup.token_a.address.clone(), setup.token_b.address.clone());

    setup.init_pool(1_000_000, 1_000_000);
    setup.contract.set_protocol_fee(&setup.admin, &100);
    assert_eq!(setup.contract.get_protocol_fee(), 100);
    assert_eq!(setup.contract.estimate_swap(&token_a, &token_b, &1000), 899);

    setup.contract.set_protocol_fee(&setup.admin, &0);
    assert_eq!(setup.contract.estimate_swap(&token_a, &token_b, &1000), 999);
    assert_eq!(setup.contract.swap(&user2, &token_a, &token_b, &1000), 999);
}

#[test]
fn test_ledger_and_pools_are_separate() {
    let setup = Setup::default();
    let user = setup.users[0].clone();
    let base_asset = setup.base_asset.address.clone();
    let token_a = setup.token_a.address.clone();

    // base asset can also be pooled, the custodial ledger doesn't see pool reserves
    setup.contract.deposit(&user, &1000);
    setup
        .contract
        .add_liquidity(&user, &base_asset, &token_a, &5000, &5000);
    assert_eq!(setup.contract.get_balance(&user), 1000);
    assert_eq!(setup.contract.get_total_supply(), 1000);
    assert_eq!(setup.base_asset.balance(&setup.contract.address), 6000);

    setup.contract.withdraw(&user, &1000);
    assert_eq!(
        setup.contract.get_pool_info(&base_asset, &token_a).reserve_a,
        5000
    );
    assert_eq!(setup.base_asset.balance(&setup.contract.address), 5000);
}
