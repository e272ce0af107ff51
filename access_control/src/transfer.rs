use crate::access::{AccessControl, AccessControlTrait};
use crate::constants::ADMIN_ACTIONS_DELAY;
use crate::errors::AccessControlError;
use crate::storage::DataKey;
use soroban_sdk::{panic_with_error, Address};
use utils::bump::bump_instance;

pub trait TransferOwnershipTrait {
    fn get_transfer_ownership_deadline(&self) -> u64;
    fn get_future_admin(&self) -> Option<Address>;
    fn commit_transfer_ownership(&self, future_admin: &Address);
    fn apply_transfer_ownership(&self) -> Address;
    fn revert_transfer_ownership(&self);
}

impl AccessControl {
    fn put_transfer_ownership_deadline(&self, value: u64) {
        bump_instance(&self.0);
        self.0
            .storage()
            .instance()
            .set(&DataKey::TransferOwnershipDeadline, &value);
    }
}

impl TransferOwnershipTrait for AccessControl {
    fn get_transfer_ownership_deadline(&self) -> u64 {
        bump_instance(&self.0);
        self.0
            .storage()
            .instance()
            .get(&DataKey::TransferOwnershipDeadline)
            .unwrap_or(0)
    }

    fn get_future_admin(&self) -> Option<Address> {
        bump_instance(&self.0);
        self.0.storage().instance().get(&DataKey::FutureAdmin)
    }

    fn commit_transfer_ownership(&self, future_admin: &Address) {
        if self.get_transfer_ownership_deadline() != 0 {
            panic_with_error!(&self.0, AccessControlError::AnotherActionActive);
        }

        let deadline = self.0.ledger().timestamp() + ADMIN_ACTIONS_DELAY;
        self.put_transfer_ownership_deadline(deadline);
        self.0
            .storage()
            .instance()
            .set(&DataKey::FutureAdmin, future_admin);
    }

    fn apply_transfer_ownership(&self) -> Address {
        let deadline = self.get_transfer_ownership_deadline();
        if deadline == 0 {
            panic_with_error!(&self.0, AccessControlError::NoActionActive);
        }
        if self.0.ledger().timestamp() < deadline {
            panic_with_error!(&self.0, AccessControlError::ActionNotReadyYet);
        }

        self.put_transfer_ownership_deadline(0);
        let future_admin = match self.get_future_admin() {
            Some(v) => v,
            None => panic_with_error!(&self.0, AccessControlError::NoActionActive),
        };
        self.0.storage().instance().remove(&DataKey::FutureAdmin);
        self.0.storage().instance().set(&DataKey::Admin, &future_admin);
        future_admin
    }

    fn revert_transfer_ownership(&self) {
        self.put_transfer_ownership_deadline(0);
        self.0.storage().instance().remove(&DataKey::FutureAdmin);
    }
}
