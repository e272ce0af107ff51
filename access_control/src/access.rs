use crate::errors::AccessControlError;
use crate::storage::DataKey;
use soroban_sdk::{panic_with_error, Address, Env};
use utils::bump::bump_instance;

#[derive(Clone)]
pub struct AccessControl(pub(crate) Env);

impl AccessControl {
    pub fn new(env: &Env) -> AccessControl {
        AccessControl(env.clone())
    }
}

pub trait AccessControlTrait {
    fn has_admin(&self) -> bool;
    fn get_admin_safe(&self) -> Option<Address>;
    fn get_admin(&self) -> Address;
    // initial assignment only, replacing the owner goes through TransferOwnershipTrait
    fn set_admin(&self, address: &Address);
    fn address_is_admin(&self, address: &Address) -> bool;
}

impl AccessControlTrait for AccessControl {
    fn has_admin(&self) -> bool {
        bump_instance(&self.0);
        self.0.storage().instance().has(&DataKey::Admin)
    }

    fn get_admin_safe(&self) -> Option<Address> {
        bump_instance(&self.0);
        self.0.storage().instance().get(&DataKey::Admin)
    }

    fn get_admin(&self) -> Address {
        match self.get_admin_safe() {
            Some(address) => address,
            None => panic_with_error!(&self.0, AccessControlError::AdminNotFound),
        }
    }

    fn set_admin(&self, address: &Address) {
        if self.has_admin() {
            panic_with_error!(&self.0, AccessControlError::AdminAlreadySet);
        }
        self.0.storage().instance().set(&DataKey::Admin, address);
    }

    fn address_is_admin(&self, address: &Address) -> bool {
        match self.get_admin_safe() {
            Some(admin) => &admin == address,
            None => false,
        }
    }
}
