use soroban_sdk::{Address, Env, Symbol};

#[derive(Clone)]
pub(crate) struct Events(Env);

impl Events {
    #[inline(always)]
    pub(crate) fn env(&self) -> &Env {
        &self.0
    }

    #[inline(always)]
    pub(crate) fn new(env: &Env) -> Events {
        Events(env.clone())
    }
}

pub(crate) trait LedgerEvents {
    fn deposit(&self, user: Address, amount: u128, balance: u128);

    fn withdraw(&self, user: Address, amount: u128, balance: u128);
}

impl LedgerEvents for Events {
    fn deposit(&self, user: Address, amount: u128, balance: u128) {
        self.env().events().publish(
            (Symbol::new(self.env(), "deposit"), user),
            (amount, balance),
        );
    }

    fn withdraw(&self, user: Address, amount: u128, balance: u128) {
        self.env().events().publish(
            (Symbol::new(self.env(), "withdraw"), user),
            (amount, balance),
        );
    }
}
