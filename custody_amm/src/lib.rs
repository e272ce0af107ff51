#![no_std]

mod constants;
mod contract;
pub mod errors;
mod events;
mod interface;
mod pool;
mod storage;
mod test;
mod test_permissions;
mod testutils;
mod token;

pub use contract::{CustodyAmm, CustodyAmmArgs, CustodyAmmClient};
pub use storage::PoolInfo;
