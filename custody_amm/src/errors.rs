use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CustodyAmmError {
    // caller is not the contract owner
    Unauthorized = 1001,
    // amount exceeds available balance or shares
    InsufficientBalance = 1002,
    // zero, overflowing, disproportionate or out of bounds input
    InvalidAmount = 1003,
    // pool for the ordered pair does not exist
    InvalidPair = 1004,
}
