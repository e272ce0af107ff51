// fee rate is expressed in parts-per-1000: 5 = 0.5%, 100 = 10%
pub(crate) const FEE_MULTIPLIER: u128 = 1000;
pub(crate) const DEFAULT_FEE_RATE: u32 = 5;
pub(crate) const MAX_FEE_RATE: u32 = 100;
