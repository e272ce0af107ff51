#![no_std]
pub mod access;
pub mod constants;
pub mod errors;
pub mod events;
mod storage;
pub mod transfer;
