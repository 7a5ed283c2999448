#![no_std]

//! Helpers shared by the Debenture vault and DAO contracts.

pub mod math;
pub mod reentrancy;
