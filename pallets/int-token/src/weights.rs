//! Weights for pallet-int-token.
//!
//! Estimated from the storage accesses of each call. Replace with the output
//! of `frame-omni-bencher` once the benchmarks in `benchmarking.rs` are run on
//! reference hardware.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

/// Weight functions needed for pallet-int-token.
pub trait WeightInfo {
    fn create() -> Weight;
    fn mint() -> Weight;
    fn burn() -> Weight;
    fn transfer() -> Weight;
    fn approve() -> Weight;
    fn transfer_from() -> Weight;
    fn add_to_whitelist() -> Weight;
    fn remove_from_whitelist() -> Weight;
}

/// Weights using the runtime's configured database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    // Owner, TotalSupply, Balances
    fn create() -> Weight {
        Weight::from_parts(12_000_000, 1_500).saturating_add(T::DbWeight::get().reads_writes(3, 4))
    }
    // Whitelist, TotalSupply, Balances
    fn mint() -> Weight {
        Weight::from_parts(14_000_000, 3_500).saturating_add(T::DbWeight::get().reads_writes(3, 2))
    }
    // Whitelist, TotalSupply, Balances
    fn burn() -> Weight {
        Weight::from_parts(14_000_000, 3_500).saturating_add(T::DbWeight::get().reads_writes(3, 2))
    }
    // Balances x2
    fn transfer() -> Weight {
        Weight::from_parts(16_000_000, 6_000).saturating_add(T::DbWeight::get().reads_writes(2, 2))
    }
    // Allowances
    fn approve() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(T::DbWeight::get().writes(1))
    }
    // Allowances, Balances x2
    fn transfer_from() -> Weight {
        Weight::from_parts(20_000_000, 6_000).saturating_add(T::DbWeight::get().reads_writes(3, 3))
    }
    // Whitelist x2
    fn add_to_whitelist() -> Weight {
        Weight::from_parts(11_000_000, 3_500).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    // Whitelist x2, Owner
    fn remove_from_whitelist() -> Weight {
        Weight::from_parts(12_000_000, 3_500).saturating_add(T::DbWeight::get().reads_writes(3, 1))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn create() -> Weight {
        Weight::from_parts(12_000_000, 1_500).saturating_add(RocksDbWeight::get().reads_writes(3, 4))
    }
    fn mint() -> Weight {
        Weight::from_parts(14_000_000, 3_500).saturating_add(RocksDbWeight::get().reads_writes(3, 2))
    }
    fn burn() -> Weight {
        Weight::from_parts(14_000_000, 3_500).saturating_add(RocksDbWeight::get().reads_writes(3, 2))
    }
    fn transfer() -> Weight {
        Weight::from_parts(16_000_000, 6_000).saturating_add(RocksDbWeight::get().reads_writes(2, 2))
    }
    fn approve() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(RocksDbWeight::get().writes(1))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(20_000_000, 6_000).saturating_add(RocksDbWeight::get().reads_writes(3, 3))
    }
    fn add_to_whitelist() -> Weight {
        Weight::from_parts(11_000_000, 3_500).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn remove_from_whitelist() -> Weight {
        Weight::from_parts(12_000_000, 3_500).saturating_add(RocksDbWeight::get().reads_writes(3, 1))
    }
}
