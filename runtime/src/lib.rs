//! Native runtime hosting the INT token ledger.
//!
//! The runtime orders calls, runs each dispatch in a storage transaction and
//! keeps the event log. Accounts are 32-byte `AccountId32`s, so the ledger's
//! reserved zero account is `[0u8; 32]`.

#![cfg_attr(not(feature = "std"), no_std)]

use frame_support::{construct_runtime, derive_impl, traits::ConstBool};
use sp_runtime::{
    generic,
    traits::{BlakeTwo256, IdentifyAccount, Verify},
    MultiAddress, MultiSignature,
};

pub use pallet_int_token as int_token;


pub type Signature = MultiSignature;
pub type AccountId = <<Signature as Verify>::Signer as IdentifyAccount>::AccountId;
pub type Nonce = u32;
pub type BlockNumber = u32;
pub type Balance = int_token::Balance;

pub type Address = MultiAddress<AccountId, ()>;
pub type Header = generic::Header<BlockNumber, BlakeTwo256>;
pub type TxExtension = (
    frame_system::CheckNonZeroSender<Runtime>,
    frame_system::CheckNonce<Runtime>,
    frame_system::CheckWeight<Runtime>,
);
pub type UncheckedExtrinsic =
    generic::UncheckedExtrinsic<Address, RuntimeCall, Signature, TxExtension>;
pub type Block = generic::Block<Header, UncheckedExtrinsic>;

/// Supply minted to the owner when the ledger is deployed.
pub const INITIAL_SUPPLY: Balance = 1_000_000;

construct_runtime!(
    pub enum Runtime {
        System: frame_system,
        IntToken: int_token,
    }
);

#[derive_impl(frame_system::config_preludes::SolochainDefaultConfig)]
impl frame_system::Config for Runtime {
    type Block = Block;
    type AccountId = AccountId;
    type Nonce = Nonce;
}

impl int_token::Config for Runtime {
    type RuntimeEvent = RuntimeEvent;
    type WeightInfo = int_token::weights::SubstrateWeight<Runtime>;
    // Minting to the zero account is refused on this chain.
    type RejectZeroBeneficiary = ConstBool<true>;
}

/// Genesis with the ledger created by `owner`.
pub fn genesis_config(owner: AccountId, initial_supply: Balance) -> RuntimeGenesisConfig {
    RuntimeGenesisConfig {
        system: Default::default(),
        int_token: IntTokenConfig { owner: Some(owner), initial_supply, ..Default::default() },
    }
}
