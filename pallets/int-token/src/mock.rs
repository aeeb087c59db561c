use crate as pallet_int_token;
use frame_support::{derive_impl, parameter_types, traits::ConstU32};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        IntToken: pallet_int_token,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type AccountData = ();
    type MaxConsumers = ConstU32<16>;
}

pub const ZERO: u64 = 0;
pub const OWNER: u64 = 1;
pub const ACCOUNT1: u64 = 2;
pub const ACCOUNT2: u64 = 3;
pub const ACCOUNT3: u64 = 4;

pub const INITIAL_SUPPLY: u128 = 1_000_000;

parameter_types! {
    pub static RejectZeroBeneficiary: bool = false;
}

impl pallet_int_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type WeightInfo = ();
    type RejectZeroBeneficiary = RejectZeroBeneficiary;
}

fn build_ext(owner: Option<u64>, initial_supply: u128) -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_int_token::GenesisConfig::<Test> { owner, initial_supply, ..Default::default() }
        .assimilate_storage(&mut t)
        .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    // Events are not recorded at block 0.
    ext.execute_with(|| System::set_block_number(1));
    ext
}

// Ledger created at genesis by OWNER with INITIAL_SUPPLY.
pub fn new_test_ext() -> sp_io::TestExternalities {
    build_ext(Some(OWNER), INITIAL_SUPPLY)
}

// Ledger not created yet; only `create` can set it up.
pub fn new_uncreated_ext() -> sp_io::TestExternalities {
    build_ext(None, 0)
}
