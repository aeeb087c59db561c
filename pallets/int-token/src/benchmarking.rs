//! Benchmarking setup for pallet-int-token

use super::*;

#[allow(unused)]
use crate::Pallet as IntToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

const SEED: u32 = 0;

/// Make `who` a member without going through the call.
fn whitelist<T: Config>(who: &T::AccountId) {
    Whitelist::<T>::insert(who, true);
}

/// Credit `who` while keeping the supply in step.
fn fund<T: Config>(who: &T::AccountId, amount: Balance) {
    Balances::<T>::mutate(who, |balance| *balance = balance.saturating_add(amount));
    TotalSupply::<T>::mutate(|supply| *supply = supply.saturating_add(amount));
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn create() {
        Owner::<T>::kill();
        let caller: T::AccountId = whitelisted_caller();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), 1_000_000);

        assert_eq!(Owner::<T>::get(), Some(caller));
    }

    #[benchmark]
    fn mint() {
        let caller: T::AccountId = whitelisted_caller();
        let beneficiary: T::AccountId = account("beneficiary", 0, SEED);
        whitelist::<T>(&caller);
        let before = Balances::<T>::get(&beneficiary);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), 1_000_000, beneficiary.clone());

        assert_eq!(Balances::<T>::get(&beneficiary), before + 1_000_000);
    }

    #[benchmark]
    fn burn() {
        let caller: T::AccountId = whitelisted_caller();
        let holder: T::AccountId = account("holder", 0, SEED);
        whitelist::<T>(&caller);
        fund::<T>(&holder, 10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), 1_000_000, holder.clone());

        assert_eq!(Balances::<T>::get(&holder), 9_000_000);
    }

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, SEED);
        fund::<T>(&caller, 10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipient.clone(), 1_000_000);

        assert_eq!(Balances::<T>::get(&recipient), 1_000_000);
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, SEED);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), 1_000_000);

        assert_eq!(Allowances::<T>::get(&caller, &spender), 1_000_000);
    }

    #[benchmark]
    fn transfer_from() {
        let spender: T::AccountId = whitelisted_caller();
        let holder: T::AccountId = account("holder", 0, SEED);
        let recipient: T::AccountId = account("recipient", 1, SEED);
        fund::<T>(&holder, 10_000_000);
        Allowances::<T>::insert(&holder, &spender, 5_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(spender.clone()), holder.clone(), recipient.clone(), 1_000_000);

        assert_eq!(Balances::<T>::get(&recipient), 1_000_000);
        assert_eq!(Allowances::<T>::get(&holder, &spender), 4_000_000);
    }

    #[benchmark]
    fn add_to_whitelist() {
        let caller: T::AccountId = whitelisted_caller();
        let account: T::AccountId = account("member", 0, SEED);
        whitelist::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), account.clone());

        assert!(Whitelist::<T>::get(&account));
    }

    #[benchmark]
    fn remove_from_whitelist() {
        let caller: T::AccountId = whitelisted_caller();
        let account: T::AccountId = account("member", 0, SEED);
        whitelist::<T>(&caller);
        whitelist::<T>(&account);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), account.clone());

        assert!(!Whitelist::<T>::get(&account));
    }

    impl_benchmark_test_suite!(IntToken, crate::mock::new_test_ext(), crate::mock::Test);
}
