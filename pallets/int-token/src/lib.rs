//! # INT Token Pallet
//!
//! A fungible token ledger with a flat authorization set. Members of the
//! whitelist may mint, burn and manage the whitelist; everybody may
//! transfer, approve and spend allowances.
//!
//! The ledger is created once, either at genesis or through [`Pallet::create`],
//! crediting the whole initial supply to the creator. The creator becomes the
//! owner, a permanent whitelist member.
//!
//! The all-zero account (see [`Pallet::zero_account`]) is reserved: it is the
//! `from` of every mint event and the `to` of every burn event, and it can
//! never be whitelisted, send or receive a transfer, grant an approval or be
//! approved as a spender.

#![cfg_attr(not(feature = "std"), no_std)]
// `pallet::getter` and the `RuntimeEvent` config item are deprecated upstream
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::traits::TrailingZeroInput;
use sp_std::prelude::*;

pub use pallet::*;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;

/// Log target for this pallet.
pub const LOG_TARGET: &str = "runtime::int-token";

/// Fixed decimal precision of the token.
pub const DECIMALS: u8 = 18;

/// Name used when genesis does not override it.
pub const DEFAULT_TOKEN_NAME: &[u8] = b"INTToken";

/// Symbol used when genesis does not override it.
pub const DEFAULT_TOKEN_SYMBOL: &[u8] = b"INT";

/// Token amount. Every arithmetic step on it is checked.
pub type Balance = u128;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Weight information for the calls of this pallet.
        type WeightInfo: WeightInfo;

        /// When `true`, `mint` rejects the zero account as beneficiary.
        ///
        /// Minting to the zero account inflates supply with tokens nobody can
        /// ever spend. Runtimes that want to forbid it turn this on.
        #[pallet::constant]
        type RejectZeroBeneficiary: Get<bool>;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    #[pallet::type_value]
    pub fn DefaultTokenName() -> BoundedVec<u8, ConstU32<64>> {
        BoundedVec::truncate_from(DEFAULT_TOKEN_NAME.to_vec())
    }

    #[pallet::type_value]
    pub fn DefaultTokenSymbol() -> BoundedVec<u8, ConstU32<16>> {
        BoundedVec::truncate_from(DEFAULT_TOKEN_SYMBOL.to_vec())
    }

    /// Token name ("INTToken" unless overridden at genesis)
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> =
        StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery, DefaultTokenName>;

    /// Token symbol ("INT" unless overridden at genesis)
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> =
        StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery, DefaultTokenSymbol>;

    /// Ledger owner. `None` until the ledger is created.
    #[pallet::storage]
    #[pallet::getter(fn owner)]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Total token supply
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, Balance, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, Balance, ValueQuery>;

    /// Remaining amount `spender` may move out of `owner`'s balance
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        Balance,
        ValueQuery,
    >;

    /// Accounts allowed to mint, burn and manage this set
    #[pallet::storage]
    #[pallet::getter(fn is_whitelisted)]
    pub type Whitelist<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Ledger created with the whole initial supply credited to the owner
        Created { owner: T::AccountId, initial_supply: Balance },
        /// Tokens moved. Mints come from the zero account, burns go to it.
        Transfer { from: T::AccountId, to: T::AccountId, value: Balance },
        /// Allowance of `spender` over `owner`'s tokens set to `value`
        Approval { owner: T::AccountId, spender: T::AccountId, value: Balance },
        /// `account` added to the whitelist by `by`
        WhitelistAdded { by: T::AccountId, account: T::AccountId },
        /// `account` removed from the whitelist by `by`
        WhitelistRemoved { by: T::AccountId, account: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller is not a whitelist member.
        Unauthorized,
        /// The zero account was given where a real account is required.
        InvalidAddress,
        /// Target is already on the whitelist.
        AlreadyMember,
        /// Target is not on the whitelist.
        NotAMember,
        /// The owner cannot leave the whitelist.
        OwnerProtected,
        /// Balance is lower than the requested amount.
        InsufficientBalance,
        /// Allowance is lower than the requested amount.
        InsufficientAllowance,
        /// Supply or a balance would exceed `u128::MAX`.
        ArithmeticOverflow,
        /// The ledger already has an owner.
        AlreadyCreated,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Create the ledger with the caller as owner.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::create())]
        pub fn create(origin: OriginFor<T>, initial_supply: Balance) -> DispatchResult {
            let creator = ensure_signed(origin)?;
            Self::do_create(creator, initial_supply)
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, amount: Balance, beneficiary: T::AccountId) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::ensure_member(&caller)?;
            if T::RejectZeroBeneficiary::get() {
                ensure!(!Self::is_zero(&beneficiary), Error::<T>::InvalidAddress);
            }

            let supply = TotalSupply::<T>::get()
                .checked_add(amount)
                .ok_or(Error::<T>::ArithmeticOverflow)?;
            let balance = Balances::<T>::get(&beneficiary)
                .checked_add(amount)
                .ok_or(Error::<T>::ArithmeticOverflow)?;

            TotalSupply::<T>::put(supply);
            Balances::<T>::insert(&beneficiary, balance);

            log::debug!(target: LOG_TARGET, "{caller:?} minted {amount} to {beneficiary:?}");
            Self::deposit_event(Event::Transfer {
                from: Self::zero_account(),
                to: beneficiary,
                value: amount,
            });
            Ok(())
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, amount: Balance, account: T::AccountId) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::ensure_member(&caller)?;

            let balance = Balances::<T>::get(&account)
                .checked_sub(amount)
                .ok_or(Error::<T>::InsufficientBalance)?;
            // Unreachable while supply equals the sum of balances.
            let supply = TotalSupply::<T>::get()
                .checked_sub(amount)
                .ok_or(Error::<T>::ArithmeticOverflow)?;

            Balances::<T>::insert(&account, balance);
            TotalSupply::<T>::put(supply);

            log::debug!(target: LOG_TARGET, "{caller:?} burned {amount} from {account:?}");
            Self::deposit_event(Event::Transfer {
                from: account,
                to: Self::zero_account(),
                value: amount,
            });
            Ok(())
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: Balance) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            ensure!(!Self::is_zero(&sender), Error::<T>::InvalidAddress);
            ensure!(!Self::is_zero(&to), Error::<T>::InvalidAddress);

            Self::move_balance(&sender, &to, amount)?;
            Self::deposit_event(Event::Transfer { from: sender, to, value: amount });
            Ok(())
        }

        /// Set the allowance of `spender` over the caller's tokens to exactly `amount`.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(origin: OriginFor<T>, spender: T::AccountId, amount: Balance) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            ensure!(!Self::is_zero(&owner), Error::<T>::InvalidAddress);
            ensure!(!Self::is_zero(&spender), Error::<T>::InvalidAddress);

            Allowances::<T>::insert(&owner, &spender, amount);
            Self::deposit_event(Event::Approval { owner, spender, value: amount });
            Ok(())
        }

        /// Move `amount` from `from` to `to`, spending the caller's allowance.
        ///
        /// Checks run in this order: `from` non-zero, `to` non-zero, allowance,
        /// then balance.
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: Balance,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            ensure!(!Self::is_zero(&from), Error::<T>::InvalidAddress);
            ensure!(!Self::is_zero(&to), Error::<T>::InvalidAddress);

            let allowance = Allowances::<T>::get(&from, &spender)
                .checked_sub(amount)
                .ok_or(Error::<T>::InsufficientAllowance)?;

            Self::move_balance(&from, &to, amount)?;
            Allowances::<T>::insert(&from, &spender, allowance);

            Self::deposit_event(Event::Transfer { from, to, value: amount });
            Ok(())
        }

        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::add_to_whitelist())]
        pub fn add_to_whitelist(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::ensure_member(&caller)?;
            ensure!(!Self::is_zero(&account), Error::<T>::InvalidAddress);
            ensure!(!Whitelist::<T>::get(&account), Error::<T>::AlreadyMember);

            Whitelist::<T>::insert(&account, true);

            log::info!(target: LOG_TARGET, "{caller:?} whitelisted {account:?}");
            Self::deposit_event(Event::WhitelistAdded { by: caller, account });
            Ok(())
        }

        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::remove_from_whitelist())]
        pub fn remove_from_whitelist(
            origin: OriginFor<T>,
            account: T::AccountId,
        ) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::ensure_member(&caller)?;
            ensure!(Whitelist::<T>::get(&account), Error::<T>::NotAMember);
            ensure!(Owner::<T>::get().as_ref() != Some(&account), Error::<T>::OwnerProtected);

            Whitelist::<T>::remove(&account);

            log::info!(target: LOG_TARGET, "{caller:?} removed {account:?} from whitelist");
            Self::deposit_event(Event::WhitelistRemoved { by: caller, account });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    pub struct GenesisConfig<T: Config> {
        /// Ledger owner. The ledger stays uncreated when `None`.
        pub owner: Option<T::AccountId>,
        /// Supply credited to the owner
        pub initial_supply: Balance,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
    }

    impl<T: Config> Default for GenesisConfig<T> {
        fn default() -> Self {
            Self {
                owner: None,
                initial_supply: 0,
                token_name: DEFAULT_TOKEN_NAME.to_vec(),
                token_symbol: DEFAULT_TOKEN_SYMBOL.to_vec(),
            }
        }
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            if let Some(ref owner) = self.owner {
                Pallet::<T>::do_create(owner.clone(), self.initial_supply)
                    .expect("genesis ledger creation failed");
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    /// The reserved all-zero account.
    pub fn zero_account() -> T::AccountId {
        T::AccountId::decode(&mut TrailingZeroInput::zeroes())
            .expect("infinite length input; no invalid inputs for type; qed")
    }

    pub fn is_zero(who: &T::AccountId) -> bool {
        *who == Self::zero_account()
    }

    /// Fixed decimal precision of the token.
    pub fn decimals() -> u8 {
        DECIMALS
    }

    /// Same as [`Pallet::is_whitelisted`].
    pub fn check_address_in_whitelist(who: &T::AccountId) -> bool {
        Whitelist::<T>::get(who)
    }

    /// Create the ledger: `owner` receives `initial_supply` and becomes the
    /// first whitelist member.
    pub fn do_create(owner: T::AccountId, initial_supply: Balance) -> DispatchResult {
        ensure!(!Owner::<T>::exists(), Error::<T>::AlreadyCreated);
        ensure!(!Self::is_zero(&owner), Error::<T>::InvalidAddress);

        let supply = TotalSupply::<T>::get()
            .checked_add(initial_supply)
            .ok_or(Error::<T>::ArithmeticOverflow)?;
        let balance = Balances::<T>::get(&owner)
            .checked_add(initial_supply)
            .ok_or(Error::<T>::ArithmeticOverflow)?;

        Owner::<T>::put(&owner);
        Whitelist::<T>::insert(&owner, true);
        TotalSupply::<T>::put(supply);
        Balances::<T>::insert(&owner, balance);

        log::info!(target: LOG_TARGET, "ledger created by {owner:?} with supply {initial_supply}");
        Self::deposit_event(Event::Created { owner, initial_supply });
        Ok(())
    }

    fn ensure_member(who: &T::AccountId) -> DispatchResult {
        ensure!(Whitelist::<T>::get(who), Error::<T>::Unauthorized);
        Ok(())
    }

    /// Debit `from` and credit `to`. Nothing is written unless both sides succeed.
    fn move_balance(from: &T::AccountId, to: &T::AccountId, amount: Balance) -> DispatchResult {
        let from_balance = Balances::<T>::get(from)
            .checked_sub(amount)
            .ok_or(Error::<T>::InsufficientBalance)?;
        if from == to {
            return Ok(());
        }
        let to_balance = Balances::<T>::get(to)
            .checked_add(amount)
            .ok_or(Error::<T>::ArithmeticOverflow)?;

        Balances::<T>::insert(from, from_balance);
        Balances::<T>::insert(to, to_balance);
        Ok(())
    }

    /// Check the ledger invariants over the whole storage.
    ///
    /// - the balances sum to the total supply
    /// - the owner, once set, is whitelisted
    /// - the zero account is not whitelisted
    /// - the zero account holds nothing, when mints to it are rejected
    pub fn do_try_state() -> Result<(), DispatchError> {
        let sum = Balances::<T>::iter_values()
            .try_fold(0 as Balance, |acc, balance| acc.checked_add(balance))
            .ok_or(DispatchError::Other("sum of balances overflows"))?;
        ensure!(sum == TotalSupply::<T>::get(), "sum of balances differs from total supply");

        if let Some(owner) = Owner::<T>::get() {
            ensure!(Whitelist::<T>::get(&owner), "owner is not whitelisted");
        }
        ensure!(!Whitelist::<T>::get(Self::zero_account()), "zero account is whitelisted");
        if T::RejectZeroBeneficiary::get() {
            ensure!(Balances::<T>::get(Self::zero_account()) == 0, "zero account holds a balance");
        }
        Ok(())
    }
}
