#![no_std]

multiversx_sc::imports!();

pub mod access_control;
pub mod errors;

use debenture_common::{math, reentrancy};
use errors::*;

// ============================================================
// Debenture vault
//
// Deposits of the reference asset mint shares that represent a
// proportional claim on the pooled backing. Rounding always
// favors the pool: mint and redeem amounts are floored.
// ============================================================

#[multiversx_sc::contract]
pub trait DebentureVault:
    access_control::AccessControlModule + reentrancy::ReentrancyGuardModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, asset_token: EgldOrEsdtTokenIdentifier, initial_blocker: ManagedAddress) {
        require!(asset_token.is_valid(), ERR_INVALID_PAYMENT_TOKEN);

        self.asset_token().set(&asset_token);
        self.total_shares().set(BigUint::zero());
        self.total_backing().set(BigUint::zero());

        self.blockers().insert(initial_blocker.clone());
        self.blocker_added_event(&initial_blocker);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: deposit
    // The payment attached to the call is the transfer-in; it
    // either arrives in full with the call or the call never runs.
    // ========================================================

    #[endpoint(deposit)]
    #[payable("*")]
    fn deposit(&self) -> BigUint {
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().egld_or_single_esdt();

        require!(payment.amount > 0u64, ERR_INVALID_AMOUNT);
        require!(
            payment.token_identifier == self.asset_token().get(),
            ERR_INVALID_PAYMENT_TOKEN
        );

        self.enter_guard();

        // Priced against the totals before this deposit.
        let shares_to_mint = self.shares_for_deposit(&payment.amount);
        require!(shares_to_mint > 0u64, ERR_ZERO_SHARES);

        self.total_backing().update(|backing| *backing += &payment.amount);
        self.share_balance(&caller).update(|s| *s += &shares_to_mint);
        self.total_shares().update(|ts| *ts += &shares_to_mint);

        self.exit_guard();

        self.deposit_event(&caller, &payment.amount, &shares_to_mint);
        shares_to_mint
    }

    // ========================================================
    // ENDPOINT: withdraw
    // Ledger reaches its final state before the asset leaves.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self, share_amount: BigUint) -> BigUint {
        let caller = self.blockchain().get_caller();

        require!(share_amount > 0u64, ERR_INVALID_SHARES);
        require!(
            self.share_balance(&caller).get() >= share_amount,
            ERR_INSUFFICIENT_SHARES
        );
        require!(!self.sell_blocked(&caller).get(), ERR_SELL_BLOCKED);

        self.enter_guard();

        // payout = share_amount * total_backing / total_shares
        let payout = self.amount_for_withdrawal(&share_amount);

        self.debit_shares(&caller, &share_amount);
        self.total_shares().update(|ts| *ts -= &share_amount);
        self.total_backing().update(|backing| *backing -= &payout);

        let asset_token = self.asset_token().get();
        let held = self.blockchain().get_sc_balance(&asset_token, 0);
        require!(held >= payout, ERR_TRANSFER_FAILED);

        self.send().direct(&caller, &asset_token, 0, &payout);

        self.exit_guard();

        self.withdraw_event(&caller, &payout, &share_amount);
        payout
    }

    // ========================================================
    // ENDPOINT: setSellBlocked
    // ========================================================

    #[endpoint(setSellBlocked)]
    fn set_sell_blocked(&self, address: ManagedAddress, blocked: bool) {
        let caller = self.blockchain().get_caller();
        self.require_authorized(&caller);

        self.sell_blocked(&address).set(blocked);
        self.sell_block_changed_event(&address, blocked);
    }

    // ========================================================
    // Share token surface
    // ========================================================

    #[endpoint(transferShares)]
    fn transfer_shares(&self, to: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();

        self.enter_guard();
        self.move_shares(&caller, &to, &amount);
        self.exit_guard();
    }

    #[endpoint(approveShares)]
    fn approve_shares(&self, spender: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.allowance(&caller, &spender).set(&amount);
        self.share_approval_event(&caller, &spender, &amount);
    }

    #[endpoint(transferSharesFrom)]
    fn transfer_shares_from(&self, from: ManagedAddress, to: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();

        self.enter_guard();

        let allowance_mapper = self.allowance(&from, &caller);
        let allowed = allowance_mapper.get();
        require!(allowed >= amount, ERR_INSUFFICIENT_ALLOWANCE);
        allowance_mapper.set(allowed - &amount);

        self.move_shares(&from, &to, &amount);

        self.exit_guard();
    }

    // ========================================================
    // INTERNAL: share accounting
    // ========================================================

    fn shares_for_deposit(&self, amount: &BigUint) -> BigUint {
        let total_shares = self.total_shares().get();
        if total_shares == 0u64 {
            // Bootstrap 1:1, also when dust backing remains from
            // an emptied vault.
            return amount.clone();
        }
        math::mul_div_floor(amount, &total_shares, &self.total_backing().get())
    }

    fn amount_for_withdrawal(&self, share_amount: &BigUint) -> BigUint {
        let total_shares = self.total_shares().get();
        if total_shares == 0u64 {
            return BigUint::zero();
        }
        math::mul_div_floor(share_amount, &self.total_backing().get(), &total_shares)
    }

    /// Every share debit except minting goes through here.
    fn debit_shares(&self, owner: &ManagedAddress, amount: &BigUint) {
        require!(!self.sell_blocked(owner).get(), ERR_TRANSFERS_BLOCKED);

        let balance_mapper = self.share_balance(owner);
        let balance = balance_mapper.get();
        require!(balance >= *amount, ERR_INSUFFICIENT_SHARES);
        balance_mapper.set(balance - amount);
    }

    fn move_shares(&self, from: &ManagedAddress, to: &ManagedAddress, amount: &BigUint) {
        self.debit_shares(from, amount);
        self.share_balance(to).update(|b| *b += amount);
        self.share_transfer_event(from, to, amount);
    }

    // ========================================================
    // VIEWS: read-only queries
    // ========================================================

    #[view(balanceOf)]
    fn balance_of(&self, address: &ManagedAddress) -> BigUint {
        self.share_balance(address).get()
    }

    #[view(getOwnershipPercentage)]
    fn get_ownership_percentage(&self, address: &ManagedAddress) -> BigUint {
        let total_shares = self.total_shares().get();
        math::scaled_ratio(&self.share_balance(address).get(), &total_shares)
    }

    #[view(getExchangeRate)]
    fn get_exchange_rate(&self) -> BigUint {
        let total_shares = self.total_shares().get();
        if total_shares == 0u64 {
            return BigUint::from(math::PRECISION);
        }
        math::scaled_ratio(&self.total_backing().get(), &total_shares)
    }

    #[view(previewDeposit)]
    fn preview_deposit(&self, amount: BigUint) -> BigUint {
        self.shares_for_deposit(&amount)
    }

    #[view(previewWithdraw)]
    fn preview_withdraw(&self, share_amount: BigUint) -> BigUint {
        self.amount_for_withdrawal(&share_amount)
    }

    #[view(getVaultStats)]
    fn get_vault_stats(&self) -> MultiValue3<BigUint, BigUint, BigUint> {
        let backing = self.total_backing().get();
        let shares = self.total_shares().get();
        let rate = self.get_exchange_rate();
        (backing, shares, rate).into()
    }

    #[view(getAllowance)]
    fn get_allowance(&self, owner: &ManagedAddress, spender: &ManagedAddress) -> BigUint {
        self.allowance(owner, spender).get()
    }

    #[view(isSellBlocked)]
    fn is_sell_blocked(&self, address: &ManagedAddress) -> bool {
        self.sell_blocked(address).get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("deposit")]
    fn deposit_event(
        &self,
        #[indexed] depositor: &ManagedAddress,
        #[indexed] amount_in: &BigUint,
        shares_minted: &BigUint,
    );

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] withdrawer: &ManagedAddress,
        #[indexed] amount_out: &BigUint,
        shares_burned: &BigUint,
    );

    #[event("sellBlockChanged")]
    fn sell_block_changed_event(&self, #[indexed] address: &ManagedAddress, blocked: bool);

    #[event("shareTransfer")]
    fn share_transfer_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("shareApproval")]
    fn share_approval_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] spender: &ManagedAddress,
        amount: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getAssetToken)]
    #[storage_mapper("assetToken")]
    fn asset_token(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    #[view(getTotalShares)]
    #[storage_mapper("totalShares")]
    fn total_shares(&self) -> SingleValueMapper<BigUint>;

    #[view(getTotalBacking)]
    #[storage_mapper("totalBacking")]
    fn total_backing(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("shareBalance")]
    fn share_balance(&self, address: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("sellBlocked")]
    fn sell_blocked(&self, address: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper("allowance")]
    fn allowance(
        &self,
        owner: &ManagedAddress,
        spender: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;
}
