#![no_std]

multiversx_sc::imports!();

pub mod endorsements;
pub mod epoch;
pub mod errors;
pub mod events;
pub mod members;
pub mod stakes;
pub mod types;

use errors::{
    ERR_INVALID_TOKEN_ID, ERR_TOKEN_TRANSFER_FAILED, ERR_ZERO_ENDORSEMENT,
    ERR_ZERO_MAX_ENDORSEMENT, ERR_ZERO_STAKE,
};
use stakes::{EPOCHS_PER_TIER, MIN_STAKE_DURATION};

// ============================================================
// Contract
// Members lock the staking token to earn a weighted endorsement
// budget, then hand that budget out to other members.
// ============================================================

#[multiversx_sc::contract]
pub trait Memberships:
    members::MembersModule
    + stakes::StakesModule
    + endorsements::EndorsementsModule
    + epoch::EpochModule
    + events::EventsModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, staking_token: EgldOrEsdtTokenIdentifier, max_endorsement: BigUint) {
        require!(staking_token.is_valid(), ERR_INVALID_TOKEN_ID);
        require!(max_endorsement > 0u64, ERR_ZERO_MAX_ENDORSEMENT);

        self.staking_token().set(&staking_token);
        self.max_endorsement().set(&max_endorsement);
        self.init_epoch_clock();
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: register
    // ========================================================

    #[endpoint(register)]
    fn register(&self) {
        let caller = self.blockchain().get_caller();
        self.register_member(&caller);
    }

    // ========================================================
    // ENDPOINT: stake
    // The attached payment is escrowed for `duration_epochs`.
    // ========================================================

    #[endpoint(stake)]
    #[payable("*")]
    fn stake(&self, duration_epochs: u64) {
        let caller = self.blockchain().get_caller();
        self.require_member(&caller);

        let (token_id, amount) = self.call_value().egld_or_single_fungible_esdt();
        require!(amount > 0u64, ERR_ZERO_STAKE);
        require!(
            token_id == self.staking_token().get(),
            ERR_TOKEN_TRANSFER_FAILED
        );

        let stake = self.append_stake(&caller, amount, duration_epochs);

        self.tokens_staked_event(
            &caller,
            &stake.amount,
            stake.duration_epochs,
            stake.start_epoch,
        );
    }

    // ========================================================
    // ENDPOINT: unstake
    // Releases the single oldest stake, once vested, as long as
    // the smaller budget still covers what was endorsed.
    // ========================================================

    #[endpoint(unstake)]
    fn unstake(&self) {
        let caller = self.blockchain().get_caller();
        self.require_member(&caller);

        let committed = self.total_endorsements_given(&caller).get();
        let stake = self.reclaim_oldest(&caller, &committed);

        let token_id = self.staking_token().get();
        self.send().direct(&caller, &token_id, 0, &stake.amount);

        self.tokens_unstaked_event(
            &caller,
            &stake.amount,
            stake.duration_epochs,
            self.current_epoch(),
        );
    }

    // ========================================================
    // ENDPOINT: endorseMember
    // ========================================================

    #[endpoint(endorseMember)]
    fn endorse_member(&self, target: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.require_member(&caller);
        self.require_registered_target(&target);
        require!(amount > 0u64, ERR_ZERO_ENDORSEMENT);

        self.give_endorsement(&caller, &target, &amount);

        self.endorsement_given_event(&caller, &target, &amount, self.current_epoch());
    }

    // ========================================================
    // ENDPOINT: withdrawEndorsementFrom
    // ========================================================

    #[endpoint(withdrawEndorsementFrom)]
    fn withdraw_endorsement_from(&self, target: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.require_member(&caller);
        require!(amount > 0u64, ERR_ZERO_ENDORSEMENT);

        self.withdraw_endorsement(&caller, &target, &amount);

        self.endorsement_withdrawn_event(&caller, &target, &amount, self.current_epoch());
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// (staking token, max endorsement per target, min duration, epochs per tier)
    #[view(getContractConfig)]
    fn get_contract_config(
        &self,
    ) -> MultiValue4<EgldOrEsdtTokenIdentifier, BigUint, u64, u64> {
        (
            self.staking_token().get(),
            self.max_endorsement().get(),
            MIN_STAKE_DURATION,
            EPOCHS_PER_TIER,
        )
            .into()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getStakingToken)]
    #[storage_mapper("stakingToken")]
    fn staking_token(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;
}
