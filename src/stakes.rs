multiversx_sc::imports!();

use crate::errors::{ERR_DURATION_TOO_SHORT, ERR_INSUFFICIENT_HEADROOM, ERR_NO_EXPIRED_STAKES};
use crate::types::Stake;

/// Shortest lock a member can choose
pub const MIN_STAKE_DURATION: u64 = 50;

/// Width of one multiplier tier, in epochs
pub const EPOCHS_PER_TIER: u64 = 50;

// ============================================================
// Stake Ledger
// One FIFO queue of stakes per member. Stakes are appended at
// the back and only ever reclaimed from the front.
// ============================================================

#[multiversx_sc::module]
pub trait StakesModule: crate::epoch::EpochModule {
    /// Triangular schedule: tier k = duration / 50 earns k(k+1)/2,
    /// i.e. 1x, 3x, 6x, 10x at 50, 100, 150, 200 epochs.
    #[view(getMultiplier)]
    fn multiplier_for(&self, duration_epochs: u64) -> BigUint {
        require!(
            duration_epochs >= MIN_STAKE_DURATION,
            ERR_DURATION_TOO_SHORT
        );

        let tier = duration_epochs / EPOCHS_PER_TIER;
        // halve whichever factor is even so the product never needs a division
        let (left, right) = if tier % 2 == 0 {
            (tier / 2, tier + 1)
        } else {
            (tier, (tier + 1) / 2)
        };
        BigUint::from(left) * BigUint::from(right)
    }

    /// Locks `amount` for `duration_epochs` starting now. The caller is
    /// responsible for having received the tokens into escrow.
    fn append_stake(
        &self,
        member: &ManagedAddress,
        amount: BigUint,
        duration_epochs: u64,
    ) -> Stake<Self::Api> {
        let multiplier = self.multiplier_for(duration_epochs);
        let stake = Stake {
            amount,
            start_epoch: self.current_epoch(),
            duration_epochs,
            multiplier,
        };
        let weight = stake.weight();

        self.stakes(member).push_back(stake.clone());
        self.total_staked(member).update(|total| *total += &stake.amount);
        self.weighted_budget(member).update(|budget| *budget += &weight);
        self.total_escrowed().update(|total| *total += &stake.amount);

        stake
    }

    /// Removes the oldest stake of `member` if it has vested and if the
    /// remaining budget still covers `committed` endorsements. Nothing is
    /// written unless both checks pass.
    fn reclaim_oldest(&self, member: &ManagedAddress, committed: &BigUint) -> Stake<Self::Api> {
        let current_epoch = self.current_epoch();
        let mut queue = self.stakes(member);

        let oldest = match queue.front() {
            Some(stake) if stake.is_vested(current_epoch) => stake,
            _ => sc_panic!(ERR_NO_EXPIRED_STAKES),
        };

        let remaining_budget = self.weighted_budget(member).get() - oldest.weight();
        require!(*committed <= remaining_budget, ERR_INSUFFICIENT_HEADROOM);

        queue.pop_front();
        self.weighted_budget(member).set(&remaining_budget);
        self.total_staked(member)
            .update(|total| *total -= &oldest.amount);
        self.total_escrowed().update(|total| *total -= &oldest.amount);

        oldest
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// (number of active stakes, total tokens staked)
    #[view(getStakeSummary)]
    fn get_stake_summary(&self, member: &ManagedAddress) -> MultiValue2<u64, BigUint> {
        let count = self.stakes(member).len() as u64;
        (count, self.total_staked(member).get()).into()
    }

    /// Active stakes, oldest first.
    #[view(getMemberStakes)]
    fn get_member_stakes(&self, member: &ManagedAddress) -> MultiValueEncoded<Stake<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for stake in self.stakes(member).iter() {
            result.push(stake);
        }
        result
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("stakes")]
    fn stakes(&self, member: &ManagedAddress) -> QueueMapper<Stake<Self::Api>>;

    #[view(getTotalStaked)]
    #[storage_mapper("totalStaked")]
    fn total_staked(&self, member: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(getWeightedBudget)]
    #[storage_mapper("weightedBudget")]
    fn weighted_budget(&self, member: &ManagedAddress) -> SingleValueMapper<BigUint>;

    /// Sum of every member's total staked; always equals the escrowed balance
    #[view(getTotalEscrowed)]
    #[storage_mapper("totalEscrowed")]
    fn total_escrowed(&self) -> SingleValueMapper<BigUint>;
}
