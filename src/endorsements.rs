multiversx_sc::imports!();

use crate::errors::{ERR_INSUFFICIENT_BUDGET, ERR_INSUFFICIENT_EDGE, ERR_TARGET_CAP_EXCEEDED};

// ============================================================
// Endorsement Ledger
// Pairwise giver -> target amounts plus per-member aggregates.
// After every operation:
//   total_given(m)    <= weighted_budget(m)
//   total_received(t) <= max_endorsement
//   total_given(g)     = sum of endorsement(g, *)
// ============================================================

#[multiversx_sc::module]
pub trait EndorsementsModule: crate::stakes::StakesModule + crate::epoch::EpochModule {
    fn give_endorsement(&self, giver: &ManagedAddress, target: &ManagedAddress, amount: &BigUint) {
        require!(
            *amount <= self.total_endorsements_available_to_give(giver),
            ERR_INSUFFICIENT_BUDGET
        );

        let received_after = self.total_endorsements_received(target).get() + amount;
        require!(
            received_after <= self.max_endorsement().get(),
            ERR_TARGET_CAP_EXCEEDED
        );

        self.endorsement(giver, target).update(|edge| *edge += amount);
        self.total_endorsements_given(giver)
            .update(|given| *given += amount);
        self.total_endorsements_received(target).set(&received_after);
    }

    fn withdraw_endorsement(
        &self,
        giver: &ManagedAddress,
        target: &ManagedAddress,
        amount: &BigUint,
    ) {
        let edge = self.endorsement(giver, target).get();
        require!(*amount <= edge, ERR_INSUFFICIENT_EDGE);

        let remaining = edge - amount;
        if remaining == 0u64 {
            self.endorsement(giver, target).clear();
        } else {
            self.endorsement(giver, target).set(&remaining);
        }
        self.total_endorsements_given(giver)
            .update(|given| *given -= amount);
        self.total_endorsements_received(target)
            .update(|received| *received -= amount);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(totalEndorsementsAvailableToGive)]
    fn total_endorsements_available_to_give(&self, member: &ManagedAddress) -> BigUint {
        let budget = self.weighted_budget(member).get();
        let given = self.total_endorsements_given(member).get();
        if budget > given {
            budget - given
        } else {
            BigUint::zero()
        }
    }

    #[view(endorsementsGiven)]
    fn endorsements_given(&self, giver: &ManagedAddress, target: &ManagedAddress) -> BigUint {
        self.endorsement(giver, target).get()
    }

    #[view(endorsementsReceived)]
    fn endorsements_received(&self, target: &ManagedAddress, giver: &ManagedAddress) -> BigUint {
        self.endorsement(giver, target).get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    /// Per-target cap on endorsements received, fixed at deploy
    #[view(getMaxEndorsement)]
    #[storage_mapper("maxEndorsement")]
    fn max_endorsement(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("endorsement")]
    fn endorsement(
        &self,
        giver: &ManagedAddress,
        target: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;

    #[view(totalEndorsementsGiven)]
    #[storage_mapper("totalGiven")]
    fn total_endorsements_given(&self, member: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(totalEndorsementsReceived)]
    #[storage_mapper("totalReceived")]
    fn total_endorsements_received(&self, member: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
