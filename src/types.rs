multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Stake — one time-locked deposit in a member's queue
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Stake<M: ManagedTypeApi> {
    pub amount: BigUint<M>,
    /// Organization epoch at which the tokens were locked
    pub start_epoch: u64,
    pub duration_epochs: u64,
    /// Triangular tier factor, fixed when the stake is created
    pub multiplier: BigUint<M>,
}

impl<M: ManagedTypeApi> Stake<M> {
    /// First epoch at which the stake can be reclaimed.
    pub fn vesting_epoch(&self) -> u64 {
        self.start_epoch.saturating_add(self.duration_epochs)
    }

    pub fn is_vested(&self, current_epoch: u64) -> bool {
        self.vesting_epoch() <= current_epoch
    }

    /// Endorsement budget this stake contributes while it is active.
    pub fn weight(&self) -> BigUint<M> {
        &self.amount * &self.multiplier
    }
}
