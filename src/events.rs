multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("memberRegistered")]
    fn member_registered_event(&self, #[indexed] member: &ManagedAddress, #[indexed] epoch: u64);

    #[event("tokensStaked")]
    fn tokens_staked_event(
        &self,
        #[indexed] member: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] duration_epochs: u64,
        #[indexed] start_epoch: u64,
    );

    #[event("tokensUnstaked")]
    fn tokens_unstaked_event(
        &self,
        #[indexed] member: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] duration_epochs: u64,
        #[indexed] epoch: u64,
    );

    #[event("endorsementGiven")]
    fn endorsement_given_event(
        &self,
        #[indexed] giver: &ManagedAddress,
        #[indexed] target: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] epoch: u64,
    );

    #[event("endorsementWithdrawn")]
    fn endorsement_withdrawn_event(
        &self,
        #[indexed] giver: &ManagedAddress,
        #[indexed] target: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] epoch: u64,
    );
}
