multiversx_sc::imports!();

use crate::errors::{ERR_ALREADY_REGISTERED, ERR_NOT_A_MEMBER, ERR_TARGET_NOT_A_MEMBER};

// ============================================================
// Member Registry
// Registration is explicit and happens once per address.
// Members are never removed.
// ============================================================

#[multiversx_sc::module]
pub trait MembersModule: crate::epoch::EpochModule + crate::events::EventsModule {
    fn register_member(&self, member: &ManagedAddress) {
        require!(self.members().insert(member.clone()), ERR_ALREADY_REGISTERED);

        self.member_registered_event(member, self.current_epoch());
    }

    fn require_member(&self, member: &ManagedAddress) {
        require!(self.is_registered(member), ERR_NOT_A_MEMBER);
    }

    fn require_registered_target(&self, target: &ManagedAddress) {
        require!(self.is_registered(target), ERR_TARGET_NOT_A_MEMBER);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isRegistered)]
    fn is_registered(&self, member: &ManagedAddress) -> bool {
        self.members().contains(member)
    }

    #[view(getMemberCount)]
    fn get_member_count(&self) -> u64 {
        self.members().len() as u64
    }

    #[view(getMembers)]
    fn get_members(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let total = self.members().len() as u64;
        let start = core::cmp::min(from, total) as usize;
        let end = core::cmp::min(from.saturating_add(count), total) as usize;

        for (idx, member) in self.members().iter().enumerate() {
            if idx >= end {
                break;
            }
            if idx >= start {
                result.push(member);
            }
        }
        result
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("members")]
    fn members(&self) -> UnorderedSetMapper<ManagedAddress>;
}
