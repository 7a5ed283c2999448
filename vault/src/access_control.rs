multiversx_sc::imports!();

use crate::errors::ERR_UNAUTHORIZED;

// ============================================================
// Access control: principals allowed to toggle sell blocks.
// The contract owner manages the set; the set itself is the
// only authority consulted by setSellBlocked.
// ============================================================

#[multiversx_sc::module]
pub trait AccessControlModule {
    #[only_owner]
    #[endpoint(addBlocker)]
    fn add_blocker(&self, address: ManagedAddress) {
        if self.blockers().insert(address.clone()) {
            self.blocker_added_event(&address);
        }
    }

    #[only_owner]
    #[endpoint(removeBlocker)]
    fn remove_blocker(&self, address: ManagedAddress) {
        if self.blockers().swap_remove(&address) {
            self.blocker_removed_event(&address);
        }
    }

    #[view(isBlocker)]
    fn is_blocker(&self, address: &ManagedAddress) -> bool {
        self.blockers().contains(address)
    }

    fn require_authorized(&self, caller: &ManagedAddress) {
        require!(self.is_blocker(caller), ERR_UNAUTHORIZED);
    }

    #[event("blockerAdded")]
    fn blocker_added_event(&self, #[indexed] address: &ManagedAddress);

    #[event("blockerRemoved")]
    fn blocker_removed_event(&self, #[indexed] address: &ManagedAddress);

    #[view(getBlockers)]
    #[storage_mapper("blockers")]
    fn blockers(&self) -> UnorderedSetMapper<ManagedAddress>;
}
