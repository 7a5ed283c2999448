multiversx_sc::imports!();

pub const ERR_REENTRANT_CALL: &str = "Reentrant call";

/// Per-contract non-reentrant execution guard.
///
/// Endpoints that hand control to another account (payments out, sync
/// calls) wrap their body between `enter_guard` and `exit_guard`. A failed
/// transaction reverts the flag together with the rest of the storage.
#[multiversx_sc::module]
pub trait ReentrancyGuardModule {
    fn enter_guard(&self) {
        require!(!self.guard_engaged().get(), ERR_REENTRANT_CALL);
        self.guard_engaged().set(true);
    }

    fn exit_guard(&self) {
        self.guard_engaged().clear();
    }

    #[view(isGuardEngaged)]
    #[storage_mapper("reentrancyGuard")]
    fn guard_engaged(&self) -> SingleValueMapper<bool>;
}
