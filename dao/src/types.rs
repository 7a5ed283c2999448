multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::QUORUM_THRESHOLD;

// ============================================================
// Proposal State: derived from the clock and the tally,
// never stored.
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalState {
    /// Voting window open.
    Active,
    /// Window closed, quorum met and for > against.
    Succeeded,
    /// Window closed without quorum, or for <= against.
    Failed,
    /// Finalized by executeProposal. Terminal.
    Executed,
}

// ============================================================
// Proposal: the core governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub proposer: ManagedAddress<M>,
    pub description: ManagedBuffer<M>,
    pub votes_for: BigUint<M>,
    pub votes_against: BigUint<M>,
    pub start_time: u64,
    pub end_time: u64,
    pub executed: bool,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn total_votes(&self) -> BigUint<M> {
        &self.votes_for + &self.votes_against
    }

    pub fn quorum_reached(&self) -> bool {
        self.total_votes() >= QUORUM_THRESHOLD
    }

    pub fn passed(&self) -> bool {
        self.votes_for > self.votes_against
    }

    pub fn state_at(&self, now: u64) -> ProposalState {
        if self.executed {
            return ProposalState::Executed;
        }
        if now <= self.end_time {
            return ProposalState::Active;
        }
        if self.quorum_reached() && self.passed() {
            ProposalState::Succeeded
        } else {
            ProposalState::Failed
        }
    }
}
