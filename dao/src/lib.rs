#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod types;
pub mod weight_source_proxy;

use debenture_common::{math, reentrancy};
use errors::*;
use types::{Proposal, ProposalState};

// ============================================================
// Constants
// ============================================================

/// Voting window: 7 days in seconds
pub const VOTING_PERIOD: u64 = 604_800;

/// Minimum weight the proposer must hold at creation time
pub const MIN_PROPOSAL_THRESHOLD: u64 = 1_000;

/// Minimum combined for + against weight for a proposal to be executable
pub const QUORUM_THRESHOLD: u64 = 10_000;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait DebentureDao: reentrancy::ReentrancyGuardModule {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// `weight_source` is any contract exposing
    /// `balanceOf(address) -> BigUint`, typically a Debenture vault.
    #[init]
    fn init(&self, weight_source: ManagedAddress) {
        require!(
            self.blockchain().is_smart_contract(&weight_source),
            ERR_INVALID_WEIGHT_SOURCE
        );

        self.weight_source().set(&weight_source);
        self.proposal_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: createProposal
    // Gated on the proposer's current weight; nothing is locked.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(&self, description: ManagedBuffer) -> u64 {
        let caller = self.blockchain().get_caller();

        self.enter_guard();

        let weight = self.current_weight(&caller);
        require!(weight >= MIN_PROPOSAL_THRESHOLD, ERR_INSUFFICIENT_TOKENS);
        require!(!description.is_empty(), ERR_EMPTY_DESCRIPTION);

        let proposal_id = self.proposal_count().get();
        let start_time = self.blockchain().get_block_timestamp();
        let end_time = start_time + VOTING_PERIOD;

        let proposal = Proposal {
            id: proposal_id,
            proposer: caller.clone(),
            description,
            votes_for: BigUint::zero(),
            votes_against: BigUint::zero(),
            start_time,
            end_time,
            executed: false,
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id + 1);

        self.exit_guard();

        self.proposal_created_event(
            proposal_id,
            &caller,
            start_time,
            end_time,
            &proposal.description,
        );

        proposal_id
    }

    // ========================================================
    // ENDPOINT: vote
    // Weight is read once, when the vote is cast.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64, support: bool) {
        let caller = self.blockchain().get_caller();
        let mut proposal = self.require_proposal(proposal_id);

        let now = self.blockchain().get_block_timestamp();
        // start_time is the creation timestamp, so this only orders the checks.
        require!(now >= proposal.start_time, ERR_NOT_STARTED);
        require!(now <= proposal.end_time, ERR_VOTING_ENDED);
        require!(
            !self.voters(proposal_id).contains(&caller),
            ERR_ALREADY_VOTED
        );

        self.enter_guard();

        let weight = self.current_weight(&caller);
        require!(weight > 0u64, ERR_NO_VOTING_POWER);

        if support {
            proposal.votes_for += &weight;
        } else {
            proposal.votes_against += &weight;
        }

        self.voting_power(proposal_id, &caller).set(&weight);
        self.voters(proposal_id).insert(caller.clone());
        self.proposals(proposal_id).set(&proposal);

        self.exit_guard();

        self.vote_cast_event(proposal_id, &caller, support, &weight);
    }

    // ========================================================
    // ENDPOINT: executeProposal
    // Finalizes the tally once the window closed. Anyone may
    // call it; a failed outcome is recorded just like a pass.
    // ========================================================

    #[endpoint(executeProposal)]
    fn execute_proposal(&self, proposal_id: u64) -> bool {
        let mut proposal = self.require_proposal(proposal_id);

        let now = self.blockchain().get_block_timestamp();
        require!(now > proposal.end_time, ERR_VOTING_NOT_ENDED);
        require!(!proposal.executed, ERR_ALREADY_EXECUTED);
        require!(proposal.quorum_reached(), ERR_QUORUM_NOT_REACHED);

        let passed = proposal.passed();
        proposal.executed = true;
        self.proposals(proposal_id).set(&proposal);

        self.proposal_executed_event(proposal_id, passed);
        passed
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        require!(
            proposal_id < self.proposal_count().get(),
            ERR_NOT_FOUND
        );
        self.proposals(proposal_id).get()
    }

    fn current_weight(&self, address: &ManagedAddress) -> BigUint {
        let source = self.weight_source().get();
        self.tx()
            .to(&source)
            .typed(weight_source_proxy::WeightSourceProxy)
            .balance_of(address.clone())
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    // ========================================================
    // VIEWS: read-only queries
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        self.require_proposal(proposal_id)
    }

    #[view(getProposalState)]
    fn get_proposal_state(&self, proposal_id: u64) -> ProposalState {
        let proposal = self.require_proposal(proposal_id);
        proposal.state_at(self.blockchain().get_block_timestamp())
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_count().get();
        let end = core::cmp::min(from.saturating_add(count), total);

        for id in from..end {
            result.push(self.proposals(id).get());
        }
        result
    }

    /// Share of the tally voting in favor, scaled by 10^18.
    #[view(getProposalSupport)]
    fn get_proposal_support(&self, proposal_id: u64) -> BigUint {
        let proposal = self.require_proposal(proposal_id);
        math::scaled_ratio(&proposal.votes_for, &proposal.total_votes())
    }

    #[view(hasVoted)]
    fn has_voted(&self, proposal_id: u64, voter: &ManagedAddress) -> bool {
        self.voters(proposal_id).contains(voter)
    }

    #[view(getVotingPower)]
    fn get_voting_power(&self, proposal_id: u64, voter: &ManagedAddress) -> BigUint {
        self.voting_power(proposal_id, voter).get()
    }

    #[view(getVoteWeight)]
    fn get_vote_weight(&self, address: &ManagedAddress) -> BigUint {
        self.current_weight(address)
    }

    #[view(getGovernanceConfig)]
    fn get_governance_config(&self) -> MultiValue3<u64, u64, u64> {
        (VOTING_PERIOD, MIN_PROPOSAL_THRESHOLD, QUORUM_THRESHOLD).into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] start_time: u64,
        #[indexed] end_time: u64,
        description: &ManagedBuffer,
    );

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] support: bool,
        weight: &BigUint,
    );

    #[event("proposalExecuted")]
    fn proposal_executed_event(&self, #[indexed] proposal_id: u64, passed: bool);

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getWeightSource)]
    #[storage_mapper("weightSource")]
    fn weight_source(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getProposalCount)]
    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("voters")]
    fn voters(&self, proposal_id: u64) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("votingPower")]
    fn voting_power(&self, proposal_id: u64, voter: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
