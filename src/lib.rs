#![no_std]

multiversx_sc::imports!();

pub mod admin;
pub mod errors;
pub mod events;
pub mod governance_proxy;
pub mod registry;
pub mod storage;
pub mod types;
pub mod voting;

use errors::*;
use types::{Proposal, ProposalCategory, ProposalStatistics, ProposalStatus};

// ============================================================
// Constants
// ============================================================

/// Longest accepted proposal title, in bytes
pub const MAX_TITLE_LEN: usize = 256;

/// Longest accepted proposal description, in bytes
pub const MAX_DESCRIPTION_LEN: usize = 1_024;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait CommitRevealGovernance:
    storage::StorageModule
    + events::EventsModule
    + admin::AdminModule
    + registry::RegistryModule
    + voting::VotingModule
{
    // ========================================================
    // Init / Upgrade
    // The deployer becomes the admin. Voting starts open.
    // ========================================================

    #[init]
    fn init(&self, minimum_quorum: BigUint) {
        require!(minimum_quorum > 0u64, ERR_INVALID_INPUT);

        let deployer = self.blockchain().get_caller();
        self.admin().set(&deployer);
        self.minimum_quorum().set(&minimum_quorum);
        self.voting_open().set(true);
        self.proposal_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: createProposal
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(
        &self,
        title: ManagedBuffer,
        description: ManagedBuffer,
        category: u8,
        blocks: u64,
        quorum: BigUint,
    ) -> u64 {
        self.require_admin();
        require!(
            !title.is_empty() && title.len() <= MAX_TITLE_LEN,
            ERR_INVALID_INPUT
        );
        require!(
            !description.is_empty() && description.len() <= MAX_DESCRIPTION_LEN,
            ERR_INVALID_INPUT
        );
        let category = match ProposalCategory::from_code(category) {
            Some(category) => category,
            None => sc_panic!(ERR_INVALID_INPUT),
        };
        require!(blocks > 0, ERR_INVALID_INPUT);

        let caller = self.blockchain().get_caller();
        let current_block = self.blockchain().get_block_nonce();
        let timestamp = self.blockchain().get_block_timestamp();
        let end_block = match current_block.checked_add(blocks) {
            Some(end_block) => end_block,
            None => sc_panic!(ERR_INVALID_INPUT),
        };

        let proposal_id = self.proposal_count().get() + 1u64;
        let proposal = Proposal {
            id: proposal_id,
            title,
            description,
            category,
            vote_count: BigUint::zero(),
            created_at: timestamp,
            created_block: current_block,
            end_block,
            creator: caller.clone(),
            executed: false,
            quorum_required: quorum,
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id);

        self.proposal_created_event(proposal_id, &caller, end_block, timestamp);

        proposal_id
    }

    // ========================================================
    // ENDPOINT: deleteProposal
    // Hard removal. The id is never handed out again.
    // ========================================================

    #[endpoint(deleteProposal)]
    fn delete_proposal(&self, proposal_id: u64) {
        self.require_admin();
        let proposal = self.require_proposal(proposal_id);
        require!(!proposal.executed, ERR_INVALID_STATE);

        self.proposals(proposal_id).clear();
        self.proposal_deleted_event(proposal_id);
    }

    // ========================================================
    // ENDPOINT: extendDeadline
    // Only ever pushes the end block forward, and only while the
    // proposal is still active: a resolved proposal stays resolved.
    // ========================================================

    #[endpoint(extendDeadline)]
    fn extend_deadline(&self, proposal_id: u64, additional_blocks: u64) -> u64 {
        self.require_admin();
        let mut proposal = self.require_proposal(proposal_id);
        require!(
            proposal.status_at(self.blockchain().get_block_nonce()) == ProposalStatus::Active,
            ERR_INVALID_STATE
        );
        require!(additional_blocks > 0, ERR_INVALID_INPUT);

        proposal.end_block = match proposal.end_block.checked_add(additional_blocks) {
            Some(end_block) => end_block,
            None => sc_panic!(ERR_INVALID_INPUT),
        };
        self.proposals(proposal_id).set(&proposal);

        self.deadline_extended_event(proposal_id, proposal.end_block);

        proposal.end_block
    }

    // ========================================================
    // ENDPOINT: executeProposal
    // Passed → Executed, exactly once.
    // ========================================================

    #[endpoint(executeProposal)]
    fn execute_proposal(&self, proposal_id: u64) {
        self.require_admin();
        let mut proposal = self.require_proposal(proposal_id);

        let current_block = self.blockchain().get_block_nonce();
        require!(
            proposal.status_at(current_block) == ProposalStatus::Passed,
            ERR_QUORUM_NOT_MET
        );
        require!(proposal.is_expired_at(current_block), ERR_NOT_EXPIRED);

        proposal.executed = true;
        self.proposals(proposal_id).set(&proposal);

        self.proposal_executed_event(
            proposal_id,
            self.blockchain().get_block_timestamp(),
            &proposal.vote_count,
        );
    }

    fn require_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        let proposal = self.proposals(proposal_id);
        require!(!proposal.is_empty(), ERR_NOT_FOUND);
        proposal.get()
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Option<Proposal<Self::Api>> {
        let proposal = self.proposals(proposal_id);
        if proposal.is_empty() {
            None
        } else {
            Some(proposal.get())
        }
    }

    #[view(getStatus)]
    fn get_status(&self, proposal_id: u64) -> ProposalStatus {
        let proposal = self.require_proposal(proposal_id);
        proposal.status_at(self.blockchain().get_block_nonce())
    }

    #[view(getStatistics)]
    fn get_statistics(&self, proposal_id: u64) -> ProposalStatistics<Self::Api> {
        let proposal = self.require_proposal(proposal_id);
        ProposalStatistics::from_proposal(&proposal, self.blockchain().get_block_nonce())
    }

    #[view(getProposalCount)]
    fn get_proposal_count(&self) -> u64 {
        self.proposal_count().get()
    }

    /// Deleted ids inside the range are skipped.
    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        if count == 0 {
            return result;
        }
        let total = self.proposal_count().get();
        let start = if from == 0 { 1u64 } else { from };
        if start > total {
            return result;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), total);

        for id in start..=end {
            if !self.proposals(id).is_empty() {
                result.push(self.proposals(id).get());
            }
        }
        result
    }

    #[view(getActiveProposals)]
    fn get_active_proposals(&self) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_count().get();
        let current_block = self.blockchain().get_block_nonce();

        for id in 1..=total {
            if self.proposals(id).is_empty() {
                continue;
            }
            let proposal = self.proposals(id).get();
            if proposal.status_at(current_block) == ProposalStatus::Active {
                result.push(proposal);
            }
        }
        result
    }
}
