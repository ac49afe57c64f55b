multiversx_sc::imports!();

use ripemd::{Digest, Ripemd160};

use crate::errors::*;
use crate::types::VoteRecord;

/// Length of a vote commitment: ripemd160(sha256(..))
pub const COMMITMENT_LEN: usize = 20;

/// Length of the secret nonce disclosed on reveal
pub const NONCE_LEN: usize = 32;

#[multiversx_sc::module]
pub trait VotingModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::admin::AdminModule
    + crate::registry::RegistryModule
{
    // ========================================================
    // ENDPOINT: commitVote
    // Phase one. Stores the voter's hash for the proposal; a new
    // commit replaces an unrevealed one.
    // ========================================================

    #[endpoint(commitVote)]
    fn commit_vote(&self, proposal_id: u64, commitment: ManagedBuffer) {
        self.require_voting_open();

        let proposal_mapper = self.proposals(proposal_id);
        require!(!proposal_mapper.is_empty(), ERR_INVALID_PROPOSAL);
        let proposal = proposal_mapper.get();
        require!(
            !proposal.is_expired_at(self.blockchain().get_block_nonce()),
            ERR_VOTING_CLOSED
        );

        let caller = self.blockchain().get_caller();
        require!(!self.has_voted(&caller, proposal_id), ERR_ALREADY_VOTED);
        require!(self.voters().contains(&caller), ERR_INVALID_VOTER);
        require!(commitment.len() == COMMITMENT_LEN, ERR_INVALID_INPUT);

        self.commitments(&caller, proposal_id).set(&commitment);
        self.vote_committed_event(proposal_id, &caller, &commitment);
    }

    // ========================================================
    // ENDPOINT: revealVote
    // Phase two. The nonce must reproduce the stored commitment
    // for this exact proposal id before the weight is tallied.
    // ========================================================

    #[endpoint(revealVote)]
    fn reveal_vote(&self, proposal_id: u64, nonce: ManagedBuffer) {
        self.require_voting_open();

        let caller = self.blockchain().get_caller();
        require!(!self.has_voted(&caller, proposal_id), ERR_ALREADY_VOTED);
        require!(self.voters().contains(&caller), ERR_INVALID_VOTER);

        let commitment_mapper = self.commitments(&caller, proposal_id);
        require!(!commitment_mapper.is_empty(), ERR_INVALID_COMMITMENT);
        require!(nonce.len() == NONCE_LEN, ERR_INVALID_INPUT);

        let expected = self.vote_commitment(proposal_id, &nonce);
        require!(expected == commitment_mapper.get(), ERR_NOT_AUTHORIZED);

        // Tallies only move while the window is open, so the status
        // of an expired proposal can no longer change.
        let proposal_mapper = self.proposals(proposal_id);
        require!(!proposal_mapper.is_empty(), ERR_INVALID_PROPOSAL);
        let mut proposal = proposal_mapper.get();
        require!(
            !proposal.is_expired_at(self.blockchain().get_block_nonce()),
            ERR_VOTING_CLOSED
        );

        let weight = self.effective_weight(&caller);
        let record = VoteRecord {
            weight: weight.clone(),
            committed: true,
            revealed_at: self.blockchain().get_block_timestamp(),
        };
        self.votes(&caller, proposal_id).set(&record);
        self.user_votes(&caller).push(&proposal_id);
        commitment_mapper.clear();

        proposal.vote_count += &weight;
        proposal_mapper.set(&proposal);

        self.vote_revealed_event(proposal_id, &caller, &weight);
    }

    // ========================================================
    // INTERNAL: commitment derivation
    // hash160(nonce ‖ proposal id as 8-byte big-endian)
    // ========================================================

    fn vote_commitment(&self, proposal_id: u64, nonce: &ManagedBuffer) -> ManagedBuffer {
        let mut preimage = nonce.clone();
        preimage.append_bytes(&proposal_id.to_be_bytes());

        let digest = self.crypto().sha256(&preimage).to_byte_array();
        let hash160 = Ripemd160::digest(digest);
        ManagedBuffer::new_from_bytes(hash160.as_slice())
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(hasVoted)]
    fn has_voted(&self, voter: &ManagedAddress, proposal_id: u64) -> bool {
        let vote = self.votes(voter, proposal_id);
        !vote.is_empty() && vote.get().committed
    }

    #[view(getVote)]
    fn get_vote(&self, voter: &ManagedAddress, proposal_id: u64) -> Option<VoteRecord<Self::Api>> {
        let vote = self.votes(voter, proposal_id);
        if vote.is_empty() {
            None
        } else {
            Some(vote.get())
        }
    }

    #[view(getCommitment)]
    fn get_commitment(&self, voter: &ManagedAddress, proposal_id: u64) -> Option<ManagedBuffer> {
        let commitment = self.commitments(voter, proposal_id);
        if commitment.is_empty() {
            None
        } else {
            Some(commitment.get())
        }
    }

    #[view(getUserVotes)]
    fn get_user_votes(&self, voter: &ManagedAddress) -> MultiValueEncoded<u64> {
        let mut result = MultiValueEncoded::new();
        for proposal_id in self.user_votes(voter).iter() {
            result.push(proposal_id);
        }
        result
    }
}
