multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    // ── Proposals ──

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] creator: &ManagedAddress,
        #[indexed] end_block: u64,
        timestamp: u64,
    );

    #[event("proposalDeleted")]
    fn proposal_deleted_event(&self, #[indexed] proposal_id: u64);

    #[event("deadlineExtended")]
    fn deadline_extended_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] end_block: u64,
    );

    #[event("proposalExecuted")]
    fn proposal_executed_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] executed_at: u64,
        vote_count: &BigUint,
    );

    // ── Registry ──

    #[event("voterAdded")]
    fn voter_added_event(&self, #[indexed] voter: &ManagedAddress);

    #[event("voterRemoved")]
    fn voter_removed_event(&self, #[indexed] voter: &ManagedAddress);

    #[event("voterWeightSet")]
    fn voter_weight_set_event(&self, #[indexed] voter: &ManagedAddress, weight: &BigUint);

    #[event("delegationSet")]
    fn delegation_set_event(
        &self,
        #[indexed] delegator: &ManagedAddress,
        #[indexed] delegate: &ManagedAddress,
    );

    #[event("delegationRevoked")]
    fn delegation_revoked_event(
        &self,
        #[indexed] delegator: &ManagedAddress,
        #[indexed] delegate: &ManagedAddress,
    );

    // ── Votes ──

    #[event("voteCommitted")]
    fn vote_committed_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        commitment: &ManagedBuffer,
    );

    #[event("voteRevealed")]
    fn vote_revealed_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        weight: &BigUint,
    );

    // ── Admin ──

    #[event("votingOpened")]
    fn voting_opened_event(&self, #[indexed] block_nonce: u64);

    #[event("votingClosed")]
    fn voting_closed_event(&self, #[indexed] block_nonce: u64);

    #[event("minimumQuorumSet")]
    fn minimum_quorum_set_event(&self, #[indexed] quorum: &BigUint);
}
