multiversx_sc::imports!();

use crate::types::{Proposal, VoteRecord};

#[multiversx_sc::module]
pub trait StorageModule {
    // ── Configuration ──

    #[storage_mapper("admin")]
    fn admin(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("votingOpen")]
    fn voting_open(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("minimumQuorum")]
    fn minimum_quorum(&self) -> SingleValueMapper<BigUint>;

    // ── Registry ──

    #[storage_mapper("voters")]
    fn voters(&self) -> UnorderedSetMapper<ManagedAddress>;

    /// Empty means the default weight of 1.
    #[storage_mapper("voterWeight")]
    fn voter_weight(&self, voter: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("delegation")]
    fn delegation(&self, delegator: &ManagedAddress) -> SingleValueMapper<ManagedAddress>;

    // ── Proposals ──

    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    // ── Votes ──

    #[storage_mapper("commitments")]
    fn commitments(
        &self,
        voter: &ManagedAddress,
        proposal_id: u64,
    ) -> SingleValueMapper<ManagedBuffer>;

    #[storage_mapper("votes")]
    fn votes(
        &self,
        voter: &ManagedAddress,
        proposal_id: u64,
    ) -> SingleValueMapper<VoteRecord<Self::Api>>;

    #[storage_mapper("userVotes")]
    fn user_votes(&self, voter: &ManagedAddress) -> VecMapper<u64>;
}
