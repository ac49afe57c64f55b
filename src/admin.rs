multiversx_sc::imports!();

use crate::errors::*;

#[multiversx_sc::module]
pub trait AdminModule: crate::storage::StorageModule + crate::events::EventsModule {
    // ========================================================
    // ENDPOINTS: global voting switch
    // Both are idempotent; repeating one is not an error.
    // ========================================================

    #[endpoint(openVoting)]
    fn open_voting(&self) {
        self.require_admin();
        self.voting_open().set(true);
        self.voting_opened_event(self.blockchain().get_block_nonce());
    }

    #[endpoint(closeVoting)]
    fn close_voting(&self) {
        self.require_admin();
        self.voting_open().set(false);
        self.voting_closed_event(self.blockchain().get_block_nonce());
    }

    // ========================================================
    // ENDPOINT: setMinimumQuorum
    // Policy default only. A proposal keeps the quorum it was
    // created with.
    // ========================================================

    #[endpoint(setMinimumQuorum)]
    fn set_minimum_quorum(&self, quorum: BigUint) {
        self.require_admin();
        require!(quorum > 0u64, ERR_INVALID_INPUT);

        self.minimum_quorum().set(&quorum);
        self.minimum_quorum_set_event(&quorum);
    }

    fn require_admin(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.admin().get(), ERR_NOT_AUTHORIZED);
    }

    fn require_voting_open(&self) {
        require!(self.voting_open().get(), ERR_VOTING_CLOSED);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getAdmin)]
    fn get_admin(&self) -> ManagedAddress {
        self.admin().get()
    }

    #[view(isVotingOpen)]
    fn is_voting_open(&self) -> bool {
        self.voting_open().get()
    }

    #[view(getMinimumQuorum)]
    fn get_minimum_quorum(&self) -> BigUint {
        self.minimum_quorum().get()
    }
}
