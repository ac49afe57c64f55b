multiversx_sc::imports!();

use crate::errors::*;

/// Most entries a single `batchAddVoters` call accepts
pub const MAX_BATCH_SIZE: usize = 50;

/// Weight of a registered voter that never had one assigned
pub const DEFAULT_VOTER_WEIGHT: u64 = 1;

#[multiversx_sc::module]
pub trait RegistryModule:
    crate::storage::StorageModule + crate::events::EventsModule + crate::admin::AdminModule
{
    // ========================================================
    // ENDPOINTS: voter registry (admin only)
    // ========================================================

    #[endpoint(addVoter)]
    fn add_voter(&self, voter: ManagedAddress) {
        self.require_admin();

        let added = self.voters().insert(voter.clone());
        require!(added, ERR_ALREADY_REGISTERED);

        self.voter_added_event(&voter);
    }

    /// Best-effort: voters that are already registered (including
    /// duplicates inside the batch) are skipped and reported as `false`.
    #[endpoint(batchAddVoters)]
    fn batch_add_voters(
        &self,
        voters: MultiValueEncoded<ManagedAddress>,
    ) -> MultiValueEncoded<bool> {
        self.require_admin();

        let mut results = MultiValueEncoded::new();
        for (index, voter) in voters.into_iter().enumerate() {
            require!(index < MAX_BATCH_SIZE, ERR_INVALID_INPUT);

            let added = self.voters().insert(voter.clone());
            if added {
                self.voter_added_event(&voter);
            }
            results.push(added);
        }
        results
    }

    /// Purges membership and weight. Delegation edges touching the
    /// voter are left in place.
    #[endpoint(removeVoter)]
    fn remove_voter(&self, voter: ManagedAddress) {
        self.require_admin();

        let removed = self.voters().swap_remove(&voter);
        require!(removed, ERR_UNKNOWN_VOTER);
        self.voter_weight(&voter).clear();

        self.voter_removed_event(&voter);
    }

    #[endpoint(setVoterWeight)]
    fn set_voter_weight(&self, voter: ManagedAddress, weight: BigUint) {
        self.require_admin();
        require!(weight > 0u64, ERR_INVALID_WEIGHT);
        require!(self.voters().contains(&voter), ERR_UNKNOWN_VOTER);

        self.voter_weight(&voter).set(&weight);
        self.voter_weight_set_event(&voter, &weight);
    }

    // ========================================================
    // ENDPOINTS: delegation (voters)
    // ========================================================

    #[endpoint(delegate)]
    fn delegate(&self, delegate: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        require!(self.voters().contains(&caller), ERR_INVALID_VOTER);
        require!(
            delegate != caller && self.voters().contains(&delegate),
            ERR_INVALID_DELEGATION
        );

        self.delegation(&caller).set(&delegate);
        self.delegation_set_event(&caller, &delegate);
    }

    #[endpoint(revokeDelegation)]
    fn revoke_delegation(&self) {
        let caller = self.blockchain().get_caller();
        let delegation = self.delegation(&caller);
        require!(!delegation.is_empty(), ERR_INVALID_DELEGATION);

        let delegate = delegation.take();
        self.delegation_revoked_event(&caller, &delegate);
    }

    // ========================================================
    // INTERNAL: weight resolution
    // ========================================================

    fn weight_of(&self, voter: &ManagedAddress) -> BigUint {
        let weight = self.voter_weight(voter);
        if weight.is_empty() {
            BigUint::from(DEFAULT_VOTER_WEIGHT)
        } else {
            weight.get()
        }
    }

    /// Weight a reveal applies to the tally. Delegation edges are
    /// recorded but do not move weight between voters.
    fn effective_weight(&self, voter: &ManagedAddress) -> BigUint {
        self.weight_of(voter)
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isValidVoter)]
    fn is_valid_voter(&self, voter: &ManagedAddress) -> bool {
        self.voters().contains(voter)
    }

    #[view(getVoterWeight)]
    fn get_voter_weight(&self, voter: &ManagedAddress) -> BigUint {
        self.weight_of(voter)
    }

    #[view(getEffectiveWeight)]
    fn get_effective_weight(&self, voter: &ManagedAddress) -> BigUint {
        self.effective_weight(voter)
    }

    #[view(getDelegation)]
    fn get_delegation(&self, delegator: &ManagedAddress) -> Option<ManagedAddress> {
        let delegation = self.delegation(delegator);
        if delegation.is_empty() {
            None
        } else {
            Some(delegation.get())
        }
    }

    #[view(getVoterCount)]
    fn get_voter_count(&self) -> u64 {
        self.voters().len() as u64
    }

    #[view(getVoters)]
    fn get_voters(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let start = from as usize;
        let end = core::cmp::min(start.saturating_add(count as usize), self.voters().len());

        for (idx, voter) in self.voters().iter().enumerate() {
            if idx >= end {
                break;
            }
            if idx >= start {
                result.push(voter);
            }
        }
        result
    }
}
