multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal Category
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalCategory {
    Governance,
    Treasury,
    Technical,
}

impl ProposalCategory {
    /// Maps the public category code (1 = Governance, 2 = Treasury,
    /// 3 = Technical) to a category. Anything else is rejected.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(ProposalCategory::Governance),
            2 => Some(ProposalCategory::Treasury),
            3 => Some(ProposalCategory::Technical),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            ProposalCategory::Governance => 1,
            ProposalCategory::Treasury => 2,
            ProposalCategory::Technical => 3,
        }
    }
}

// ============================================================
// Proposal Status — derived, never stored
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Current block is at or before the end block.
    Active,
    /// Voting closed with vote count >= required quorum.
    Passed,
    /// Voting closed below the required quorum.
    Failed,
    /// Executed by the admin. Terminal state.
    Executed,
}

impl ProposalStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProposalStatus::Active => "active",
            ProposalStatus::Passed => "passed",
            ProposalStatus::Failed => "failed",
            ProposalStatus::Executed => "executed",
        }
    }
}

// ============================================================
// Proposal — the core governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub title: ManagedBuffer<M>,
    pub description: ManagedBuffer<M>,
    pub category: ProposalCategory,
    /// Sum of the weights of every revealed vote
    pub vote_count: BigUint<M>,
    pub created_at: u64,
    /// Block nonce at creation. `end_block` never drops below it.
    pub created_block: u64,
    /// Last block nonce at which votes are accepted
    pub end_block: u64,
    pub creator: ManagedAddress<M>,
    pub executed: bool,
    pub quorum_required: BigUint<M>,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn is_expired_at(&self, block_nonce: u64) -> bool {
        block_nonce > self.end_block
    }

    /// Resolves the lifecycle state from the stored fields and the given
    /// block nonce alone.
    pub fn status_at(&self, block_nonce: u64) -> ProposalStatus {
        if self.executed {
            ProposalStatus::Executed
        } else if !self.is_expired_at(block_nonce) {
            ProposalStatus::Active
        } else if self.vote_count >= self.quorum_required {
            ProposalStatus::Passed
        } else {
            ProposalStatus::Failed
        }
    }
}

// ============================================================
// Proposal Statistics — tally view
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct ProposalStatistics<M: ManagedTypeApi> {
    pub vote_count: BigUint<M>,
    pub quorum_required: BigUint<M>,
    /// floor(vote_count * 100 / quorum_required), 0 when no quorum is required
    pub percentage: BigUint<M>,
    pub status: ProposalStatus,
}

impl<M: ManagedTypeApi> ProposalStatistics<M> {
    pub fn from_proposal(proposal: &Proposal<M>, block_nonce: u64) -> Self {
        let percentage = if proposal.quorum_required == 0u64 {
            BigUint::zero()
        } else {
            (&proposal.vote_count * 100u64) / &proposal.quorum_required
        };

        ProposalStatistics {
            vote_count: proposal.vote_count.clone(),
            quorum_required: proposal.quorum_required.clone(),
            percentage,
            status: proposal.status_at(block_nonce),
        }
    }
}

// ============================================================
// Vote Record — one per (voter, proposal), written on reveal
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct VoteRecord<M: ManagedTypeApi> {
    pub weight: BigUint<M>,
    pub committed: bool,
    pub revealed_at: u64,
}
