// Failure kinds surfaced to callers. Every one of them reverts the call.

pub const ERR_NOT_AUTHORIZED: &str = "Not authorized";
pub const ERR_NOT_FOUND: &str = "Proposal not found";
pub const ERR_INVALID_INPUT: &str = "Invalid input";
pub const ERR_INVALID_STATE: &str = "Invalid proposal state";
pub const ERR_QUORUM_NOT_MET: &str = "Quorum not met";
pub const ERR_NOT_EXPIRED: &str = "Voting period has not ended";

pub const ERR_ALREADY_REGISTERED: &str = "Voter already registered";
pub const ERR_UNKNOWN_VOTER: &str = "Unknown voter";
pub const ERR_INVALID_WEIGHT: &str = "Invalid weight";

pub const ERR_VOTING_CLOSED: &str = "Voting is closed";
pub const ERR_INVALID_PROPOSAL: &str = "Invalid proposal";
pub const ERR_ALREADY_VOTED: &str = "Already voted";
pub const ERR_INVALID_VOTER: &str = "Invalid voter";
pub const ERR_INVALID_COMMITMENT: &str = "Invalid commitment";
pub const ERR_INVALID_DELEGATION: &str = "Invalid delegation";
