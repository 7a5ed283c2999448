pub const ERR_INVALID_WEIGHT_SOURCE: &str = "Invalid weight source";
pub const ERR_NOT_FOUND: &str = "Proposal not found";
pub const ERR_EMPTY_DESCRIPTION: &str = "Empty description";
pub const ERR_INSUFFICIENT_TOKENS: &str = "Insufficient tokens to propose";
pub const ERR_NOT_STARTED: &str = "Voting not started";
pub const ERR_VOTING_ENDED: &str = "Voting ended";
pub const ERR_ALREADY_VOTED: &str = "Already voted";
pub const ERR_NO_VOTING_POWER: &str = "No voting power";
pub const ERR_VOTING_NOT_ENDED: &str = "Voting not ended";
pub const ERR_ALREADY_EXECUTED: &str = "Proposal already executed";
pub const ERR_QUORUM_NOT_REACHED: &str = "Quorum not reached";
