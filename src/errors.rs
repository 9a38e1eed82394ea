pub const ERR_NOT_A_MEMBER: &str = "Membership required to call this function";
pub const ERR_TARGET_NOT_A_MEMBER: &str = "Target member is not registered";
pub const ERR_ALREADY_REGISTERED: &str = "Member already exists";

pub const ERR_ZERO_STAKE: &str = "Member must stake more than 0 tokens";
pub const ERR_DURATION_TOO_SHORT: &str = "Minimum stake duration is 50 epochs";
pub const ERR_TOKEN_TRANSFER_FAILED: &str = "Invalid staking token";
pub const ERR_NO_EXPIRED_STAKES: &str = "No expired stakes available for withdraw";
pub const ERR_INSUFFICIENT_HEADROOM: &str = "Not enough endorsements remaining after unstaking";

pub const ERR_ZERO_ENDORSEMENT: &str = "Endorsement amount must be greater than 0";
pub const ERR_INSUFFICIENT_BUDGET: &str = "Member does not have available endorsements to give";
pub const ERR_TARGET_CAP_EXCEEDED: &str = "Total endorsements cannot exceed the max limit";
pub const ERR_INSUFFICIENT_EDGE: &str = "Not enough endorsements given to withdraw";

pub const ERR_INVALID_TOKEN_ID: &str = "Invalid staking token identifier";
pub const ERR_ZERO_MAX_ENDORSEMENT: &str = "Max endorsement must be greater than 0";
