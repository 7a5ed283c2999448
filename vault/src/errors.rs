pub const ERR_INVALID_AMOUNT: &str = "Invalid amount";
pub const ERR_INVALID_PAYMENT_TOKEN: &str = "Invalid payment token";
pub const ERR_ZERO_SHARES: &str = "Deposit too small for shares";
pub const ERR_INVALID_SHARES: &str = "Invalid shares";
pub const ERR_INSUFFICIENT_SHARES: &str = "Insufficient shares";
pub const ERR_INSUFFICIENT_ALLOWANCE: &str = "Insufficient allowance";
pub const ERR_SELL_BLOCKED: &str = "Sell blocked";
pub const ERR_TRANSFERS_BLOCKED: &str = "Transfers blocked";
pub const ERR_TRANSFER_FAILED: &str = "Transfer failed";
pub const ERR_UNAUTHORIZED: &str = "Unauthorized";
