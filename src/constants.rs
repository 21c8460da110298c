/// Decimal precision for return and volatility calculations
pub const DECIMAL_PRECISION: u32 = 8;

/// Cash entry type prefixes counted as deposit-like contributions
pub const DEPOSIT_TYPE_PREFIXES: [&str; 3] = ["deposit", "dividend", "credit"];

/// Cash entry type prefixes counted as withdrawal-like contributions
pub const WITHDRAWAL_TYPE_PREFIXES: [&str; 3] = ["withdraw", "fee", "debit"];

/// Default number of rows returned by the "recent activity" queries
pub const DEFAULT_RECENT_TAKE: i64 = 10;
