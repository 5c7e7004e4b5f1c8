//! Program-wide constants.

/// Seed prefix for company vesting ledger PDAs.
pub const VESTING_ACCOUNT_SEED: &[u8] = b"vesting_account";

/// Seed prefix for company treasury token account PDAs.
pub const VESTING_TREASURY_SEED: &[u8] = b"vesting_treasury";

/// Seed prefix for per-beneficiary employee schedule PDAs.
pub const EMPLOYEE_VESTING_SEED: &[u8] = b"employee_vesting";

/// Max byte length of a company name (fixed by the ledger record layout).
pub const MAX_COMPANY_NAME_LEN: usize = 50;
