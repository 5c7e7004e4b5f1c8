use anchor_lang::prelude::*;

/// Custom error codes for the token vesting program.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: signer does not match the stored authority")]
    Unauthorized,

    #[msg("Invalid schedule: start date must not be after end date")]
    InvalidSchedule,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("Company name exceeds the maximum length")]
    CompanyNameTooLong,

    #[msg("Nothing to claim: no tokens have vested beyond what was withdrawn")]
    NothingToClaim,

    #[msg("Insufficient treasury funds to cover the claim")]
    InsufficientTreasuryFunds,

    #[msg("No valid program address could be derived for the given seeds")]
    AddressDerivationExhausted,

    #[msg("Stored account reference does not match the derived address")]
    RecordMismatch,

    #[msg("Math overflow")]
    MathOverflow,
}
