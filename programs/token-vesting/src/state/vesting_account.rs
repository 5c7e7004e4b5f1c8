use anchor_lang::prelude::*;

/// Per-company vesting ledger PDA. Binds an owner, a token mint and the
/// custodial treasury that funds employee claims.
#[account]
#[derive(InitSpace)]
pub struct VestingAccount {
    /// Authority that created the ledger and may register employees.
    pub owner: Pubkey,
    /// Mint of the token distributed by this ledger.
    pub mint: Pubkey,
    /// Treasury token account holding unclaimed tokens.
    pub token_treasury: Pubkey,
    /// Company label; doubles as the ledger derivation seed, so it is
    /// unique program-wide.
    #[max_len(50)]
    pub company_name: String,
    /// Bump recorded when the treasury address was derived.
    pub treasury_bump: u8,
    /// Bump recorded when the ledger address was derived.
    pub bump: u8,
}
