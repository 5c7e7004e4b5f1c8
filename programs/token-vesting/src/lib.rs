#![allow(clippy::result_large_err)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("coUnmi3oBUtwtd9fjeAvSsJssXh5A5xyPbhpewyzRVF");

#[program]
pub mod token_vesting {
    use super::*;

    /// Create a company vesting ledger and its custodial treasury.
    pub fn create_vesting_account(
        ctx: Context<CreateVestingAccount>,
        company_name: String,
    ) -> Result<()> {
        create_vesting_account_handler(ctx, company_name)
    }

    /// Register an employee schedule under an existing ledger. Only the
    /// ledger owner may call this.
    pub fn create_employee_account(
        ctx: Context<CreateEmployeeAccount>,
        company_name: String,
        start_date: u64,
        end_date: u64,
        cliff_date: u64,
        total_amount: u64,
    ) -> Result<()> {
        create_employee_account_handler(
            ctx,
            company_name,
            start_date,
            end_date,
            cliff_date,
            total_amount,
        )
    }

    /// Pay out everything vested and not yet withdrawn to the beneficiary.
    pub fn claim_tokens(ctx: Context<ClaimTokens>, company_name: String) -> Result<()> {
        claim_tokens_handler(ctx, company_name)
    }

    /// Report the currently claimable amount without moving funds.
    pub fn emit_claim_quote(ctx: Context<EmitClaimQuote>, company_name: String) -> Result<()> {
        emit_claim_quote_handler(ctx, company_name)
    }
}
