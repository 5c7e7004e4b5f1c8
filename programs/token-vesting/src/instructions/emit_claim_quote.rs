use anchor_lang::prelude::*;

use crate::constants::{EMPLOYEE_VESTING_SEED, VESTING_ACCOUNT_SEED};
use crate::error::VestingError;
use crate::state::{EmployeeAccount, VestingAccount};

/// Read-only companion to `claim_tokens`: computes what a claim would pay
/// right now and reports it as an event, without moving funds.
pub fn emit_claim_quote_handler(ctx: Context<EmitClaimQuote>, _company_name: String) -> Result<()> {
    let employee = &ctx.accounts.employee_account;

    let now_ts = Clock::get()?.unix_timestamp;
    let now = u64::try_from(now_ts).map_err(|_| VestingError::InvalidTimestamp)?;

    let vested = employee.vested_amount(now)?;
    let claimable = employee.claimable_amount(now)?;

    emit!(ClaimQuote {
        beneficiary: employee.beneficiary,
        vesting_account: employee.vesting_account,
        vested_amount: vested,
        total_withdrawn: employee.total_withdrawn,
        claimable_amount: claimable,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(company_name: String)]
pub struct EmitClaimQuote<'info> {
    pub beneficiary: SystemAccount<'info>,

    #[account(
        seeds = [VESTING_ACCOUNT_SEED, company_name.as_bytes()],
        bump = vesting_account.bump
    )]
    pub vesting_account: Account<'info, VestingAccount>,

    #[account(
        seeds = [
            EMPLOYEE_VESTING_SEED,
            beneficiary.key().as_ref(),
            vesting_account.key().as_ref()
        ],
        bump = employee_account.bump
    )]
    pub employee_account: Account<'info, EmployeeAccount>,
}

#[event]
pub struct ClaimQuote {
    pub beneficiary: Pubkey,
    pub vesting_account: Pubkey,
    pub vested_amount: u64,
    pub total_withdrawn: u64,
    pub claimable_amount: u64,
    pub timestamp: u64,
}
