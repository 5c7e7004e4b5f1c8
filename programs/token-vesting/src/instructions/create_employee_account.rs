use anchor_lang::prelude::*;

use crate::constants::{EMPLOYEE_VESTING_SEED, VESTING_ACCOUNT_SEED};
use crate::error::VestingError;
use crate::state::{EmployeeAccount, VestingAccount};

pub fn create_employee_account_handler(
    ctx: Context<CreateEmployeeAccount>,
    _company_name: String,
    start_date: u64,
    end_date: u64,
    cliff_date: u64,
    total_amount: u64,
) -> Result<()> {
    require!(start_date <= end_date, VestingError::InvalidSchedule);

    ctx.accounts.employee_account.set_inner(EmployeeAccount {
        beneficiary: ctx.accounts.beneficiary.key(),
        vesting_account: ctx.accounts.vesting_account.key(),
        start_date,
        end_date,
        cliff_date,
        total_amount,
        total_withdrawn: 0,
        bump: ctx.bumps.employee_account,
    });

    emit!(EmployeeAccountCreated {
        beneficiary: ctx.accounts.beneficiary.key(),
        vesting_account: ctx.accounts.vesting_account.key(),
        start_date,
        end_date,
        cliff_date,
        total_amount,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(company_name: String)]
pub struct CreateEmployeeAccount<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    pub beneficiary: SystemAccount<'info>,

    #[account(
        seeds = [VESTING_ACCOUNT_SEED, company_name.as_bytes()],
        bump = vesting_account.bump,
        has_one = owner @ VestingError::Unauthorized
    )]
    pub vesting_account: Account<'info, VestingAccount>,

    #[account(
        init,
        payer = owner,
        space = 8 + EmployeeAccount::INIT_SPACE,
        seeds = [
            EMPLOYEE_VESTING_SEED,
            beneficiary.key().as_ref(),
            vesting_account.key().as_ref()
        ],
        bump
    )]
    pub employee_account: Account<'info, EmployeeAccount>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct EmployeeAccountCreated {
    pub beneficiary: Pubkey,
    pub vesting_account: Pubkey,
    pub start_date: u64,
    pub end_date: u64,
    pub cliff_date: u64,
    pub total_amount: u64,
}
