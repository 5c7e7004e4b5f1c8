use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::constants::{EMPLOYEE_VESTING_SEED, VESTING_ACCOUNT_SEED, VESTING_TREASURY_SEED};
use crate::error::VestingError;
use crate::state::{EmployeeAccount, VestingAccount};
use crate::utils::pda;

pub fn claim_tokens_handler(ctx: Context<ClaimTokens>, company_name: String) -> Result<()> {
    let vesting = &ctx.accounts.vesting_account;
    let employee = &ctx.accounts.employee_account;

    // Stored references must re-derive from their recorded bumps before any
    // funds move.
    let expected_treasury =
        pda::expected_treasury_address(&vesting.company_name, vesting.treasury_bump)?;
    require_keys_eq!(
        expected_treasury,
        vesting.token_treasury,
        VestingError::RecordMismatch
    );
    let expected_employee = pda::expected_employee_address(
        &employee.beneficiary,
        &employee.vesting_account,
        employee.bump,
    )?;
    require_keys_eq!(
        expected_employee,
        employee.key(),
        VestingError::RecordMismatch
    );

    let now_ts = Clock::get()?.unix_timestamp;
    let now = u64::try_from(now_ts).map_err(|_| VestingError::InvalidTimestamp)?;

    let claimable_amount = employee.claimable_amount(now)?;
    require!(claimable_amount > 0, VestingError::NothingToClaim);
    require!(
        ctx.accounts.token_treasury.amount >= claimable_amount,
        VestingError::InsufficientTreasuryFunds
    );

    // CPI transfer from the treasury to the beneficiary's token account,
    // signed by the treasury PDA (it is its own authority).
    let decimals = ctx.accounts.mint.decimals;
    let signer_seeds: &[&[&[u8]]] = &[&[
        VESTING_TREASURY_SEED,
        company_name.as_bytes(),
        &[ctx.accounts.vesting_account.treasury_bump],
    ]];
    transfer_checked(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.token_treasury.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.employee_token_account.to_account_info(),
                authority: ctx.accounts.token_treasury.to_account_info(),
            },
            signer_seeds,
        ),
        claimable_amount,
        decimals,
    )?;

    let employee = &mut ctx.accounts.employee_account;
    employee.total_withdrawn = employee
        .total_withdrawn
        .checked_add(claimable_amount)
        .ok_or(VestingError::MathOverflow)?;

    emit!(TokensClaimed {
        beneficiary: employee.beneficiary,
        vesting_account: employee.vesting_account,
        amount: claimable_amount,
        total_withdrawn: employee.total_withdrawn,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(company_name: String)]
pub struct ClaimTokens<'info> {
    #[account(mut)]
    pub beneficiary: Signer<'info>,

    #[account(
        mut,
        seeds = [
            EMPLOYEE_VESTING_SEED,
            beneficiary.key().as_ref(),
            vesting_account.key().as_ref()
        ],
        bump = employee_account.bump,
        has_one = beneficiary @ VestingError::Unauthorized,
        has_one = vesting_account @ VestingError::RecordMismatch
    )]
    pub employee_account: Account<'info, EmployeeAccount>,

    #[account(
        seeds = [VESTING_ACCOUNT_SEED, company_name.as_bytes()],
        bump = vesting_account.bump,
        has_one = mint @ VestingError::RecordMismatch,
        has_one = token_treasury @ VestingError::RecordMismatch
    )]
    pub vesting_account: Account<'info, VestingAccount>,

    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        seeds = [VESTING_TREASURY_SEED, company_name.as_bytes()],
        bump = vesting_account.treasury_bump,
        constraint = token_treasury.mint == vesting_account.mint @ VestingError::RecordMismatch,
    )]
    pub token_treasury: InterfaceAccount<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = beneficiary,
        associated_token::mint = mint,
        associated_token::authority = beneficiary,
        associated_token::token_program = token_program
    )]
    pub employee_token_account: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct TokensClaimed {
    pub beneficiary: Pubkey,
    pub vesting_account: Pubkey,
    pub amount: u64,
    pub total_withdrawn: u64,
    pub timestamp: u64,
}
