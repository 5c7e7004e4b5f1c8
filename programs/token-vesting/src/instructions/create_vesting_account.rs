use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::{MAX_COMPANY_NAME_LEN, VESTING_ACCOUNT_SEED, VESTING_TREASURY_SEED};
use crate::error::VestingError;
use crate::state::VestingAccount;

pub fn create_vesting_account_handler(
    ctx: Context<CreateVestingAccount>,
    company_name: String,
) -> Result<()> {
    require!(
        company_name.len() <= MAX_COMPANY_NAME_LEN,
        VestingError::CompanyNameTooLong
    );

    ctx.accounts.vesting_account.set_inner(VestingAccount {
        owner: ctx.accounts.signer.key(),
        mint: ctx.accounts.mint.key(),
        token_treasury: ctx.accounts.token_treasury_account.key(),
        company_name: company_name.clone(),
        treasury_bump: ctx.bumps.token_treasury_account,
        bump: ctx.bumps.vesting_account,
    });

    emit!(VestingAccountCreated {
        company_name,
        owner: ctx.accounts.signer.key(),
        mint: ctx.accounts.mint.key(),
        vesting_account: ctx.accounts.vesting_account.key(),
        token_treasury: ctx.accounts.token_treasury_account.key(),
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(company_name: String)]
pub struct CreateVestingAccount<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        init,
        payer = signer,
        space = 8 + VestingAccount::INIT_SPACE,
        seeds = [VESTING_ACCOUNT_SEED, company_name.as_bytes()],
        bump
    )]
    pub vesting_account: Account<'info, VestingAccount>,

    #[account(
        init,
        payer = signer,
        token::mint = mint,
        token::authority = token_treasury_account,
        token::token_program = token_program,
        seeds = [VESTING_TREASURY_SEED, company_name.as_bytes()],
        bump
    )]
    pub token_treasury_account: InterfaceAccount<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub token_program: Interface<'info, TokenInterface>,
}

#[event]
pub struct VestingAccountCreated {
    pub company_name: String,
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub vesting_account: Pubkey,
    pub token_treasury: Pubkey,
}

#[cfg(test)]
mod tests {
    use anchor_lang::Discriminator;

    // Recorded from the deployed interface; client transactions encode this
    // prefix, so it must never drift.
    #[test]
    fn instruction_discriminator_is_stable() {
        assert_eq!(
            crate::instruction::CreateVestingAccount::DISCRIMINATOR,
            &[129, 178, 2, 13, 217, 172, 230, 218][..]
        );
    }
}
