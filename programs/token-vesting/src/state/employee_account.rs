use anchor_lang::prelude::*;

use crate::error::VestingError;

/// Per-beneficiary vesting schedule PDA and its withdrawal progress.
#[account]
#[derive(InitSpace)]
pub struct EmployeeAccount {
    /// Identity entitled to claim this schedule.
    pub beneficiary: Pubkey,
    /// Company vesting ledger this schedule draws from.
    pub vesting_account: Pubkey,
    /// Schedule start (Unix seconds, UTC).
    pub start_date: u64,
    /// Schedule end (Unix seconds, UTC).
    pub end_date: u64,
    /// Release gate: nothing is claimable before this instant.
    pub cliff_date: u64,
    /// Total quantity granted over the full schedule.
    pub total_amount: u64,
    /// Quantity already paid out. Never decreases.
    pub total_withdrawn: u64,
    /// Bump recorded when the schedule address was derived.
    pub bump: u8,
}

impl EmployeeAccount {
    /// Cumulative amount unlocked at `now`. Non-decreasing in `now` and
    /// never exceeds `total_amount`. The cliff only gates release; linear
    /// accrual is still measured from `start_date`, so crossing the cliff
    /// releases everything accrued up to that instant.
    pub fn vested_amount(&self, now: u64) -> Result<u64> {
        if now < self.cliff_date {
            return Ok(0);
        }
        if now >= self.end_date {
            return Ok(self.total_amount);
        }
        if self.start_date >= self.end_date {
            // Degenerate schedule: fully unlocked once past the gate.
            return Ok(self.total_amount);
        }
        // now < end_date here, so elapsed < duration and the quotient
        // always fits back into u64. Rounding is down, in favor of the
        // treasury; the residue pays out at end_date.
        let elapsed = now.saturating_sub(self.start_date) as u128;
        let duration = (self.end_date - self.start_date) as u128;
        let vested = (self.total_amount as u128)
            .checked_mul(elapsed)
            .ok_or(VestingError::MathOverflow)?
            .checked_div(duration)
            .ok_or(VestingError::MathOverflow)?;
        Ok(u64::try_from(vested).map_err(|_| VestingError::MathOverflow)?)
    }

    /// Amount withdrawable at `now`: vested minus what was already paid
    /// out, floored at zero.
    pub fn claimable_amount(&self, now: u64) -> Result<u64> {
        let vested = self.vested_amount(now)?;
        Ok(vested.saturating_sub(self.total_withdrawn))
    }
}
