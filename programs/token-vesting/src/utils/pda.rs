//! Program-derived address helpers shared by handlers and tests.
//!
//! Derivation walks bumps from 255 downward and keeps the first value whose
//! address falls off the ed25519 curve; the winning bump is persisted in the
//! record so later calls can verify with a single derivation instead of
//! repeating the walk.

use anchor_lang::prelude::*;

use crate::constants::{EMPLOYEE_VESTING_SEED, VESTING_ACCOUNT_SEED, VESTING_TREASURY_SEED};
use crate::error::VestingError;

/// Derive the company vesting ledger address for `company_name`.
pub fn vesting_account_address(company_name: &str) -> Result<(Pubkey, u8)> {
    Ok(Pubkey::try_find_program_address(
        &[VESTING_ACCOUNT_SEED, company_name.as_bytes()],
        &crate::ID,
    )
    .ok_or(VestingError::AddressDerivationExhausted)?)
}

/// Derive the company treasury address for `company_name`.
pub fn treasury_address(company_name: &str) -> Result<(Pubkey, u8)> {
    Ok(Pubkey::try_find_program_address(
        &[VESTING_TREASURY_SEED, company_name.as_bytes()],
        &crate::ID,
    )
    .ok_or(VestingError::AddressDerivationExhausted)?)
}

/// Derive the employee schedule address for a beneficiary under a ledger.
pub fn employee_account_address(
    beneficiary: &Pubkey,
    vesting_account: &Pubkey,
) -> Result<(Pubkey, u8)> {
    Ok(Pubkey::try_find_program_address(
        &[
            EMPLOYEE_VESTING_SEED,
            beneficiary.as_ref(),
            vesting_account.as_ref(),
        ],
        &crate::ID,
    )
    .ok_or(VestingError::AddressDerivationExhausted)?)
}

/// Re-derive the treasury address from its stored bump. Fails when the bump
/// does not produce a valid off-curve address, which means the stored record
/// does not belong to these seeds.
pub fn expected_treasury_address(company_name: &str, bump: u8) -> Result<Pubkey> {
    Ok(Pubkey::create_program_address(
        &[VESTING_TREASURY_SEED, company_name.as_bytes(), &[bump]],
        &crate::ID,
    )
    .map_err(|_| VestingError::RecordMismatch)?)
}

/// Re-derive an employee schedule address from its stored bump.
pub fn expected_employee_address(
    beneficiary: &Pubkey,
    vesting_account: &Pubkey,
    bump: u8,
) -> Result<Pubkey> {
    Ok(Pubkey::create_program_address(
        &[
            EMPLOYEE_VESTING_SEED,
            beneficiary.as_ref(),
            vesting_account.as_ref(),
            &[bump],
        ],
        &crate::ID,
    )
    .map_err(|_| VestingError::RecordMismatch)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_deterministic() {
        let (a1, b1) = vesting_account_address("Acme").unwrap();
        let (a2, b2) = vesting_account_address("Acme").unwrap();
        assert_eq!(a1, a2);
        assert_eq!(b1, b2);
    }

    #[test]
    fn distinct_companies_get_distinct_addresses() {
        let (acme, _) = vesting_account_address("Acme").unwrap();
        let (globex, _) = vesting_account_address("Globex").unwrap();
        assert_ne!(acme, globex);
    }

    #[test]
    fn ledger_and_treasury_namespaces_never_collide() {
        let (ledger, _) = vesting_account_address("Acme").unwrap();
        let (treasury, _) = treasury_address("Acme").unwrap();
        assert_ne!(ledger, treasury);
    }

    #[test]
    fn employee_addresses_bind_beneficiary_and_ledger() {
        let (ledger, _) = vesting_account_address("Acme").unwrap();
        let (other_ledger, _) = vesting_account_address("Globex").unwrap();
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();

        let (a, _) = employee_account_address(&alice, &ledger).unwrap();
        let (b, _) = employee_account_address(&bob, &ledger).unwrap();
        let (c, _) = employee_account_address(&alice, &other_ledger).unwrap();
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn derived_addresses_are_off_curve() {
        let (ledger, _) = vesting_account_address("Acme").unwrap();
        let (treasury, _) = treasury_address("Acme").unwrap();
        assert!(!ledger.is_on_curve());
        assert!(!treasury.is_on_curve());
    }

    #[test]
    fn stored_bump_reproduces_the_address() {
        let (treasury, bump) = treasury_address("Acme").unwrap();
        assert_eq!(expected_treasury_address("Acme", bump).unwrap(), treasury);

        let (ledger, _) = vesting_account_address("Acme").unwrap();
        let beneficiary = Pubkey::new_unique();
        let (employee, employee_bump) = employee_account_address(&beneficiary, &ledger).unwrap();
        assert_eq!(
            expected_employee_address(&beneficiary, &ledger, employee_bump).unwrap(),
            employee
        );
    }

    #[test]
    fn wrong_bump_never_reproduces_the_address() {
        let (treasury, bump) = treasury_address("Acme").unwrap();
        let wrong = bump.wrapping_sub(1);
        match expected_treasury_address("Acme", wrong) {
            Ok(other) => assert_ne!(other, treasury),
            Err(_) => {}
        }
    }
}
