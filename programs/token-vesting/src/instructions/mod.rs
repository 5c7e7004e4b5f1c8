pub mod create_vesting_account;
pub mod create_employee_account;
pub mod claim_tokens;
pub mod emit_claim_quote;

pub use create_vesting_account::*;
pub use create_employee_account::*;
pub use claim_tokens::*;
pub use emit_claim_quote::*;
