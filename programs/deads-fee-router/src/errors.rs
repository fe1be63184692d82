use anchor_lang::prelude::*;

#[error_code]
pub enum RouterError {
    #[msg("Amount is below the minimum distribution threshold")]
    ZeroAmount,

    #[msg("Provided decimals do not match the mint's decimals")]
    DecimalsMismatch,

    #[msg("Router vault has insufficient balance for the requested distribution")]
    InsufficientVaultBalance,

    #[msg("Math overflow while computing splits")]
    MathOverflow,

    #[msg("Source token account is not for the router's mint")]
    InvalidMintForSource,

    #[msg("Account is owned by the wrong token program")]
    WrongTokenProgram,
}
