use anchor_lang::prelude::*;

#[error_code]
pub enum LienError {
    #[msg("Term is zero or precedes the initial time")]
    InvalidTerm,

    #[msg("Grant end time must be in the future")]
    InvalidEndTime,

    #[msg("Grant not found")]
    GrantNotFound,

    #[msg("Grant has already been fully claimed")]
    GrantAlreadyClaimed,

    #[msg("Amount exceeds spendable balance")]
    ExceedsSpendable,

    #[msg("Insufficient balance")]
    InsufficientBalance,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Unauthorized: admin signature required")]
    UnauthorizedAdmin,

    #[msg("Invalid recipient")]
    InvalidRecipient,

    #[msg("Holder account does not match owner")]
    InvalidHolder,

    #[msg("Invalid custody account for asset")]
    InvalidCustody,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Token accounts required for SPL asset")]
    MissingTokenAccounts,

    #[msg("Profit window is full")]
    ProfitWindowFull,
}

/// Result of the pure ledger arithmetic; converts into an Anchor error with `?`.
pub type LienResult<T> = std::result::Result<T, LienError>;
