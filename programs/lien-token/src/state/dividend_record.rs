use anchor_lang::prelude::*;

/// Per-(holder, asset) payout cursor.
#[account]
pub struct DividendRecord {
    pub holder: Pubkey,
    pub asset: Pubkey,
    /// Every term up to and including this one is paid or forfeited.
    pub last_received_term: u64,
    pub bump: u8,
}

impl DividendRecord {
    pub const SIZE: usize =
        32 + // holder
        32 + // asset
        8 +  // last_received_term
        1;   // bump
}
