use anchor_lang::prelude::*;

use crate::error::{LienError, LienResult};

/// Permanent record of the profit recognized for one (asset, term).
#[account]
pub struct TermProfit {
    pub asset: Pubkey,
    pub term: u64,
    pub amount: u64,
    pub bump: u8,
}

impl TermProfit {
    pub const SIZE: usize =
        32 + // asset
        8 +  // term
        8 +  // amount
        1;   // bump

    pub fn add(&mut self, amount: u64) -> LienResult<()> {
        self.amount = self
            .amount
            .checked_add(amount)
            .ok_or(LienError::MathOverflow)?;
        Ok(())
    }
}
