//! Read-only per-holder queries, answered through return data. An owner
//! that never opened a holder reads as an empty one.

use anchor_lang::prelude::*;

use crate::constants::HOLDER_SEED;
use crate::state::Holder;

pub fn balance_of_at_term_end(ctx: Context<HolderQuery>, owner: Pubkey, term: u64) -> Result<u64> {
    Ok(ctx.accounts.load(owner)?.balance_at(term)?)
}

pub fn spendable_balance_of(ctx: Context<HolderQuery>, owner: Pubkey) -> Result<u64> {
    Ok(ctx.accounts.load(owner)?.spendable())
}

pub fn remaining_grant_of(ctx: Context<HolderQuery>, owner: Pubkey) -> Result<u64> {
    Ok(ctx.accounts.load(owner)?.remaining_grant)
}

pub fn get_last_grant_id(ctx: Context<HolderQuery>, owner: Pubkey) -> Result<u64> {
    Ok(ctx.accounts.load(owner)?.last_grant_id)
}

#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct HolderQuery<'info> {
    /// CHECK: may not be opened yet; decoded in the handler.
    #[account(seeds = [HOLDER_SEED, owner.as_ref()], bump)]
    pub holder: UncheckedAccount<'info>,
}

impl HolderQuery<'_> {
    fn load(&self, owner: Pubkey) -> Result<Holder> {
        Holder::load_or_empty(&self.holder, owner)
    }
}
