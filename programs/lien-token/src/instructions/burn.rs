use anchor_lang::prelude::*;

use crate::constants::{HOLDER_SEED, LEDGER_SEED};
use crate::instructions::TokensTransferred;
use crate::state::{Holder, Ledger};

pub fn burn(ctx: Context<BurnBalance>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    ctx.accounts
        .ledger
        .burn(&mut ctx.accounts.holder, amount, now)?;

    emit!(TokensTransferred {
        from: ctx.accounts.holder.owner,
        to: Pubkey::default(),
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct BurnBalance<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
        realloc = Ledger::space(ledger.supply_checkpoints.len() + 1),
        realloc::payer = owner,
        realloc::zero = false,
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, owner.key().as_ref()],
        bump = holder.bump,
        realloc = Holder::space(holder.checkpoints.len() + 1),
        realloc::payer = owner,
        realloc::zero = false,
    )]
    pub holder: Account<'info, Holder>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}
