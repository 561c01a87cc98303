use anchor_lang::prelude::*;

use crate::constants::{HOLDER_SEED, LEDGER_SEED};
use crate::error::LienError;
use crate::instructions::TokensTransferred;
use crate::state::{Holder, Ledger};

pub fn mint(ctx: Context<MintBalance>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    ctx.accounts
        .ledger
        .mint(&mut ctx.accounts.to_holder, amount, now)?;

    emit!(TokensTransferred {
        from: Pubkey::default(),
        to: ctx.accounts.to_holder.owner,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct MintBalance<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
        has_one = admin @ LienError::UnauthorizedAdmin,
        realloc = Ledger::space(ledger.supply_checkpoints.len() + 1),
        realloc::payer = admin,
        realloc::zero = false,
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, to_holder.owner.as_ref()],
        bump = to_holder.bump,
        realloc = Holder::space(to_holder.checkpoints.len() + 1),
        realloc::payer = admin,
        realloc::zero = false,
    )]
    pub to_holder: Account<'info, Holder>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}
