use anchor_lang::prelude::*;

use crate::constants::{HOLDER_SEED, LEDGER_SEED};
use crate::error::LienError;
use crate::state::{Holder, Ledger};
use crate::utils::accounts;

pub fn transfer(ctx: Context<TransferBalance>, to: Pubkey, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let to_holder = &mut ctx.accounts.to_holder;
    to_holder.open_if_new(to, ctx.bumps.to_holder);
    accounts::grow(
        &to_holder.to_account_info(),
        Holder::space(to_holder.checkpoints.len() + 1),
        &ctx.accounts.owner.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
    )?;

    ctx.accounts.ledger.transfer(
        &mut ctx.accounts.from_holder,
        &mut ctx.accounts.to_holder,
        amount,
        now,
    )?;

    emit!(TokensTransferred {
        from: ctx.accounts.from_holder.owner,
        to,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(to: Pubkey)]
pub struct TransferBalance<'info> {
    #[account(seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, owner.key().as_ref()],
        bump = from_holder.bump,
        realloc = Holder::space(from_holder.checkpoints.len() + 1),
        realloc::payer = owner,
        realloc::zero = false,
    )]
    pub from_holder: Account<'info, Holder>,

    /// Opened on first receipt; grown in the handler.
    #[account(
        init_if_needed,
        payer = owner,
        space = Holder::space(1),
        seeds = [HOLDER_SEED, to.as_ref()],
        bump,
        constraint = to != owner.key() @ LienError::InvalidRecipient,
    )]
    pub to_holder: Account<'info, Holder>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Balance movement. Mints come from the default key, burns go to it.
#[event]
pub struct TokensTransferred {
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
}
