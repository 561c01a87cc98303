use anchor_lang::prelude::*;

use crate::constants::{GRANT_SEED, HOLDER_SEED, LEDGER_SEED};
use crate::error::LienError;
use crate::state::{grant, Holder, Ledger};
use crate::utils::accounts;

/// Unlocks the vested part of a grant. No tokens move; the beneficiary
/// already holds them.
pub fn claim_vested_tokens(
    ctx: Context<ClaimVestedTokens>,
    beneficiary: Pubkey,
    id: u64,
) -> Result<()> {
    let grant_info = ctx.accounts.grant.to_account_info();
    let mut grant = grant::load(&grant_info, id, ctx.accounts.beneficiary_holder.last_grant_id)?;
    require_keys_eq!(
        ctx.accounts.rent_receiver.key(),
        grant.creator,
        LienError::InvalidRecipient
    );

    let now = Clock::get()?.unix_timestamp;
    let amount = grant.claim(now)?;
    ctx.accounts
        .ledger
        .release_grant(&mut ctx.accounts.beneficiary_holder, amount)?;

    if grant.is_exhausted(now) {
        msg!("grant {} of {} exhausted, closing", id, beneficiary);
        accounts::close(&grant_info, &ctx.accounts.rent_receiver.to_account_info())?;
    } else {
        accounts::store(&grant_info, &grant)?;
    }

    emit!(VestedTokensClaimed {
        beneficiary,
        id,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey, id: u64)]
pub struct ClaimVestedTokens<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, beneficiary.as_ref()],
        bump = beneficiary_holder.bump,
    )]
    pub beneficiary_holder: Account<'info, Holder>,

    /// CHECK: grant slot; may be closed, decoded in the handler.
    #[account(
        mut,
        seeds = [GRANT_SEED, beneficiary.as_ref(), &id.to_le_bytes()],
        bump
    )]
    pub grant: UncheckedAccount<'info>,

    /// CHECK: must be the grant's creator; receives the rent when the grant closes.
    #[account(mut)]
    pub rent_receiver: UncheckedAccount<'info>,
}

#[event]
pub struct VestedTokensClaimed {
    pub beneficiary: Pubkey,
    pub id: u64,
    pub amount: u64,
}
