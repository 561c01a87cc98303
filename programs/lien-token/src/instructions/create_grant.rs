use anchor_lang::prelude::*;

use crate::constants::{GRANT_SEED, HOLDER_SEED};
use crate::state::{grant, Grant, Holder};

pub fn create_grant(ctx: Context<CreateGrant>, beneficiary: Pubkey, end_time: i64) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    grant::validate_end_time(end_time, now)?;

    let beneficiary_holder = &mut ctx.accounts.beneficiary_holder;
    beneficiary_holder.open_if_new(beneficiary, ctx.bumps.beneficiary_holder);
    let id = beneficiary_holder.allocate_grant_id()?;
    let creator = ctx.accounts.creator.key();

    ctx.accounts.grant.set_inner(Grant {
        beneficiary,
        creator,
        id,
        amount: 0,
        claimed: 0,
        start_time: now,
        end_time,
        bump: ctx.bumps.grant,
    });

    emit!(GrantCreated {
        creator,
        beneficiary,
        id,
        end_time,
    });

    Ok(id)
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct CreateGrant<'info> {
    #[account(
        init_if_needed,
        payer = creator,
        space = Holder::space(0),
        seeds = [HOLDER_SEED, beneficiary.as_ref()],
        bump,
    )]
    pub beneficiary_holder: Account<'info, Holder>,

    #[account(
        init,
        payer = creator,
        space = 8 + Grant::SIZE,
        seeds = [
            GRANT_SEED,
            beneficiary.as_ref(),
            &beneficiary_holder.next_grant_id().to_le_bytes(),
        ],
        bump
    )]
    pub grant: Account<'info, Grant>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct GrantCreated {
    pub creator: Pubkey,
    pub beneficiary: Pubkey,
    pub id: u64,
    pub end_time: i64,
}
