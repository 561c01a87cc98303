use anchor_lang::prelude::*;

use crate::constants::HOLDER_SEED;
use crate::state::Holder;

pub fn open_holder(ctx: Context<OpenHolder>, owner: Pubkey) -> Result<()> {
    ctx.accounts
        .holder
        .set_inner(Holder::new(owner, ctx.bumps.holder));

    emit!(HolderOpened {
        owner,
        payer: ctx.accounts.payer.key(),
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct OpenHolder<'info> {
    #[account(
        init,
        payer = payer,
        space = Holder::space(0),
        seeds = [HOLDER_SEED, owner.as_ref()],
        bump
    )]
    pub holder: Account<'info, Holder>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct HolderOpened {
    pub owner: Pubkey,
    pub payer: Pubkey,
}
