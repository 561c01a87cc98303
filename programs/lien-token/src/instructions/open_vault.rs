use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{LEDGER_SEED, TOKEN_VAULT_SEED};
use crate::state::Ledger;

/// Creates the custody account for an SPL asset. Anyone may pay for it.
pub fn open_vault(ctx: Context<OpenVault>) -> Result<()> {
    emit!(VaultOpened {
        mint: ctx.accounts.mint.key(),
        vault: ctx.accounts.token_vault.key(),
    });
    Ok(())
}

#[derive(Accounts)]
pub struct OpenVault<'info> {
    #[account(seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    #[account(
        init,
        payer = payer,
        token::mint = mint,
        token::authority = ledger,
        seeds = [TOKEN_VAULT_SEED, mint.key().as_ref()],
        bump
    )]
    pub token_vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct VaultOpened {
    pub mint: Pubkey,
    pub vault: Pubkey,
}
