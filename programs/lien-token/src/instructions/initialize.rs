use anchor_lang::{
    prelude::*,
    system_program::{self, Transfer},
};

use crate::constants::{HOLDER_SEED, LEDGER_SEED, NATIVE_VAULT_SEED};
use crate::error::LienError;
use crate::state::{Holder, Ledger};

pub fn initialize(
    ctx: Context<Initialize>,
    interval: i64,
    expiration: u64,
    initial_supply: u64,
) -> Result<()> {
    Ledger::validate_config(interval, expiration)?;
    require!(initial_supply > 0, LienError::InvalidConfig);

    let now = Clock::get()?.unix_timestamp;
    let admin = ctx.accounts.admin.key();

    // Native custody must stay rent exempt; only lamports above the reserve count as inflow.
    let reserve = Rent::get()?.minimum_balance(0);
    let top_up = reserve.saturating_sub(ctx.accounts.native_vault.lamports());
    if top_up > 0 {
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.admin.to_account_info(),
                    to: ctx.accounts.native_vault.to_account_info(),
                },
            ),
            top_up,
        )?;
    }

    let ledger = &mut ctx.accounts.ledger;
    ledger.set_inner(Ledger {
        admin,
        initial_time: now,
        interval,
        expiration,
        total_supply: 0,
        total_remaining_grants: 0,
        bump: ctx.bumps.ledger,
        native_vault_bump: ctx.bumps.native_vault,
        supply_checkpoints: Vec::with_capacity(1),
    });

    let admin_holder = &mut ctx.accounts.admin_holder;
    admin_holder.set_inner(Holder::new(admin, ctx.bumps.admin_holder));
    ledger.mint(admin_holder, initial_supply, now)?;

    emit!(LedgerInitialized {
        admin,
        initial_time: now,
        interval,
        expiration,
        initial_supply,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = admin,
        space = Ledger::space(1),
        seeds = [LEDGER_SEED],
        bump
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(
        init,
        payer = admin,
        space = Holder::space(1),
        seeds = [HOLDER_SEED, admin.key().as_ref()],
        bump
    )]
    pub admin_holder: Account<'info, Holder>,

    #[account(mut, seeds = [NATIVE_VAULT_SEED], bump)]
    pub native_vault: SystemAccount<'info>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct LedgerInitialized {
    pub admin: Pubkey,
    pub initial_time: i64,
    pub interval: i64,
    pub expiration: u64,
    pub initial_supply: u64,
}
