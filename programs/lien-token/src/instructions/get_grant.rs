use anchor_lang::prelude::*;

use crate::constants::{GRANT_SEED, HOLDER_SEED};
use crate::state::{grant, GrantInfo, Holder};

pub fn get_grant(ctx: Context<GetGrant>, beneficiary: Pubkey, id: u64) -> Result<GrantInfo> {
    let holder = Holder::load_or_empty(&ctx.accounts.beneficiary_holder, beneficiary)?;
    let grant = grant::load(&ctx.accounts.grant.to_account_info(), id, holder.last_grant_id)?;
    let now = Clock::get()?.unix_timestamp;
    Ok(grant.info(now)?)
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey, id: u64)]
pub struct GetGrant<'info> {
    /// CHECK: may not be opened yet; an unopened holder has issued no grants.
    #[account(seeds = [HOLDER_SEED, beneficiary.as_ref()], bump)]
    pub beneficiary_holder: UncheckedAccount<'info>,

    /// CHECK: grant slot; may be closed, decoded in the handler.
    #[account(seeds = [GRANT_SEED, beneficiary.as_ref(), &id.to_le_bytes()], bump)]
    pub grant: UncheckedAccount<'info>,
}
