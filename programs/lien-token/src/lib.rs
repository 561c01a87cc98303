#![allow(deprecated)]

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;


use anchor_lang::prelude::*;

pub use instructions::*;
use state::GrantInfo;

declare_id!("5cdG1riTmC2DfeLvXyCwkij3jt5DkfAisRCXdFe35FoB");

#[program]
pub mod lien_token {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        interval: i64,
        expiration: u64,
        initial_supply: u64,
    ) -> Result<()> {
        instructions::initialize::initialize(ctx, interval, expiration, initial_supply)
    }

    pub fn open_holder(ctx: Context<OpenHolder>, owner: Pubkey) -> Result<()> {
        instructions::open_holder::open_holder(ctx, owner)
    }

    pub fn open_vault(ctx: Context<OpenVault>) -> Result<()> {
        instructions::open_vault::open_vault(ctx)
    }

    // Balance ledger

    pub fn transfer(ctx: Context<TransferBalance>, to: Pubkey, amount: u64) -> Result<()> {
        instructions::transfer::transfer(ctx, to, amount)
    }

    pub fn mint(ctx: Context<MintBalance>, amount: u64) -> Result<()> {
        instructions::mint::mint(ctx, amount)
    }

    pub fn burn(ctx: Context<BurnBalance>, amount: u64) -> Result<()> {
        instructions::burn::burn(ctx, amount)
    }

    pub fn balance_of_at_term_end(
        ctx: Context<HolderQuery>,
        owner: Pubkey,
        term: u64,
    ) -> Result<u64> {
        instructions::holder_queries::balance_of_at_term_end(ctx, owner, term)
    }

    pub fn spendable_balance_of(ctx: Context<HolderQuery>, owner: Pubkey) -> Result<u64> {
        instructions::holder_queries::spendable_balance_of(ctx, owner)
    }

    pub fn total_supply_at_term_end(ctx: Context<LedgerQuery>, term: u64) -> Result<u64> {
        instructions::ledger_queries::total_supply_at_term_end(ctx, term)
    }

    // Term clock

    pub fn current_term(ctx: Context<LedgerQuery>) -> Result<u64> {
        instructions::ledger_queries::current_term(ctx)
    }

    pub fn term_of_time(ctx: Context<LedgerQuery>, time: i64) -> Result<u64> {
        instructions::ledger_queries::term_of_time(ctx, time)
    }

    pub fn start_of_term(ctx: Context<LedgerQuery>, term: u64) -> Result<i64> {
        instructions::ledger_queries::start_of_term(ctx, term)
    }

    pub fn end_of_term(ctx: Context<LedgerQuery>, term: u64) -> Result<i64> {
        instructions::ledger_queries::end_of_term(ctx, term)
    }

    // Vesting grants

    pub fn create_grant(
        ctx: Context<CreateGrant>,
        beneficiary: Pubkey,
        end_time: i64,
    ) -> Result<u64> {
        instructions::create_grant::create_grant(ctx, beneficiary, end_time)
    }

    pub fn deposit_to_grant(
        ctx: Context<DepositToGrant>,
        beneficiary: Pubkey,
        id: u64,
        amount: u64,
    ) -> Result<()> {
        instructions::deposit_to_grant::deposit_to_grant(ctx, beneficiary, id, amount)
    }

    pub fn claim_vested_tokens(
        ctx: Context<ClaimVestedTokens>,
        beneficiary: Pubkey,
        id: u64,
    ) -> Result<()> {
        instructions::claim_vested_tokens::claim_vested_tokens(ctx, beneficiary, id)
    }

    pub fn get_grant(ctx: Context<GetGrant>, beneficiary: Pubkey, id: u64) -> Result<GrantInfo> {
        instructions::get_grant::get_grant(ctx, beneficiary, id)
    }

    pub fn get_last_grant_id(ctx: Context<HolderQuery>, owner: Pubkey) -> Result<u64> {
        instructions::holder_queries::get_last_grant_id(ctx, owner)
    }

    pub fn remaining_grant_of(ctx: Context<HolderQuery>, owner: Pubkey) -> Result<u64> {
        instructions::holder_queries::remaining_grant_of(ctx, owner)
    }

    pub fn total_remaining_grants(ctx: Context<LedgerQuery>) -> Result<u64> {
        instructions::ledger_queries::total_remaining_grants(ctx)
    }

    // Profit and dividends

    pub fn settle_profit(ctx: Context<SettleProfit>, asset: Pubkey, term: u64) -> Result<()> {
        instructions::settle_profit::settle_profit(ctx, asset, term)
    }

    pub fn receive_dividend(ctx: Context<ReceiveDividend>, asset: Pubkey) -> Result<()> {
        instructions::receive_dividend::receive_dividend(ctx, asset)
    }

    pub fn unsettled_profit(ctx: Context<UnsettledProfit>, asset: Pubkey) -> Result<u64> {
        instructions::profit_queries::unsettled_profit(ctx, asset)
    }

    pub fn profit_at(ctx: Context<ProfitAt>, asset: Pubkey, term: u64) -> Result<u64> {
        instructions::profit_queries::profit_at(ctx, asset, term)
    }

    pub fn dividend_at(
        ctx: Context<DividendAt>,
        asset: Pubkey,
        owner: Pubkey,
        term: u64,
    ) -> Result<u64> {
        instructions::profit_queries::dividend_at(ctx, asset, owner, term)
    }

    pub fn unreceived_dividend(
        ctx: Context<UnreceivedDividend>,
        asset: Pubkey,
        owner: Pubkey,
    ) -> Result<u64> {
        instructions::profit_queries::unreceived_dividend(ctx, asset, owner)
    }
}
