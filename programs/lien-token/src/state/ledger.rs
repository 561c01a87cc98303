use anchor_lang::prelude::*;

use crate::constants::{CHECKPOINT_SIZE, MAX_EXPIRATION};
use crate::error::{LienError, LienResult};
use crate::state::checkpoint::{self, Checkpoint};
use crate::state::Holder;
use crate::utils::term;

/// Singleton ledger PDA: term clock parameters, supply and the global lock total.
#[account]
pub struct Ledger {
    /// Genesis holder; the only key allowed to mint.
    pub admin: Pubkey,
    /// Start of term 1 (unix seconds).
    pub initial_time: i64,
    /// Term length in seconds.
    pub interval: i64,
    /// Number of terms a settled profit stays payable.
    pub expiration: u64,
    pub total_supply: u64,
    /// Sum of every holder's `remaining_grant`.
    pub total_remaining_grants: u64,
    pub bump: u8,
    pub native_vault_bump: u8,
    pub supply_checkpoints: Vec<Checkpoint>,
}

impl Ledger {
    pub fn space(checkpoints_len: usize) -> usize {
        8 + // discriminator
        32 + // admin
        8 + // initial_time
        8 + // interval
        8 + // expiration
        8 + // total_supply
        8 + // total_remaining_grants
        1 + // bump
        1 + // native_vault_bump
        4 + // supply_checkpoints vector length prefix
        checkpoints_len * CHECKPOINT_SIZE
    }

    pub fn validate_config(interval: i64, expiration: u64) -> LienResult<()> {
        if interval <= 0 || expiration == 0 || expiration > MAX_EXPIRATION {
            return Err(LienError::InvalidConfig);
        }
        Ok(())
    }

    /// Max entries a profit window can hold: the current term plus `expiration` past ones.
    pub fn window_capacity(&self) -> usize {
        self.expiration as usize + 1
    }

    pub fn term_of_time(&self, time: i64) -> LienResult<u64> {
        term::term_of_time(time, self.initial_time, self.interval)
    }

    pub fn start_of_term(&self, term: u64) -> LienResult<i64> {
        term::start_of_term(term, self.initial_time, self.interval)
    }

    pub fn end_of_term(&self, term: u64) -> LienResult<i64> {
        term::end_of_term(term, self.initial_time, self.interval)
    }

    pub fn total_supply_at(&self, term: u64) -> LienResult<u64> {
        checkpoint::balance_at(&self.supply_checkpoints, term, self.total_supply)
    }

    pub fn transfer(
        &self,
        from: &mut Holder,
        to: &mut Holder,
        amount: u64,
        now: i64,
    ) -> LienResult<()> {
        let term = self.term_of_time(now)?;
        from.debit(amount, term)?;
        to.credit(amount, term)
    }

    pub fn mint(&mut self, to: &mut Holder, amount: u64, now: i64) -> LienResult<()> {
        let term = self.term_of_time(now)?;
        self.total_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(LienError::MathOverflow)?;
        to.credit(amount, term)?;
        checkpoint::record(&mut self.supply_checkpoints, term, self.total_supply)
    }

    pub fn burn(&mut self, from: &mut Holder, amount: u64, now: i64) -> LienResult<()> {
        let term = self.term_of_time(now)?;
        from.debit(amount, term)?;
        self.total_supply = self
            .total_supply
            .checked_sub(amount)
            .ok_or(LienError::MathOverflow)?;
        checkpoint::record(&mut self.supply_checkpoints, term, self.total_supply)
    }

    /// Moves `amount` from `depositor` onto `beneficiary` and locks it there.
    /// `depositor == None` locks the beneficiary's own spendable balance.
    pub fn fund_grant(
        &mut self,
        depositor: Option<&mut Holder>,
        beneficiary: &mut Holder,
        amount: u64,
        now: i64,
    ) -> LienResult<()> {
        match depositor {
            Some(depositor) => {
                depositor.ensure_spendable(amount)?;
                let term = self.term_of_time(now)?;
                depositor.debit(amount, term)?;
                beneficiary.credit(amount, term)?;
            }
            None => beneficiary.ensure_spendable(amount)?,
        }
        beneficiary.lock(amount)?;
        self.total_remaining_grants = self
            .total_remaining_grants
            .checked_add(amount)
            .ok_or(LienError::MathOverflow)?;
        Ok(())
    }

    pub fn release_grant(&mut self, beneficiary: &mut Holder, amount: u64) -> LienResult<()> {
        beneficiary.unlock(amount)?;
        self.total_remaining_grants = self
            .total_remaining_grants
            .checked_sub(amount)
            .ok_or(LienError::MathOverflow)?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub const INITIAL: i64 = 1_000_000;
    pub const INTERVAL: i64 = 60;

    pub fn ledger(expiration: u64) -> Ledger {
        Ledger {
            admin: Pubkey::new_unique(),
            initial_time: INITIAL,
            interval: INTERVAL,
            expiration,
            total_supply: 0,
            total_remaining_grants: 0,
            bump: 255,
            native_vault_bump: 254,
            supply_checkpoints: Vec::new(),
        }
    }

    pub fn at_term(term: u64) -> i64 {
        INITIAL + INTERVAL * (term as i64 - 1)
    }

    #[test]
    fn config_bounds() {
        assert!(Ledger::validate_config(60, 5).is_ok());
        assert!(Ledger::validate_config(1, MAX_EXPIRATION).is_ok());
        assert!(matches!(
            Ledger::validate_config(0, 5),
            Err(LienError::InvalidConfig)
        ));
        assert!(matches!(
            Ledger::validate_config(60, 0),
            Err(LienError::InvalidConfig)
        ));
        assert!(matches!(
            Ledger::validate_config(60, MAX_EXPIRATION + 1),
            Err(LienError::InvalidConfig)
        ));
    }

    #[test]
    fn mint_and_burn_track_supply_history() {
        let mut l = ledger(5);
        let mut h = Holder::new(Pubkey::new_unique(), 1);

        l.mint(&mut h, 1000, at_term(1)).unwrap();
        l.burn(&mut h, 100, at_term(3)).unwrap();
        l.mint(&mut h, 50, at_term(3)).unwrap();

        assert_eq!(l.total_supply, 950);
        assert_eq!(l.total_supply_at(1).unwrap(), 1000);
        assert_eq!(l.total_supply_at(2).unwrap(), 1000);
        assert_eq!(l.total_supply_at(3).unwrap(), 950);
        assert_eq!(l.supply_checkpoints.len(), 2);
        assert_eq!(h.balance_at(3).unwrap(), 950);
    }

    #[test]
    fn transfer_conserves_supply_per_term() {
        let mut l = ledger(5);
        let mut a = Holder::new(Pubkey::new_unique(), 1);
        let mut b = Holder::new(Pubkey::new_unique(), 1);
        l.mint(&mut a, 1000, at_term(1)).unwrap();

        l.transfer(&mut a, &mut b, 300, at_term(2)).unwrap();
        l.transfer(&mut b, &mut a, 100, at_term(4)).unwrap();

        for term in 1..=5 {
            let sum = a.balance_at(term).unwrap() + b.balance_at(term).unwrap();
            assert_eq!(sum, l.total_supply_at(term).unwrap());
        }
        assert_eq!(b.balance_at(1).unwrap(), 0);
        assert_eq!(b.balance_at(3).unwrap(), 300);
        assert_eq!(b.balance_at(4).unwrap(), 200);
    }

    #[test]
    fn transfer_respects_grant_lock() {
        let mut l = ledger(5);
        let mut a = Holder::new(Pubkey::new_unique(), 1);
        let mut b = Holder::new(Pubkey::new_unique(), 1);
        l.mint(&mut a, 100, at_term(1)).unwrap();
        l.fund_grant(None, &mut a, 70, at_term(1)).unwrap();

        assert!(matches!(
            l.transfer(&mut a, &mut b, 31, at_term(1)),
            Err(LienError::ExceedsSpendable)
        ));
        assert!(matches!(
            l.burn(&mut a, 31, at_term(1)),
            Err(LienError::ExceedsSpendable)
        ));
        l.transfer(&mut a, &mut b, 30, at_term(1)).unwrap();
        assert_eq!(a.balance, 70);
    }

    #[test]
    fn third_party_funding_moves_balance_and_lock() {
        let mut l = ledger(5);
        let mut dep = Holder::new(Pubkey::new_unique(), 1);
        let mut ben = Holder::new(Pubkey::new_unique(), 1);
        l.mint(&mut dep, 100, at_term(1)).unwrap();

        l.fund_grant(Some(&mut dep), &mut ben, 40, at_term(2)).unwrap();
        assert_eq!(dep.balance, 60);
        assert_eq!(ben.balance, 40);
        assert_eq!(ben.remaining_grant, 40);
        assert_eq!(dep.remaining_grant, 0);
        assert_eq!(l.total_remaining_grants, 40);
        assert_eq!(ben.balance_at(2).unwrap(), 40);

        assert!(matches!(
            l.fund_grant(Some(&mut dep), &mut ben, 61, at_term(2)),
            Err(LienError::InsufficientBalance)
        ));

        l.release_grant(&mut ben, 15).unwrap();
        assert_eq!(ben.remaining_grant, 25);
        assert_eq!(l.total_remaining_grants, 25);
    }

    #[test]
    fn self_funding_keeps_balance_and_history() {
        let mut l = ledger(5);
        let mut a = Holder::new(Pubkey::new_unique(), 1);
        l.mint(&mut a, 100, at_term(1)).unwrap();
        let history = a.checkpoints.clone();

        l.fund_grant(None, &mut a, 100, at_term(3)).unwrap();
        assert_eq!(a.balance, 100);
        assert_eq!(a.spendable(), 0);
        assert_eq!(a.checkpoints, history);

        assert!(matches!(
            l.fund_grant(None, &mut a, 1, at_term(3)),
            Err(LienError::InsufficientBalance)
        ));
    }
}
