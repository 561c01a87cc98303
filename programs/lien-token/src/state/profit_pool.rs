use anchor_lang::prelude::*;

use crate::error::{LienError, LienResult};
use crate::state::{Holder, Ledger};

/// Profit settled for `term` and the part of it already paid out.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WindowEntry {
    pub term: u64,
    pub amount: u64,
    pub paid: u64,
}

impl WindowEntry {
    pub const SIZE: usize = 8 + 8 + 8;

    fn outstanding(&self) -> LienResult<u64> {
        self.amount
            .checked_sub(self.paid)
            .ok_or(LienError::MathOverflow)
    }
}

/// Per-asset settlement window. Entries are ordered by term and pruned lazily on settle.
#[account]
pub struct ProfitPool {
    pub asset: Pubkey,
    pub bump: u8,
    pub window: Vec<WindowEntry>,
}

impl ProfitPool {
    pub fn space(capacity: usize) -> usize {
        8 + // discriminator
        32 + // asset
        1 + // bump
        4 + // window vector length prefix
        capacity * WindowEntry::SIZE
    }

    /// Custody still owed to holders for terms inside the window.
    pub fn outstanding(&self, current_term: u64, expiration: u64) -> LienResult<u64> {
        self.window
            .iter()
            .filter(|e| is_active(e.term, current_term, expiration))
            .try_fold(0u64, |acc, e| {
                acc.checked_add(e.outstanding()?)
                    .ok_or(LienError::MathOverflow)
            })
    }

    pub fn unsettled(
        &self,
        custody: u64,
        current_term: u64,
        expiration: u64,
    ) -> LienResult<u64> {
        custody
            .checked_sub(self.outstanding(current_term, expiration)?)
            .ok_or(LienError::InvalidCustody)
    }

    /// Recognizes unsettled custody as profit of `current_term`. Returns the amount settled.
    pub fn settle(
        &mut self,
        custody: u64,
        current_term: u64,
        expiration: u64,
        capacity: usize,
    ) -> LienResult<u64> {
        let pending = self.unsettled(custody, current_term, expiration)?;
        if pending == 0 {
            return Ok(0);
        }

        self.window
            .retain(|e| is_active(e.term, current_term, expiration));

        match self.window.last_mut() {
            Some(last) if last.term == current_term => {
                last.amount = last
                    .amount
                    .checked_add(pending)
                    .ok_or(LienError::MathOverflow)?;
            }
            _ => {
                // Pruning leaves at most `expiration` past terms, so this only
                // trips on a pool allocated below `Ledger::window_capacity`.
                if self.window.len() >= capacity {
                    return Err(LienError::ProfitWindowFull);
                }
                self.window.push(WindowEntry {
                    term: current_term,
                    amount: pending,
                    paid: 0,
                });
            }
        }
        Ok(pending)
    }

    /// Dividends payable to `holder` for terms after `last_received_term`.
    pub fn unreceived(
        &self,
        last_received_term: u64,
        holder: &Holder,
        ledger: &Ledger,
        current_term: u64,
    ) -> LienResult<u64> {
        let (from, to) = payable_range(last_received_term, current_term, ledger.expiration);
        let mut total = 0u64;
        for entry in self.window.iter().filter(|e| e.term >= from && e.term <= to) {
            let d = dividend_for(entry.amount, holder, ledger, entry.term)?;
            total = total.checked_add(d).ok_or(LienError::MathOverflow)?;
        }
        Ok(total)
    }

    /// Books the payout against each term's entry and advances the cursor.
    /// Terms that already left the window are skipped for good.
    pub fn receive(
        &mut self,
        last_received_term: &mut u64,
        holder: &Holder,
        ledger: &Ledger,
        current_term: u64,
    ) -> LienResult<u64> {
        let (from, to) = payable_range(*last_received_term, current_term, ledger.expiration);
        let mut total = 0u64;
        for entry in self
            .window
            .iter_mut()
            .filter(|e| e.term >= from && e.term <= to)
        {
            let d = dividend_for(entry.amount, holder, ledger, entry.term)?;
            entry.paid = entry.paid.checked_add(d).ok_or(LienError::MathOverflow)?;
            total = total.checked_add(d).ok_or(LienError::MathOverflow)?;
        }
        if to > *last_received_term {
            *last_received_term = to;
        }
        Ok(total)
    }
}

fn is_active(term: u64, current_term: u64, expiration: u64) -> bool {
    current_term.saturating_sub(term) <= expiration
}

/// Inclusive range of terms still payable; only fully elapsed terms qualify.
fn payable_range(last_received_term: u64, current_term: u64, expiration: u64) -> (u64, u64) {
    let from = last_received_term
        .saturating_add(1)
        .max(current_term.saturating_sub(expiration))
        .max(1);
    (from, current_term.saturating_sub(1))
}

fn dividend_for(profit: u64, holder: &Holder, ledger: &Ledger, term: u64) -> LienResult<u64> {
    dividend_share(profit, holder.balance_at(term)?, ledger.total_supply_at(term)?)
}

/// floor(profit * balance / supply); zero when there is no supply.
pub fn dividend_share(profit: u64, balance: u64, supply: u64) -> LienResult<u64> {
    if supply == 0 {
        return Ok(0);
    }
    let v = (profit as u128)
        .checked_mul(balance as u128)
        .ok_or(LienError::MathOverflow)?
        / supply as u128;
    u64::try_from(v).map_err(|_| LienError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ledger::tests::{at_term, ledger};

    fn pool() -> ProfitPool {
        ProfitPool {
            asset: Pubkey::new_unique(),
            bump: 255,
            window: Vec::new(),
        }
    }

    #[test]
    fn share_floors_and_handles_empty_supply() {
        assert_eq!(dividend_share(100, 333, 1000).unwrap(), 33);
        assert_eq!(dividend_share(100, 1, 1000).unwrap(), 0);
        assert_eq!(dividend_share(100, 5, 0).unwrap(), 0);
        assert_eq!(dividend_share(u64::MAX, u64::MAX, u64::MAX).unwrap(), u64::MAX);
    }

    #[test]
    fn settle_is_idempotent_without_inflow() {
        let mut p = pool();
        assert_eq!(p.settle(100, 1, 5, 6).unwrap(), 100);
        assert_eq!(p.settle(100, 1, 5, 6).unwrap(), 0);
        assert_eq!(p.settle(130, 1, 5, 6).unwrap(), 30);
        assert_eq!(p.window, vec![WindowEntry { term: 1, amount: 130, paid: 0 }]);
    }

    #[test]
    fn expired_profit_becomes_unsettled_again() {
        let mut p = pool();
        p.settle(100, 1, 5, 6).unwrap();
        // Term 1 is still payable while current - 1 <= expiration.
        assert_eq!(p.unsettled(100, 6, 5).unwrap(), 0);
        assert_eq!(p.unsettled(100, 7, 5).unwrap(), 100);

        assert_eq!(p.settle(100, 7, 5, 6).unwrap(), 100);
        assert_eq!(p.window, vec![WindowEntry { term: 7, amount: 100, paid: 0 }]);
    }

    #[test]
    fn paid_out_amounts_are_not_carried_over() {
        let mut p = pool();
        p.settle(100, 1, 5, 6).unwrap();
        p.window[0].paid = 33;
        assert_eq!(p.outstanding(2, 5).unwrap(), 67);
        assert_eq!(p.unsettled(67, 2, 5).unwrap(), 0);
        assert_eq!(p.unsettled(67, 7, 5).unwrap(), 67);
    }

    #[test]
    fn custody_below_outstanding_is_rejected() {
        let mut p = pool();
        p.settle(100, 1, 5, 6).unwrap();
        assert!(matches!(p.unsettled(99, 1, 5), Err(LienError::InvalidCustody)));
    }

    #[test]
    fn full_window_rejects_new_term() {
        let mut p = pool();
        p.settle(10, 1, 5, 1).unwrap();
        assert!(matches!(p.settle(20, 2, 5, 1), Err(LienError::ProfitWindowFull)));
    }

    #[test]
    fn receive_pays_each_term_once() {
        let mut l = ledger(5);
        let mut a = Holder::new(Pubkey::new_unique(), 1);
        let mut b = Holder::new(Pubkey::new_unique(), 1);
        l.mint(&mut a, 1000, at_term(1)).unwrap();
        l.transfer(&mut a, &mut b, 250, at_term(1)).unwrap();

        let mut p = pool();
        p.settle(100, 1, 5, 6).unwrap();

        let mut cursor = 0;
        // Term 1 is not payable until it has elapsed.
        assert_eq!(p.receive(&mut cursor, &b, &l, 1).unwrap(), 0);
        assert_eq!(cursor, 0);

        assert_eq!(p.unreceived(cursor, &b, &l, 2).unwrap(), 25);
        assert_eq!(p.receive(&mut cursor, &b, &l, 2).unwrap(), 25);
        assert_eq!(cursor, 1);
        assert_eq!(p.receive(&mut cursor, &b, &l, 3).unwrap(), 0);
        assert_eq!(p.window[0].paid, 25);
    }

    #[test]
    fn late_receive_forfeits_expired_terms() {
        let mut l = ledger(5);
        let mut a = Holder::new(Pubkey::new_unique(), 1);
        l.mint(&mut a, 1000, at_term(1)).unwrap();

        let mut p = pool();
        p.settle(100, 1, 5, 6).unwrap();

        assert_eq!(p.unreceived(0, &a, &l, 6).unwrap(), 100);
        assert_eq!(p.unreceived(0, &a, &l, 7).unwrap(), 0);

        let mut cursor = 0;
        assert_eq!(p.receive(&mut cursor, &a, &l, 7).unwrap(), 0);
        assert_eq!(cursor, 6);
    }
}
