//! Term clock: maps unix time onto 1-based accounting terms.
//! - term(t) = floor((t - initial_time) / interval) + 1, for t >= initial_time
//! - start_of_term(n) = initial_time + interval * (n - 1)
//! - end_of_term(n) = initial_time + interval * n - 1 (inclusive)

use crate::error::LienError;

pub fn term_of_time(time: i64, initial_time: i64, interval: i64) -> Result<u64, LienError> {
    if interval <= 0 {
        return Err(LienError::InvalidConfig);
    }
    if time < initial_time {
        return Err(LienError::InvalidTerm);
    }
    let elapsed = time
        .checked_sub(initial_time)
        .ok_or(LienError::MathOverflow)?;
    let term = (elapsed / interval) as u64;
    term.checked_add(1).ok_or(LienError::MathOverflow)
}

pub fn start_of_term(term: u64, initial_time: i64, interval: i64) -> Result<i64, LienError> {
    if term == 0 {
        return Err(LienError::InvalidTerm);
    }
    let offset = (interval as i128)
        .checked_mul((term - 1) as i128)
        .ok_or(LienError::MathOverflow)?;
    to_timestamp((initial_time as i128) + offset)
}

pub fn end_of_term(term: u64, initial_time: i64, interval: i64) -> Result<i64, LienError> {
    if term == 0 {
        return Err(LienError::InvalidTerm);
    }
    let offset = (interval as i128)
        .checked_mul(term as i128)
        .ok_or(LienError::MathOverflow)?;
    to_timestamp((initial_time as i128) + offset - 1)
}

fn to_timestamp(v: i128) -> Result<i64, LienError> {
    i64::try_from(v).map_err(|_| LienError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INITIAL: i64 = 1_700_000_000;
    const INTERVAL: i64 = 60;

    #[test]
    fn first_term_starts_at_initial_time() {
        assert_eq!(term_of_time(INITIAL, INITIAL, INTERVAL).unwrap(), 1);
        assert_eq!(term_of_time(INITIAL + 59, INITIAL, INTERVAL).unwrap(), 1);
        assert_eq!(term_of_time(INITIAL + 60, INITIAL, INTERVAL).unwrap(), 2);
    }

    #[test]
    fn time_before_initial_is_invalid() {
        assert!(matches!(
            term_of_time(INITIAL - 1, INITIAL, INTERVAL),
            Err(LienError::InvalidTerm)
        ));
    }

    #[test]
    fn zero_interval_is_rejected() {
        assert!(matches!(
            term_of_time(INITIAL, INITIAL, 0),
            Err(LienError::InvalidConfig)
        ));
    }

    #[test]
    fn term_bounds_are_inclusive() {
        for term in 1..=10u64 {
            let start = start_of_term(term, INITIAL, INTERVAL).unwrap();
            let end = end_of_term(term, INITIAL, INTERVAL).unwrap();
            assert_eq!(end - start, INTERVAL - 1);
            assert_eq!(term_of_time(start, INITIAL, INTERVAL).unwrap(), term);
            assert_eq!(term_of_time(end, INITIAL, INTERVAL).unwrap(), term);
            assert_eq!(term_of_time(end + 1, INITIAL, INTERVAL).unwrap(), term + 1);
        }
    }

    #[test]
    fn term_zero_has_no_bounds() {
        assert!(matches!(
            start_of_term(0, INITIAL, INTERVAL),
            Err(LienError::InvalidTerm)
        ));
        assert!(matches!(
            end_of_term(0, INITIAL, INTERVAL),
            Err(LienError::InvalidTerm)
        ));
    }
}
