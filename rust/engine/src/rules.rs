use crate::errors::EngineError;

/// Minimum opening bet at the table.
pub const BID_FLOOR: u32 = 100;

/// Every bid must be a multiple of this increment.
pub const DENOMINATION: u32 = 10;

/// Smallest legal raise target over the given table bid.
pub fn min_raise(current_bid: u32) -> u32 {
    (current_bid + DENOMINATION).max(BID_FLOOR)
}

/// Validates a human raise target against the betting rules.
///
/// `available` is the money the player can still put behind the bid, i.e.
/// bankroll plus the contribution already standing. The target must be a
/// multiple of [`DENOMINATION`], at least [`min_raise`], and affordable.
///
/// Errors here are resolved by the decision provider's retry loop; they
/// never reach the betting machine.
pub fn validate_raise(available: u32, current_bid: u32, amount: u32) -> Result<u32, EngineError> {
    let minimum = min_raise(current_bid);
    if amount < minimum || amount % DENOMINATION != 0 {
        return Err(EngineError::InvalidBid { amount, minimum });
    }
    if amount > available {
        return Err(EngineError::InsufficientFunds { amount, available });
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_raise_must_reach_the_floor() {
        assert_eq!(min_raise(0), BID_FLOOR);
        assert_eq!(
            validate_raise(1_000, 0, 90),
            Err(EngineError::InvalidBid {
                amount: 90,
                minimum: 100
            })
        );
        assert_eq!(validate_raise(1_000, 0, 100), Ok(100));
    }

    #[test]
    fn raise_must_exceed_the_bid_by_a_denomination() {
        assert_eq!(min_raise(250), 260);
        assert_eq!(
            validate_raise(1_000, 250, 250),
            Err(EngineError::InvalidBid {
                amount: 250,
                minimum: 260
            })
        );
        assert_eq!(validate_raise(1_000, 250, 260), Ok(260));
    }

    #[test]
    fn off_denomination_amounts_are_rejected() {
        assert_eq!(
            validate_raise(1_000, 100, 115),
            Err(EngineError::InvalidBid {
                amount: 115,
                minimum: 110
            })
        );
    }

    #[test]
    fn raise_beyond_available_funds_is_rejected() {
        assert_eq!(
            validate_raise(200, 100, 300),
            Err(EngineError::InsufficientFunds {
                amount: 300,
                available: 200
            })
        );
        assert_eq!(validate_raise(200, 100, 200), Ok(200));
    }
}
