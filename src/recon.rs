use crate::error::ReconError;
use crate::position::Position;
use crate::transactions::{parse_amount, Action::*, Transaction};

/// Pseudo-symbol carrying the cash side of every transaction.
const CASH: &str = "Cash";

/**
 * Phase 1: replays the day's transactions onto the opening position.
 *
 * Starts from a clone so the opening snapshot itself is never mutated.
 * Each transaction first-touches its own symbol to 0 before applying,
 * which is why a DEPOSIT on a never-seen symbol leaves a zero entry
 * behind for the cleanup pass to strip.
 *
 * Cash adjustments go through the same default-to-0 lookup as any other
 * symbol, so an opening position without a Cash entry still replays to a
 * real (negative, most likely) cash balance rather than poisoning the
 * run with NaN.
 */
pub fn replay(opening: &Position, transactions: &[Transaction]) -> Result<Position, ReconError> {
    let mut computed = opening.clone();

    for transaction in transactions {
        computed.touch(&transaction.symbol);
        match transaction.action {
            BUY => {
                computed.add(&transaction.symbol, parse_amount(&transaction.shares)?);
                computed.add(CASH, -parse_amount(&transaction.price)?);
            }
            SELL => {
                computed.add(&transaction.symbol, -parse_amount(&transaction.shares)?);
                computed.add(CASH, parse_amount(&transaction.price)?);
            }
            DEPOSIT | DIVIDEND => {
                computed.add(CASH, parse_amount(&transaction.price)?);
            }
            FEE => {
                computed.add(CASH, -parse_amount(&transaction.price)?);
            }
        }
    }

    computed.prune_zeroes();
    Ok(computed)
}

/**
 * Phase 2: actual minus computed, over the union of both symbol sets.
 * Closing symbols come first in the closing position's own order, then
 * symbols only the replay produced, in the replay's order. Entries that
 * net to exactly 0 are stripped, so a fully reconciled day diffs to an
 * empty position.
 */
pub fn diff(closing: &Position, computed: &Position) -> Position {
    let mut diff = Position::new();

    for (symbol, actual) in closing.iter() {
        diff.set(symbol, actual - computed.get(symbol));
    }
    for (symbol, calculated) in computed.iter() {
        if !closing.contains(symbol) {
            diff.set(symbol, -calculated);
        }
    }

    diff.prune_zeroes();
    diff
}
