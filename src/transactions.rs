use std::str::FromStr;

use crate::error::ReconError;

/**
 * The five actions a day file may contain. Anything else is rejected
 * outright rather than skipped, so a typo in the feed surfaces as a
 * failed run instead of a silently wrong diff.
 */
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    BUY,
    SELL,
    DEPOSIT,
    DIVIDEND,
    FEE,
}

impl FromStr for Action {
    type Err = ReconError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "BUY" => Ok(Action::BUY),
            "SELL" => Ok(Action::SELL),
            "DEPOSIT" => Ok(Action::DEPOSIT),
            "DIVIDEND" => Ok(Action::DIVIDEND),
            "FEE" => Ok(Action::FEE),
            other => Err(ReconError::UnsupportedAction(other.to_string())),
        }
    }
}

/**
 * One line of the D1-TRN section, in file order. `shares` and `price`
 * stay as the raw input tokens and are only converted to numbers when a
 * replay actually uses them.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub symbol: String,
    pub action: Action,
    pub shares: String,
    pub price: String,
}

/// Converts a shares/price token at its point of use.
pub fn parse_amount(token: &str) -> Result<f64, ReconError> {
    token.parse().map_err(|_| ReconError::NumericParse {
        token: token.to_string(),
    })
}
