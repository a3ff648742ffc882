use crate::error::ReconError;
use crate::position::Position;
use crate::transactions::Transaction;

const D0_POS: &str = "D0-POS";
const D1_TRN: &str = "D1-TRN";
const D1_POS: &str = "D1-POS";

/// The three sections of a day file, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct DayFile {
    pub opening: Position,
    pub transactions: Vec<Transaction>,
    pub closing: Position,
}

/**
 * Splits the raw CRLF text into the `D0-POS` / `D1-TRN` / `D1-POS`
 * sections and parses each one. A marker that is missing, or markers
 * that appear out of order, would make the section bounds nonsense, so
 * both are rejected up front instead of producing wrongly-sliced
 * sections.
 */
pub fn parse(input: &str) -> Result<DayFile, ReconError> {
    let lines = to_lines(input);

    let d0_pos = marker_index(&lines, D0_POS)?;
    let d1_trn = marker_index(&lines, D1_TRN)?;
    let d1_pos = marker_index(&lines, D1_POS)?;
    if !(d0_pos < d1_trn && d1_trn < d1_pos) {
        return Err(ReconError::MalformedInput(format!(
            "section markers out of order: expected {} before {} before {}",
            D0_POS, D1_TRN, D1_POS
        )));
    }

    Ok(DayFile {
        opening: parse_positions(&lines[d0_pos + 1..d1_trn])?,
        transactions: parse_transactions(&lines[d1_trn + 1..d1_pos])?,
        closing: parse_positions(&lines[d1_pos + 1..])?,
    })
}

/// Splits on CRLF and drops empty lines (tolerates a trailing newline).
fn to_lines(input: &str) -> Vec<&str> {
    input.split("\r\n").filter(|line| !line.is_empty()).collect()
}

fn marker_index(lines: &[&str], marker: &str) -> Result<usize, ReconError> {
    lines
        .iter()
        .position(|line| *line == marker)
        .ok_or_else(|| ReconError::MalformedInput(format!("missing section marker {}", marker)))
}

/**
 * `<symbol> <balance>` per line. A duplicate symbol is not an error;
 * the last occurrence wins, keeping the symbol's original slot.
 */
fn parse_positions(lines: &[&str]) -> Result<Position, ReconError> {
    let mut positions = Position::new();

    for line in lines {
        let tokens: Vec<&str> = line.split(' ').collect();
        let [symbol, balance] = tokens[..] else {
            return Err(ReconError::MalformedInput(format!(
                "expected `<symbol> <balance>`, got {:?}",
                line
            )));
        };
        let balance: f64 = balance.parse().map_err(|_| ReconError::NumericParse {
            token: balance.to_string(),
        })?;
        positions.set(symbol, balance);
    }

    Ok(positions)
}

/// `<symbol> <action> <shares> <price>` per line, file order preserved.
fn parse_transactions(lines: &[&str]) -> Result<Vec<Transaction>, ReconError> {
    let mut transactions = Vec::with_capacity(lines.len());

    for line in lines {
        let tokens: Vec<&str> = line.split(' ').collect();
        let [symbol, action, shares, price] = tokens[..] else {
            return Err(ReconError::MalformedInput(format!(
                "expected `<symbol> <action> <shares> <price>`, got {:?}",
                line
            )));
        };
        transactions.push(Transaction {
            symbol: symbol.to_string(),
            action: action.parse()?,
            shares: shares.to_string(),
            price: price.to_string(),
        });
    }

    Ok(transactions)
}
