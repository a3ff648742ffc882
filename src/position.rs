use std::{collections::HashMap, fmt::Display};

/**
 * A sparse symbol -> balance map: a symbol that is absent reads as a
 * balance of 0. The defaulting lives in `get` and `add` so callers never
 * have to special-case missing keys.
 *
 * Entries keep insertion order. Overwriting a symbol updates it in place
 * without moving it, and the diff output order depends on this: closing
 * symbols come out in closing-file order, followed by any symbols only
 * the replay produced.
 */
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Position {
    entries: Vec<(String, f64)>,
    index: HashMap<String, usize>,
}

impl Position {
    pub fn new() -> Self {
        Self::default()
    }

    /// Balance for `symbol`, defaulting to 0 when absent.
    pub fn get(&self, symbol: &str) -> f64 {
        self.index.get(symbol).map_or(0.0, |&i| self.entries[i].1)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.index.contains_key(symbol)
    }

    /// Sets `symbol` to `balance`; last write wins, insertion slot is kept.
    pub fn set(&mut self, symbol: &str, balance: f64) {
        match self.index.get(symbol) {
            Some(&i) => self.entries[i].1 = balance,
            None => {
                self.index.insert(symbol.to_string(), self.entries.len());
                self.entries.push((symbol.to_string(), balance));
            }
        }
    }

    /// Adds `delta` onto the symbol's balance, reading absent symbols as 0.
    pub fn add(&mut self, symbol: &str, delta: f64) {
        self.set(symbol, self.get(symbol) + delta);
    }

    /// Inserts `symbol` with balance 0 if it is not present yet.
    pub fn touch(&mut self, symbol: &str) {
        if !self.contains(symbol) {
            self.set(symbol, 0.0);
        }
    }

    /**
     * Drops every entry whose balance is exactly 0. Near-zero float noise
     * is kept on purpose: balanced amounts are expected to net out exactly,
     * and a tiny residue is a real (if small) break worth reporting.
     */
    pub fn prune_zeroes(&mut self) {
        self.entries.retain(|(_, balance)| *balance != 0.0);
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, (symbol, _))| (symbol.clone(), i))
            .collect();
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries
            .iter()
            .map(|(symbol, balance)| (symbol.as_str(), *balance))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/**
 * The recon.out rendering: one `<symbol> <value>` line per entry, LF
 * terminated, balances in f64's default decimal form (so whole numbers
 * print without a trailing `.0`).
 */
impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (symbol, balance) in self.iter() {
            write!(f, "{} {}\n", symbol, balance)?;
        }
        Ok(())
    }
}
