use std::collections::HashMap;

/// Rate table key for the oracle's ERG-per-gram gold price
pub const GOLD_RATE_KEY: &str = "gGOLD";

/// How a fetched rate combines with an amount to yield ERG value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Rate is quoted as tokens per ERG: `value = amount / rate`
    Divide,

    /// Rate is quoted as ERG per unit: `value = amount * rate`
    Multiply,
}

/// Declared conversion registry: currency code -> (rate table key, direction).
/// Adding a currency is a one-line change here; ERG itself is absent because
/// it converts by identity.
const CONVERSIONS: &[(&str, &str, Direction)] = &[
    ("SigUSD", "SigUSD", Direction::Divide),
    ("GORT", "GORT", Direction::Divide),
    ("RSN", "RSN", Direction::Divide),
    ("BENE", "BENE", Direction::Divide),
    ("g GOLD", GOLD_RATE_KEY, Direction::Multiply),
];

/// Look up the rate key and conversion direction for a currency code.
/// `None` means the currency has no conversion path (unknown, or a
/// deliberately unconverted code like `USD`).
#[must_use]
pub fn conversion_for(currency: &str) -> Option<(&'static str, Direction)> {
    CONVERSIONS
        .iter()
        .find(|(code, _, _)| *code == currency)
        .map(|(_, key, direction)| (*key, *direction))
}

/// Mapping of currency code to its exchange rate, assembled once per run.
///
/// Absence of a key means "unknown, do not convert"; downstream conversion
/// degrades to 0 rather than failing. Rebuilt fresh on the next run, never
/// mutated after assembly.
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    rates: HashMap<String, f64>,
}

impl RateTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, currency_code: String, rate: f64) {
        let _ = self.rates.insert(currency_code, rate);
    }

    #[must_use]
    pub fn get(&self, currency_code: &str) -> Option<f64> {
        self.rates.get(currency_code).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.rates.iter().map(|(code, rate)| (code.as_str(), *rate))
    }
}

impl FromIterator<(String, f64)> for RateTable {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self {
            rates: iter.into_iter().collect(),
        }
    }
}
