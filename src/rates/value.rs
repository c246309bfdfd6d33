use crate::extract::{NOT_SPECIFIED, ONGOING};
use crate::rates::rate_table::{Direction, RateTable, conversion_for};

const LOG_TARGET: &str = "     value";

/// Convert an extracted (amount, currency) pair into its ERG value.
///
/// Never fails: sentinels, unknown currencies, missing or zero rates, and
/// malformed amounts all yield 0.0 so partial data can't block report
/// generation. The result is never negative.
#[must_use]
pub fn to_erg_value(amount: &str, currency: &str, rates: &RateTable) -> f64 {
    if amount == NOT_SPECIFIED || amount == ONGOING {
        return 0.0;
    }

    let Ok(quantity) = amount.parse::<f64>() else {
        log::warn!(target: LOG_TARGET, "non-numeric amount '{amount}' for currency '{currency}'");
        return 0.0;
    };

    if !quantity.is_finite() || quantity < 0.0 {
        log::warn!(target: LOG_TARGET, "amount '{amount}' is out of range");
        return 0.0;
    }

    if currency == "ERG" {
        return quantity;
    }

    let Some((rate_key, direction)) = conversion_for(currency) else {
        log::warn!(target: LOG_TARGET, "no conversion path for currency '{currency}', reporting 0 ERG");
        return 0.0;
    };

    match rates.get(rate_key) {
        Some(rate) if rate > 0.0 => match direction {
            Direction::Divide => quantity / rate,
            Direction::Multiply => quantity * rate,
        },
        _ => {
            log::warn!(target: LOG_TARGET, "no rate available for '{rate_key}', reporting 0 ERG");
            0.0
        }
    }
}

/// Display-formatting companion to [`to_erg_value`]: same conversion, but
/// sentinels pass through unchanged as display text and concrete results are
/// formatted as `"<value> ERG"` with two decimals.
#[must_use]
pub fn to_erg_string(amount: &str, currency: &str, rates: &RateTable) -> String {
    if amount == NOT_SPECIFIED || amount == ONGOING {
        return amount.to_owned();
    }

    format!("{:.2} ERG", to_erg_value(amount, currency, rates))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rates(entries: &[(&str, f64)]) -> RateTable {
        entries.iter().map(|(code, rate)| ((*code).to_owned(), *rate)).collect()
    }

    #[test]
    fn test_erg_identity() {
        assert!((to_erg_value("123.45", "ERG", &RateTable::new()) - 123.45).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sentinels_are_zero() {
        let table = rates(&[("SigUSD", 0.82)]);
        assert_eq!(to_erg_value(NOT_SPECIFIED, NOT_SPECIFIED, &table), 0.0);
        assert_eq!(to_erg_value(ONGOING, ONGOING, &table), 0.0);
    }

    #[test]
    fn test_divide_convention() {
        // Rate is tokens per ERG, so ERG-per-token is the reciprocal.
        let table = rates(&[("SigUSD", 0.82)]);
        let value = to_erg_value("50", "SigUSD", &table);
        assert!((value - 50.0 / 0.82).abs() < 1e-9);
    }

    #[test]
    fn test_multiply_convention() {
        // Oracle rate is already ERG per gram.
        let table = rates(&[("gGOLD", 84.03)]);
        let value = to_erg_value("2", "g GOLD", &table);
        assert!((value - 168.06).abs() < 1e-9);
    }

    #[test]
    fn test_bene_uses_its_own_key() {
        let table = rates(&[("BENE", 0.82)]);
        assert!(to_erg_value("10", "BENE", &table) > 0.0);
    }

    #[test]
    fn test_missing_rate_is_graceful_gap() {
        assert_eq!(to_erg_value("10", "GORT", &RateTable::new()), 0.0);
    }

    #[test]
    fn test_zero_rate_does_not_divide() {
        let table = rates(&[("SigUSD", 0.0)]);
        assert_eq!(to_erg_value("10", "SigUSD", &table), 0.0);
    }

    #[test]
    fn test_unknown_currency_is_zero() {
        let table = rates(&[("SigUSD", 0.82)]);
        assert_eq!(to_erg_value("10", "USD", &table), 0.0);
        assert_eq!(to_erg_value("10", "COMET", &table), 0.0);
    }

    #[test]
    fn test_malformed_amount_is_zero() {
        let table = rates(&[("SigUSD", 0.82)]);
        assert_eq!(to_erg_value("lots", "SigUSD", &table), 0.0);
    }

    #[test]
    fn test_never_negative() {
        let table = rates(&[("SigUSD", 0.82), ("gGOLD", 84.03)]);
        for (amount, currency) in [
            ("-5", "ERG"),
            ("100", "ERG"),
            ("50", "SigUSD"),
            ("2", "g GOLD"),
            ("NaN", "ERG"),
            (NOT_SPECIFIED, NOT_SPECIFIED),
        ] {
            assert!(to_erg_value(amount, currency, &table) >= 0.0, "{amount} {currency}");
        }
    }

    #[test]
    fn test_display_string() {
        let table = rates(&[("SigUSD", 0.82)]);
        assert_eq!(to_erg_string("50", "SigUSD", &table), "60.98 ERG");
        assert_eq!(to_erg_string(NOT_SPECIFIED, NOT_SPECIFIED, &table), NOT_SPECIFIED);
        assert_eq!(to_erg_string(ONGOING, ONGOING, &table), ONGOING);
    }
}
