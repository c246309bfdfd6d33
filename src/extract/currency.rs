use crate::config::DollarConvention;

/// Fixed registry mapping lowercase raw tokens to canonical currency codes.
/// Dollar-ish tokens are handled separately because their canonical form is
/// a configuration choice.
const CURRENCY_ALIASES: &[(&str, &str)] = &[
    ("erg", "ERG"),
    ("ergo", "ERG"),
    ("ergos", "ERG"),
    ("sigusd", "SigUSD"),
    ("gort", "GORT"),
    ("rsn", "RSN"),
    ("bene", "BENE"),
];

/// Tokens that mean "dollars" and resolve per [`DollarConvention`]
const DOLLAR_TOKENS: &[&str] = &["$", "usd", "dollar", "dollars"];

/// Unit aliases for precious-metal amounts
const UNIT_ALIASES: &[(&str, &str)] = &[
    ("g", "g"),
    ("gram", "g"),
    ("grams", "g"),
    ("oz", "oz"),
    ("ounce", "oz"),
    ("ounces", "oz"),
];

/// Map a raw currency token to its canonical code.
///
/// Unrecognized tokens pass through uppercased rather than failing; the
/// registry is open-world so an unknown currency degrades to "cannot
/// convert" downstream instead of aborting extraction.
#[must_use]
pub fn normalize_currency_token(token: &str, dollar: DollarConvention) -> String {
    let lower = token.trim().to_lowercase();

    if DOLLAR_TOKENS.contains(&lower.as_str()) {
        return match dollar {
            DollarConvention::SigUsd => "SigUSD".to_owned(),
            DollarConvention::Usd => "USD".to_owned(),
        };
    }

    CURRENCY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == lower)
        .map_or_else(|| lower.to_uppercase(), |(_, canonical)| (*canonical).to_owned())
}

/// Map a raw unit token to its canonical form (`"g"` or `"oz"`).
/// Unrecognized units pass through lowercased.
#[must_use]
pub fn normalize_unit(token: &str) -> String {
    let lower = token.trim().to_lowercase();

    UNIT_ALIASES
        .iter()
        .find(|(alias, _)| *alias == lower)
        .map_or(lower.clone(), |(_, canonical)| (*canonical).to_owned())
}
