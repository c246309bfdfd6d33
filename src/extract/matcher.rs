use crate::config::DollarConvention;
use crate::extract::bounty_amount::BountyAmount;
use crate::extract::currency::{normalize_currency_token, normalize_unit};
use crate::extract::patterns::{ExtractionPattern, LABEL_PATTERNS, PatternKind, TEXT_PATTERNS};

/// Try the label pattern table against one label name.
/// Returns the first pattern's result, or `None` if nothing matched.
#[must_use]
pub fn match_label(label: &str, dollar: DollarConvention) -> Option<BountyAmount> {
    first_match(&LABEL_PATTERNS, &label.to_lowercase(), dollar)
}

/// Try the text pattern table against free-form issue text.
/// The caller passes `title + " " + body`; it is lowercased here so the
/// pattern tables don't have to duplicate case variants.
#[must_use]
pub fn match_text(text: &str, dollar: DollarConvention) -> Option<BountyAmount> {
    first_match(&TEXT_PATTERNS, &text.to_lowercase(), dollar)
}

/// Short-circuit reduction over an ordered pattern table: the first pattern
/// that matches wins and no further patterns are consulted.
fn first_match(patterns: &[ExtractionPattern], source: &str, dollar: DollarConvention) -> Option<BountyAmount> {
    patterns.iter().find_map(|pattern| apply(pattern, source, dollar))
}

/// Build a [`BountyAmount`] from one pattern's captures, per its kind tag.
/// Amounts stay strings (commas stripped, decimal point intact); parsing to
/// float is deferred to the value calculator so sentinel handling stays in
/// one place.
fn apply(pattern: &ExtractionPattern, source: &str, dollar: DollarConvention) -> Option<BountyAmount> {
    let caps = pattern.regex.captures(source)?;

    match pattern.kind {
        PatternKind::Ongoing => Some(BountyAmount::ongoing()),
        PatternKind::Fungible => {
            let amount = strip_thousands_separators(caps.name("amount")?.as_str());
            let currency = normalize_currency_token(caps.name("currency")?.as_str(), dollar);
            Some(BountyAmount::new(amount, currency))
        }
        PatternKind::Dollar => {
            let amount = strip_thousands_separators(caps.name("amount")?.as_str());
            let currency = normalize_currency_token("$", dollar);
            Some(BountyAmount::new(amount, currency))
        }
        PatternKind::PreciousMetal => {
            let amount = strip_thousands_separators(caps.name("amount")?.as_str());
            let unit = normalize_unit(caps.name("unit")?.as_str());
            let metal = caps.name("metal")?.as_str().to_uppercase();
            Some(BountyAmount::new(amount, format!("{unit} {metal}")))
        }
    }
}

fn strip_thousands_separators(amount: &str) -> String {
    amount.replace(',', "")
}
