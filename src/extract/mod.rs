//! Bounty extraction from issue metadata
//!
//! Locates an amount+currency pair inside unstructured issue labels, titles,
//! and bodies. Labels are authoritative: they are matched first, and the
//! title/body text is only consulted when no label matches. Within each
//! source an ordered pattern table is evaluated first-match-wins, so pattern
//! order is priority order.
//!
//! Extraction is deliberately rule-based. Two pattern families exist: a
//! fungible-token family (`100erg`, `b-50sigusd`, `bounty: $100`) and a
//! precious-metal family (`2g of gold`) which produces a compound currency
//! code such as `"g GOLD"` so the value calculator can treat unit-priced
//! commodities separately from token currencies.

mod bounty_amount;
mod currency;
mod extractor;
mod matcher;
mod patterns;

pub use bounty_amount::{BountyAmount, NOT_SPECIFIED, ONGOING};
pub use currency::{normalize_currency_token, normalize_unit};
pub use extractor::{Extractor, is_bounty_issue};
pub use matcher::{match_label, match_text};
