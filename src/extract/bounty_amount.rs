/// Sentinel standing in for "no concrete amount was found"
pub const NOT_SPECIFIED: &str = "Not specified";

/// Sentinel for open-ended bounties that pay out repeatedly
pub const ONGOING: &str = "Ongoing";

/// The result of bounty extraction for one issue.
///
/// `amount` and `currency` are either both sentinels or both concrete:
/// extraction never produces a concrete amount with an unknown currency or
/// vice versa. The constructors are the only way to build one, which is what
/// holds that invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BountyAmount {
    amount: Box<str>,
    currency: Box<str>,
}

impl BountyAmount {
    /// A concrete extracted amount+currency pair
    #[must_use]
    pub fn new(amount: impl Into<Box<str>>, currency: impl Into<Box<str>>) -> Self {
        Self {
            amount: amount.into(),
            currency: currency.into(),
        }
    }

    /// The sentinel pair returned when no pattern matched
    #[must_use]
    pub fn not_specified() -> Self {
        Self {
            amount: Box::from(NOT_SPECIFIED),
            currency: Box::from(NOT_SPECIFIED),
        }
    }

    /// The sentinel pair for open-ended bounties
    #[must_use]
    pub fn ongoing() -> Self {
        Self {
            amount: Box::from(ONGOING),
            currency: Box::from(ONGOING),
        }
    }

    /// The matched numeric text (thousands separators stripped), or a sentinel
    #[must_use]
    pub fn amount(&self) -> &str {
        &self.amount
    }

    /// Canonical currency code, compound unit code (`"g GOLD"`), or a sentinel
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Whether this is one of the sentinel pairs rather than a concrete value
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        matches!(&*self.amount, NOT_SPECIFIED | ONGOING)
    }
}

impl core::fmt::Display for BountyAmount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_sentinel() {
            write!(f, "{}", self.currency)
        } else {
            write!(f, "{} {}", self.amount, self.currency)
        }
    }
}
