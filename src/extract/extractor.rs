use crate::config::DollarConvention;
use crate::extract::bounty_amount::BountyAmount;
use crate::extract::matcher::{match_label, match_text};
use crate::github::Issue;

const LOG_TARGET: &str = "   extract";

/// Façade over the label and text matchers.
///
/// Labels are tried first, in label order, first match wins; the title+body
/// text is only consulted when no label matched. When both miss, the
/// `Not specified` sentinel pair is returned so callers never see a partial
/// result.
#[derive(Debug, Clone, Copy)]
pub struct Extractor {
    dollar: DollarConvention,
}

impl Extractor {
    #[must_use]
    pub const fn new(dollar: DollarConvention) -> Self {
        Self { dollar }
    }

    /// Extract the bounty amount and currency from one issue
    #[must_use]
    pub fn extract(&self, issue: &Issue) -> BountyAmount {
        for label in &issue.labels {
            if let Some(found) = match_label(&label.name, self.dollar) {
                log::debug!(
                    target: LOG_TARGET,
                    "issue #{}: label '{}' -> {} {}",
                    issue.number,
                    label.name,
                    found.amount(),
                    found.currency()
                );
                return found;
            }
        }

        let text = format!("{} {}", issue.title, issue.body.as_deref().unwrap_or_default());
        if let Some(found) = match_text(&text, self.dollar) {
            log::debug!(
                target: LOG_TARGET,
                "issue #{}: title/body -> {} {}",
                issue.number,
                found.amount(),
                found.currency()
            );
            return found;
        }

        BountyAmount::not_specified()
    }
}

/// Cheap pre-filter deciding whether an issue is worth extracting from at
/// all. Deliberately looser than the extraction patterns: plain substring
/// checks, no amounts required.
#[must_use]
pub fn is_bounty_issue(issue: &Issue) -> bool {
    let title = issue.title.to_lowercase();
    if title.contains("bounty") || title.starts_with("b-") {
        return true;
    }

    issue.labels.iter().any(|label| {
        let name = label.name.to_lowercase();
        name.contains("bounty") || name.contains("b-")
    })
}
