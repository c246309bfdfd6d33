use regex::Regex;
use std::sync::LazyLock;

/// Which capture-group layout a pattern produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// `amount` + `currency` groups
    Fungible,

    /// `amount` group only; the currency token is an implied `$`
    Dollar,

    /// `amount` + `unit` + `metal` groups
    PreciousMetal,

    /// No groups; the whole pair is the `Ongoing` sentinel
    Ongoing,
}

/// A compiled pattern plus the tag saying how to build a result from it
#[derive(Debug)]
pub struct ExtractionPattern {
    pub regex: Regex,
    pub kind: PatternKind,
}

impl ExtractionPattern {
    fn new(pattern: &str, kind: PatternKind) -> Self {
        Self {
            regex: Regex::new(pattern).expect("invalid extraction pattern"),
            kind,
        }
    }
}

// Pattern building blocks. Sources are lowercased before matching, so these
// only spell out lowercase variants.
const AMOUNT: &str = r"(?P<amount>\d[\d,]*(?:\.\d+)?)";
const TOKEN: &str = r"(?P<currency>sigusd|gort|rsn|bene|ergos?|erg|usd|dollars?)";
const UNIT: &str = r"(?P<unit>grams?|g|ounces?|oz)";
const METAL: &str = r"(?P<metal>gold|silver|platinum)";

/// Patterns tried against each label name, in priority order.
/// Structured `bounty-`/`b-` prefixed forms come first, bare forms last.
pub static LABEL_PATTERNS: LazyLock<Vec<ExtractionPattern>> = LazyLock::new(|| {
    vec![
        ExtractionPattern::new(r"(?:bounty|b)[-_:\s]*ongoing", PatternKind::Ongoing),
        ExtractionPattern::new(&format!(r"(?:bounty|b)[-_:\s]*{AMOUNT}\s*{TOKEN}\b"), PatternKind::Fungible),
        ExtractionPattern::new(&format!(r"(?:bounty|b)[-_:\s]*\${AMOUNT}"), PatternKind::Dollar),
        ExtractionPattern::new(
            &format!(r"{AMOUNT}[-\s]*{UNIT}[-\s]*(?:of[-\s]+)?{METAL}\b"),
            PatternKind::PreciousMetal,
        ),
        ExtractionPattern::new(&format!(r"{AMOUNT}\s*{TOKEN}\b"), PatternKind::Fungible),
        ExtractionPattern::new(&format!(r"\${AMOUNT}"), PatternKind::Dollar),
    ]
});

/// Patterns tried against `lowercase(title + " " + body)`, in priority order.
/// Free text is noisier than labels, so the fungible forms require the word
/// `bounty` nearby; the metal form stands alone because its unit+metal shape
/// is already unambiguous.
pub static TEXT_PATTERNS: LazyLock<Vec<ExtractionPattern>> = LazyLock::new(|| {
    vec![
        ExtractionPattern::new(r"ongoing\s+bounty|bounty[-:\s]*ongoing", PatternKind::Ongoing),
        ExtractionPattern::new(&format!(r"bounty[-:,\s]*(?:of\s+)?{AMOUNT}\s*{TOKEN}\b"), PatternKind::Fungible),
        ExtractionPattern::new(&format!(r"bounty[-:,\s]*(?:of\s+)?\${AMOUNT}"), PatternKind::Dollar),
        ExtractionPattern::new(&format!(r"{AMOUNT}\s*{TOKEN}\s+bounty\b"), PatternKind::Fungible),
        ExtractionPattern::new(&format!(r"\${AMOUNT}\s+bounty\b"), PatternKind::Dollar),
        ExtractionPattern::new(
            &format!(r"{AMOUNT}[-\s]*{UNIT}[-\s]*(?:of[-\s]+)?{METAL}\b"),
            PatternKind::PreciousMetal,
        ),
    ]
});
